//! Models command - inspect the local Ollama models used for summaries.

use clap::{Args, Subcommand};
use console::style;

use crate::ollama::{Summarizer, SummaryError};

/// Arguments for the models command.
#[derive(Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    command: ModelsCommand,
}

#[derive(Subcommand)]
enum ModelsCommand {
    /// List installed models
    List,

    /// Show which model summary generation would use
    Check,
}

pub async fn run(args: ModelsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let summarizer = Summarizer::new(config.summary.clone());

    match args.command {
        ModelsCommand::List => match summarizer.installed_models().await {
            Ok(listing) => {
                print!("{}", listing);
                Ok(())
            }
            Err(e) => {
                anyhow::bail!("{}", e);
            }
        },
        ModelsCommand::Check => {
            match summarizer.select_model().await {
                Ok(model) => {
                    println!(
                        "{} Summaries would use {} (configured: {}, fallbacks: {})",
                        style("✓").green(),
                        style(&model).bold(),
                        config.summary.model,
                        config.summary.fallbacks.join(", ")
                    );
                }
                Err(SummaryError::NoModel) => {
                    println!(
                        "{} None of the configured models are installed; \
                         summaries will be skipped",
                        style("ℹ").blue()
                    );
                }
                Err(e) => {
                    println!(
                        "{} Ollama is not reachable ({}); summaries will be skipped",
                        style("ℹ").blue(),
                        e
                    );
                }
            }
            Ok(())
        }
    }
}
