//! Ollama boundary - best-effort summary generation.
//!
//! Everything in here is allowed to fail without consequence for the
//! extraction output: the caller logs the error and moves on.

use std::process::Stdio;
use std::time::Duration;

use adtx_core::{FormRecord, SummaryConfig};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Reasons a summary could not be produced. All of them are non-fatal.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The ollama binary is missing or the daemon is not running.
    #[error("ollama not available: {0}")]
    BackendUnavailable(String),

    /// Neither the requested model nor any fallback is installed.
    #[error("none of the configured models are installed")]
    NoModel,

    /// Generation exceeded the configured timeout.
    #[error("generation timed out after {0}s")]
    Timeout(u64),

    /// The model run itself failed or produced nothing.
    #[error("generation failed: {0}")]
    Generation(String),
}

/// Generates a short prose summary of a record through a local Ollama model.
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Raw `ollama list` output; doubles as the availability probe.
    pub async fn installed_models(&self) -> Result<String, SummaryError> {
        let output = Command::new("ollama")
            .arg("list")
            .output()
            .await
            .map_err(|e| SummaryError::BackendUnavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(SummaryError::BackendUnavailable(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// The model that would be used for generation, after fallback.
    pub async fn select_model(&self) -> Result<String, SummaryError> {
        let listing = self.installed_models().await?;
        pick_model(&self.config.model, &self.config.fallbacks, &listing)
            .ok_or(SummaryError::NoModel)
    }

    /// Generate a 3-4 line summary of the record.
    pub async fn summarize(&self, record: &FormRecord) -> Result<String, SummaryError> {
        let model = self.select_model().await?;
        if model != self.config.model {
            debug!("model {} not installed, using {}", self.config.model, model);
        }

        let prompt = build_prompt(record);
        info!("generating summary with {}", model);

        let mut child = Command::new("ollama")
            .args(["run", &model])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SummaryError::BackendUnavailable(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| SummaryError::Generation(e.to_string()))?;
            // Dropping stdin closes the pipe so the model starts generating.
        }

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| SummaryError::Timeout(self.config.timeout_secs))?
            .map_err(|e| SummaryError::Generation(e.to_string()))?;

        if !output.status.success() {
            return Err(SummaryError::Generation(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let summary = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if summary.is_empty() {
            return Err(SummaryError::Generation(
                "model returned an empty response".to_string(),
            ));
        }

        Ok(summary)
    }
}

/// First available of a priority-ordered model list.
///
/// `listing` is the raw `ollama list` output; presence is a substring
/// check, matching how tags like "llama3.2:latest" appear in it.
pub fn pick_model(requested: &str, fallbacks: &[String], listing: &str) -> Option<String> {
    if listing.contains(requested) {
        return Some(requested.to_string());
    }
    fallbacks
        .iter()
        .find(|candidate| listing.contains(candidate.as_str()))
        .cloned()
}

/// Prompt carrying the record in stable field order.
fn build_prompt(record: &FormRecord) -> String {
    let data = serde_json::to_string_pretty(record).unwrap_or_default();
    format!(
        "Summarize this Form ADT-1 data in exactly 3-4 lines:\n\n{}\n\n\
         Keep it concise and focus on: company name, auditor details, \
         appointment type, and key dates.",
        data
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallbacks() -> Vec<String> {
        vec![
            "llama3".to_string(),
            "llama2".to_string(),
            "mistral".to_string(),
        ]
    }

    #[test]
    fn requested_model_wins_when_installed() {
        let listing = "NAME\nllama3.2:latest  2.0 GB\nmistral:latest  4.1 GB\n";
        assert_eq!(
            pick_model("llama3.2", &fallbacks(), listing),
            Some("llama3.2".to_string())
        );
    }

    #[test]
    fn falls_back_in_priority_order() {
        let listing = "NAME\nmistral:latest  4.1 GB\n";
        assert_eq!(
            pick_model("llama3.2", &fallbacks(), listing),
            Some("mistral".to_string())
        );
    }

    #[test]
    fn no_installed_model_yields_none() {
        assert_eq!(pick_model("llama3.2", &fallbacks(), "NAME\n"), None);
    }

    #[test]
    fn prompt_contains_record_and_instruction() {
        let record = FormRecord {
            company_name: "SUNRISE TECHNOLOGIES PRIVATE LIMITED".to_string(),
            ..FormRecord::default()
        };

        let prompt = build_prompt(&record);
        assert!(prompt.contains("SUNRISE TECHNOLOGIES PRIVATE LIMITED"));
        assert!(prompt.contains("exactly 3-4 lines"));
        assert!(prompt.contains("\"appointment_type\""));
    }
}
