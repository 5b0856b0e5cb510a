//! Recovery of a page's raster image from its XObject resources.
//!
//! Scanned filings carry each page as a single full-page image stream, so
//! "rasterizing" a page means pulling that stream out at its native
//! resolution and decoding it. Supported encodings: DCTDecode (JPEG) and
//! uncompressed 8-bit DeviceRGB/DeviceGray.

use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::trace;

use crate::error::PdfError;

/// Recover the first image found in the page's resources.
pub fn page_image(doc: &Document, page: u32, page_id: ObjectId) -> Result<DynamicImage, PdfError> {
    let resources = page_resources(doc, page_id).ok_or_else(|| PdfError::Raster {
        page,
        reason: "page has no resources".to_string(),
    })?;

    let xobjects = resources
        .get(b"XObject")
        .ok()
        .and_then(|obj| match doc.dereference(obj) {
            Ok((_, Object::Dictionary(dict))) => Some(dict),
            _ => None,
        })
        .ok_or_else(|| PdfError::Raster {
            page,
            reason: "page has no XObject resources".to_string(),
        })?;

    for (name, entry) in xobjects.iter() {
        let Ok((_, obj)) = doc.dereference(entry) else {
            continue;
        };
        if let Some(image) = decode_image_stream(obj) {
            trace!(
                "page {}: decoded image XObject {}",
                page,
                String::from_utf8_lossy(name)
            );
            return Ok(image);
        }
    }

    Err(PdfError::Raster {
        page,
        reason: "no decodable image stream on page".to_string(),
    })
}

/// Resources dictionary for a page, walking up the page tree when inherited.
fn page_resources(doc: &Document, node_id: ObjectId) -> Option<Dictionary> {
    let Ok(Object::Dictionary(dict)) = doc.get_object(node_id) else {
        return None;
    };

    if let Ok(resources) = dict.get(b"Resources") {
        if let Ok((_, Object::Dictionary(res))) = doc.dereference(resources) {
            return Some(res.clone());
        }
    }

    if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
        return page_resources(doc, *parent_id);
    }

    None
}

/// Decode a stream object into an image, if it is an image XObject.
fn decode_image_stream(obj: &Object) -> Option<DynamicImage> {
    let Object::Stream(stream) = obj else {
        return None;
    };
    let dict = &stream.dict;

    if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Image" {
        return None;
    }

    let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
    let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;

    if let Some(filter) = stream_filter(dict) {
        match filter {
            b"DCTDecode" => {
                // JPEG scan data is stored verbatim in the stream.
                return image::load_from_memory_with_format(
                    &stream.content,
                    image::ImageFormat::Jpeg,
                )
                .ok();
            }
            b"FlateDecode" => {}
            _ => {
                // JPXDecode, CCITTFaxDecode, JBIG2Decode and friends.
                trace!(
                    "unsupported image filter {}",
                    String::from_utf8_lossy(filter)
                );
                return None;
            }
        }
    }

    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());

    let color_space = dict
        .get(b"ColorSpace")
        .ok()
        .and_then(|obj| match obj {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
            _ => None,
        })
        .unwrap_or(b"DeviceRGB");

    let bits = dict
        .get(b"BitsPerComponent")
        .ok()
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(8);
    if bits != 8 {
        trace!("unsupported bits per component: {}", bits);
        return None;
    }

    decode_raw_samples(&data, width, height, color_space)
}

fn stream_filter(dict: &Dictionary) -> Option<&[u8]> {
    match dict.get(b"Filter").ok()? {
        Object::Name(name) => Some(name.as_slice()),
        Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
        _ => None,
    }
}

fn decode_raw_samples(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
) -> Option<DynamicImage> {
    match color_space {
        b"DeviceRGB" | b"RGB" | b"CalRGB" => {
            let expected = (width as usize) * (height as usize) * 3;
            if data.len() < expected {
                return None;
            }
            image::RgbImage::from_raw(width, height, data[..expected].to_vec())
                .map(DynamicImage::ImageRgb8)
        }
        b"DeviceGray" | b"G" | b"CalGray" => {
            let expected = (width as usize) * (height as usize);
            if data.len() < expected {
                return None;
            }
            image::GrayImage::from_raw(width, height, data[..expected].to_vec())
                .map(DynamicImage::ImageLuma8)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_raw_gray_samples() {
        let image = decode_raw_samples(&[0, 64, 128, 255], 2, 2, b"DeviceGray").unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn decodes_raw_rgb_samples() {
        let data = vec![10u8; 2 * 2 * 3];
        let image = decode_raw_samples(&data, 2, 2, b"DeviceRGB").unwrap();
        assert_eq!(image.width(), 2);
    }

    #[test]
    fn rejects_truncated_sample_data() {
        assert!(decode_raw_samples(&[0, 1], 2, 2, b"DeviceGray").is_none());
        assert!(decode_raw_samples(&[0; 4], 2, 2, b"DeviceRGB").is_none());
    }

    #[test]
    fn rejects_unknown_color_space() {
        assert!(decode_raw_samples(&[0; 16], 2, 2, b"Indexed").is_none());
    }
}
