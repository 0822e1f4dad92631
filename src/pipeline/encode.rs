//! Image encoding: `DynamicImage` → lossy WebP bytes via libwebp.
//!
//! ## Why lossy WebP?
//!
//! The images are served to a viewer over the wire, so size matters more
//! than bit-exactness. Lossy WebP at quality 85 is roughly a third of the
//! equivalent PNG for rendered print while staying visually transparent.
//! libwebp is deterministic for a fixed input and quality, which is what
//! makes reruns byte-for-byte idempotent.

use crate::error::EntryError;
use image::DynamicImage;
use tracing::debug;
use webp::Encoder;

/// Encode one rasterised page as lossy WebP at `quality` (0–100).
///
/// `page_num` is only used to label the error; pdfium hands us RGBA
/// bitmaps, so the fallback conversion below is for callers feeding other
/// pixel formats.
pub fn encode_page(
    img: &DynamicImage,
    page_num: usize,
    quality: u8,
) -> Result<Vec<u8>, EntryError> {
    let quality = f32::from(quality.min(100));

    let encoded = match img {
        DynamicImage::ImageRgb8(buf) => {
            Encoder::from_rgb(buf.as_raw(), buf.width(), buf.height()).encode_simple(false, quality)
        }
        DynamicImage::ImageRgba8(buf) => Encoder::from_rgba(buf.as_raw(), buf.width(), buf.height())
            .encode_simple(false, quality),
        other => {
            let rgba = other.to_rgba8();
            Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
                .encode_simple(false, quality)
        }
    };

    let mem = encoded.map_err(|e| EntryError::EncodeFailed {
        page: page_num,
        detail: format!("{e:?}"),
    })?;

    debug!("Encoded page {} → {} bytes WebP", page_num, mem.len());
    Ok(mem.to_vec())
}
