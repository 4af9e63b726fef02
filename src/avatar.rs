//! Avatar byte validation.
//!
//! The image picker and cropper live outside this crate; what arrives here is
//! the raw bytes they hand back. Before a draft is assembled into a contact,
//! the bytes are checked against the common container signatures so a corrupt
//! pick fails with [`StoreError::ImageDecodeFailed`] instead of persisting
//! garbage inline on the aggregate.

use crate::error::{StoreError, StoreResult};

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// Image containers the store accepts for avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    /// RIFF container with a WEBP fourcc
    Webp,
    /// ISO BMFF container with an `ftyp` heic/heif brand
    Heic,
}

/// Sniff the container format from leading bytes.
///
/// Returns `None` when the bytes match no known signature.
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&PNG_MAGIC) {
        return Some(ImageFormat::Png);
    }
    if bytes.starts_with(&JPEG_MAGIC) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.starts_with(GIF87_MAGIC) || bytes.starts_with(GIF89_MAGIC) {
        return Some(ImageFormat::Gif);
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    // ISO BMFF: [size:4]"ftyp"[brand:4]; iPhone pickers hand back HEIC.
    if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
        let brand = &bytes[8..12];
        if [&b"heic"[..], b"heix", b"hevc", b"mif1", b"msf1"].contains(&brand) {
            return Some(ImageFormat::Heic);
        }
    }
    None
}

/// Validate avatar bytes before they are attached to a draft or persisted.
///
/// # Errors
///
/// - [`StoreError::ImageDecodeFailed`] when the bytes match no known format.
/// - [`StoreError::AvatarTooLarge`] when the payload exceeds `max_len`.
pub fn validate(bytes: &[u8], max_len: usize) -> StoreResult<()> {
    if bytes.len() > max_len {
        return Err(StoreError::AvatarTooLarge {
            actual: bytes.len(),
            limit: max_len,
        });
    }
    if sniff_format(bytes).is_none() {
        return Err(StoreError::ImageDecodeFailed);
    }
    Ok(())
}
