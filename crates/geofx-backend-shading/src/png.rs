//! Deterministic PNG writer.
//!
//! Uses fixed compression and filter settings so the same buffer always
//! encodes to the same bytes, and therefore the same BLAKE3 hash.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use geofx_spec::BackendError;

use crate::render::TextureBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl BackendError for PngError {
    fn code(&self) -> &'static str {
        match self {
            PngError::Io(_) => "SHADING_201",
            PngError::Encoding(_) => "SHADING_202",
            PngError::InvalidDimensions { .. } => "SHADING_203",
        }
    }

    fn category(&self) -> &'static str {
        "output"
    }
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower encoding.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Faster encoding, larger files.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA texture buffer to a PNG file.
pub fn write_rgba(buffer: &TextureBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgba_to_writer(buffer, writer, config)
}

/// Write an RGBA texture buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &TextureBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps unless asked to.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &TextureBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient() -> TextureBuffer {
        let mut buffer = TextureBuffer::new(32, 32, Color::black());
        for y in 0..32 {
            for x in 0..32 {
                buffer.set(x, y, Color::rgba(x as f64 / 31.0, y as f64 / 31.0, 0.5, 1.0));
            }
        }
        buffer
    }

    #[test]
    fn test_rgba_deterministic() {
        let buffer = gradient();
        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_png_signature() {
        let (data, _) = write_rgba_to_vec_with_hash(&gradient(), &PngConfig::fast()).unwrap();
        assert_eq!(&data[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let buffer = TextureBuffer::new(0, 8, Color::black());
        let err = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions { width: 0, height: 8 }));
    }
}
