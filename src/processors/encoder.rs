// webpify/src/processors/encoder.rs
use crate::core::{ConvertError, Result};
use image::DynamicImage;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use webp::Encoder;

pub struct WebpEncoder {
    quality: f32,
}

impl WebpEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100) as f32,
        }
    }

    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let encoded = self.encode_to_bytes(image)?;
        self.persist(&encoded, path)?;

        log::debug!("Saved image: {} ({} bytes)", path.display(), encoded.len());
        Ok(())
    }

    pub fn encode_to_bytes(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        log::debug!(
            "Encoding {}x{} image to WebP at quality {}",
            image.width(),
            image.height(),
            self.quality
        );

        let memory = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            Encoder::from_rgba(rgba.as_raw(), image.width(), image.height())
                .encode_simple(false, self.quality)
        } else {
            let rgb = image.to_rgb8();
            Encoder::from_rgb(rgb.as_raw(), image.width(), image.height())
                .encode_simple(false, self.quality)
        }
        .map_err(|e| ConvertError::Encode(format!("WebP encoding failed: {:?}", e)))?;

        Ok(memory.to_vec())
    }

    // Written to a temp file in the destination directory, then renamed into
    // place, so a crash cannot leave a truncated file behind the exists-check
    fn persist(&self, bytes: &[u8], path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
            ConvertError::Write(format!(
                "Failed to create temp file in {}: {}",
                dir.display(),
                e
            ))
        })?;

        tmp.write_all(bytes)
            .map_err(|e| ConvertError::Write(format!("Failed to write {}: {}", path.display(), e)))?;

        tmp.persist(path).map_err(|e| {
            ConvertError::Write(format!("Failed to move output into {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
