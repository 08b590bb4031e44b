// webpify/src/processors/loader.rs
use crate::core::{ConvertError, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)
            .map_err(|e| {
                ConvertError::Decode(format!("Failed to open {}: {}", path.display(), e))
            })?
            .with_guessed_format()
            .map_err(|e| {
                ConvertError::Decode(format!("Failed to probe {}: {}", path.display(), e))
            })?
            .decode()
            .map_err(|e| {
                ConvertError::Decode(format!("Failed to decode {}: {}", path.display(), e))
            })?;

        // Guard against decompression bombs
        if let Some((max_w, max_h)) = self.max_dimensions {
            let (width, height) = (image.width(), image.height());
            if width > max_w || height > max_h {
                return Err(ConvertError::Decode(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        let metadata = path.metadata().map_err(|e| {
            ConvertError::Decode(format!("Cannot read {}: {}", path.display(), e))
        })?;

        if metadata.len() == 0 {
            return Err(ConvertError::Decode(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
