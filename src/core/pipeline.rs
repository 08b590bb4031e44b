// webpify/src/core/pipeline.rs
use super::{ConversionTarget, ConvertConfig, Outcome, Result};
use crate::processors::{Loader, Orienter, Resizer, WebpEncoder};

pub struct ConversionPipeline {
    config: ConvertConfig,
    loader: Loader,
    resizer: Resizer,
    orienter: Orienter,
    encoder: WebpEncoder,
}

impl ConversionPipeline {
    pub fn new(config: ConvertConfig) -> Self {
        let encoder = WebpEncoder::new(config.quality);

        Self {
            config,
            loader: Loader::new(),
            resizer: Resizer::new(),
            orienter: Orienter::new(),
            encoder,
        }
    }

    pub fn convert(&self, target: &ConversionTarget) -> Result<Outcome> {
        // The existing output is the marker that this source was already done
        if target.destination.exists() {
            log::debug!(
                "Output already exists, skipping: {}",
                target.destination.display()
            );
            return Ok(Outcome::Skipped);
        }

        let image = self.loader.load(&target.source)?;

        // Cap width, never enlarge
        let image = self.resizer.cap_width(&image, self.config.max_width);

        // Upright the pixels per the camera orientation tag
        let image = self.orienter.auto_orient(&target.source, image);

        self.encoder.save(&image, &target.destination)?;

        Ok(Outcome::Converted)
    }
}
