// webpify/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn cap_width(&self, image: &DynamicImage, max_width: u32) -> DynamicImage {
        let (width, height) = (image.width(), image.height());
        let (new_width, new_height) = Self::bounded_dimensions(width, height, max_width);

        if new_width == width && new_height == height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            width,
            height,
            new_width,
            new_height
        );

        image.resize_exact(new_width, new_height, self.filter)
    }

    // Width cap only, never an upscale
    pub fn bounded_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
        if max_width == 0 || width <= max_width {
            return (width, height);
        }

        let ratio = max_width as f32 / width as f32;
        let new_height = (height as f32 * ratio).round() as u32;
        (max_width, new_height.max(1))
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
