// webpify/src/processors/orient.rs
use exif::{In, Reader, Tag};
use image::DynamicImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct Orienter;

impl Orienter {
    pub fn new() -> Self {
        Self
    }

    pub fn auto_orient(&self, path: &Path, image: DynamicImage) -> DynamicImage {
        match self.read_orientation(path) {
            Some(orientation) if orientation > 1 => {
                log::debug!(
                    "Applying EXIF orientation {} to {}",
                    orientation,
                    path.display()
                );
                Self::apply_orientation(image, orientation)
            }
            _ => image,
        }
    }

    pub fn read_orientation(&self, path: &Path) -> Option<u32> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Failed to open {} for EXIF read: {}", path.display(), e);
                return None;
            }
        };
        let mut bufreader = BufReader::new(&file);

        match Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => exif
                .get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0)),
            Err(exif::Error::NotFound(_)) => {
                log::debug!("No EXIF data found in {}", path.display());
                None
            }
            Err(e) => {
                log::warn!("Failed to read EXIF from {}: {}", path.display(), e);
                None
            }
        }
    }

    // Values per the EXIF orientation tag, 1 is upright
    pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
        match orientation {
            2 => image.fliph(),
            3 => image.rotate180(),
            4 => image.flipv(),
            5 => image.rotate90().fliph(),
            6 => image.rotate90(),
            7 => image.rotate270().fliph(),
            8 => image.rotate270(),
            _ => image,
        }
    }
}

impl Default for Orienter {
    fn default() -> Self {
        Self::new()
    }
}
