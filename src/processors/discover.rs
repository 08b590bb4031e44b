// webpify/src/processors/discover.rs
use crate::utils::is_supported_image;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct Discoverer;

impl Discoverer {
    pub fn new() -> Self {
        Self
    }

    pub fn discover(&self, input_dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(input_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_image(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new()
    }
}
