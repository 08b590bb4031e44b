// webpify/src/resolve.rs
use crate::core::{ConvertError, Result, DEFAULT_INPUT_DIR, OUTPUT_DIR_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub root: PathBuf,
    pub kind: InputKind,
    pub output_root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    base_dir: PathBuf,
    home_dir: PathBuf,
}

impl InputResolver {
    pub fn new() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { base_dir, home_dir }
    }

    pub fn with_dirs(base_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self { base_dir, home_dir }
    }

    pub fn resolve(&self, raw: Option<&str>) -> Result<ResolvedInput> {
        let candidate = match raw {
            Some(arg) if !arg.is_empty() => self.expand(arg),
            _ => self.base_dir.join(DEFAULT_INPUT_DIR),
        };

        // Existence check and normalization in one step
        let root = candidate
            .canonicalize()
            .map_err(|_| ConvertError::InputNotFound(candidate.clone()))?;

        let metadata = std::fs::metadata(&root)?;
        let (kind, output_root) = if metadata.is_file() {
            let output_root = root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            (InputKind::File, output_root)
        } else if metadata.is_dir() {
            (InputKind::Directory, root.join(OUTPUT_DIR_NAME))
        } else {
            return Err(ConvertError::InvalidPath(format!(
                "{} is neither a file nor a directory",
                root.display()
            )));
        };

        if kind == InputKind::Directory {
            std::fs::create_dir_all(&output_root)?;
        }

        Ok(ResolvedInput {
            root,
            kind,
            output_root,
        })
    }

    fn expand(&self, raw: &str) -> PathBuf {
        if raw == "~" {
            return self.home_dir.clone();
        }

        if let Some(rest) = raw.strip_prefix("~/") {
            return self.home_dir.join(rest);
        }

        let path = PathBuf::from(raw);
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}
