mod cli;
mod core;
mod processors;
mod resolve;
mod utils;

pub use crate::cli::Cli;
pub use crate::core::pipeline::ConversionPipeline;
pub use crate::core::{
    BatchSummary, ConversionTarget, ConvertConfig, ConvertError, Outcome, Result,
    DEFAULT_INPUT_DIR, DEFAULT_MAX_WIDTH, OUTPUT_DIR_NAME, OUTPUT_EXTENSION,
    SUPPORTED_EXTENSIONS, WEBP_QUALITY,
};
pub use crate::processors::{BatchRunner, Discoverer, Loader, Orienter, Resizer, WebpEncoder};
pub use crate::resolve::{InputKind, InputResolver, ResolvedInput};
pub use crate::utils::{format_file_size, is_supported_image, output_file_name, slugify_stem};

pub mod prelude {
    pub use crate::{
        BatchRunner, ConversionPipeline, ConvertConfig, Discoverer, InputResolver, Loader,
        Orienter, Resizer, WebpEncoder,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
