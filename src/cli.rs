// webpify/src/cli.rs
use crate::core::DEFAULT_MAX_WIDTH;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "webpify",
    version,
    about = "Convert images to bounded-width WebP in batch"
)]
pub struct Cli {
    /// File or directory to convert, defaults to ./input
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Width cap in pixels, images are never enlarged
    #[arg(
        value_name = "MAX_WIDTH",
        default_value_t = DEFAULT_MAX_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_width: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
