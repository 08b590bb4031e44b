use clap::Parser;
use log::LevelFilter;
use webpify::{format_file_size, BatchRunner, Cli, ConvertConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = ConvertConfig::with_max_width(cli.max_width);
    config.validate()?;

    let runner = BatchRunner::new(config.clone());
    let summary = runner.run(cli.input.as_deref())?;

    println!(
        "Done: {} converted, {} skipped, {} failed (max width {}px)",
        summary.converted, summary.skipped, summary.failed, config.max_width
    );

    if summary.converted > 0 {
        println!(
            "Size: {} -> {} ({:.1}% saved)",
            format_file_size(summary.total_size_before),
            format_file_size(summary.total_size_after),
            summary.savings_percent()
        );
    }

    Ok(())
}
