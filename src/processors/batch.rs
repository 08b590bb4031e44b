use crate::core::pipeline::ConversionPipeline;
use crate::core::{BatchSummary, ConversionTarget, ConvertConfig, Outcome, Result};
use crate::processors::Discoverer;
use crate::resolve::{InputKind, InputResolver, ResolvedInput};
use crate::utils::output_file_name;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

pub struct BatchRunner {
    resolver: InputResolver,
    discoverer: Discoverer,
    pipeline: ConversionPipeline,
}

impl BatchRunner {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            resolver: InputResolver::new(),
            discoverer: Discoverer::new(),
            pipeline: ConversionPipeline::new(config),
        }
    }

    pub fn with_resolver(mut self, resolver: InputResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn run(&self, raw_input: Option<&str>) -> Result<BatchSummary> {
        let input = self.resolver.resolve(raw_input)?;
        let targets = self.collect_targets(&input);

        if targets.is_empty() {
            log::warn!("No image files found in {}", input.root.display());
            return Ok(BatchSummary::default());
        }

        log::info!(
            "Converting {} images from {}",
            targets.len(),
            input.root.display()
        );

        let pb = self.create_progress_bar(targets.len());

        // One file at a time, a failure only skips that file
        let mut summary = BatchSummary::default();
        for target in targets.iter().progress_with(pb.clone()) {
            let outcome = match self.pipeline.convert(target) {
                Ok(outcome) => outcome,
                Err(err) => Outcome::Failed(err),
            };

            match &outcome {
                Outcome::Converted => log::info!(
                    "Converted {} -> {}",
                    target.source.display(),
                    target.destination.display()
                ),
                Outcome::Skipped => log::info!(
                    "Skipping {}: output already exists",
                    target.source.display()
                ),
                Outcome::Failed(err) => {
                    log::warn!("Failed to convert {}: {}", target.source.display(), err)
                }
            }

            summary.record(target, &outcome);
        }

        pb.finish_with_message(format!(
            "Converted {} images ({:.1}% size reduction)",
            summary.converted,
            summary.savings_percent()
        ));

        Ok(summary)
    }

    fn collect_targets(&self, input: &ResolvedInput) -> Vec<ConversionTarget> {
        let sources = match input.kind {
            InputKind::File => vec![input.root.clone()],
            InputKind::Directory => self.discoverer.discover(&input.root),
        };

        sources
            .into_iter()
            .map(|source| {
                let destination = input.output_root.join(output_file_name(&source));
                ConversionTarget {
                    source,
                    destination,
                }
            })
            .collect()
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}
