//! `harx --har <path>`: run the extractor and report.

use anyhow::Result;
use harx_core::extract::{ExtractOptions, Extractor};
use std::path::Path;

pub fn run_extract(har: &Path, opts: ExtractOptions) -> Result<()> {
    tracing::info!(
        har = %har.display(),
        dir = %opts.output_dir.display(),
        on_error = ?opts.on_error,
        empty_filename = %opts.empty_filename,
        "extracting"
    );
    let extractor = Extractor::new(opts);
    let report = extractor.run(har)?;

    for failure in &report.failures {
        eprintln!("harx error: {}", failure);
    }
    println!(
        "{} -> {}: {}",
        har.display(),
        extractor.options().output_dir.display(),
        report
    );

    if !report.is_success() {
        anyhow::bail!("{} entry failure(s)", report.failures.len());
    }
    Ok(())
}
