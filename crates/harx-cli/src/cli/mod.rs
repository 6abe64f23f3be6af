//! CLI for harx.

mod extract;

use anyhow::Result;
use clap::Parser;
use harx_core::config::{self, HarxConfig};
use harx_core::extract::{ExtractOptions, OnError};
use harx_core::url_model::EmptyFilenamePolicy;
use std::path::PathBuf;

use extract::run_extract;

/// Extract response bodies from a HAR capture into a directory.
#[derive(Debug, Parser)]
#[command(name = "harx")]
#[command(about = "harx: extract response bodies from a HAR file", long_about = None)]
pub struct Cli {
    /// Path to the *.har file.
    #[arg(long, value_name = "PATH")]
    pub har: Option<PathBuf>,

    /// Directory to save bodies into (default from config, else "content").
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Keep extracting after an entry fails; exit status is still 1.
    #[arg(long)]
    pub keep_going: bool,

    /// What to do when a URL path ends in '/': fallback, skip or error.
    #[arg(long, value_name = "POLICY")]
    pub empty_filename: Option<EmptyFilenamePolicy>,

    /// File name used by the fallback policy.
    #[arg(long, value_name = "NAME")]
    pub fallback_name: Option<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            HarxConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = cli.extract_options(&cfg);
        let har = cli.har.unwrap_or_default();
        run_extract(&har, opts)
    }

    /// Config values with the flags given on the command line applied on top.
    pub fn extract_options(&self, cfg: &HarxConfig) -> ExtractOptions {
        let mut opts = cfg.extract_options();
        if let Some(dir) = &self.dir {
            opts.output_dir = dir.clone();
        }
        if self.keep_going {
            opts.on_error = OnError::Continue;
        }
        if let Some(policy) = self.empty_filename {
            opts.empty_filename = policy;
        }
        if let Some(name) = &self.fallback_name {
            opts.fallback_filename = name.clone();
        }
        opts
    }
}
