use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::args::Arguments;
use crate::config::{Config, load_config};
use crate::core::namespace::NamespaceStrategy;
use crate::core::romanize::Hepburn;
use crate::core::{PipelineConfig, RunSummary, pipeline};

/// Loads the configuration and runs the pipeline for the source file.
pub fn run(args: &Arguments) -> Result<RunSummary> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;

    let source_dir = match args.source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd.clone(),
    };
    let loaded = load_config(&source_dir)?;
    match &loaded.path {
        Some(path) => debug!("using config {}", path.display()),
        None => debug!("no {} found, using defaults", crate::config::CONFIG_FILE_NAME),
    }

    let config = pipeline_config(args, &loaded.config, &cwd);
    pipeline::run(&config, &Hepburn)
}

/// Merges command-line arguments over the config file.
pub fn pipeline_config(args: &Arguments, config: &Config, cwd: &Path) -> PipelineConfig {
    let anchor = args.anchor.as_deref().unwrap_or(&config.anchor);
    let namespace = NamespaceStrategy::select(
        args.trim.as_deref(),
        Some(args.key.as_str()),
        args.namespace.unwrap_or(config.default_namespace),
        anchor,
        config.segment_count,
    );

    PipelineConfig {
        source: args.source.clone(),
        namespace,
        mode: args.mode,
        markup: config.markup_options(),
        max_key_words: config.max_key_words,
        dest: args.dest.clone(),
        cwd: cwd.to_path_buf(),
        suffix: args.prefix.clone(),
        lang: args.lang.clone(),
        dry_run: args.is_read_only(),
    }
}
