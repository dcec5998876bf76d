//! The extraction run for one source file.
//!
//! 1. Resolve the namespace and the lookup syntax (nothing is touched if
//!    either fails).
//! 2. Scan the document for Japanese runs.
//! 3. Derive a key per run and fill the translation bundle.
//! 4. Rewrite the document and render the merged side-car dictionary.
//! 5. Replace the source file, then the side-car.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use super::dictionary::{SideCar, TranslationBundle};
use super::key::KeyDeriver;
use super::namespace::NamespaceStrategy;
use super::romanize::Romanizer;
use super::scan::{self, ExtractedString, MarkupOptions, ScanMode, SourceContext};
use super::substitute::{Substituter, Substitution, masked_regions};
use super::syntax::{LookupExpression, Syntax};
use crate::utils::write_atomic;

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: PathBuf,
    pub namespace: NamespaceStrategy,
    /// Forced scan mode; chosen from the extension when `None`.
    pub mode: Option<ScanMode>,
    pub markup: MarkupOptions,
    pub max_key_words: usize,
    /// Output directory for the side-car, relative to `cwd`.
    pub dest: Option<PathBuf>,
    pub cwd: PathBuf,
    /// Inserted before the side-car extension.
    pub suffix: String,
    /// Language code used in the side-car name in tree mode.
    pub lang: String,
    /// Scan and plan only; write nothing.
    pub dry_run: bool,
}

/// One extracted string and the key generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub key: String,
    pub context: SourceContext,
}

/// What a run found and did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source: PathBuf,
    pub namespace: String,
    pub extractions: Vec<Extraction>,
    pub bundle: TranslationBundle,
    pub side_car: SideCar,
    /// Number of occurrences rewritten in the document.
    pub replaced: usize,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.extractions.is_empty()
    }
}

pub fn run(config: &PipelineConfig, romanizer: &dyn Romanizer) -> Result<RunSummary> {
    let source = &config.source;

    let namespace = config.namespace.resolve(source)?;
    let syntax = Syntax::for_path(source)?;
    let mode = config.mode.unwrap_or_else(|| ScanMode::for_path(source));
    debug!("namespace {namespace:?}, {mode:?} mode, {syntax:?}");

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read file: {}", source.display()))?;

    let candidates = match mode {
        ScanMode::Line => scan::line::scan(&content),
        ScanMode::Tree => {
            let mut candidates = scan::markup::scan(&content, &config.markup);
            // text only reachable through character references cannot be rewritten
            candidates.retain(|candidate| {
                let literal = content.contains(candidate.text.as_str());
                if !literal {
                    debug!(
                        "{}: {:?} has no literal occurrence, skipped",
                        candidate.context, candidate.text
                    );
                }
                literal
            });
            scan::sort_longest_first(&mut candidates);
            candidates
        }
    };

    let deriver = KeyDeriver::new(romanizer, config.max_key_words);
    let (extractions, bundle) = derive_keys(
        candidates,
        &deriver,
        TranslationBundle::new(&namespace, config.namespace.is_nested()),
    );

    let substitutions: Vec<Substitution> = extractions
        .iter()
        .map(|e| {
            Substitution::new(
                e.text.as_str(),
                syntax.expression(&format!("{namespace}.{}", e.key)),
            )
        })
        .collect();
    let substituter = Substituter::new(&substitutions, syntax.replaces_string_literals())?;
    let rewrite = match mode {
        ScanMode::Line => substituter.apply(&content),
        ScanMode::Tree => substituter.apply_outside(&content, &masked_regions(&content)),
    };

    let lang = (mode == ScanMode::Tree).then_some(config.lang.as_str());
    let side_car = SideCar::locate(
        source,
        config.dest.as_deref(),
        &config.cwd,
        &config.suffix,
        lang,
        syntax.side_car_format(),
    );

    if !config.dry_run {
        // an unreadable side-car must fail the run before the source changes
        let dictionary = side_car.render(&bundle)?;
        if rewrite.replaced > 0 {
            write_atomic(source, &rewrite.content)?;
            info!("rewrote {} occurrence(s) in {}", rewrite.replaced, source.display());
        }
        side_car.persist(&dictionary)?;
        info!("wrote {} key(s) to {}", bundle.len(), side_car.path.display());
    }

    Ok(RunSummary {
        source: source.clone(),
        namespace,
        extractions,
        bundle,
        side_car,
        replaced: rewrite.replaced,
    })
}

/// Derives a key for each distinct text, in candidate order.
fn derive_keys(
    candidates: Vec<ExtractedString>,
    deriver: &KeyDeriver<'_>,
    mut bundle: TranslationBundle,
) -> (Vec<Extraction>, TranslationBundle) {
    let mut extractions: Vec<Extraction> = Vec::new();

    for candidate in candidates {
        if extractions.iter().any(|e| e.text == candidate.text) {
            continue;
        }
        let key = deriver.derive(&candidate.text);
        debug!("{}: {:?} -> {key}", candidate.context, candidate.text);
        if let Some(previous) = bundle.insert(&key, &candidate.text) {
            debug!("key {key} collides: {previous:?} replaced by {:?}", candidate.text);
        }
        extractions.push(Extraction {
            text: candidate.text,
            key,
            context: candidate.context,
        });
    }

    (extractions, bundle)
}
