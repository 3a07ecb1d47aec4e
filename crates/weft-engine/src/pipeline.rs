//! Build pipeline: scan, classify, extract, resolve, generate.
//!
//! One call to `Pipeline::build` is one build invocation. Per-file failures
//! are non-fatal and accumulated; only configuration-level problems abort
//! the build.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use weft_core::config::WeftConfig;
use weft_core::errors::{BuildError, BuildErrors, ScanError};
use weft_core::theme::ResolvedTheme;

use crate::extract::{CandidateExtractor, ExtractStats, ExtractionCache};
use crate::generate::utilities::{generate_stylesheet, GenerateStats};
use crate::plugins::PluginRegistry;
use crate::scanner::{
    classify_file, compute_diff, CachedFileMeta, ContentKind, FileStatus, ScanOptions,
    ScanStats, Scanner,
};

/// Per-file record handed back for persistence into the build cache.
#[derive(Debug, Clone)]
pub struct PersistEntry {
    pub path: PathBuf,
    pub content_hash: u64,
    pub mtime_secs: i64,
    pub mtime_nanos: u32,
    pub file_size: u64,
    pub kind: Option<ContentKind>,
    pub candidates: Vec<String>,
}

/// Statistics about a whole build.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub scan: ScanStats,
    pub extract: ExtractStats,
    pub generate: GenerateStats,
    pub duration: std::time::Duration,
}

/// The outcome of a build: the stylesheet plus everything the caller needs
/// to persist and report.
#[derive(Debug)]
pub struct BuildReport {
    /// Rendered stylesheet text.
    pub css: String,
    pub stats: BuildStats,
    /// Entries to upsert into the build cache.
    pub entries: Vec<PersistEntry>,
    /// Cached paths no longer on disk.
    pub removed: Vec<PathBuf>,
    /// Non-fatal errors collected along the way.
    pub errors: Vec<BuildError>,
}

/// The build pipeline.
pub struct Pipeline {
    config: WeftConfig,
    root: PathBuf,
    extractor: CandidateExtractor,
    cache: ExtractionCache,
    registry: PluginRegistry,
}

impl Pipeline {
    /// Create a pipeline for a project root and loaded configuration.
    pub fn new(root: impl Into<PathBuf>, config: WeftConfig) -> Result<Self, BuildError> {
        let extractor = CandidateExtractor::new()?;

        // Configure the worker pool once, if a thread count is pinned.
        let threads = config.scan.effective_threads();
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }

        Ok(Self {
            config,
            root: root.into(),
            extractor,
            cache: ExtractionCache::default(),
            registry: PluginRegistry::new(),
        })
    }

    /// Replace the plugin registry (the default registry is empty).
    pub fn with_registry(mut self, registry: PluginRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The loaded configuration.
    pub fn config(&self) -> &WeftConfig {
        &self.config
    }

    /// Run one build.
    ///
    /// `cached` holds per-file metadata from the previous build (empty map
    /// for a cold build). `force_full` bypasses mtime-based reuse.
    pub fn build(
        &self,
        cached: &FxHashMap<PathBuf, CachedFileMeta>,
        force_full: bool,
    ) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let mut errors = BuildErrors::new();

        // Phase 1: discovery
        let scanner = Scanner::new(self.scan_options())?;
        let discovery = scanner.discover()?;
        for e in discovery.errors {
            errors.push(e);
        }
        info!(
            files = discovery.files.len(),
            dirs_skipped = discovery.stats.dirs_skipped,
            "content scan complete"
        );

        // Phase 2: classification against the previous build
        let classify_errors: Mutex<Vec<ScanError>> = Mutex::new(Vec::new());
        let classified: Vec<(FileStatus, crate::scanner::ScanEntry)> = discovery
            .files
            .par_iter()
            .filter_map(|file| {
                match classify_file(&self.root, file, cached.get(&file.path), force_full) {
                    Ok(pair) => Some(pair),
                    Err(e) => {
                        if let Ok(mut errs) = classify_errors.lock() {
                            errs.push(ScanError::Io {
                                path: file.path.display().to_string(),
                                message: e.to_string(),
                            });
                        }
                        None
                    }
                }
            })
            .collect();
        for e in classify_errors.into_inner().unwrap_or_default() {
            errors.push(e);
        }

        let diff = compute_diff(classified, cached, discovery.stats);
        debug!(
            added = diff.added.len(),
            modified = diff.modified.len(),
            unchanged = diff.unchanged.len(),
            removed = diff.removed.len(),
            "classification complete"
        );

        // Phase 3: candidate extraction (changed files only)
        let mut extract_stats = ExtractStats {
            files_reused: diff.unchanged.len(),
            ..Default::default()
        };

        let changed: Vec<&PathBuf> = diff.added.iter().chain(diff.modified.iter()).collect();
        let extract_errors: Mutex<Vec<BuildError>> = Mutex::new(Vec::new());
        let cache_hits = std::sync::atomic::AtomicUsize::new(0);

        let extracted: FxHashMap<PathBuf, Vec<String>> = changed
            .par_iter()
            .filter_map(|path| {
                let entry = diff.entries.get(*path)?;
                if self.cache.contains(entry.content_hash) {
                    cache_hits.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                }
                let absolute = self.root.join(path);
                match std::fs::read(&absolute) {
                    Ok(bytes) => {
                        let candidates = self.cache.get_or_extract(entry.content_hash, || {
                            let text = String::from_utf8_lossy(&bytes);
                            self.extractor.extract(&text)
                        });
                        Some(((*path).clone(), candidates.as_ref().clone()))
                    }
                    Err(e) => {
                        if let Ok(mut errs) = extract_errors.lock() {
                            errs.push(BuildError::Scan(ScanError::Io {
                                path: absolute.display().to_string(),
                                message: e.to_string(),
                            }));
                        }
                        None
                    }
                }
            })
            .collect();
        for e in extract_errors.into_inner().unwrap_or_default() {
            errors.push(e);
        }
        extract_stats.files_processed = extracted.len();
        extract_stats.cache_hits = cache_hits.load(std::sync::atomic::Ordering::Relaxed);

        // Union of candidates: freshly extracted plus reused from cache.
        let mut union: BTreeSet<String> = BTreeSet::new();
        for candidates in extracted.values() {
            union.extend(candidates.iter().cloned());
        }
        for path in &diff.unchanged {
            if let Some(meta) = cached.get(path) {
                union.extend(meta.candidates.iter().cloned());
            }
        }
        extract_stats.unique_candidates = union.len();
        info!(
            candidates = union.len(),
            reused_files = extract_stats.files_reused,
            "extraction complete"
        );

        // Phase 4: theme resolution and plugins
        let mut theme = ResolvedTheme::resolve(&self.config.theme.extend)?;
        let resolved_plugins = self.registry.resolve(&self.config.plugins)?;
        let mut static_rules = Vec::new();
        for plugin in &resolved_plugins {
            plugin.extend_theme(&mut theme);
            static_rules.extend(plugin.static_rules());
        }

        // Phase 5: generation
        let candidates: Vec<String> = union.into_iter().collect();
        let (sheet, generate_stats) = generate_stylesheet(&theme, &candidates, static_rules);
        info!(
            rules = generate_stats.rules_emitted,
            skipped = generate_stats.candidates_skipped,
            "generation complete"
        );

        let mut css = format!("/*! weft v{} */\n", env!("CARGO_PKG_VERSION"));
        css.push_str(&sheet.render(self.config.output.effective_minify()));

        // Entries to persist: every live file with its current candidates.
        let mut entries: Vec<PersistEntry> = diff
            .entries
            .values()
            .map(|entry| {
                let candidates = extracted
                    .get(&entry.path)
                    .cloned()
                    .or_else(|| cached.get(&entry.path).map(|m| m.candidates.clone()))
                    .unwrap_or_default();
                PersistEntry {
                    path: entry.path.clone(),
                    content_hash: entry.content_hash,
                    mtime_secs: entry.mtime_secs,
                    mtime_nanos: entry.mtime_nanos,
                    file_size: entry.file_size,
                    kind: entry.kind,
                    candidates,
                }
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(BuildReport {
            css,
            stats: BuildStats {
                scan: diff.stats,
                extract: extract_stats,
                generate: generate_stats,
                duration: start.elapsed(),
            },
            entries,
            removed: diff.removed,
            errors: errors.into_vec(),
        })
    }

    /// Scan options derived from the configuration.
    fn scan_options(&self) -> ScanOptions {
        let mut extra_ignores = self.config.scan.extra_ignore.clone();
        // Never scan the stylesheet this build writes.
        extra_ignores.push(format!("/{}", self.config.output.effective_path()));

        ScanOptions {
            root: self.root.clone(),
            patterns: self.config.content.clone(),
            extra_ignores,
            max_file_size: self.config.scan.effective_max_file_size(),
            threads: self.config.scan.effective_threads(),
            follow_symlinks: self.config.scan.effective_follow_symlinks(),
        }
    }
}
