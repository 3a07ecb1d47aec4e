//! Subcommand implementations: init, build, check.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;
use tracing::warn;

use weft_core::config::{CliOverrides, WeftConfig, PROJECT_CONFIG_FILE};
use weft_engine::{CachedFileMeta, Pipeline, PluginRegistry};
use weft_storage::queries::{build_history, file_metadata};
use weft_storage::{BuildHistoryRecord, CacheDb, FileMetadataRecord};

/// Starter configuration written by `weft init`.
const STARTER_CONFIG: &str = r##"# weft configuration
# Files scanned for utility-class usage.
content = [
  "./templates/**/*.html",
  "./**/templates/**/*.html",
]

plugins = []

# Tokens added on top of the default theme.
[theme.extend.colors]
# brand = { DEFAULT = "#4a6cf7", dark = "#3453e6" }
# surface = "#111827"

[output]
path = "weft.css"
"##;

/// Arguments for `weft build`.
pub struct BuildArgs {
    pub output: Option<String>,
    pub minify: bool,
    pub no_cache: bool,
    pub force: bool,
    pub threads: Option<usize>,
}

/// `weft init`: write a starter configuration.
pub fn init(root: &Path, force: bool) -> Result<()> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// `weft build`: run the pipeline and write the stylesheet.
pub fn build(root: &Path, args: BuildArgs) -> Result<()> {
    let overrides = CliOverrides {
        output_path: args.output.clone(),
        minify: args.minify.then_some(true),
        scan_max_file_size: None,
        scan_threads: args.threads,
    };
    let config = WeftConfig::load(root, Some(&overrides))?;

    if config.content.is_empty() {
        warn!("no content patterns configured; the stylesheet will be empty");
    }

    let db = if args.no_cache {
        None
    } else {
        match CacheDb::open(&root.join(".weft/cache.db")) {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("build cache unavailable, continuing without it: {e}");
                None
            }
        }
    };

    let cached = match &db {
        Some(db) => load_cached(db)?,
        None => FxHashMap::default(),
    };

    let started_at = epoch_secs();
    let pipeline = Pipeline::new(root, config)?;
    let report = pipeline.build(&cached, args.force)?;

    let output_path = root.join(pipeline.config().output.effective_path());
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output_path, &report.css)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if let Some(db) = &db {
        persist(db, &report, started_at)?;
    }

    for error in &report.errors {
        warn!("{error}");
    }
    println!(
        "✓ {} ({} rules from {} files, {} candidates, {} reused) in {:?}",
        output_path.display(),
        report.stats.generate.rules_emitted,
        report.stats.scan.total_files,
        report.stats.extract.unique_candidates,
        report.stats.extract.files_reused,
        report.stats.duration,
    );
    Ok(())
}

/// `weft check`: validate the configuration and report what it declares.
pub fn check(root: &Path) -> Result<()> {
    let config = WeftConfig::load(root, None)?;

    let registry = PluginRegistry::new();
    registry
        .resolve(&config.plugins)
        .context("plugin resolution failed")?;

    let color_tokens: usize = config
        .theme
        .extend
        .colors
        .iter()
        .map(|(name, value)| value.flatten(name).len())
        .sum();

    println!("Configuration OK");
    println!("  content patterns: {}", config.content.len());
    for pattern in &config.content {
        println!("    {pattern}");
    }
    println!("  extended color tokens: {color_tokens}");
    println!(
        "  extended spacing tokens: {}",
        config.theme.extend.spacing.len()
    );
    println!("  plugins: {}", config.plugins.len());
    println!("  output: {}", config.output.effective_path());
    Ok(())
}

/// Load the cached metadata map from the build cache.
fn load_cached(db: &CacheDb) -> Result<FxHashMap<PathBuf, CachedFileMeta>> {
    let records = db.with_conn(file_metadata::load_all)?;

    let mut cached = FxHashMap::default();
    for record in records {
        let candidates = match record.candidates() {
            Ok(c) => c,
            Err(e) => {
                // A corrupt row just means one file rebuilds from scratch.
                warn!("{e}");
                continue;
            }
        };
        cached.insert(
            PathBuf::from(&record.path),
            CachedFileMeta {
                content_hash: record.content_hash as u64,
                mtime_secs: record.mtime_secs,
                mtime_nanos: record.mtime_nanos as u32,
                candidates,
            },
        );
    }
    Ok(cached)
}

/// Persist build results back into the cache.
fn persist(db: &CacheDb, report: &weft_engine::BuildReport, started_at: i64) -> Result<()> {
    let now = epoch_secs();

    db.with_conn(|conn| {
        for entry in &report.entries {
            file_metadata::upsert(
                conn,
                &FileMetadataRecord {
                    path: entry.path.to_string_lossy().to_string(),
                    content_hash: entry.content_hash as i64,
                    mtime_secs: entry.mtime_secs,
                    mtime_nanos: entry.mtime_nanos as i64,
                    file_size: entry.file_size as i64,
                    kind: entry.kind.map(|k| k.name().to_string()),
                    candidates_json: FileMetadataRecord::encode_candidates(&entry.candidates),
                    last_built_at: now,
                },
            )?;
        }
        for path in &report.removed {
            file_metadata::remove(conn, &path.to_string_lossy())?;
        }
        build_history::insert(
            conn,
            &BuildHistoryRecord {
                started_at,
                duration_ms: report.stats.duration.as_millis() as i64,
                files_scanned: report.stats.scan.total_files as i64,
                files_reused: report.stats.extract.files_reused as i64,
                candidates: report.stats.extract.unique_candidates as i64,
                rules_emitted: report.stats.generate.rules_emitted as i64,
            },
        )?;
        Ok(())
    })?;
    Ok(())
}

/// Seconds since the Unix epoch.
fn epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_config_is_valid() {
        let config = WeftConfig::from_toml(STARTER_CONFIG).unwrap();
        WeftConfig::validate(&config).unwrap();
        assert_eq!(config.content.len(), 2);
        assert!(config.plugins.is_empty());
        assert_eq!(config.output.effective_path(), "weft.css");
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        init(dir.path(), false).unwrap();
        assert!(init(dir.path(), false).is_err());
        init(dir.path(), true).unwrap();
    }
}
