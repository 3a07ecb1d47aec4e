//! File discovery: recursive walk pruned by ignore rules, filtered by the
//! configured content globs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use globset::{Glob, GlobSet, GlobSetBuilder};

use weft_core::errors::ScanError;

use super::content_kind::ContentKind;
use super::ignores::IgnorePatterns;
use super::types::{DiscoveredFile, ScanOptions, ScanStats};

/// Result of the discovery phase.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<DiscoveredFile>,
    pub stats: ScanStats,
    /// Non-fatal per-entry errors.
    pub errors: Vec<ScanError>,
}

/// Content scanner: builds the include set from the content globs and walks
/// the project root.
pub struct Scanner {
    options: ScanOptions,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl Scanner {
    /// Create a scanner from scan options.
    ///
    /// Fails if any content pattern is not valid glob syntax (configuration
    /// validation normally catches this earlier).
    pub fn new(options: ScanOptions) -> Result<Self, ScanError> {
        let ignores = IgnorePatterns::new(&options.root, &options.extra_ignores);

        let mut builder = GlobSetBuilder::new();
        for pattern in &options.patterns {
            // Content globs are written relative to the project root, with an
            // optional leading `./`. Matching happens against relative paths.
            let normalized = pattern.trim_start_matches("./");
            let glob = Glob::new(normalized).map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let include_globs = builder.build().map_err(|e| ScanError::InvalidPattern {
            pattern: "<content>".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            options,
            ignores,
            include_globs,
        })
    }

    /// Walk the root and return all files matching the content globs.
    pub fn discover(&self) -> Result<Discovery, ScanError> {
        let start = Instant::now();

        if !self.options.root.exists() {
            return Err(ScanError::RootNotFound {
                path: self.options.root.display().to_string(),
            });
        }

        let mut discovery = Discovery::default();
        self.walk_dir(&self.options.root, &mut discovery);

        for file in &discovery.files {
            discovery.stats.total_files += 1;
            discovery.stats.total_bytes += file.file_size;
            if let Some(kind) = file.kind {
                *discovery
                    .stats
                    .by_kind
                    .entry(kind.name().to_string())
                    .or_insert(0) += 1;
            }
        }
        discovery.stats.duration = start.elapsed();

        Ok(discovery)
    }

    /// Recursively walk a directory, pruning ignored subtrees.
    fn walk_dir(&self, dir: &Path, discovery: &mut Discovery) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                discovery.errors.push(ScanError::Io {
                    path: dir.display().to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path
                .strip_prefix(&self.options.root)
                .unwrap_or(&path)
                .to_path_buf();

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    discovery.errors.push(ScanError::Io {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if file_type.is_symlink() && !self.options.follow_symlinks {
                continue;
            }

            if path.is_dir() {
                if self.ignores.is_ignored(&relative, true) {
                    discovery.stats.dirs_skipped += 1;
                } else {
                    self.walk_dir(&path, discovery);
                }
            } else if path.is_file() {
                if self.ignores.is_ignored(&relative, false) {
                    discovery.stats.files_skipped += 1;
                    continue;
                }
                if !self.include_globs.is_match(&relative) {
                    continue;
                }
                match self.discovered(&path, relative) {
                    Ok(Some(file)) => discovery.files.push(file),
                    Ok(None) => discovery.stats.files_skipped += 1,
                    Err(e) => discovery.errors.push(e),
                }
            }
        }
    }

    /// Build the discovery record for one matched file.
    fn discovered(
        &self,
        absolute: &Path,
        relative: PathBuf,
    ) -> Result<Option<DiscoveredFile>, ScanError> {
        let metadata = fs::metadata(absolute).map_err(|e| ScanError::Io {
            path: absolute.display().to_string(),
            message: e.to_string(),
        })?;

        let file_size = metadata.len();
        if file_size > self.options.max_file_size {
            return Ok(None);
        }

        let mtime = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let kind = ContentKind::from_extension(
            relative.extension().and_then(|e| e.to_str()),
        );

        Ok(Some(DiscoveredFile {
            path: relative,
            mtime,
            file_size,
            kind,
        }))
    }

    /// Absolute path of a discovered file.
    pub fn absolute_path(&self, relative: &Path) -> PathBuf {
        self.options.root.join(relative)
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }
}
