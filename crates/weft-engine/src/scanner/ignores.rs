//! Ignore rules for content scanning.
//!
//! Content globs select what to scan; these patterns decide what never gets
//! scanned regardless: dependency trees, build output, VCS metadata, and
//! binary assets that cannot contain class names.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories that are always pruned.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Dependencies
    "node_modules",
    ".pnpm",
    ".yarn",
    "bower_components",
    // Python environments (templates live next to Django apps)
    "__pycache__",
    ".venv",
    "venv",
    "env",
    "site-packages",
    ".eggs",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Build output
    "dist",
    "build",
    "out",
    "_build",
    ".next",
    ".nuxt",
    ".svelte-kit",
    "staticfiles",
    // Coverage
    "coverage",
    "htmlcov",
    // Caches and temp
    ".cache",
    ".parcel-cache",
    "tmp",
    "temp",
    // IDE
    ".idea",
    ".vscode",
    // weft's own data
    ".weft",
];

/// File patterns that are always skipped (binary or generated; none of these
/// can reference utility classes).
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    // Images
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.ico",
    "*.webp",
    "*.bmp",
    // Fonts
    "*.woff",
    "*.woff2",
    "*.ttf",
    "*.otf",
    "*.eot",
    // Media
    "*.mp3",
    "*.mp4",
    "*.wav",
    "*.webm",
    // Archives
    "*.zip",
    "*.tar",
    "*.gz",
    // Documents
    "*.pdf",
    // Compiled
    "*.pyc",
    "*.so",
    "*.dylib",
    "*.dll",
    // Lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    // Generated stylesheets and source maps
    "*.min.css",
    "*.map",
];

/// Combined ignore rules: defaults + `.gitignore` + `.weftignore` + extras.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Build ignore rules for a scan root.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in DEFAULT_IGNORE_FILES {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        // Project-level ignore files, when present.
        let weftignore = root.join(".weftignore");
        if weftignore.exists() {
            let _ = builder.add(&weftignore);
        }
        let gitignore = root.join(".gitignore");
        if gitignore.exists() {
            let _ = builder.add(&gitignore);
        }

        Self {
            gitignore: builder
                .build()
                .unwrap_or_else(|_| Gitignore::empty()),
        }
    }

    /// Check if a path (relative to the root) should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn ignores_dependency_dirs() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new("node_modules"), true));
        assert!(patterns.is_ignored(Path::new("app/node_modules"), true));
        assert!(patterns.is_ignored(Path::new(".venv"), true));
    }

    #[test]
    fn ignores_binary_assets() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new("static/logo.png"), false));
        assert!(patterns.is_ignored(Path::new("fonts/inter.woff2"), false));
        assert!(patterns.is_ignored(Path::new("dist.min.css"), false));
    }

    #[test]
    fn keeps_template_files() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(!patterns.is_ignored(Path::new("home/templates/index.html"), false));
        assert!(!patterns.is_ignored(Path::new("src/App.vue"), false));
    }

    #[test]
    fn extra_patterns_apply() {
        let root = PathBuf::from("/project");
        let patterns = IgnorePatterns::new(&root, &["legacy/".to_string()]);

        assert!(patterns.is_ignored(Path::new("legacy"), true));
    }
}
