//! Content kind detection from file extension.

use serde::{Deserialize, Serialize};

/// Kinds of content files the extractor understands.
///
/// The kind is informational: any file matched by a content glob is scanned,
/// but stats are grouped by kind and future per-kind handling hangs here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Html,
    Vue,
    Svelte,
    Jsx,
    Tsx,
    JavaScript,
    TypeScript,
    Markdown,
    PlainText,
}

impl ContentKind {
    /// Detect the content kind from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<ContentKind> {
        match ext? {
            "html" | "htm" | "jinja" | "j2" => Some(ContentKind::Html),
            "vue" => Some(ContentKind::Vue),
            "svelte" => Some(ContentKind::Svelte),
            "jsx" => Some(ContentKind::Jsx),
            "tsx" => Some(ContentKind::Tsx),
            "js" | "mjs" | "cjs" => Some(ContentKind::JavaScript),
            "ts" | "mts" | "cts" => Some(ContentKind::TypeScript),
            "md" | "markdown" => Some(ContentKind::Markdown),
            "txt" | "text" => Some(ContentKind::PlainText),
            _ => None,
        }
    }

    /// Returns all file extensions associated with this kind.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ContentKind::Html => &["html", "htm", "jinja", "j2"],
            ContentKind::Vue => &["vue"],
            ContentKind::Svelte => &["svelte"],
            ContentKind::Jsx => &["jsx"],
            ContentKind::Tsx => &["tsx"],
            ContentKind::JavaScript => &["js", "mjs", "cjs"],
            ContentKind::TypeScript => &["ts", "mts", "cts"],
            ContentKind::Markdown => &["md", "markdown"],
            ContentKind::PlainText => &["txt", "text"],
        }
    }

    /// Returns the display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Html => "HTML",
            ContentKind::Vue => "Vue",
            ContentKind::Svelte => "Svelte",
            ContentKind::Jsx => "JSX",
            ContentKind::Tsx => "TSX",
            ContentKind::JavaScript => "JavaScript",
            ContentKind::TypeScript => "TypeScript",
            ContentKind::Markdown => "Markdown",
            ContentKind::PlainText => "plain text",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
