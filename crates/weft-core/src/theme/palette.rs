//! Compiled-in default design tokens.
//!
//! These are the framework defaults the theme extension is layered on top of.
//! Scales use the conventional 50..900 shade steps.

/// Single-value default colors.
pub const DEFAULT_SINGLE_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

/// Default color scales: (scale name, shades).
pub const DEFAULT_COLOR_SCALES: &[(&str, &[(&str, &str)])] = &[
    (
        "slate",
        &[
            ("50", "#f8fafc"),
            ("100", "#f1f5f9"),
            ("200", "#e2e8f0"),
            ("300", "#cbd5e1"),
            ("400", "#94a3b8"),
            ("500", "#64748b"),
            ("600", "#475569"),
            ("700", "#334155"),
            ("800", "#1e293b"),
            ("900", "#0f172a"),
        ],
    ),
    (
        "gray",
        &[
            ("50", "#f9fafb"),
            ("100", "#f3f4f6"),
            ("200", "#e5e7eb"),
            ("300", "#d1d5db"),
            ("400", "#9ca3af"),
            ("500", "#6b7280"),
            ("600", "#4b5563"),
            ("700", "#374151"),
            ("800", "#1f2937"),
            ("900", "#111827"),
        ],
    ),
    (
        "red",
        &[
            ("50", "#fef2f2"),
            ("100", "#fee2e2"),
            ("200", "#fecaca"),
            ("300", "#fca5a5"),
            ("400", "#f87171"),
            ("500", "#ef4444"),
            ("600", "#dc2626"),
            ("700", "#b91c1c"),
            ("800", "#991b1b"),
            ("900", "#7f1d1d"),
        ],
    ),
    (
        "amber",
        &[
            ("50", "#fffbeb"),
            ("100", "#fef3c7"),
            ("200", "#fde68a"),
            ("300", "#fcd34d"),
            ("400", "#fbbf24"),
            ("500", "#f59e0b"),
            ("600", "#d97706"),
            ("700", "#b45309"),
            ("800", "#92400e"),
            ("900", "#78350f"),
        ],
    ),
    (
        "emerald",
        &[
            ("50", "#ecfdf5"),
            ("100", "#d1fae5"),
            ("200", "#a7f3d0"),
            ("300", "#6ee7b7"),
            ("400", "#34d399"),
            ("500", "#10b981"),
            ("600", "#059669"),
            ("700", "#047857"),
            ("800", "#065f46"),
            ("900", "#064e3b"),
        ],
    ),
    (
        "blue",
        &[
            ("50", "#eff6ff"),
            ("100", "#dbeafe"),
            ("200", "#bfdbfe"),
            ("300", "#93c5fd"),
            ("400", "#60a5fa"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
            ("800", "#1e40af"),
            ("900", "#1e3a8a"),
        ],
    ),
];

/// Default spacing scale: token suffix to CSS length.
pub const DEFAULT_SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("1", "0.25rem"),
    ("2", "0.5rem"),
    ("3", "0.75rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("8", "2rem"),
    ("10", "2.5rem"),
    ("12", "3rem"),
    ("16", "4rem"),
];

/// Total number of default color tokens after flattening.
pub fn default_color_token_count() -> usize {
    DEFAULT_SINGLE_COLORS.len()
        + DEFAULT_COLOR_SCALES
            .iter()
            .map(|(_, shades)| shades.len())
            .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_are_complete() {
        for (name, shades) in DEFAULT_COLOR_SCALES {
            assert_eq!(shades.len(), 10, "scale '{}' should have 10 shades", name);
        }
    }

    #[test]
    fn all_scale_values_are_hex() {
        for (_, shades) in DEFAULT_COLOR_SCALES {
            for (_, value) in *shades {
                assert!(value.starts_with('#'), "non-hex default: {}", value);
            }
        }
    }
}
