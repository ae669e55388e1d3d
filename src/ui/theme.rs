//! Theme management and ANSI escape sequence generation.
//!
//! Supports built-in themes (Catppuccin variants, embedded at compile time)
//! and custom themes loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! active_tab_fg = "#1e1e2e"
//! active_tab_bg = "#cba6f7"
//! tone_pending = "#f9e2af"
//! tone_approved = "#a6e3a1"
//! tone_rejected = "#f38ba8"
//! disabled_fg = "#585b70"
//! ```
//!
//! # Example
//!
//! ```rust
//! use stockroom::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::app::rows::Tone;
use crate::domain::error::{Result, StockroomError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Tab of the table on screen.
    pub active_tab_fg: String,
    pub active_tab_bg: String,

    /// Status cells awaiting a decision, items in fair condition.
    pub tone_pending: String,
    /// Approved requests, items in new or good condition.
    pub tone_approved: String,
    /// Rejected requests, damaged or disposed items, load failures.
    pub tone_rejected: String,

    /// Pagination controls that would not move.
    pub disabled_fg: String,
}

impl ThemeColors {
    /// Foreground for a toned cell; `None` for neutral cells.
    #[must_use]
    pub fn tone(&self, tone: Tone) -> Option<&str> {
        match tone {
            Tone::Neutral => None,
            Tone::Pending => Some(&self.tone_pending),
            Tone::Approved => Some(&self.tone_approved),
            Tone::Rejected => Some(&self.tone_rejected),
        }
    }
}

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Theme`] if the file cannot be read or the TOML
    /// is invalid or missing colors.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| StockroomError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| StockroomError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
