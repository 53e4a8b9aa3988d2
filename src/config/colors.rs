//! Color configuration: UI chrome colors and the tag palette.

use std::collections::HashMap;

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Configuration for the UI chrome colors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub active_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub inactive_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_date: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_author: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            metadata_date: Color::Yellow,
            metadata_author: Color::Yellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

/// Presentation colors for tag labels.
///
/// The site keys a fixed table by label; labels not in the table get a
/// deterministic fallback color so unknown tags still render uniformly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagPalette {
    pub labels: HashMap<String, String>,
    pub fallback: String,
}

impl Default for TagPalette {
    fn default() -> Self {
        let labels = [
            ("AI", "#d4877a"),
            ("思考", "#8a7a6b"),
            ("コード", "#6b7a8a"),
            ("3D", "#8a6b7a"),
            ("哲学", "#7a6b8a"),
            ("テクノロジー", "#d4877a"),
            ("社会", "#6b8a7a"),
            ("作品", "#7a8a6b"),
            ("ツール", "#6b8a8a"),
            ("デザイン", "#8a6b6b"),
            ("言語", "#6b6b8a"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            labels,
            fallback: "#9b6b6b".to_string(),
        }
    }
}

impl TagPalette {
    /// Color for a tag label, falling back for unknown labels.
    pub fn color(&self, label: &str) -> Color {
        let hex = self.labels.get(label).map(String::as_str);
        parse_color_string(hex.unwrap_or(&self.fallback))
            .or_else(|_| parse_color_string("#9b6b6b"))
            .unwrap_or(Color::Gray)
    }
}

/// Custom deserializer for Color that supports named colors and hex codes.
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Supports named colors ("Cyan", "DarkGray", ...) and hex colors
/// ("#RRGGBB" or "#RGB").
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

/// Parse a hex color string ("#RRGGBB" or "#RGB") into a ratatui Color.
fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r, g, b))
        }
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[1..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[2..3], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}
