//! Cosmetic settings: mark styles, line styles and the computer's delay.
//!
//! Nothing here affects game rules. Settings come from an optional TOML
//! file; missing keys fall back to the defaults below.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How one mark is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkStyle {
    /// Width and height of the drawing.
    pub size: u32,
    /// Stroke colour (`#RRGGBB`).
    pub color: String,
    /// Stroke width.
    pub stroke_width: u32,
    /// Duration of the draw-in animation, in milliseconds.
    pub duration_ms: u64,
}

impl MarkStyle {
    /// Default circle style: blue, drawn in over 800ms.
    pub fn circle() -> Self {
        Self {
            size: 70,
            color: "#00B0EF".to_string(),
            stroke_width: 6,
            duration_ms: 800,
        }
    }

    /// Default cross style: amber, each stroke drawn in over 400ms.
    pub fn cross() -> Self {
        Self {
            size: 70,
            color: "#FFC000".to_string(),
            stroke_width: 6,
            duration_ms: 400,
        }
    }

    /// The animation duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// A `[circle]` or `[cross]` table; absent keys keep that mark's default.
#[derive(Debug, Default, Deserialize)]
struct PartialMarkStyle {
    size: Option<u32>,
    color: Option<String>,
    stroke_width: Option<u32>,
    duration_ms: Option<u64>,
}

impl PartialMarkStyle {
    fn over(self, base: MarkStyle) -> MarkStyle {
        MarkStyle {
            size: self.size.unwrap_or(base.size),
            color: self.color.unwrap_or(base.color),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            duration_ms: self.duration_ms.unwrap_or(base.duration_ms),
        }
    }
}

fn circle_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MarkStyle, D::Error> {
    Ok(PartialMarkStyle::deserialize(deserializer)?.over(MarkStyle::circle()))
}

fn cross_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MarkStyle, D::Error> {
    Ok(PartialMarkStyle::deserialize(deserializer)?.over(MarkStyle::cross()))
}

/// Stroke used for the grid and the winning line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Stroke colour.
    pub color: String,
    /// Stroke width.
    pub stroke_width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "white".to_string(),
            stroke_width: 8,
        }
    }
}

/// A `[grid]` or `[winning_line]` table; absent keys keep that line's default.
#[derive(Debug, Default, Deserialize)]
struct PartialLineStyle {
    color: Option<String>,
    stroke_width: Option<u32>,
}

impl PartialLineStyle {
    fn over(self, base: LineStyle) -> LineStyle {
        LineStyle {
            color: self.color.unwrap_or(base.color),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
        }
    }
}

fn winning_line_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LineStyle, D::Error> {
    Ok(PartialLineStyle::deserialize(deserializer)?.over(LineStyle::default()))
}

fn grid_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LineStyle, D::Error> {
    Ok(PartialLineStyle::deserialize(deserializer)?.over(default_grid()))
}

/// Largest accepted `cell_size` and mark `size`.
pub const MAX_DIMENSION: u32 = 10_000;

/// Longest accepted draw-in animation, in milliseconds.
pub const MAX_DURATION_MS: u64 = 60_000;

/// All user-configurable settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Circle drawing.
    #[serde(deserialize_with = "circle_style")]
    circle: MarkStyle,

    /// Cross drawing.
    #[serde(deserialize_with = "cross_style")]
    cross: MarkStyle,

    /// Line through the winning combo.
    #[serde(deserialize_with = "winning_line_style")]
    winning_line: LineStyle,

    /// Grid lines between cells.
    #[serde(deserialize_with = "grid_style")]
    grid: LineStyle,

    /// Edge length of one cell in the rendered board.
    cell_size: u32,

    /// Pause before the computer replies, in milliseconds.
    computer_delay_ms: u64,
}

fn default_grid() -> LineStyle {
    LineStyle {
        color: "#3C3C3C".to_string(),
        stroke_width: 4,
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle: MarkStyle::circle(),
            cross: MarkStyle::cross(),
            winning_line: LineStyle::default(),
            grid: default_grid(),
            cell_size: 100,
            computer_delay_ms: 500,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 || self.cell_size > MAX_DIMENSION {
            return Err(ConfigError::new(format!(
                "cell_size must be between 1 and {}, got {}",
                MAX_DIMENSION, self.cell_size
            )));
        }
        for (name, style) in [("circle", &self.circle), ("cross", &self.cross)] {
            if style.size > MAX_DIMENSION {
                return Err(ConfigError::new(format!(
                    "{} size {} exceeds {}",
                    name, style.size, MAX_DIMENSION
                )));
            }
            if style.duration_ms > MAX_DURATION_MS {
                return Err(ConfigError::new(format!(
                    "{} duration_ms {} exceeds {}",
                    name, style.duration_ms, MAX_DURATION_MS
                )));
            }
            if u64::from(style.size) <= 2 * u64::from(style.stroke_width) {
                return Err(ConfigError::new(format!(
                    "{} size {} is too small for stroke width {}",
                    name, style.size, style.stroke_width
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
