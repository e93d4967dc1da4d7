//! Configure placement, sizing and dismissal of context menus.
//!
//! Settings can be built in code or, with the `serde` feature, loaded from a
//! RON file:
//!
//! ```ignore
//! use icy_menu_core::Settings;
//!
//! let settings = Settings::load("menu.ron")?;
//! ```
use crate::time::{self, Duration};

use std::path::Path;

/// An error produced while loading or validating [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),
    /// The settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// The settings file has an unsupported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
    /// The root of a menu would close before its children.
    #[error("root close delay ({root} ms) is shorter than the children close delay ({children} ms)")]
    InvalidTiming {
        /// The configured children delay, in milliseconds.
        children: u64,
        /// The configured root delay, in milliseconds.
        root: u64,
    },
    /// A placement or metric value is negative or not finite.
    #[error("invalid value for `{0}`")]
    InvalidValue(&'static str),
}

/// The settings of a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// How menus are placed on screen.
    pub placement: Placement,
    /// How menu sizes are estimated.
    pub metrics: Metrics,
    /// The delays of the close choreography.
    pub timing: Timing,
    /// How each dismissal trigger closes the menu.
    pub dismiss: DismissPolicy,
}

impl Settings {
    /// Checks that the [`Settings`] describe a usable menu.
    pub fn validate(&self) -> Result<(), Error> {
        let Timing {
            close_children_delay_ms,
            close_root_delay_ms,
        } = self.timing;

        if close_root_delay_ms < close_children_delay_ms {
            return Err(Error::InvalidTiming {
                children: close_children_delay_ms,
                root: close_root_delay_ms,
            });
        }

        let values = [
            ("placement.margin", self.placement.margin),
            ("placement.gap", self.placement.gap),
            ("placement.vertical_offset", self.placement.vertical_offset),
            ("metrics.item_height", self.metrics.item_height),
            ("metrics.divider_height", self.metrics.divider_height),
            ("metrics.padding", self.metrics.padding),
            ("metrics.min_width", self.metrics.min_width),
            ("metrics.char_width", self.metrics.char_width),
            ("metrics.horizontal_padding", self.metrics.horizontal_padding),
        ];

        match values
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, _)) => Err(Error::InvalidValue(name)),
            None => Ok(()),
        }
    }

    /// Parses and validates [`Settings`] from a RON string.
    ///
    /// Missing fields take their default value.
    #[cfg(feature = "serde")]
    pub fn from_ron_str(content: &str) -> Result<Self, Error> {
        let settings: Settings =
            ron::from_str(content).map_err(|error| Error::Parse(error.to_string()))?;

        settings.validate().inspect_err(|error| {
            log::warn!("Rejected menu settings: {error}");
        })?;

        Ok(settings)
    }

    /// Loads [`Settings`] from a file path.
    ///
    /// Supports RON format (.ron extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => load_ron(path),
            _ => Err(Error::UnsupportedFormat(extension.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
fn load_ron(path: &Path) -> Result<Settings, Error> {
    let content = std::fs::read_to_string(path)?;

    Settings::from_ron_str(&content)
}

#[cfg(not(feature = "serde"))]
fn load_ron(_path: &Path) -> Result<Settings, Error> {
    Err(Error::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}

/// How menus are placed relative to the pointer and their parent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Placement {
    /// Minimum distance between a menu and the viewport edges.
    pub margin: f32,
    /// Horizontal space between a submenu and its parent menu.
    pub gap: f32,
    /// How far above its anchor item a submenu starts, so the first items line up.
    pub vertical_offset: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            margin: 8.0,
            gap: 4.0,
            vertical_offset: 4.0,
        }
    }
}

/// The metrics used to estimate menu sizes until the host measures them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Metrics {
    /// Height of a regular item.
    pub item_height: f32,
    /// Extra height taken by a divider.
    pub divider_height: f32,
    /// Padding above the first and below the last item.
    pub padding: f32,
    /// Minimum width of a menu.
    pub min_width: f32,
    /// Average width of a label character.
    pub char_width: f32,
    /// Horizontal space around a label.
    pub horizontal_padding: f32,
}

impl Metrics {
    /// Returns the vertical space taken by an item.
    pub fn item_extent(&self, divider: bool) -> f32 {
        if divider {
            self.item_height + self.divider_height
        } else {
            self.item_height
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            item_height: 28.0,
            divider_height: 9.0,
            padding: 4.0,
            min_width: 160.0,
            char_width: 7.0,
            horizontal_padding: 24.0,
        }
    }
}

/// The delays of the close choreography, measured from the close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Timing {
    /// Delay before nested menus start retracting.
    pub close_children_delay_ms: u64,
    /// Delay before the root menu is hidden.
    pub close_root_delay_ms: u64,
}

impl Timing {
    /// Returns the delay before nested menus start retracting.
    pub fn close_children_delay(&self) -> Duration {
        time::milliseconds(self.close_children_delay_ms)
    }

    /// Returns the delay before the root menu is hidden.
    pub fn close_root_delay(&self) -> Duration {
        time::milliseconds(self.close_root_delay_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            close_children_delay_ms: 20,
            close_root_delay_ms: 140,
        }
    }
}

/// How a dismissal trigger closes a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloseMode {
    /// Nested menus retract first, then the root hides.
    #[default]
    Graceful,
    /// Everything hides at once.
    Immediate,
}

/// The [`CloseMode`] used by each dismissal trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DismissPolicy {
    /// A primary press outside every open menu.
    pub outside_click: CloseMode,
    /// The window contents were scrolled.
    pub scroll: CloseMode,
    /// The window lost focus.
    pub blur: CloseMode,
    /// The Escape key was pressed.
    pub escape: CloseMode,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            outside_click: CloseMode::Graceful,
            scroll: CloseMode::Immediate,
            blur: CloseMode::Immediate,
            escape: CloseMode::Immediate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.placement.margin, 8.0);
        assert_eq!(settings.timing.close_children_delay(), time::milliseconds(20));
        assert_eq!(settings.timing.close_root_delay(), time::milliseconds(140));
    }

    #[test]
    fn test_root_delay_shorter_than_children_is_rejected() {
        let settings = Settings {
            timing: Timing {
                close_children_delay_ms: 100,
                close_root_delay_ms: 50,
            },
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidTiming {
                children: 100,
                root: 50
            })
        ));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let settings = Settings {
            placement: Placement {
                margin: -1.0,
                ..Placement::default()
            },
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidValue("placement.margin"))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/definitely/not/here/menu.ron");

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_str_fills_defaults() {
        let settings = Settings::from_ron_str(
            "(timing: (close_children_delay_ms: 10), dismiss: (escape: Graceful))",
        )
        .expect("valid settings");

        assert_eq!(settings.timing.close_children_delay_ms, 10);
        assert_eq!(settings.timing.close_root_delay_ms, 140);
        assert_eq!(settings.dismiss.escape, CloseMode::Graceful);
        assert_eq!(settings.dismiss.scroll, CloseMode::Immediate);
        assert_eq!(settings.placement, Placement::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_str_rejects_invalid_timing() {
        let result = Settings::from_ron_str(
            "(timing: (close_children_delay_ms: 200, close_root_delay_ms: 100))",
        );

        assert!(matches!(result, Err(Error::InvalidTiming { .. })));
    }
}
