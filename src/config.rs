//! Spinner configuration.
//!
//! One plain struct with named fields and sensible defaults; override what
//! you need, then hand it to [`Spinner::new`](crate::Spinner::new), which
//! validates everything in a single pass. No setting is ever corrected
//! silently — a bad value fails construction with a descriptive error.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::ansi::display_width;
use crate::charsets::{Variant, check_frames};
use crate::color::Level;
use crate::element::{ElementKind, PLACEHOLDER};

/// Widest prefix the engine accepts, in display columns.
pub const MAX_PREFIX_WIDTH: usize = 10;
/// Widest truncation ellipsis the engine accepts, in display columns.
pub const MAX_ELLIPSIS_WIDTH: usize = 3;
/// Fastest allowed refresh cadence.
pub const MIN_INTERVAL: Duration = Duration::from_millis(20);
/// Slowest allowed refresh cadence.
pub const MAX_INTERVAL: Duration = Duration::from_secs(5);

/// All spinner settings. `Config::default()` gives a working spinner;
/// every field can be overridden independently.
#[derive(Debug, Clone)]
pub struct Config {
    /// Terminal color support level. Must be on the supported allow-list.
    pub color_level: Level,
    /// Display order of the three elements; must be a permutation of
    /// `{Char, Message, Progress}`.
    pub order: [ElementKind; 3],
    /// Which built-in animation to use.
    pub variant: Variant,
    /// Explicit frame override; replaces the variant's frames when set.
    pub frames: Option<Vec<String>>,
    /// Refresh interval; defaults to the variant's recommended cadence.
    pub interval: Option<Duration>,
    /// Format template for the glyph, one `{}` slot.
    pub char_format: String,
    /// Format template for the message, one `{}` slot.
    pub message_format: String,
    /// Format template for the progress indicator, one `{}` slot.
    pub progress_format: String,
    /// Decimal places of the rendered percentage.
    pub progress_precision: usize,
    /// Static prefix written before the animated part of the line.
    pub prefix: String,
    /// Play the frame cycle backwards.
    pub reversed: bool,
    /// Written once after the spinner stops; empty writes nothing.
    pub final_message: String,
    /// Hide the cursor while active, restore it on stop.
    pub hide_cursor: bool,
    /// Maximum message display width; 0 disables truncation.
    pub max_message_width: usize,
    /// Marker appended to truncated messages.
    pub message_ellipsis: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_level: Level::Color256,
            order: [ElementKind::Char, ElementKind::Progress, ElementKind::Message],
            variant: Variant::Snake2,
            frames: None,
            interval: None,
            char_format: PLACEHOLDER.to_string(),
            message_format: PLACEHOLDER.to_string(),
            progress_format: PLACEHOLDER.to_string(),
            progress_precision: 0,
            prefix: String::new(),
            reversed: false,
            final_message: String::new(),
            hide_cursor: true,
            max_message_width: 80,
            message_ellipsis: "…".to_string(),
        }
    }
}

impl Config {
    /// Validate every field in one pass. Called by the constructor; public
    /// so callers can pre-flight settings they assemble from user input.
    pub fn validate(&self) -> Result<()> {
        if !self.color_level.is_supported() {
            bail!("color level {:?} is not supported", self.color_level);
        }

        let [a, b, c] = self.order;
        if a == b || a == c || b == c {
            bail!(
                "display order must be a permutation of the three elements, given: {:?}",
                self.order
            );
        }

        if let Some(frames) = &self.frames {
            check_frames(frames)?;
        }

        if let Some(interval) = self.interval {
            if interval < MIN_INTERVAL {
                bail!("interval {interval:?} is too small, min {MIN_INTERVAL:?}");
            }
            if interval > MAX_INTERVAL {
                bail!("interval {interval:?} is too big, max {MAX_INTERVAL:?}");
            }
        }

        for (name, template) in [
            ("char_format", &self.char_format),
            ("message_format", &self.message_format),
            ("progress_format", &self.progress_format),
        ] {
            if template.matches(PLACEHOLDER).count() != 1 {
                bail!("{name} must contain exactly one {PLACEHOLDER} slot, given: {template:?}");
            }
        }

        let prefix_width = display_width(&self.prefix);
        if prefix_width > MAX_PREFIX_WIDTH {
            bail!("prefix is too wide: {prefix_width} columns, max {MAX_PREFIX_WIDTH}");
        }

        let ellipsis_width = display_width(&self.message_ellipsis);
        if ellipsis_width > MAX_ELLIPSIS_WIDTH {
            bail!(
                "message ellipsis is too wide: {ellipsis_width} columns, max {MAX_ELLIPSIS_WIDTH}"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn rejects_unsupported_color_level() {
        let config = Config {
            color_level: Level::TrueColor,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn rejects_duplicate_order_entries() {
        let config = Config {
            order: [ElementKind::Char, ElementKind::Char, ElementKind::Message],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_any_true_permutation() {
        use ElementKind::*;
        for order in [
            [Char, Message, Progress],
            [Char, Progress, Message],
            [Message, Char, Progress],
            [Message, Progress, Char],
            [Progress, Char, Message],
            [Progress, Message, Char],
        ] {
            Config { order, ..Config::default() }.validate().unwrap();
        }
    }

    #[test]
    fn rejects_out_of_bounds_intervals() {
        for bad in [Duration::from_millis(10), Duration::from_secs(10)] {
            let config = Config {
                interval: Some(bad),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted {bad:?}");
        }
        let config = Config {
            interval: Some(Duration::from_millis(20)),
            ..Config::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn rejects_over_wide_prefix() {
        let config = Config {
            prefix: "12345678901".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        // escapes in the prefix are invisible and do not count
        let config = Config {
            prefix: "\x1b[38;5;161m>>\x1b[0m".to_string(),
            ..Config::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn rejects_over_wide_ellipsis() {
        let config = Config {
            message_ellipsis: "....".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_frame_override() {
        let ambiguous = Config {
            frames: Some(vec!["0".into(), "  ".into()]),
            ..Config::default()
        };
        assert!(ambiguous.validate().is_err());

        let oversized = Config {
            frames: Some(vec!["-".to_string(); 70]),
            ..Config::default()
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn rejects_templates_without_a_single_slot() {
        for (field, value) in [
            ("char", "no slot"),
            ("message", "{} and {}"),
            ("progress", ""),
        ] {
            let mut config = Config::default();
            match field {
                "char" => config.char_format = value.to_string(),
                "message" => config.message_format = value.to_string(),
                _ => config.progress_format = value.to_string(),
            }
            assert!(config.validate().is_err(), "accepted {field} = {value:?}");
        }
    }
}
