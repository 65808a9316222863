//! The built-in animation catalog.
//!
//! Each variant names one animation cycle: an ordered set of equal-width
//! frames plus a recommended refresh interval. The catalog is an immutable
//! registry built once on first use; every set is width-checked at that
//! point because a set with inconsistent widths breaks the erase/redraw
//! arithmetic downstream.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Result, bail};

use crate::ansi::display_width;

/// Maximum number of frames a set may carry. A defensive bound against
/// pathological configuration, matching the catalog's own largest set with
/// headroom.
pub const MAX_FRAMES: usize = 60;

const CLOCK_ONE_OCLOCK: u32 = 0x1F550;
const CLOCK_ONE_THIRTY: u32 = 0x1F55C;

/// Built-in spinner variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Arrows01,
    Arrows02,
    Arrows03,
    Arrows04,
    Blink,
    BlockHorizontal,
    BlockVertical,
    BouncingBlock,
    Clock,
    Dev,
    Dev2,
    Dots10,
    Dots13,
    Dots14,
    Dots21,
    Dots22,
    Dots23,
    Dots24,
    Dots25,
    Dots26,
    FlyingDots,
    FlyingLine,
    HalfClock,
    HalfClock2,
    Line,
    RotatingCircle,
    Snake,
    Snake2,
    Toggle,
}

impl Variant {
    /// Every variant, in catalog order.
    pub fn all() -> &'static [Variant] {
        use Variant::*;
        &[
            Arrows01,
            Arrows02,
            Arrows03,
            Arrows04,
            Blink,
            BlockHorizontal,
            BlockVertical,
            BouncingBlock,
            Clock,
            Dev,
            Dev2,
            Dots10,
            Dots13,
            Dots14,
            Dots21,
            Dots22,
            Dots23,
            Dots24,
            Dots25,
            Dots26,
            FlyingDots,
            FlyingLine,
            HalfClock,
            HalfClock2,
            Line,
            RotatingCircle,
            Snake,
            Snake2,
            Toggle,
        ]
    }

    /// The variant's catalog name (kebab-case, as accepted by [`FromStr`]).
    pub fn name(self) -> &'static str {
        match self {
            Variant::Arrows01 => "arrows01",
            Variant::Arrows02 => "arrows02",
            Variant::Arrows03 => "arrows03",
            Variant::Arrows04 => "arrows04",
            Variant::Blink => "blink",
            Variant::BlockHorizontal => "block-horizontal",
            Variant::BlockVertical => "block-vertical",
            Variant::BouncingBlock => "bouncing-block",
            Variant::Clock => "clock",
            Variant::Dev => "dev",
            Variant::Dev2 => "dev2",
            Variant::Dots10 => "dots10",
            Variant::Dots13 => "dots13",
            Variant::Dots14 => "dots14",
            Variant::Dots21 => "dots21",
            Variant::Dots22 => "dots22",
            Variant::Dots23 => "dots23",
            Variant::Dots24 => "dots24",
            Variant::Dots25 => "dots25",
            Variant::Dots26 => "dots26",
            Variant::FlyingDots => "flying-dots",
            Variant::FlyingLine => "flying-line",
            Variant::HalfClock => "half-clock",
            Variant::HalfClock2 => "half-clock2",
            Variant::Line => "line",
            Variant::RotatingCircle => "rotating-circle",
            Variant::Snake => "snake",
            Variant::Snake2 => "snake2",
            Variant::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        for v in Variant::all() {
            if v.name() == s {
                return Ok(*v);
            }
        }
        bail!("unknown spinner variant: {s:?}");
    }
}

/// One animation cycle: refresh cadence plus equal-width frames.
#[derive(Debug, Clone)]
pub struct CharSet {
    /// Recommended interval between refreshes.
    pub interval: Duration,
    /// Ordered frames; every frame has the same display width.
    pub frames: Vec<String>,
}

/// Validate a frame set: bounded cardinality, uniform display width.
pub fn check_frames(frames: &[String]) -> Result<()> {
    if frames.len() > MAX_FRAMES {
        bail!(
            "frame set is too big: {} frames, max {MAX_FRAMES}",
            frames.len()
        );
    }
    if let Some(first) = frames.first() {
        let expected = display_width(first);
        for frame in frames {
            let width = display_width(frame);
            if width != expected {
                bail!(
                    "ambiguous frame widths: {frame:?} is {width} columns, expected {expected}"
                );
            }
        }
    }
    Ok(())
}

/// The built-in catalog. Built once, immutable, width-checked on first use;
/// a failure here means the static tables themselves are broken.
pub fn catalog() -> &'static HashMap<Variant, CharSet> {
    static CATALOG: OnceLock<HashMap<Variant, CharSet>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut sets = HashMap::new();
        let mut insert = |variant: Variant, ms: u64, frames: &[&str]| {
            sets.insert(
                variant,
                CharSet {
                    interval: Duration::from_millis(ms),
                    frames: frames.iter().map(|s| s.to_string()).collect(),
                },
            );
        };

        insert(Variant::Arrows01, 120, &["←", "↑", "→", "↓"]);
        insert(Variant::Arrows02, 120, &["↖", "↗", "↘", "↙"]);
        insert(
            Variant::Arrows03,
            120,
            &["⇐", "⇖", "⇑", "⇗", "⇒", "⇘", "⇓", "⇙"],
        );
        insert(
            Variant::Arrows04,
            120,
            &["▹▹▹▹▹", "▸▹▹▹▹", "▹▸▹▹▹", "▹▹▸▹▹", "▹▹▹▸▹", "▹▹▹▹▸"],
        );
        insert(Variant::Blink, 200, &["▓", "▒", "░"]);
        insert(
            Variant::BlockHorizontal,
            120,
            &["▉", "▊", "▋", "▌", "▍", "▎", "▏", "▎", "▍", "▌", "▋", "▊", "▉"],
        );
        insert(
            Variant::BlockVertical,
            120,
            &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▁"],
        );
        insert(Variant::BouncingBlock, 120, &["▖", "▘", "▝", "▗"]);
        // Single character, development aid.
        insert(Variant::Dev, 400, &["+"]);
        insert(
            Variant::Dev2,
            250,
            &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
        );
        insert(Variant::Dots10, 120, &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"]);
        insert(
            Variant::Dots13,
            120,
            &["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"],
        );
        insert(
            Variant::Dots14,
            120,
            &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        );
        insert(
            Variant::Dots21,
            120,
            &[
                "⠁", "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠠",
                "⠠", "⠤", "⠦", "⠖", "⠒", "⠐", "⠐", "⠒", "⠓", "⠋", "⠉", "⠈", "⠈",
            ],
        );
        insert(
            Variant::Dots22,
            120,
            &[
                "⠈", "⠉", "⠋", "⠓", "⠒", "⠐", "⠐", "⠒", "⠖", "⠦", "⠤", "⠠", "⠠", "⠤", "⠦", "⠖",
                "⠒", "⠐", "⠐", "⠒", "⠓", "⠋", "⠉", "⠈",
            ],
        );
        insert(
            Variant::Dots23,
            120,
            &[
                "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠴", "⠲",
                "⠒", "⠂", "⠂", "⠒", "⠚", "⠙", "⠉", "⠁",
            ],
        );
        insert(Variant::Dots24, 120, &[".  ", ".. ", "...", " ..", "  .", "   "]);
        insert(
            Variant::Dots25,
            120,
            &[
                "⠋", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠦", "⠖", "⠒", "⠐", "⠐", "⠒", "⠓",
                "⠋",
            ],
        );
        insert(
            Variant::Dots26,
            120,
            &["⢹", "⢺", "⢼", "⣸", "⣇", "⡧", "⡗", "⡏"],
        );
        insert(
            Variant::FlyingDots,
            120,
            &[
                "⢀⠀", "⡀⠀", "⠄⠀", "⢂⠀", "⡂⠀", "⠅⠀", "⢃⠀", "⡃⠀", "⠍⠀", "⢋⠀", "⡋⠀", "⠍⠁", "⢋⠁",
                "⡋⠁", "⠍⠉", "⠋⠉", "⠋⠉", "⠉⠙", "⠉⠙", "⠉⠩", "⠈⢙", "⠈⡙", "⢈⠩", "⡀⢙", "⠄⡙", "⢂⠩",
                "⡂⢘", "⠅⡘", "⢃⠨", "⡃⢐", "⠍⡐", "⢋⠠", "⡋⢀", "⠍⡁", "⢋⠁", "⡋⠁", "⠍⠉", "⠋⠉", "⠋⠉",
                "⠉⠙", "⠉⠙", "⠉⠩", "⠈⢙", "⠈⡙", "⠈⠩", "⠀⢙", "⠀⡙", "⠀⠩", "⠀⢘", "⠀⡘", "⠀⠨", "⠀⢐",
                "⠀⡐", "⠀⠠", "⠀⢀", "⠀⡀",
            ],
        );
        insert(
            Variant::FlyingLine,
            120,
            &["|   ", " |  ", "  | ", "   |", "   |", "  | ", " |  ", "|   "],
        );
        insert(Variant::Line, 120, &["|", "\\", "─", "/"]);
        insert(Variant::RotatingCircle, 120, &["◐", "◓", "◑", "◒"]);
        insert(
            Variant::Snake,
            150,
            &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
        );
        insert(
            Variant::Snake2,
            120,
            &["⠏", "⠛", "⠹", "⢸", "⣰", "⣤", "⣆", "⡇"],
        );
        insert(Variant::Toggle, 250, &["■", "□"]);

        // Clock faces are generated: twelve full hours, optionally
        // interleaved or followed by the half-past faces.
        let hours: Vec<String> = (0..12)
            .map(|i| char::from_u32(CLOCK_ONE_OCLOCK + i).unwrap().to_string())
            .collect();
        let halves: Vec<String> = (0..12)
            .map(|i| char::from_u32(CLOCK_ONE_THIRTY + i).unwrap().to_string())
            .collect();

        let half_clock: Vec<String> = hours
            .iter()
            .zip(&halves)
            .flat_map(|(h, half)| [h.clone(), half.clone()])
            .collect();
        let half_clock2: Vec<String> = hours.iter().chain(&halves).cloned().collect();

        sets.insert(
            Variant::Clock,
            CharSet {
                interval: Duration::from_millis(150),
                frames: hours,
            },
        );
        sets.insert(
            Variant::HalfClock,
            CharSet {
                interval: Duration::from_millis(300),
                frames: half_clock,
            },
        );
        sets.insert(
            Variant::HalfClock2,
            CharSet {
                interval: Duration::from_millis(150),
                frames: half_clock2,
            },
        );

        for (variant, set) in &sets {
            check_frames(&set.frames)
                .unwrap_or_else(|e| panic!("built-in charset {variant} is broken: {e}"));
        }
        sets
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_variant() {
        let sets = catalog();
        for v in Variant::all() {
            assert!(sets.contains_key(v), "missing catalog entry for {v}");
        }
        assert_eq!(sets.len(), Variant::all().len());
    }

    #[test]
    fn every_set_has_uniform_width_and_bounded_size() {
        for (variant, set) in catalog() {
            assert!(!set.frames.is_empty(), "{variant} has no frames");
            assert!(set.frames.len() <= MAX_FRAMES);
            check_frames(&set.frames).unwrap();
        }
    }

    #[test]
    fn every_interval_is_within_engine_bounds() {
        for set in catalog().values() {
            assert!(set.interval >= Duration::from_millis(20));
            assert!(set.interval <= Duration::from_secs(5));
        }
    }

    #[test]
    fn clock_sets_have_expected_cardinality() {
        let sets = catalog();
        assert_eq!(sets[&Variant::Clock].frames.len(), 12);
        assert_eq!(sets[&Variant::HalfClock].frames.len(), 24);
        assert_eq!(sets[&Variant::HalfClock2].frames.len(), 24);
        assert_eq!(sets[&Variant::Clock].frames[0], "🕐");
        assert_eq!(sets[&Variant::HalfClock].frames[1], "🕜");
    }

    #[test]
    fn check_frames_accepts_empty_and_uniform_sets() {
        check_frames(&[]).unwrap();
        let digits: Vec<String> = (0..10).map(|d| d.to_string()).collect();
        check_frames(&digits).unwrap();
    }

    #[test]
    fn check_frames_rejects_ambiguous_widths() {
        let bad = vec!["0".to_string(), "  ".to_string(), "0".to_string()];
        assert!(check_frames(&bad).is_err());
    }

    #[test]
    fn check_frames_rejects_oversized_sets() {
        let big = vec!["-".to_string(); MAX_FRAMES + 5];
        let err = check_frames(&big).unwrap_err();
        assert!(err.to_string().contains("too big"));
    }

    #[test]
    fn variant_names_round_trip() {
        for v in Variant::all() {
            assert_eq!(v.name().parse::<Variant>().unwrap(), *v);
        }
        assert!("definitely-not-a-variant".parse::<Variant>().is_err());
    }
}
