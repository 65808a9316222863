//! A colorful terminal spinner, animated in place.
//!
//! The spinner line is composed from three independently-updating elements
//! — a rotating glyph, an optional message, an optional percentage — and
//! redrawn over itself with ANSI erase/cursor-back sequences sized from the
//! exact display-width delta between frames, so variable-width Unicode
//! content never leaves artifacts behind.
//!
//! ```no_run
//! use whirl::{Config, Spinner, Variant};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let spinner = Spinner::new(Config {
//!     variant: Variant::Snake2,
//!     final_message: "Done!\n".to_string(),
//!     ..Config::default()
//! })?;
//!
//! spinner.start();
//! spinner.message("gathering data");
//! spinner.progress(0.4);
//! // ... do the work ...
//! spinner.stop().await;
//! # Ok(())
//! # }
//! ```

mod ansi;
mod charsets;
mod color;
mod config;
mod element;
mod rotator;
mod spinner;

pub use ansi::{display_width, replace_escapes, strip_ansi, truncate};
pub use charsets::{CharSet, MAX_FRAMES, Variant, catalog, check_frames};
pub use color::Level;
pub use config::{Config, MAX_ELLIPSIS_WIDTH, MAX_INTERVAL, MAX_PREFIX_WIDTH, MIN_INTERVAL};
pub use element::ElementKind;
pub use spinner::Spinner;
