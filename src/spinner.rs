//! The frame-assembly and redraw engine.
//!
//! A [`Spinner`] owns three display elements (glyph, message, progress), an
//! explicit display order, and the width bookkeeping that makes in-place
//! redraws artifact-free: every frame ends with an erase sequence sized to
//! the width lost since the previous frame, then a cursor-back sequence
//! sized to the current width, so the next frame overwrites cleanly.
//!
//! Call [`Spinner::start`] to begin animating on a background task, then
//! [`Spinner::stop`] when done. [`Spinner::message`] and
//! [`Spinner::progress`] update the line from any thread while it spins.
//! The spinner writes to stderr by default so it doesn't interfere with
//! stdout output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::ansi::truncate;
use crate::charsets::catalog;
use crate::color::templates_for;
use crate::config::Config;
use crate::element::{Element, ElementKind, ElementSettings};

/// Hide the terminal cursor.
const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the terminal cursor.
const SHOW_CURSOR: &str = "\x1b[?25h";

/// ANSI erase-characters sequence for `width` columns; empty for
/// non-positive widths.
fn erase_sequence(width: isize) -> String {
    if width < 1 {
        String::new()
    } else {
        format!("\x1b[{width}X")
    }
}

/// ANSI move-cursor-back sequence for `width` columns; empty for
/// non-positive widths.
fn move_back_sequence(width: isize) -> String {
    if width < 1 {
        String::new()
    } else {
        format!("\x1b[{width}D")
    }
}

/// Everything mutable, guarded by the one engine lock.
struct Inner {
    char: Element,
    message: Element,
    progress: Element,
    order: [ElementKind; 3],
    active: bool,
    /// Set once by `stop()`; a stopped spinner cannot be restarted.
    stopped: bool,
    current_frame: String,
    current_width: usize,
    previous_width: usize,
    prefix: String,
    prefix_width: usize,
    final_message: String,
    hide_cursor: bool,
    max_message_width: usize,
    message_ellipsis: String,
    progress_precision: usize,
    out: Box<dyn Write + Send + Sync>,
}

impl Inner {
    fn element_mut(&mut self, kind: ElementKind) -> &mut Element {
        match kind {
            ElementKind::Char => &mut self.char,
            ElementKind::Message => &mut self.message,
            ElementKind::Progress => &mut self.progress,
        }
    }

    /// One animation step: advance the glyph, rebuild the frame, write it.
    fn tick(&mut self) {
        self.char.advance();
        self.assemble();
        let frame = self.current_frame.clone();
        self.write(&frame);
    }

    /// Rebuild `current_frame` from the elements in display order, with the
    /// trailing erase + cursor-back sequences. The previous width is saved
    /// before the current one is overwritten — the erase arithmetic depends
    /// on that ordering.
    fn assemble(&mut self) {
        self.previous_width = self.current_width;
        let mut line = self.prefix.clone();
        for kind in self.order {
            let piece = self.element_mut(kind).colorized();
            line.push_str(&piece);
        }
        self.current_width =
            self.prefix_width + self.char.width() + self.message.width() + self.progress.width();
        line.push_str(&erase_sequence(
            self.previous_width as isize - self.current_width as isize,
        ));
        line.push_str(&move_back_sequence(self.current_width as isize));
        self.current_frame = line;
    }

    /// Write the erase sequence for the currently visible frame.
    fn erase(&mut self) {
        if self.active {
            let sequence = erase_sequence(self.current_width as isize);
            self.write(&sequence);
        }
    }

    fn write(&mut self, s: &str) {
        let _ = self.out.write_all(s.as_bytes());
        let _ = self.out.flush();
    }
}

/// An animated terminal spinner.
pub struct Spinner {
    inner: Arc<RwLock<Inner>>,
    interval: Duration,
    cancel: tokio::sync::watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl Spinner {
    /// Build a spinner writing to stderr. Fails on any invalid setting;
    /// no partially-configured spinner is ever returned.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_writer(config, Box::new(io::stderr()))
    }

    /// Build a spinner writing to the given stream instead of stderr.
    pub fn with_writer(config: Config, out: Box<dyn Write + Send + Sync>) -> Result<Self> {
        config.validate()?;

        let set = catalog()
            .get(&config.variant)
            .expect("catalog covers every variant");
        let frames = config.frames.clone().unwrap_or_else(|| set.frames.clone());
        let interval = config.interval.unwrap_or(set.interval);

        let char = Element::new(ElementSettings {
            format: config.char_format.clone(),
            spacer: " ".to_string(),
            frames: Some(frames),
            reversed: config.reversed,
            color_templates: templates_for(ElementKind::Char, config.color_level),
        });
        let message = Element::new(ElementSettings {
            format: config.message_format.clone(),
            spacer: " ".to_string(),
            frames: None,
            reversed: false,
            color_templates: templates_for(ElementKind::Message, config.color_level),
        });
        let progress = Element::new(ElementSettings {
            format: config.progress_format.clone(),
            spacer: " ".to_string(),
            frames: None,
            reversed: false,
            color_templates: templates_for(ElementKind::Progress, config.color_level),
        });

        let prefix_width = crate::ansi::display_width(&config.prefix);
        let (cancel, _) = tokio::sync::watch::channel(false);

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner {
                char,
                message,
                progress,
                order: config.order,
                active: false,
                stopped: false,
                current_frame: String::new(),
                current_width: 0,
                previous_width: 0,
                prefix: config.prefix,
                prefix_width,
                final_message: config.final_message,
                hide_cursor: config.hide_cursor,
                max_message_width: config.max_message_width,
                message_ellipsis: config.message_ellipsis,
                progress_precision: config.progress_precision,
                out,
            })),
            interval,
            cancel,
            handle: Mutex::new(None),
        })
    }

    /// Whether the background loop is currently running.
    pub fn active(&self) -> bool {
        self.inner.read().unwrap().active
    }

    /// Begin animating on a background task. No-op when already active or
    /// already stopped (a stopped spinner cannot be restarted).
    pub fn start(&self) {
        {
            let mut inner = self.inner.write().unwrap();
            if inner.active || inner.stopped {
                return;
            }
            if inner.hide_cursor {
                inner.write(HIDE_CURSOR);
            }
            inner.active = true;
        }

        let inner = Arc::clone(&self.inner);
        let mut cancel = self.cancel.subscribe();
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            let first = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(first, interval);
            loop {
                tokio::select! {
                    _ = cancel.changed() => break,
                    _ = ticker.tick() => {
                        let mut inner = inner.write().unwrap();
                        // a tick that raced stop() must not render over the
                        // final message
                        if !inner.active {
                            break;
                        }
                        inner.tick();
                    }
                }
            }
        });
        *self.handle.lock().unwrap() = Some(handle);
    }

    /// Stop animating: erase the visible frame, write the final message if
    /// configured, restore the cursor, and wait for the background task to
    /// finish. No-op when already inactive.
    pub async fn stop(&self) {
        {
            let mut inner = self.inner.write().unwrap();
            if !inner.active {
                return;
            }
            inner.erase();
            inner.active = false;
            inner.stopped = true;
            let _ = self.cancel.send(true);
            if !inner.final_message.is_empty() {
                let message = inner.final_message.clone();
                inner.write(&message);
            }
            if inner.hide_cursor {
                inner.write(SHOW_CURSOR);
            }
        }
        let handle = self.handle.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Set the side message. Over-long messages are truncated to the
    /// configured maximum display width with the ellipsis appended; an
    /// empty string clears the message entirely.
    pub fn message(&self, text: &str) {
        let mut inner = self.inner.write().unwrap();
        let text = truncate(text, inner.max_message_width, &inner.message_ellipsis);
        inner.message.set_current(&text);
    }

    /// Set the progress fraction, clamped to `[0, 1]`. Values at or below
    /// zero hide the indicator; anything else renders as a percentage.
    pub fn progress(&self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        let mut inner = self.inner.write().unwrap();
        let rendered = if fraction > 0.0 {
            format!(
                "{:.prec$}%",
                fraction * 100.0,
                prec = inner.progress_precision
            )
        } else {
            String::new()
        };
        inner.progress.set_current(&rendered);
    }

    /// Erase the spinner's current visual output without stopping it, so a
    /// caller can print a line of its own. Idempotent; no-op when inactive.
    pub fn erase(&self) {
        self.inner.write().unwrap().erase();
    }

    /// Re-emit the last assembled frame, restoring the spinner after a
    /// caller's own write. Does not recompute anything.
    pub fn current(&self) {
        let mut inner = self.inner.write().unwrap();
        let frame = inner.current_frame.clone();
        inner.write(&frame);
    }
}
