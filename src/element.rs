//! Display elements: the engine's units of independently-updatable content.
//!
//! Three instances exist per spinner — the rotating glyph, the message, and
//! the progress percentage. Each couples its content with a format template,
//! a spacer, and a rotating set of color templates, and caches the display
//! width of its colorless rendering for the redraw arithmetic.

use crate::ansi::display_width;
use crate::rotator::Rotator;

/// The placeholder every format and color template must contain exactly once.
pub(crate) const PLACEHOLDER: &str = "{}";

/// Substitute `value` into the single `{}` slot of `template`.
pub(crate) fn fill(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

/// Identifies one of the three spinner elements, used for display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The rotating glyph.
    Char,
    /// The caller-supplied side message.
    Message,
    /// The percentage indicator.
    Progress,
}

/// Everything needed to build one element.
pub(crate) struct ElementSettings {
    pub format: String,
    pub spacer: String,
    /// Frame cycle for glyph-driven elements; `None` for message/progress.
    pub frames: Option<Vec<String>>,
    pub reversed: bool,
    /// Raw color templates (one `{}` each); composed with format + spacer.
    pub color_templates: Vec<String>,
}

/// One independently-updating slice of the rendered line.
pub(crate) struct Element {
    format: String,
    spacer: String,
    current: String,
    width: usize,
    frames: Option<Rotator>,
    colors: Rotator,
    reversed: bool,
}

impl Element {
    pub(crate) fn new(settings: ElementSettings) -> Self {
        // Pre-compose each color template with the element's own format and
        // spacer, leaving the inner slot for the content at render time.
        let wrapper = format!("{}{}", settings.format, settings.spacer);
        let mut composed: Vec<String> = settings
            .color_templates
            .iter()
            .map(|t| fill(t, &wrapper))
            .collect();
        if composed.is_empty() {
            composed.push(wrapper);
        }

        let mut el = Self {
            format: settings.format,
            spacer: settings.spacer,
            current: String::new(),
            width: 0,
            frames: settings.frames.map(Rotator::new),
            colors: Rotator::new(composed),
            reversed: settings.reversed,
        };
        if let Some(frames) = &el.frames
            && !frames.is_empty()
        {
            let first = frames.current().to_string();
            el.set_current(&first);
        }
        el
    }

    /// Cached display width of the colorless `format(current) + spacer`
    /// rendering. Zero for empty content.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Set raw content and recompute the width cache.
    pub(crate) fn set_current(&mut self, value: &str) {
        self.current = value.to_string();
        self.width = if value.is_empty() {
            0
        } else {
            display_width(&format!("{}{}", fill(&self.format, value), self.spacer))
        };
    }

    /// Pull the next (or previous, when reversed) frame from the frame
    /// cycle. No-op for elements without frames.
    pub(crate) fn advance(&mut self) {
        let Some(frames) = &mut self.frames else {
            return;
        };
        if frames.is_empty() {
            return;
        }
        let frame = if self.reversed {
            frames.prev()
        } else {
            frames.next()
        }
        .to_string();
        self.set_current(&frame);
    }

    /// The colorized rendering of the current content.
    ///
    /// Empty content contributes nothing, including no color escapes.
    /// Every other call rotates the color cycle by one step, so coloring
    /// is driven by render frequency rather than content changes.
    pub(crate) fn colorized(&mut self) -> String {
        if self.current.is_empty() {
            return String::new();
        }
        let template = self.colors.next().to_string();
        fill(&template, &self.current)
    }
}

#[cfg(test)]
impl Element {
    /// Raw current content, for assertions. Empty means the element
    /// renders nothing.
    pub(crate) fn current(&self) -> &str {
        &self.current
    }
}
