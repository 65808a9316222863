//! Color support levels and the built-in colorizing catalog.
//!
//! A colorizing set is an ordered list of wrapper templates, one `{}` slot
//! each; the element layer rotates through them once per render, which is
//! what produces the pulsing/rainbow effect. Which set an element gets is a
//! function of its role and the configured color support level.

use crate::element::ElementKind;

/// Terminal color support level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// No coloring; the identity template passes content through.
    None,
    /// Basic 16-color SGR attributes.
    Color16,
    /// 256-color `38;5;n` foregrounds.
    Color256,
    /// 24-bit color. Declared but not honored yet.
    TrueColor,
}

impl Level {
    /// The explicit allow-list of levels the renderer honors. Requesting an
    /// unsupported level is a construction-time error, never a silent
    /// downgrade.
    pub fn is_supported(self) -> bool {
        matches!(self, Level::None | Level::Color16 | Level::Color256)
    }
}

/// 256-color rainbow cycle used for the glyph element. Codes are doubled so
/// the hue shifts every second frame.
const RAINBOW_256: &[u16] = &[
    196, 196, 202, 202, 208, 208, 214, 214, 220, 220, 226, 226, 190, 190, 154, 154, 118, 118, 82,
    82, 46, 46, 47, 47, 48, 48, 49, 49, 50, 50, 51, 51, 45, 45, 39, 39, 33, 33, 27, 27, 56, 56,
    57, 57, 93, 93, 129, 129, 165, 165, 201, 201, 200, 200, 199, 199, 198, 198, 197, 197,
];

/// 256-color yellow-to-white pulse used for the progress element.
const YELLOW_WHITE_256: &[u16] = &[
    226, 227, 228, 229, 229, 230, 230, 230, 231, 231, 231, 231, 230, 230, 230, 229, 229, 228, 227,
    226,
];

/// Dim (faint) wrapper used for the message element.
const DIM: &str = "\x1b[2m{}\x1b[0m";

/// 16-color light-cyan wrapper, the glyph fallback below 256-color support.
const LIGHT_CYAN: &str = "\x1b[96m{}\x1b[0m";

/// Identity template: pass-through, no coloring.
const IDENTITY: &str = "{}";

fn foreground_256(codes: &[u16]) -> Vec<String> {
    codes
        .iter()
        .map(|code| format!("\x1b[38;5;{code}m{{}}\x1b[0m"))
        .collect()
}

/// The color template set for an element role at a given support level.
///
/// This is the default palette: glyph cycles the rainbow (light cyan under
/// 16-color terminals), the message stays dim, progress pulses yellow-white
/// (dim under 16-color). Always returns at least one template.
pub(crate) fn templates_for(kind: ElementKind, level: Level) -> Vec<String> {
    match (kind, level) {
        (_, Level::None) => vec![IDENTITY.to_string()],
        (ElementKind::Char, Level::Color16) => vec![LIGHT_CYAN.to_string()],
        (ElementKind::Char, _) => foreground_256(RAINBOW_256),
        (ElementKind::Message, _) => vec![DIM.to_string()],
        (ElementKind::Progress, Level::Color16) => vec![DIM.to_string()],
        (ElementKind::Progress, _) => foreground_256(YELLOW_WHITE_256),
    }
}
