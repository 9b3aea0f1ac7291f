//! Engine configuration.

/// Horizontal placement of text that is narrower than the text area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Character size used for measuring and drawing the text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TextSize {
    /// Derived from the text area height.
    #[default]
    Auto,
    /// Fixed size in pixels.
    Fixed(f32),
}

impl TextSize {
    /// Fraction of the text area height used by [`TextSize::Auto`].
    pub const AUTO_HEIGHT_RATIO: f32 = 0.75;

    /// Resolve to a pixel size for a text area of the given height.
    pub fn resolve(self, visible_height: f32) -> f32 {
        match self {
            TextSize::Auto => (visible_height.max(0.0) * Self::AUTO_HEIGHT_RATIO).floor(),
            TextSize::Fixed(px) => px.max(0.0),
        }
    }
}

/// Owner-controlled editing policy.
///
/// All fields are applied through the engine setters so the buffer is
/// re-validated whenever a policy changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditConfig {
    /// Maximum number of characters, `0` for no limit.
    pub max_chars: usize,
    /// Character shown instead of every real character (password mode).
    pub password_char: Option<char>,
    /// Only accept an optional leading sign, digits and one separator.
    pub numbers_only: bool,
    /// Refuse text wider than the text area instead of scrolling it.
    pub limit_text_width: bool,
    pub text_size: TextSize,
    pub alignment: Alignment,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_chars: 0,
            password_char: None,
            numbers_only: false,
            limit_text_width: false,
            text_size: TextSize::Auto,
            alignment: Alignment::Left,
        }
    }
}
