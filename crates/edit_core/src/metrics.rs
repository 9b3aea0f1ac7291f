//! Text measurement capability consumed by the engine.
//!
//! The engine never touches fonts. Integration layers implement
//! [`TextMetrics`] on top of whatever text shaper they render with.

/// Horizontal text measurement.
pub trait TextMetrics {
    /// Rendered width in pixels of the first `count` characters of `text`
    /// at the given character size.
    ///
    /// `count` may equal `text.len()` (full width). Implementations must be
    /// monotone in `count` and return `0.0` for `count == 0`.
    ///
    /// `revision` names the content of `text`: calls with the same revision
    /// always pass the same characters, so implementations may cache
    /// measurements per revision instead of comparing strings.
    fn prefix_width(
        &self,
        text: &[char],
        revision: u64,
        count: usize,
        character_size: f32,
    ) -> f32;
}

impl<F> TextMetrics for F
where
    F: Fn(&[char], usize, f32) -> f32,
{
    #[inline]
    fn prefix_width(
        &self,
        text: &[char],
        _revision: u64,
        count: usize,
        character_size: f32,
    ) -> f32 {
        self(text, count, character_size)
    }
}

/// Fixed-advance metrics: every character is `advance` pixels wide.
///
/// Useful for headless use and tests, where no font is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn prefix_width(
        &self,
        text: &[char],
        _revision: u64,
        count: usize,
        _character_size: f32,
    ) -> f32 {
        count.min(text.len()) as f32 * self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_prefix_is_clamped_to_text() {
        let m = MonospaceMetrics::new(10.0);
        let text: Vec<char> = "hello".chars().collect();
        assert_eq!(m.prefix_width(&text, 1, 0, 16.0), 0.0);
        assert_eq!(m.prefix_width(&text, 1, 3, 16.0), 30.0);
        assert_eq!(m.prefix_width(&text, 1, 99, 16.0), 50.0);
    }

    #[test]
    fn closures_are_metrics() {
        let scaled =
            |text: &[char], count: usize, size: f32| count.min(text.len()) as f32 * size / 2.0;
        let text: Vec<char> = "ab".chars().collect();
        assert_eq!(scaled.prefix_width(&text, 1, 2, 10.0), 10.0);
    }
}
