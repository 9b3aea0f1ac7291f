//! Caret and selection representation.

use std::ops::Range;

/// Anchor/caret pair describing the caret and the highlighted text.
///
/// Both offsets count Unicode scalar values (not bytes). When
/// `anchor == caret` there is no selection and the span is a plain caret.
/// The selected range is always `min(anchor, caret)..max(anchor, caret)`,
/// so the selection direction is implied by which side is smaller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSpan {
    /// The fixed end of the selection (where a drag started).
    pub anchor: usize,
    /// The moving end of the selection, where the caret is drawn.
    pub caret: usize,
}

impl SelectionSpan {
    /// Create a span from an anchor and a caret offset.
    #[inline]
    pub fn new(anchor: usize, caret: usize) -> Self {
        Self { anchor, caret }
    }

    /// A collapsed span: caret at `offset`, nothing selected.
    #[inline]
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            caret: offset,
        }
    }

    /// Lower bound of the selected range.
    #[inline]
    pub fn start(&self) -> usize {
        self.anchor.min(self.caret)
    }

    /// Upper bound (exclusive) of the selected range.
    #[inline]
    pub fn end(&self) -> usize {
        self.anchor.max(self.caret)
    }

    /// Returns `true` if nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    /// Number of selected characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// The selected range as a half-open character range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Clamp both offsets to `[0, len]`.
    #[inline]
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            caret: self.caret.min(len),
        }
    }
}
