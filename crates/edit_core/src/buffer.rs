//! The edit buffer and its displayed copy.

use std::ops::Range;

/// Owned text content plus the copy that is actually shown.
///
/// `text` is the true content. `display` always has the same length and is
/// either identical to `text` or, with a mask character set, consists of
/// that character only. All offsets are character offsets and every mutator
/// is bounds-checked: out-of-range offsets are clamped, never panicked on.
#[derive(Clone, Debug, Default)]
pub(crate) struct TextBuffer {
    text: Vec<char>,
    display: Vec<char>,
    mask: Option<char>,
    /// Incremented on every content change.
    revision: u64,
}

impl TextBuffer {
    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn display(&self) -> &[char] {
        &self.display
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Change the mask character and rebuild the displayed copy.
    pub fn set_mask(&mut self, mask: Option<char>) {
        if self.mask == mask {
            return;
        }
        self.mask = mask;
        self.rebuild_display();
        self.bump();
    }

    /// Replace the whole content.
    pub fn replace(&mut self, text: Vec<char>) {
        self.text = text;
        self.rebuild_display();
        self.bump();
    }

    /// Insert `ch` at `at` (clamped), returning the offset just after it.
    pub fn insert(&mut self, at: usize, ch: char) -> usize {
        let at = at.min(self.text.len());
        self.text.insert(at, ch);
        self.display.insert(at, self.mask.unwrap_or(ch));
        self.bump();
        at + 1
    }

    /// Remove the characters in `range` (clamped), returning its lower bound.
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        if start < end {
            self.text.drain(start..end);
            self.display.drain(start..end);
            self.bump();
        }
        start
    }

    /// Drop everything past `len` characters. Returns `true` if anything was removed.
    pub fn truncate(&mut self, len: usize) -> bool {
        if self.text.len() <= len {
            return false;
        }
        self.text.truncate(len);
        self.display.truncate(len);
        self.bump();
        true
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.text.pop()?;
        self.display.pop();
        self.bump();
        Some(ch)
    }

    pub fn text_string(&self) -> String {
        self.text.iter().collect()
    }

    pub fn display_string(&self) -> String {
        self.display.iter().collect()
    }

    fn rebuild_display(&mut self) {
        self.display = match self.mask {
            Some(mask) => vec![mask; self.text.len()],
            None => self.text.clone(),
        };
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(s: &str) -> TextBuffer {
        let mut b = TextBuffer::default();
        b.replace(s.chars().collect());
        b
    }

    #[test]
    fn insert_and_erase_keep_display_in_step() {
        let mut b = buffer("ac");
        b.set_mask(Some('*'));
        assert_eq!(b.insert(1, 'b'), 2);
        assert_eq!(b.text_string(), "abc");
        assert_eq!(b.display_string(), "***");

        assert_eq!(b.erase(0..2), 0);
        assert_eq!(b.text_string(), "c");
        assert_eq!(b.display_string(), "*");
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let mut b = buffer("ab");
        assert_eq!(b.insert(99, 'c'), 3);
        assert_eq!(b.text_string(), "abc");

        assert_eq!(b.erase(2..99), 2);
        assert_eq!(b.text_string(), "ab");

        assert_eq!(b.erase(5..9), 2);
        assert_eq!(b.text_string(), "ab");
    }

    #[test]
    fn removing_mask_restores_real_text() {
        let mut b = buffer("pw");
        b.set_mask(Some('•'));
        assert_eq!(b.display_string(), "••");
        b.set_mask(None);
        assert_eq!(b.display_string(), "pw");
    }

    #[test]
    fn revision_changes_only_on_mutation() {
        let mut b = buffer("abc");
        let rev = b.revision();
        assert!(!b.truncate(5));
        assert_eq!(b.erase(1..1), 1);
        assert_eq!(b.revision(), rev);

        assert!(b.truncate(1));
        assert_ne!(b.revision(), rev);
    }
}
