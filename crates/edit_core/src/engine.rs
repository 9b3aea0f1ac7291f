//! The single-line edit engine.
//!
//! [`TextInputEngine`] owns the text buffer, the caret/selection, the
//! horizontal scroll offset and the editing policy. It does not render: the
//! owner reads [`TextInputEngine::layout`] every frame and draws from it.
//!
//! Offsets are character offsets (Unicode scalar values). Out-of-range
//! offsets are clamped. Policy rejections (numeric filter, maximum length,
//! width limit) are silent no-ops reported through `bool` return values.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::blink::CaretBlink;
use crate::buffer::TextBuffer;
use crate::clipboard::Clipboard;
use crate::config::{Alignment, EditConfig, TextSize};
use crate::event::EditEvent;
use crate::metrics::TextMetrics;
use crate::selection::SelectionSpan;
use crate::text::{filter_numeric, numeric_accepts};

/// Displayed text split around the selection, rebuilt only when the
/// selected range or the buffer changes.
///
/// Without a selection `start` is the text length, so everything is `before`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Segments {
    pub start: usize,
    pub len: usize,
    /// Buffer revision the strings were cut from.
    pub text_rev: u64,
    pub before: String,
    pub selected: String,
    pub after: String,
}

/// Editing state machine behind an edit box.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use edit_core::{MemoryClipboard, MonospaceMetrics, TextInputEngine};
///
/// let mut engine = TextInputEngine::new(MonospaceMetrics::new(10.0), Rc::new(MemoryClipboard::new()));
/// engine.set_visible_size(200.0, 20.0);
/// engine.set_text("abcdef");
///
/// engine.set_selection_anchor(2);
/// engine.extend_selection_to(5);
/// engine.delete_selection();
///
/// assert_eq!(engine.text(), "abef");
/// assert_eq!(engine.caret_position(), 2);
/// ```
pub struct TextInputEngine {
    pub(crate) buffer: TextBuffer,
    pub(crate) selection: SelectionSpan,
    pub(crate) scroll_x: f32,
    pub(crate) config: EditConfig,
    pub(crate) visible_width: f32,
    pub(crate) visible_height: f32,
    pub(crate) segments: Segments,
    pub(crate) segments_rev: u64,
    pub(crate) mouse_down: bool,
    pub(crate) possible_double_click: bool,
    pub(crate) blink: CaretBlink,
    pub(crate) events: VecDeque<EditEvent>,
    metrics: Box<dyn TextMetrics>,
    clipboard: Rc<dyn Clipboard>,
}

impl fmt::Debug for TextInputEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInputEngine")
            .field("text", &self.buffer.text_string())
            .field("selection", &self.selection)
            .field("scroll_x", &self.scroll_x)
            .field("config", &self.config)
            .field("visible_width", &self.visible_width)
            .field("visible_height", &self.visible_height)
            .finish_non_exhaustive()
    }
}

impl TextInputEngine {
    /// Create an empty engine measuring with `metrics` and using `clipboard`.
    ///
    /// The text area starts out zero-sized; call
    /// [`set_visible_size`](Self::set_visible_size) once the owner knows its
    /// geometry.
    pub fn new(metrics: impl TextMetrics + 'static, clipboard: Rc<dyn Clipboard>) -> Self {
        Self {
            buffer: TextBuffer::default(),
            selection: SelectionSpan::default(),
            scroll_x: 0.0,
            config: EditConfig::default(),
            visible_width: 0.0,
            visible_height: 0.0,
            segments: Segments::default(),
            segments_rev: 0,
            mouse_down: false,
            possible_double_click: false,
            blink: CaretBlink::default(),
            events: VecDeque::new(),
            metrics: Box::new(metrics),
            clipboard,
        }
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    /// The true text.
    pub fn text(&self) -> String {
        self.buffer.text_string()
    }

    /// The text as shown (masked in password mode).
    pub fn displayed_text(&self) -> String {
        self.buffer.display_string()
    }

    /// The true text inside the current selection.
    pub fn selected_text(&self) -> String {
        self.buffer.text()[self.selection.range()].iter().collect()
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn caret_position(&self) -> usize {
        self.selection.caret
    }

    pub fn selection(&self) -> SelectionSpan {
        self.selection
    }

    /// Horizontal scroll offset in pixels.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_x
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn visible_width(&self) -> f32 {
        self.visible_width
    }

    pub fn visible_height(&self) -> f32 {
        self.visible_height
    }

    /// Character size in pixels, with [`TextSize::Auto`] resolved.
    pub fn character_size(&self) -> f32 {
        self.config.text_size.resolve(self.visible_height)
    }

    pub fn caret_visible(&self) -> bool {
        self.blink.visible()
    }

    /// Monotonic revision counter for the buffer.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn text_revision(&self) -> u64 {
        self.buffer.revision()
    }

    /// Increments whenever the before/selected/after strings are rebuilt,
    /// that is when the selected range or the text changes.
    pub fn segments_revision(&self) -> u64 {
        self.segments_rev
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<EditEvent> {
        self.events.drain(..).collect()
    }

    // =========================================================================
    // Text editing
    // =========================================================================

    /// Replace the whole text and put the caret at the end.
    ///
    /// The numeric filter, the character limit and the width limit are
    /// applied to `text` first. Always queues [`EditEvent::TextChanged`].
    pub fn set_text(&mut self, text: &str) {
        self.replace_text(text.chars().collect());
        self.notify_text_changed();
    }

    /// Insert `ch` at offset `at`.
    ///
    /// An active selection is deleted first and `ch` goes where it was.
    /// Returns `false` when the numeric filter, the character limit or the
    /// width limit refused the character. The buffer then holds whatever it
    /// held before, minus the selection if there was one.
    pub fn insert_character(&mut self, ch: char, at: usize) -> bool {
        let at = at.min(self.buffer.len());

        if self.config.numbers_only {
            let target = if self.selection.is_empty() {
                SelectionSpan::collapsed(at)
            } else {
                self.selection
            };
            if !numeric_accepts(self.buffer.text(), target, ch) {
                log::trace!(target: "edit_core", "numeric filter rejected {ch:?}");
                return false;
            }
        }

        let selection_removed = self.remove_selection();
        let at = if selection_removed {
            self.selection.caret
        } else {
            at
        };

        if self.config.max_chars > 0 && self.buffer.len() + 1 > self.config.max_chars {
            log::trace!(
                target: "edit_core",
                "character limit {} reached, dropping {ch:?}",
                self.config.max_chars
            );
            if selection_removed {
                self.notify_text_changed();
            }
            return false;
        }

        let after = self.buffer.insert(at, ch);

        if self.config.limit_text_width && self.text_width() > self.visible_width {
            self.buffer.erase(at..after);
            log::trace!(target: "edit_core", "{ch:?} does not fit the text area, rolled back");
            if selection_removed {
                self.notify_text_changed();
            }
            return false;
        }

        self.set_caret_position(after);
        self.blink.reset();
        self.notify_text_changed();
        true
    }

    /// Delete the selected characters and put the caret where they started.
    ///
    /// Returns `false` (and does nothing) when the selection is empty.
    pub fn delete_selection(&mut self) -> bool {
        if !self.remove_selection() {
            return false;
        }
        self.notify_text_changed();
        true
    }

    /// Backspace: delete the selection, or the character before the caret.
    pub fn erase_backward(&mut self) -> bool {
        self.blink.reset();
        if !self.selection.is_empty() {
            return self.delete_selection();
        }

        let caret = self.selection.caret;
        if caret == 0 {
            return false;
        }

        let at = self.buffer.erase(caret - 1..caret);
        self.set_caret_position(at);
        self.settle_after_shrink();
        self.notify_text_changed();
        true
    }

    /// Delete key: delete the selection, or the character after the caret.
    pub fn erase_forward(&mut self) -> bool {
        self.blink.reset();
        if !self.selection.is_empty() {
            return self.delete_selection();
        }

        let caret = self.selection.caret;
        if caret >= self.buffer.len() {
            return false;
        }

        let at = self.buffer.erase(caret..caret + 1);
        self.set_caret_position(at);
        self.settle_after_shrink();
        self.notify_text_changed();
        true
    }

    // =========================================================================
    // Caret & selection
    // =========================================================================

    /// Move the caret to `offset` (clamped) and clear the selection.
    ///
    /// When scrolling is allowed the scroll offset moves just enough to keep
    /// the caret inside the text area.
    pub fn set_caret_position(&mut self, offset: usize) {
        let offset = offset.min(self.buffer.len());
        self.selection = SelectionSpan::collapsed(offset);
        self.update_segments();
        self.scroll_to_caret();
    }

    /// Start a selection at `offset`: the caret goes there and becomes the anchor.
    pub fn set_selection_anchor(&mut self, offset: usize) {
        self.set_caret_position(offset);
    }

    /// Move only the caret side of the selection, keeping the anchor.
    pub fn extend_selection_to(&mut self, offset: usize) {
        let len = self.buffer.len();
        self.selection = SelectionSpan::new(self.selection.anchor, offset).clamped(len);
        self.update_segments();
    }

    /// Select the whole text, caret at the end.
    pub fn select_all(&mut self) {
        self.selection = SelectionSpan::new(0, self.buffer.len());
        self.update_segments();
        self.scroll_to_caret();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Turn numeric-only mode on or off.
    ///
    /// Turning it on filters the current text.
    pub fn set_numbers_only(&mut self, enabled: bool) {
        self.config.numbers_only = enabled;
        log::debug!(target: "edit_core", "numbers only: {enabled}");

        if enabled && !self.buffer.is_empty() {
            let filtered = filter_numeric(self.buffer.text());
            if filtered.as_slice() != self.buffer.text() {
                self.set_text(&filtered.into_iter().collect::<String>());
            }
        }
    }

    /// Limit the number of characters; `0` removes the limit.
    ///
    /// Longer text is cut and the caret goes to the end.
    pub fn set_maximum_characters(&mut self, max_chars: usize) {
        self.config.max_chars = max_chars;
        log::debug!(target: "edit_core", "maximum characters: {max_chars}");

        if max_chars > 0 && self.buffer.truncate(max_chars) {
            self.set_caret_position(self.buffer.len());
            self.settle_after_shrink();
            self.notify_text_changed();
        }
    }

    /// Switch between scrolling and width-limited text.
    ///
    /// Enabling cuts trailing characters until the text fits and resets the
    /// scroll offset. Disabling does not bring cut characters back.
    pub fn set_limit_text_width(&mut self, enabled: bool) {
        self.config.limit_text_width = enabled;
        log::debug!(target: "edit_core", "limit text width: {enabled}");

        if enabled {
            let trimmed = self.trim_to_width();
            self.scroll_x = 0.0;
            self.selection = self.selection.clamped(self.buffer.len());
            self.update_segments();
            if trimmed {
                self.notify_text_changed();
            }
        } else {
            self.scroll_to_caret();
        }
    }

    /// Set the password mask; `'\0'` turns password mode off.
    pub fn set_password_character(&mut self, ch: char) {
        let mask = (ch != '\0').then_some(ch);
        self.config.password_char = mask;
        self.buffer.set_mask(mask);
        log::debug!(target: "edit_core", "password character: {mask:?}");
        self.relayout();
    }

    pub fn set_text_size(&mut self, size: TextSize) {
        self.config.text_size = size;
        self.relayout();
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
    }

    /// Apply a whole configuration through the individual setters.
    pub fn set_config(&mut self, config: EditConfig) {
        self.set_password_character(config.password_char.unwrap_or('\0'));
        self.set_text_size(config.text_size);
        self.set_alignment(config.alignment);
        self.set_maximum_characters(config.max_chars);
        self.set_numbers_only(config.numbers_only);
        self.set_limit_text_width(config.limit_text_width);
    }

    /// Resize the text area (the part of the widget inside its padding).
    pub fn set_visible_size(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        if width == self.visible_width && height == self.visible_height {
            return;
        }
        self.visible_width = width;
        self.visible_height = height;

        if self.config.text_size == TextSize::Auto {
            self.relayout();
        } else if self.config.limit_text_width {
            if self.trim_to_width() {
                self.selection = self.selection.clamped(self.buffer.len());
                self.update_segments();
                self.notify_text_changed();
            }
        } else {
            self.settle_scroll();
            self.scroll_to_caret();
        }
    }

    // =========================================================================
    // Internals shared with the input and geometry modules
    // =========================================================================

    /// Width of the first `count` displayed characters.
    pub(crate) fn width_to(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        self.metrics.prefix_width(
            self.buffer.display(),
            self.buffer.revision(),
            count,
            self.character_size(),
        )
    }

    /// Width of the whole displayed text.
    pub(crate) fn text_width(&self) -> f32 {
        self.width_to(self.buffer.len())
    }

    /// Shift applied to text narrower than the text area.
    pub(crate) fn alignment_offset(&self) -> f32 {
        if self.config.alignment == Alignment::Left {
            return 0.0;
        }
        let text_w = self.text_width();
        if text_w >= self.visible_width {
            return 0.0;
        }
        match self.config.alignment {
            Alignment::Left => 0.0,
            Alignment::Center => (self.visible_width - text_w) / 2.0,
            Alignment::Right => self.visible_width - text_w,
        }
    }

    pub(crate) fn clipboard(&self) -> &dyn Clipboard {
        &*self.clipboard
    }

    /// Replace the buffer without notifying, applying every policy.
    pub(crate) fn replace_text(&mut self, mut chars: Vec<char>) {
        if self.config.numbers_only {
            chars = filter_numeric(&chars);
        }
        if self.config.max_chars > 0 && chars.len() > self.config.max_chars {
            chars.truncate(self.config.max_chars);
        }
        self.buffer.replace(chars);

        if self.config.limit_text_width {
            self.trim_to_width();
            self.scroll_x = 0.0;
        } else {
            self.settle_scroll();
        }

        self.set_caret_position(self.buffer.len());
    }

    /// Keep the caret within `[scroll, scroll + visible_width]`.
    pub(crate) fn scroll_to_caret(&mut self) {
        if self.config.limit_text_width {
            self.scroll_x = 0.0;
            return;
        }

        let caret = self.selection.caret;
        let mut caret_px = self.width_to(caret);
        if caret == self.buffer.len() {
            // Room for the caret behind the last glyph.
            caret_px += self.character_size() / 10.0;
        }

        if self.scroll_x + self.visible_width < caret_px {
            self.scroll_x = caret_px - self.visible_width;
        }
        if self.scroll_x > caret_px {
            self.scroll_x = caret_px;
        }
        self.scroll_x = self.scroll_x.max(0.0);
    }

    /// Pull the text back so no empty space is scrolled into view at its end.
    pub(crate) fn settle_scroll(&mut self) {
        let text_w = self.text_width();
        if text_w > self.visible_width {
            if text_w - self.scroll_x < self.visible_width {
                self.scroll_x = text_w - self.visible_width;
            }
        } else {
            self.scroll_x = 0.0;
        }
    }

    /// Remove the selected characters without notifying.
    pub(crate) fn remove_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let start = self.buffer.erase(self.selection.range());
        self.set_caret_position(start);
        self.settle_after_shrink();
        true
    }

    pub(crate) fn notify_text_changed(&mut self) {
        self.events
            .push_back(EditEvent::TextChanged(self.buffer.text_string()));
    }

    /// Re-cut the before/selected/after strings if the selected range or
    /// the text moved since the last cut.
    ///
    /// Returns `true` if the strings were rebuilt.
    pub(crate) fn update_segments(&mut self) -> bool {
        let (start, len) = if self.selection.is_empty() {
            (self.buffer.len(), 0)
        } else {
            (self.selection.start(), self.selection.len())
        };
        let text_rev = self.buffer.revision();
        let current = &self.segments;
        if current.start == start && current.len == len && current.text_rev == text_rev {
            return false;
        }

        let display = self.buffer.display();
        let end = start + len;
        self.segments = Segments {
            start,
            len,
            text_rev,
            before: display[..start].iter().collect(),
            selected: display[start..end].iter().collect(),
            after: display[end..].iter().collect(),
        };
        self.segments_rev = self.segments_rev.wrapping_add(1);
        true
    }

    fn settle_after_shrink(&mut self) {
        if self.config.limit_text_width {
            return;
        }
        self.settle_scroll();
        self.scroll_to_caret();
    }

    /// Drop trailing characters until the displayed text fits.
    fn trim_to_width(&mut self) -> bool {
        let mut trimmed = 0usize;
        while !self.buffer.is_empty() && self.text_width() > self.visible_width {
            self.buffer.pop();
            trimmed += 1;
        }
        if trimmed > 0 {
            log::trace!(
                target: "edit_core",
                "trimmed {trimmed} characters to fit {}px",
                self.visible_width
            );
        }
        trimmed > 0
    }

    /// Re-apply every policy to the current text, as after a style change.
    fn relayout(&mut self) {
        let len = self.buffer.len();
        self.replace_text(self.buffer.text().to_vec());
        if self.buffer.len() != len {
            self.notify_text_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::metrics::MonospaceMetrics;

    /// 10px per character, text area `width` wide and 20px tall (15px text).
    fn engine(width: f32) -> TextInputEngine {
        let mut engine =
            TextInputEngine::new(MonospaceMetrics::new(10.0), Rc::new(MemoryClipboard::new()));
        engine.set_visible_size(width, 20.0);
        engine
    }

    #[test]
    fn set_text_puts_caret_at_end_and_notifies() {
        let mut e = engine(200.0);
        e.set_text("hello");
        assert_eq!(e.text(), "hello");
        assert_eq!(e.caret_position(), 5);
        assert!(e.selection().is_empty());
        assert_eq!(
            e.take_events(),
            vec![EditEvent::TextChanged("hello".to_string())]
        );
        assert!(e.take_events().is_empty());
    }

    #[test]
    fn set_caret_position_clamps() {
        let mut e = engine(200.0);
        e.set_text("abc");
        e.set_caret_position(1);
        assert_eq!(e.caret_position(), 1);
        e.set_caret_position(99);
        assert_eq!(e.caret_position(), 3);
    }

    #[test]
    fn insert_at_offset_advances_caret() {
        let mut e = engine(200.0);
        e.set_text("ac");
        assert!(e.insert_character('b', 1));
        assert_eq!(e.text(), "abc");
        assert_eq!(e.caret_position(), 2);
    }

    #[test]
    fn typing_replaces_selection() {
        let mut e = engine(200.0);
        e.set_text("hello");
        e.set_selection_anchor(1);
        e.extend_selection_to(4);
        e.take_events();

        assert!(e.insert_character('X', 0));
        assert_eq!(e.text(), "hXo");
        assert_eq!(e.caret_position(), 2);
        assert_eq!(
            e.take_events(),
            vec![EditEvent::TextChanged("hXo".to_string())]
        );
    }

    #[test]
    fn backward_selection_deletes_same_range() {
        let mut e = engine(200.0);
        e.set_text("abcdef");
        e.set_selection_anchor(5);
        e.extend_selection_to(2);
        assert_eq!(e.selected_text(), "cde");
        assert!(e.delete_selection());
        assert_eq!(e.text(), "abf");
        assert_eq!(e.caret_position(), 2);
    }

    #[test]
    fn delete_selection_without_selection_is_noop() {
        let mut e = engine(200.0);
        e.set_text("abc");
        e.take_events();
        assert!(!e.delete_selection());
        assert!(e.take_events().is_empty());
    }

    #[test]
    fn erase_at_edges_is_noop() {
        let mut e = engine(200.0);
        e.set_text("ab");
        e.take_events();

        assert!(!e.erase_forward());
        e.set_caret_position(0);
        assert!(!e.erase_backward());
        assert_eq!(e.text(), "ab");
        assert!(e.take_events().is_empty());

        assert!(e.erase_forward());
        assert_eq!(e.text(), "b");
        assert_eq!(e.caret_position(), 0);
    }

    #[test]
    fn max_chars_rejects_insert_but_keeps_selection_deletion() {
        let mut e = engine(200.0);
        e.set_maximum_characters(3);
        e.set_text("abc");
        assert!(!e.insert_character('d', 3));
        assert_eq!(e.text(), "abc");

        // Replacing a selection frees room.
        e.set_selection_anchor(0);
        e.extend_selection_to(1);
        assert!(e.insert_character('z', 0));
        assert_eq!(e.text(), "zbc");
    }

    #[test]
    fn lowering_max_chars_truncates() {
        let mut e = engine(200.0);
        e.set_text("abcdef");
        e.take_events();
        e.set_maximum_characters(2);
        assert_eq!(e.text(), "ab");
        assert_eq!(e.caret_position(), 2);
        assert_eq!(e.take_events(), vec![EditEvent::TextChanged("ab".to_string())]);

        e.set_maximum_characters(0);
        e.set_text("abcdef");
        assert_eq!(e.text(), "abcdef");
    }

    #[test]
    fn enabling_numbers_only_filters_existing_text() {
        let mut e = engine(200.0);
        e.set_text("-1a2.3.4");
        e.take_events();
        e.set_numbers_only(true);
        assert_eq!(e.text(), "-12.34");
        assert_eq!(e.take_events().len(), 1);

        // Already numeric: nothing to do.
        e.set_numbers_only(true);
        assert!(e.take_events().is_empty());
    }

    #[test]
    fn numbers_only_sign_must_go_first() {
        let mut e = engine(200.0);
        e.set_numbers_only(true);
        e.set_text("5");
        assert!(!e.insert_character('-', 1));
        assert!(e.insert_character('-', 0));
        assert_eq!(e.text(), "-5");
        assert!(!e.insert_character('+', 0));
    }

    #[test]
    fn password_mask_applies_to_display_only() {
        let mut e = engine(200.0);
        e.set_text("secret");
        e.set_password_character('*');
        assert_eq!(e.text(), "secret");
        assert_eq!(e.displayed_text(), "******");

        e.insert_character('!', 6);
        assert_eq!(e.displayed_text(), "*******");

        e.set_password_character('\0');
        assert_eq!(e.displayed_text(), "secret!");
        assert_eq!(e.config().password_char, None);
    }

    #[test]
    fn limit_text_width_rolls_back_overflowing_insert() {
        let mut e = engine(50.0);
        e.set_limit_text_width(true);
        e.set_text("abcd");
        e.take_events();

        assert!(e.insert_character('e', 4));
        assert!(!e.insert_character('f', 5));
        assert_eq!(e.text(), "abcde");
        assert_eq!(e.caret_position(), 5);
        assert_eq!(e.scroll_offset(), 0.0);
        assert_eq!(e.take_events().len(), 1);
    }

    #[test]
    fn enabling_width_limit_trims_and_pins_scroll() {
        let mut e = engine(50.0);
        e.set_text("abcdefghij");
        assert!(e.scroll_offset() > 0.0);

        e.set_limit_text_width(true);
        assert_eq!(e.text(), "abcde");
        assert_eq!(e.scroll_offset(), 0.0);
        assert!(e.caret_position() <= 5);

        e.set_limit_text_width(false);
        assert_eq!(e.text(), "abcde");
    }

    #[test]
    fn caret_scrolls_into_view_with_end_padding() {
        // 15px characters size -> 1.5px end padding.
        let mut e = engine(50.0);
        e.set_text("abcdefghij");
        assert_eq!(e.scroll_offset(), 100.0 + 1.5 - 50.0);

        e.set_caret_position(2);
        assert_eq!(e.scroll_offset(), 20.0);

        // Still inside the view: no change.
        e.set_caret_position(5);
        assert_eq!(e.scroll_offset(), 20.0);

        e.set_caret_position(9);
        assert_eq!(e.scroll_offset(), 40.0);
    }

    #[test]
    fn backspace_at_end_pulls_text_back() {
        let mut e = engine(50.0);
        e.set_text("abcdefghij");
        e.erase_backward();
        assert_eq!(e.text(), "abcdefghi");
        let caret_px = 90.0 + 1.5;
        assert!(e.scroll_offset() <= caret_px);
        assert!(caret_px <= e.scroll_offset() + 50.0);
    }

    #[test]
    fn short_text_never_scrolls_after_delete() {
        let mut e = engine(50.0);
        e.set_text("abcdefg");
        e.set_selection_anchor(0);
        e.extend_selection_to(7);
        e.delete_selection();
        assert_eq!(e.scroll_offset(), 0.0);
    }

    #[test]
    fn segments_revision_only_moves_when_split_changes() {
        let mut e = engine(200.0);
        e.set_text("abcdef");
        e.set_selection_anchor(2);
        let rev = e.segments_revision();

        e.extend_selection_to(4);
        let rev_after = e.segments_revision();
        assert_ne!(rev_after, rev);

        e.extend_selection_to(4);
        assert_eq!(e.segments_revision(), rev_after);
    }

    #[test]
    fn segments_are_not_recut_while_nothing_is_selected() {
        let mut e = engine(200.0);
        e.set_text("abc");
        let rev = e.segments_revision();

        e.set_caret_position(1);
        e.set_caret_position(2);
        e.extend_selection_to(2);
        assert_eq!(e.segments_revision(), rev);
        assert_eq!(e.layout().before, "abc");

        e.insert_character('x', 2);
        assert_ne!(e.segments_revision(), rev);
        assert_eq!(e.layout().before, "abxc");
    }

    #[test]
    fn segments_follow_mask_changes() {
        let mut e = engine(200.0);
        e.set_text("abcd");
        e.set_selection_anchor(1);
        e.extend_selection_to(3);
        e.set_password_character('*');
        // Changing the mask rewrites the text and resets the selection.
        assert_eq!(e.layout().before, "****");

        e.set_selection_anchor(1);
        e.extend_selection_to(3);
        let layout = e.layout();
        assert_eq!(layout.selected, "**");
        assert_eq!(layout.after, "*");
    }

    #[test]
    fn erase_with_backward_selection_deletes_selection_once() {
        let mut e = engine(200.0);
        e.set_text("abcdef");
        e.set_selection_anchor(5);
        e.extend_selection_to(2);
        e.take_events();

        assert!(e.erase_backward());
        assert_eq!(e.text(), "abf");
        assert_eq!(e.caret_position(), 2);
        assert!(e.selection().is_empty());
        assert_eq!(e.take_events(), vec![EditEvent::TextChanged("abf".to_string())]);
    }

    #[test]
    fn erase_forward_with_selection_keeps_following_char() {
        let mut e = engine(200.0);
        e.set_text("abcdef");
        e.set_selection_anchor(4);
        e.extend_selection_to(1);
        e.take_events();

        assert!(e.erase_forward());
        assert_eq!(e.text(), "aef");
        assert_eq!(e.caret_position(), 1);
        assert_eq!(e.take_events(), vec![EditEvent::TextChanged("aef".to_string())]);
    }

    #[test]
    fn width_rollback_keeps_deleted_selection() {
        // 'W' is twice as wide as every other character.
        let metrics = |text: &[char], count: usize, _size: f32| -> f32 {
            text[..count.min(text.len())]
                .iter()
                .map(|&c| if c == 'W' { 20.0 } else { 10.0 })
                .sum()
        };
        let mut e = TextInputEngine::new(metrics, Rc::new(MemoryClipboard::new()));
        e.set_visible_size(50.0, 20.0);
        e.set_limit_text_width(true);
        e.set_text("abcde");
        e.set_selection_anchor(1);
        e.extend_selection_to(2);
        e.take_events();

        assert!(!e.insert_character('W', 1));
        assert_eq!(e.text(), "acde");
        assert_eq!(e.caret_position(), 1);
        assert_eq!(e.take_events(), vec![EditEvent::TextChanged("acde".to_string())]);
    }

    #[test]
    fn auto_text_size_relayouts_on_resize() {
        let mut e = engine(200.0);
        assert_eq!(e.character_size(), 15.0);
        e.set_visible_size(200.0, 40.0);
        assert_eq!(e.character_size(), 30.0);
        e.set_text_size(TextSize::Fixed(12.0));
        assert_eq!(e.character_size(), 12.0);
    }
}
