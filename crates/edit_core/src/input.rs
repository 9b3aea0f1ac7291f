//! Keyboard, pointer, clipboard and timer input.
//!
//! Pointer x-coordinates are relative to the left edge of the text area
//! (the widget position plus its left padding).

use std::time::Duration;

use crate::engine::TextInputEngine;
use crate::event::{EditEvent, EditKey};
use crate::text::filter_single_line;

impl TextInputEngine {
    /// A printable character was typed.
    ///
    /// Control characters are ignored; editing keys arrive through
    /// [`key_pressed`](Self::key_pressed).
    pub fn text_entered(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let at = self.selection.caret;
        self.insert_character(ch, at)
    }

    /// Handle an editing key. `selecting` is the Shift modifier: arrows and
    /// Home/End then extend the selection instead of collapsing it.
    pub fn key_pressed(&mut self, key: EditKey, selecting: bool) {
        let caret = self.selection.caret;
        let len = self.buffer.len();

        match key {
            EditKey::Left => {
                if selecting {
                    self.extend_and_scroll(caret.saturating_sub(1));
                } else if !self.selection.is_empty() {
                    self.set_caret_position(self.selection.start());
                } else if caret > 0 {
                    self.set_caret_position(caret - 1);
                }
            }
            EditKey::Right => {
                if selecting {
                    self.extend_and_scroll((caret + 1).min(len));
                } else if !self.selection.is_empty() {
                    self.set_caret_position(self.selection.end());
                } else if caret < len {
                    self.set_caret_position(caret + 1);
                }
            }
            EditKey::Home => {
                if selecting {
                    self.extend_and_scroll(0);
                } else {
                    self.set_caret_position(0);
                }
            }
            EditKey::End => {
                if selecting {
                    self.extend_and_scroll(len);
                } else {
                    self.set_caret_position(len);
                }
            }
            EditKey::Return => {
                self.events
                    .push_back(EditEvent::ReturnPressed(self.buffer.text_string()));
            }
            EditKey::Backspace => {
                self.erase_backward();
            }
            EditKey::Delete => {
                self.erase_forward();
            }
            EditKey::Copy => {
                self.copy_selection();
            }
            EditKey::Cut => {
                self.cut_selection();
            }
            EditKey::Paste => {
                self.paste();
            }
            EditKey::SelectAll => self.select_all(),
        }

        self.blink.reset();
    }

    /// Put the selected text, as displayed, on the clipboard.
    ///
    /// In password mode that is the mask characters, never the real text.
    /// Returns `false` when nothing is selected; the clipboard is left alone.
    pub fn copy_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let copied: String = self.buffer.display()[self.selection.range()]
            .iter()
            .collect();
        self.clipboard().set(&copied);
        true
    }

    /// Copy the selection, then delete it.
    pub fn cut_selection(&mut self) -> bool {
        if !self.copy_selection() {
            return false;
        }
        self.delete_selection()
    }

    /// Replace the selection with the clipboard contents.
    pub fn paste(&mut self) -> bool {
        let contents = self.clipboard().get();
        self.paste_text(&contents)
    }

    /// Replace the selection with `contents`, as a paste.
    ///
    /// Line breaks are stripped and the combined text goes through the same
    /// filters as [`set_text`](Self::set_text). Queues a single
    /// [`EditEvent::TextChanged`].
    pub fn paste_text(&mut self, contents: &str) -> bool {
        let contents = filter_single_line(contents);
        if contents.is_empty() && self.selection.is_empty() {
            return false;
        }

        self.remove_selection();
        let caret = self.selection.caret;
        let pasted: Vec<char> = contents.chars().collect();
        let text = self.buffer.text();

        let mut chars = Vec::with_capacity(text.len() + pasted.len());
        chars.extend_from_slice(&text[..caret]);
        chars.extend_from_slice(&pasted);
        chars.extend_from_slice(&text[caret..]);

        self.replace_text(chars);
        self.set_caret_position(caret + pasted.len());
        self.blink.reset();
        self.notify_text_changed();
        true
    }

    /// Left button went down at `x`.
    ///
    /// A second press on the same offset, with no selection and no pointer
    /// movement or blink tick in between, selects everything.
    pub fn mouse_pressed(&mut self, x: f32) {
        let offset = self.hit_test(x);

        if self.possible_double_click
            && self.selection.is_empty()
            && offset == self.selection.caret
        {
            self.possible_double_click = false;
            self.select_all();
        } else {
            self.set_caret_position(offset);
            self.possible_double_click = true;
        }

        self.mouse_down = true;
        self.blink.reset();
    }

    /// Pointer moved to `x`. Extends the selection while the button is held,
    /// scrolling when the pointer is past either edge.
    pub fn mouse_moved(&mut self, x: f32) {
        self.possible_double_click = false;
        if !self.mouse_down {
            return;
        }

        if !self.config.limit_text_width {
            self.drag_scroll(x);
        }

        let offset = self.hit_test(x);
        self.extend_selection_to(offset);
    }

    pub fn mouse_released(&mut self) {
        self.mouse_down = false;
    }

    /// Focus moved elsewhere: keep the caret, drop the selection.
    pub fn focus_lost(&mut self) {
        if !self.selection.is_empty() {
            self.set_caret_position(self.selection.caret);
        }
        self.mouse_down = false;
        self.possible_double_click = false;
    }

    /// Advance the caret blink. Returns `true` if the caret visibility flipped.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.blink.tick(dt) {
            return false;
        }
        self.possible_double_click = false;
        true
    }

    /// Whether the left button is currently held on this engine.
    pub fn is_dragging(&self) -> bool {
        self.mouse_down
    }

    fn extend_and_scroll(&mut self, offset: usize) {
        self.extend_selection_to(offset);
        self.scroll_to_caret();
    }

    fn drag_scroll(&mut self, x: f32) {
        let width = self.visible_width;
        let size = self.character_size();
        let (step, end_padding) = if size > 10.0 {
            ((size / 10.0 + 0.5).floor(), size / 10.0)
        } else {
            (1.0, 0.0)
        };

        if x < 0.0 {
            self.scroll_x = (self.scroll_x - step).max(0.0);
        } else if x > width {
            let text_w = self.text_width();
            if text_w <= width {
                return;
            }
            let max_scroll = (text_w + end_padding - width).max(0.0);
            self.scroll_x = (self.scroll_x + step).min(max_scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::blink::BLINK_INTERVAL;
    use crate::clipboard::{Clipboard, MemoryClipboard};
    use crate::engine::TextInputEngine;
    use crate::event::{EditEvent, EditKey};
    use crate::metrics::MonospaceMetrics;
    use crate::selection::SelectionSpan;

    fn engine(width: f32, text: &str) -> (TextInputEngine, Rc<MemoryClipboard>) {
        let clipboard = Rc::new(MemoryClipboard::new());
        let mut engine = TextInputEngine::new(MonospaceMetrics::new(10.0), clipboard.clone());
        engine.set_visible_size(width, 20.0);
        engine.set_text(text);
        engine.take_events();
        (engine, clipboard)
    }

    #[test]
    fn typing_appends_at_caret() {
        let (mut e, _) = engine(200.0, "");
        for ch in "hey".chars() {
            assert!(e.text_entered(ch));
        }
        assert!(!e.text_entered('\u{8}'));
        assert_eq!(e.text(), "hey");
        assert_eq!(e.caret_position(), 3);
        assert_eq!(e.take_events().len(), 3);
    }

    #[test]
    fn arrows_collapse_selection_to_its_edges() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.set_selection_anchor(1);
        e.extend_selection_to(4);
        e.key_pressed(EditKey::Left, false);
        assert_eq!(e.selection(), SelectionSpan::collapsed(1));

        e.set_selection_anchor(4);
        e.extend_selection_to(1);
        e.key_pressed(EditKey::Right, false);
        assert_eq!(e.selection(), SelectionSpan::collapsed(4));

        e.key_pressed(EditKey::Right, false);
        assert_eq!(e.caret_position(), 5);
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.set_caret_position(2);
        e.key_pressed(EditKey::Right, true);
        e.key_pressed(EditKey::Right, true);
        assert_eq!(e.selection(), SelectionSpan::new(2, 4));
        assert_eq!(e.selected_text(), "cd");

        e.key_pressed(EditKey::Home, true);
        assert_eq!(e.selection(), SelectionSpan::new(2, 0));
        e.key_pressed(EditKey::End, false);
        assert_eq!(e.selection(), SelectionSpan::collapsed(6));
    }

    #[test]
    fn return_reports_current_text() {
        let (mut e, _) = engine(200.0, "42");
        e.key_pressed(EditKey::Return, false);
        assert_eq!(
            e.take_events(),
            vec![EditEvent::ReturnPressed("42".to_string())]
        );
    }

    #[test]
    fn copy_uses_masked_text() {
        let (mut e, clipboard) = engine(200.0, "hunter2");
        e.set_password_character('*');
        e.key_pressed(EditKey::SelectAll, false);
        e.key_pressed(EditKey::Copy, false);
        assert_eq!(clipboard.get(), "*******");
    }

    #[test]
    fn copy_without_selection_keeps_clipboard() {
        let (mut e, clipboard) = engine(200.0, "abc");
        clipboard.set("previous");
        assert!(!e.copy_selection());
        assert_eq!(clipboard.get(), "previous");
    }

    #[test]
    fn cut_moves_selection_to_clipboard() {
        let (mut e, clipboard) = engine(200.0, "abcdef");
        e.set_selection_anchor(1);
        e.extend_selection_to(3);
        e.key_pressed(EditKey::Cut, false);
        assert_eq!(clipboard.get(), "bc");
        assert_eq!(e.text(), "adef");
        assert_eq!(e.caret_position(), 1);
        assert_eq!(e.take_events().len(), 1);
    }

    #[test]
    fn paste_strips_newlines_and_notifies_once() {
        let (mut e, clipboard) = engine(200.0, "ab");
        clipboard.set("x\ny");
        e.set_caret_position(1);
        e.key_pressed(EditKey::Paste, false);
        assert_eq!(e.text(), "axyb");
        assert_eq!(e.caret_position(), 3);
        assert_eq!(
            e.take_events(),
            vec![EditEvent::TextChanged("axyb".to_string())]
        );
    }

    #[test]
    fn paste_replaces_selection() {
        let (mut e, clipboard) = engine(200.0, "hello");
        clipboard.set("J");
        e.set_selection_anchor(0);
        e.extend_selection_to(1);
        assert!(e.paste());
        assert_eq!(e.text(), "Jello");
        assert_eq!(e.caret_position(), 1);
    }

    #[test]
    fn paste_of_nothing_is_noop() {
        let (mut e, _) = engine(200.0, "abc");
        assert!(!e.paste());
        assert!(e.take_events().is_empty());
    }

    #[test]
    fn paste_respects_numeric_filter() {
        let (mut e, clipboard) = engine(200.0, "");
        e.set_numbers_only(true);
        clipboard.set("12ab3");
        e.paste();
        assert_eq!(e.text(), "123");
        assert_eq!(e.caret_position(), 3);
    }

    #[test]
    fn click_places_caret_and_drag_selects() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.mouse_pressed(0.0);
        assert_eq!(e.selection(), SelectionSpan::collapsed(0));
        e.mouse_moved(25.0);
        assert_eq!(e.selection(), SelectionSpan::new(0, 3));
        e.mouse_released();

        // Moving without the button held changes nothing.
        e.mouse_moved(55.0);
        assert_eq!(e.selection(), SelectionSpan::new(0, 3));
    }

    #[test]
    fn double_click_selects_all() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.mouse_pressed(22.0);
        e.mouse_released();
        e.mouse_pressed(22.0);
        assert_eq!(e.selection(), SelectionSpan::new(0, 6));
    }

    #[test]
    fn movement_or_blink_cancels_double_click() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.mouse_pressed(22.0);
        e.mouse_released();
        e.mouse_moved(22.0);
        e.mouse_pressed(22.0);
        assert!(e.selection().is_empty());

        e.mouse_released();
        assert!(e.tick(BLINK_INTERVAL));
        e.mouse_pressed(22.0);
        assert!(e.selection().is_empty());
    }

    #[test]
    fn drag_past_right_edge_scrolls() {
        let (mut e, _) = engine(50.0, "abcdefghij");
        e.set_caret_position(0);
        assert_eq!(e.scroll_offset(), 0.0);

        e.mouse_pressed(10.0);
        e.mouse_moved(60.0);
        // 15px text scrolls 2px per move.
        assert_eq!(e.scroll_offset(), 2.0);
        assert!(e.selection().caret > 1);

        for _ in 0..100 {
            e.mouse_moved(60.0);
        }
        assert_eq!(e.scroll_offset(), 100.0 + 1.5 - 50.0);
        assert_eq!(e.selection(), SelectionSpan::new(1, 10));

        for _ in 0..100 {
            e.mouse_moved(-5.0);
        }
        assert_eq!(e.scroll_offset(), 0.0);
        assert_eq!(e.selection().caret, 0);
    }

    #[test]
    fn drag_right_does_not_scroll_text_that_fits() {
        // Exactly as wide as the area; only the caret padding sticks out.
        let (mut e, _) = engine(50.0, "abcde");
        e.set_caret_position(0);
        assert_eq!(e.scroll_offset(), 0.0);

        e.mouse_pressed(10.0);
        for _ in 0..5 {
            e.mouse_moved(60.0);
        }
        assert_eq!(e.scroll_offset(), 0.0);
        assert_eq!(e.selection(), SelectionSpan::new(1, 5));
    }

    #[test]
    fn focus_lost_collapses_to_caret() {
        let (mut e, _) = engine(200.0, "abcdef");
        e.set_selection_anchor(1);
        e.extend_selection_to(4);
        e.focus_lost();
        assert_eq!(e.selection(), SelectionSpan::collapsed(4));
    }

    #[test]
    fn editing_shows_caret_again() {
        let (mut e, _) = engine(200.0, "abc");
        assert!(e.tick(BLINK_INTERVAL));
        assert!(!e.caret_visible());
        e.key_pressed(EditKey::Left, false);
        assert!(e.caret_visible());
        assert!(!e.tick(Duration::from_millis(100)));
    }
}
