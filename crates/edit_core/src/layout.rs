//! Render-ready snapshot of an engine.

use crate::engine::TextInputEngine;

/// Horizontal extent of the selection background, relative to the text area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRect {
    pub x: f32,
    pub width: f32,
}

/// Everything a renderer needs to draw one frame of an edit box.
///
/// X positions are relative to the left edge of the text area and already
/// include the scroll offset and the alignment shift. They may be negative
/// or exceed the visible width; the renderer clips.
#[derive(Clone, Debug, PartialEq)]
pub struct EditLayout {
    /// Displayed text before the selection (all of it when nothing is selected).
    pub before: String,
    pub selected: String,
    pub after: String,
    /// Where the first character starts.
    pub text_x: f32,
    pub caret_x: f32,
    /// `None` when nothing is selected.
    pub selection: Option<SelectionRect>,
    pub scroll_offset: f32,
    pub character_size: f32,
    pub caret_visible: bool,
}

impl EditLayout {
    /// The full displayed text, reassembled from the three segments.
    pub fn display_text(&self) -> String {
        let mut text =
            String::with_capacity(self.before.len() + self.selected.len() + self.after.len());
        text.push_str(&self.before);
        text.push_str(&self.selected);
        text.push_str(&self.after);
        text
    }
}

impl TextInputEngine {
    /// Snapshot the current state for drawing.
    ///
    /// The three text segments are copies of strings cut when the selection
    /// or the text last changed.
    pub fn layout(&self) -> EditLayout {
        let start = self.selection.start();
        let end = self.selection.end();

        let text_x = self.alignment_offset() - self.scroll_x;
        let selection = (!self.selection.is_empty()).then(|| {
            let x = text_x + self.width_to(start);
            SelectionRect {
                x,
                width: text_x + self.width_to(end) - x,
            }
        });

        EditLayout {
            before: self.segments.before.clone(),
            selected: self.segments.selected.clone(),
            after: self.segments.after.clone(),
            text_x,
            caret_x: text_x + self.width_to(self.selection.caret),
            selection,
            scroll_offset: self.scroll_x,
            character_size: self.character_size(),
            caret_visible: self.blink.visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Alignment;
    use crate::metrics::MonospaceMetrics;

    fn engine(width: f32, text: &str) -> TextInputEngine {
        let mut engine =
            TextInputEngine::new(MonospaceMetrics::new(10.0), Rc::new(MemoryClipboard::new()));
        engine.set_visible_size(width, 20.0);
        engine.set_text(text);
        engine
    }

    #[test]
    fn splits_display_text_around_selection() {
        let mut e = engine(200.0, "abcdef");
        e.set_selection_anchor(4);
        e.extend_selection_to(1);

        let layout = e.layout();
        assert_eq!(layout.before, "a");
        assert_eq!(layout.selected, "bcd");
        assert_eq!(layout.after, "ef");
        assert_eq!(layout.display_text(), "abcdef");
        assert_eq!(layout.caret_x, 10.0);
        assert_eq!(
            layout.selection,
            Some(SelectionRect {
                x: 10.0,
                width: 30.0
            })
        );
    }

    #[test]
    fn no_selection_puts_everything_before() {
        let e = engine(200.0, "abc");
        let layout = e.layout();
        assert_eq!(layout.before, "abc");
        assert!(layout.selected.is_empty());
        assert!(layout.after.is_empty());
        assert_eq!(layout.selection, None);
        assert_eq!(layout.character_size, 15.0);
        assert!(layout.caret_visible);
    }

    #[test]
    fn positions_include_scroll_and_alignment() {
        let e = engine(50.0, "abcdefghij");
        let layout = e.layout();
        assert_eq!(layout.text_x, -51.5);
        assert_eq!(layout.caret_x, 100.0 - 51.5);

        let mut e = engine(100.0, "ab");
        e.set_alignment(Alignment::Right);
        let layout = e.layout();
        assert_eq!(layout.text_x, 80.0);
        assert_eq!(layout.caret_x, 100.0);
    }

    #[test]
    fn password_layout_shows_mask() {
        let mut e = engine(200.0, "pw");
        e.set_password_character('*');
        assert_eq!(e.layout().display_text(), "**");
    }
}
