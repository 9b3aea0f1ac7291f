use std::time::Duration;

use edit_core::EditEvent;
use egui::{Painter, Rect};

use crate::animated_picture::AnimatedPicture;
use crate::edit_box::EditBox;
use crate::input::WidgetInput;

/// Every kind of widget a [`Gui`](crate::Gui) can hold.
pub enum Widget {
    EditBox(EditBox),
    AnimatedPicture(AnimatedPicture),
}

impl Widget {
    pub fn rect(&self) -> Rect {
        match self {
            Widget::EditBox(edit) => edit.rect(),
            Widget::AnimatedPicture(picture) => picture.rect(),
        }
    }

    pub fn layout(&mut self, rect: Rect) {
        match self {
            Widget::EditBox(edit) => edit.layout(rect),
            Widget::AnimatedPicture(picture) => picture.layout(rect),
        }
    }

    pub fn paint(&self, painter: &Painter) {
        match self {
            Widget::EditBox(edit) => edit.paint(painter),
            Widget::AnimatedPicture(picture) => picture.paint(painter),
        }
    }

    pub fn handle_input(&mut self, input: &WidgetInput) {
        match self {
            Widget::EditBox(edit) => edit.handle_input(input),
            // Pictures are not interactive.
            Widget::AnimatedPicture(_) => {}
        }
    }

    /// Advance timers. Returns `true` when a repaint is needed.
    pub fn update(&mut self, dt: Duration) -> bool {
        match self {
            Widget::EditBox(edit) => edit.update(dt),
            Widget::AnimatedPicture(picture) => picture.update(dt),
        }
    }

    /// Whether clicking the widget gives it keyboard focus.
    pub fn is_focusable(&self) -> bool {
        matches!(self, Widget::EditBox(_))
    }

    pub fn set_focused(&mut self, focused: bool) {
        if let Widget::EditBox(edit) = self {
            edit.set_focused(focused);
        }
    }

    pub fn take_events(&mut self) -> Vec<EditEvent> {
        match self {
            Widget::EditBox(edit) => edit.take_events(),
            Widget::AnimatedPicture(_) => Vec::new(),
        }
    }

    pub fn as_edit_box(&self) -> Option<&EditBox> {
        match self {
            Widget::EditBox(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn as_edit_box_mut(&mut self) -> Option<&mut EditBox> {
        match self {
            Widget::EditBox(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn as_animated_picture_mut(&mut self) -> Option<&mut AnimatedPicture> {
        match self {
            Widget::AnimatedPicture(picture) => Some(picture),
            _ => None,
        }
    }
}

impl From<EditBox> for Widget {
    fn from(edit: EditBox) -> Self {
        Widget::EditBox(edit)
    }
}

impl From<AnimatedPicture> for Widget {
    fn from(picture: AnimatedPicture) -> Self {
        Widget::AnimatedPicture(picture)
    }
}
