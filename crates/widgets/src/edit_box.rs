use std::rc::Rc;
use std::time::Duration;

use edit_core::{Clipboard, EditEvent, EditLayout, TextInputEngine, TextMetrics};
use egui::{Align2, Context, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};

use crate::input::WidgetInput;
use crate::style::EditBoxStyle;
use crate::text_metrics::EguiTextMetrics;

/// Single-line text field: an [`TextInputEngine`] plus geometry and looks.
pub struct EditBox {
    engine: TextInputEngine,
    style: EditBoxStyle,
    /// Placeholder shown while the text is empty.
    default_text: String,
    rect: Rect,
    focused: bool,
    hovered: bool,
}

impl EditBox {
    /// An edit box measuring its text with egui's fonts.
    pub fn new(ctx: &Context, clipboard: Rc<dyn Clipboard>) -> Self {
        Self::with_metrics(EguiTextMetrics::new(ctx), clipboard)
    }

    pub fn with_metrics(metrics: impl TextMetrics + 'static, clipboard: Rc<dyn Clipboard>) -> Self {
        Self {
            engine: TextInputEngine::new(metrics, clipboard),
            style: EditBoxStyle::default(),
            default_text: String::new(),
            rect: Rect::ZERO,
            focused: false,
            hovered: false,
        }
    }

    pub fn engine(&self) -> &TextInputEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TextInputEngine {
        &mut self.engine
    }

    pub fn text(&self) -> String {
        self.engine.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.engine.set_text(text);
    }

    pub fn style(&self) -> &EditBoxStyle {
        &self.style
    }

    /// Change the looks. Padding and border changes resize the text area.
    pub fn set_style(&mut self, style: EditBoxStyle) {
        self.style = style;
        self.layout(self.rect);
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn set_default_text(&mut self, text: impl Into<String>) {
        self.default_text = text.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The outer rect shrunk by the border and the padding.
    pub fn text_area(&self) -> Rect {
        if !self.rect.is_positive() {
            return Rect::from_min_size(self.rect.min, Vec2::ZERO);
        }
        let border = self.style.border_width;
        let pad = self.style.padding;
        let min = Pos2::new(
            self.rect.min.x + border + pad.left,
            self.rect.min.y + border + pad.top,
        );
        let max = Pos2::new(
            (self.rect.max.x - border - pad.right).max(min.x),
            (self.rect.max.y - border - pad.bottom).max(min.y),
        );
        Rect::from_min_max(min, max)
    }

    /// Screen x where the text, or the placeholder when empty, starts.
    ///
    /// Includes the alignment shift and the scroll offset.
    pub fn text_origin_x(&self, layout: &EditLayout) -> f32 {
        self.text_area().min.x + layout.text_x
    }

    /// Place the box and hand the text area size to the engine.
    pub fn layout(&mut self, rect: Rect) {
        self.rect = rect;
        let area = self.text_area();
        self.engine.set_visible_size(area.width(), area.height());
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused && !focused {
            self.engine.focus_lost();
        }
        self.focused = focused;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn handle_input(&mut self, input: &WidgetInput) {
        let origin_x = self.text_area().min.x;

        match input {
            WidgetInput::PointerPressed(pos) => self.engine.mouse_pressed(pos.x - origin_x),
            WidgetInput::PointerMoved(pos) => {
                self.hovered = self.rect.contains(*pos);
                self.engine.mouse_moved(pos.x - origin_x);
            }
            WidgetInput::PointerReleased(_) => self.engine.mouse_released(),
            WidgetInput::Text(text) => {
                for ch in text.chars() {
                    self.engine.text_entered(ch);
                }
            }
            WidgetInput::Key { key, selecting } => self.engine.key_pressed(*key, *selecting),
            WidgetInput::Paste(text) => {
                self.engine.paste_text(text);
            }
            WidgetInput::FocusLost => self.set_focused(false),
        }
    }

    /// Advance the caret blink. Returns `true` when a repaint is needed.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.focused && self.engine.tick(dt)
    }

    pub fn take_events(&mut self) -> Vec<EditEvent> {
        self.engine.take_events()
    }

    pub fn paint(&self, painter: &Painter) {
        let style = &self.style;

        let fill = if self.hovered {
            style.background_hover
        } else {
            style.background
        };
        painter.rect_filled(self.rect, 2.0, fill);

        if style.border_width > 0.0 {
            let color = if self.focused {
                style.border_color_focused
            } else {
                style.border_color
            };
            painter.rect_stroke(
                self.rect,
                2.0,
                Stroke::new(style.border_width, color),
                StrokeKind::Inside,
            );
        }

        let area = self.text_area();
        if area.width() <= 0.0 || area.height() <= 0.0 {
            return;
        }
        let clip = painter.with_clip_rect(area);

        let layout = self.engine.layout();
        let font_id = FontId::proportional(layout.character_size.max(1.0));
        let row_h = painter.fonts(|f| f.row_height(&font_id));
        let line_h = row_h.min(area.height()).max(1.0);
        let text_y = area.min.y + ((area.height() - row_h) * 0.5).max(0.0);

        if self.engine.is_empty() {
            if !self.default_text.is_empty() {
                clip.text(
                    Pos2::new(self.text_origin_x(&layout), text_y),
                    Align2::LEFT_TOP,
                    &self.default_text,
                    font_id.clone(),
                    style.default_text_color,
                );
            }
        } else {
            if let Some(sel) = layout.selection {
                let sel_rect = Rect::from_min_size(
                    Pos2::new(area.min.x + sel.x, text_y),
                    Vec2::new(sel.width, line_h),
                );
                clip.rect_filled(sel_rect, 0.0, style.selected_text_background);
            }

            clip.text(
                Pos2::new(self.text_origin_x(&layout), text_y),
                Align2::LEFT_TOP,
                &layout.before,
                font_id.clone(),
                style.text_color,
            );
            if let Some(sel) = layout.selection {
                clip.text(
                    Pos2::new(area.min.x + sel.x, text_y),
                    Align2::LEFT_TOP,
                    &layout.selected,
                    font_id.clone(),
                    style.selected_text_color,
                );
                clip.text(
                    Pos2::new(area.min.x + sel.x + sel.width, text_y),
                    Align2::LEFT_TOP,
                    &layout.after,
                    font_id.clone(),
                    style.text_color,
                );
            }
        }

        if self.focused && layout.caret_visible && style.caret_width > 0.0 {
            let caret_max_x = (area.max.x - style.caret_width).max(area.min.x);
            let caret_x = (area.min.x + layout.caret_x)
                .clamp(area.min.x, caret_max_x)
                .round();
            let caret_rect = Rect::from_min_size(
                Pos2::new(caret_x, text_y),
                Vec2::new(style.caret_width, line_h),
            );
            clip.rect_filled(caret_rect, 0.0, style.caret_color);
        }
    }
}
