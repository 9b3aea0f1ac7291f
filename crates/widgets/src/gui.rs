use std::rc::Rc;
use std::time::Duration;

use edit_core::{BLINK_INTERVAL, Clipboard, EditEvent};
use egui::{Context, CursorIcon, Event, Painter, Rect, Ui};

use crate::clipboard::EguiClipboard;
use crate::edit_box::EditBox;
use crate::id::WidgetId;
use crate::input::{WidgetInput, translate_events};
use crate::widget::Widget;

/// Flat collection of widgets with focus routing.
///
/// Widgets are painted in insertion order; pointer presses go to the
/// topmost (last added) widget under the pointer. Keyboard input goes to
/// the focused widget only.
pub struct Gui {
    ctx: Context,
    clipboard: Rc<EguiClipboard>,
    widgets: Vec<(WidgetId, Widget)>,
    next_id: u64,
    focused: Option<WidgetId>,
    events: Vec<(WidgetId, EditEvent)>,
}

impl Gui {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            clipboard: Rc::new(EguiClipboard::new(ctx)),
            widgets: Vec::new(),
            next_id: 1,
            focused: None,
            events: Vec::new(),
        }
    }

    /// The clipboard shared by every edit box of this gui.
    pub fn clipboard(&self) -> Rc<dyn Clipboard> {
        self.clipboard.clone()
    }

    pub fn add(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let id = WidgetId::from_raw(self.next_id);
        self.next_id += 1;
        self.widgets.push((id, widget.into()));
        id
    }

    /// Add an edit box measured with egui fonts and sharing the gui clipboard.
    pub fn add_edit_box(&mut self, rect: Rect) -> WidgetId {
        let mut edit = EditBox::new(&self.ctx, self.clipboard());
        edit.layout(rect);
        self.add(edit)
    }

    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let index = self.widgets.iter().position(|(wid, _)| *wid == id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(self.widgets.remove(index).1)
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets
            .iter()
            .find(|(wid, _)| *wid == id)
            .map(|(_, widget)| widget)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets
            .iter_mut()
            .find(|(wid, _)| *wid == id)
            .map(|(_, widget)| widget)
    }

    pub fn edit_box(&self, id: WidgetId) -> Option<&EditBox> {
        self.get(id).and_then(Widget::as_edit_box)
    }

    pub fn edit_box_mut(&mut self, id: WidgetId) -> Option<&mut EditBox> {
        self.get_mut(id).and_then(Widget::as_edit_box_mut)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Move keyboard focus. The previously focused widget is told it lost focus.
    pub fn focus(&mut self, id: Option<WidgetId>) {
        if self.focused == id {
            return;
        }
        if let Some(prev) = self.focused
            && let Some(widget) = self.get_mut(prev)
        {
            widget.set_focused(false);
        }

        self.focused = id.filter(|id| self.get(*id).is_some_and(Widget::is_focusable));
        if let Some(next) = self.focused
            && let Some(widget) = self.get_mut(next)
        {
            widget.set_focused(true);
        }
        log::debug!(target: "widgets", "focus -> {:?}", self.focused);
    }

    pub fn handle_input(&mut self, input: &WidgetInput) {
        match input {
            WidgetInput::PointerPressed(pos) => {
                let target = self
                    .widgets
                    .iter()
                    .rev()
                    .find(|(_, widget)| widget.rect().contains(*pos))
                    .map(|(id, _)| *id);
                self.focus(target);
                if let Some(id) = target
                    && let Some(widget) = self.get_mut(id)
                {
                    widget.handle_input(input);
                }
            }
            WidgetInput::PointerMoved(_) | WidgetInput::PointerReleased(_) => {
                for (_, widget) in &mut self.widgets {
                    widget.handle_input(input);
                }
            }
            WidgetInput::FocusLost => self.focus(None),
            input if input.is_keyboard() => {
                if let Some(id) = self.focused
                    && let Some(widget) = self.get_mut(id)
                {
                    widget.handle_input(input);
                }
            }
            _ => {}
        }

        self.collect_events();
    }

    /// Translate and route one frame worth of egui events.
    pub fn handle_events(&mut self, events: &[Event]) {
        for input in translate_events(events) {
            self.handle_input(&input);
        }
    }

    /// Advance every widget's timers. Returns `true` when a repaint is needed.
    pub fn update(&mut self, dt: Duration) -> bool {
        let mut repaint = false;
        for (_, widget) in &mut self.widgets {
            repaint |= widget.update(dt);
        }
        repaint
    }

    pub fn paint(&self, painter: &Painter) {
        for (_, widget) in &self.widgets {
            widget.paint(painter);
        }
    }

    /// Handle this frame's input, advance timers and paint.
    pub fn show(&mut self, ui: &mut Ui) {
        let (events, dt) = ui.input(|i| (i.events.clone(), i.unstable_dt));
        self.handle_events(&events);

        let dt = Duration::try_from_secs_f32(dt).unwrap_or_default();
        if self.update(dt) {
            ui.ctx().request_repaint();
        }
        if self.focused.is_some() {
            // Keep the caret blinking without input.
            ui.ctx().request_repaint_after(BLINK_INTERVAL);
        }

        let hovering_text = self
            .widgets
            .iter()
            .any(|(_, widget)| widget.as_edit_box().is_some_and(EditBox::is_hovered));
        if hovering_text {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::Text);
        }

        self.paint(ui.painter());
    }

    /// Drain notifications from every edit box, oldest first.
    pub fn take_events(&mut self) -> Vec<(WidgetId, EditEvent)> {
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    fn collect_events(&mut self) {
        for (id, widget) in &mut self.widgets {
            for event in widget.take_events() {
                self.events.push((*id, event));
            }
        }
    }
}
