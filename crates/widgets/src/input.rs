use edit_core::EditKey;
use egui::{Event, Key, PointerButton, Pos2};

/// Renderer-neutral input delivered to widgets.
///
/// Pointer positions are in screen points; each widget converts them to its
/// own local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetInput {
    PointerPressed(Pos2),
    PointerMoved(Pos2),
    PointerReleased(Pos2),
    Text(String),
    Key { key: EditKey, selecting: bool },
    /// Text pasted from the platform clipboard.
    Paste(String),
    FocusLost,
}

impl WidgetInput {
    /// Keyboard-like input goes to the focused widget only.
    pub fn is_keyboard(&self) -> bool {
        matches!(
            self,
            WidgetInput::Text(_) | WidgetInput::Key { .. } | WidgetInput::Paste(_)
        )
    }
}

/// Map raw egui events onto widget input.
///
/// Only the primary pointer button is used. Copy, cut and paste arrive from
/// the platform as dedicated events, so Ctrl+C/X/V key presses are ignored
/// here; Ctrl+A (or Cmd+A) becomes select-all.
pub fn translate_events(events: &[Event]) -> Vec<WidgetInput> {
    let mut out = Vec::with_capacity(events.len());

    for event in events {
        let input = match event {
            Event::Text(text) => WidgetInput::Text(text.clone()),
            Event::Paste(text) => WidgetInput::Paste(text.clone()),
            Event::Copy => WidgetInput::Key {
                key: EditKey::Copy,
                selecting: false,
            },
            Event::Cut => WidgetInput::Key {
                key: EditKey::Cut,
                selecting: false,
            },
            Event::PointerMoved(pos) => WidgetInput::PointerMoved(*pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                if *pressed {
                    WidgetInput::PointerPressed(*pos)
                } else {
                    WidgetInput::PointerReleased(*pos)
                }
            }
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                let edit_key = match key {
                    Key::ArrowLeft => EditKey::Left,
                    Key::ArrowRight => EditKey::Right,
                    Key::Home => EditKey::Home,
                    Key::End => EditKey::End,
                    Key::Enter => EditKey::Return,
                    Key::Backspace => EditKey::Backspace,
                    Key::Delete => EditKey::Delete,
                    Key::A if modifiers.command || modifiers.ctrl => EditKey::SelectAll,
                    _ => continue,
                };
                WidgetInput::Key {
                    key: edit_key,
                    selecting: modifiers.shift,
                }
            }
            _ => continue,
        };
        out.push(input);
    }

    out
}
