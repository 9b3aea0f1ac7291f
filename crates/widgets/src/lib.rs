//! # widgets
//!
//! egui-backed widget shell around [`edit_core`].
//!
//! - [`EditBox`]: a single-line text field painting an engine's layout
//! - [`AnimatedPicture`]: a flip-book of textures
//! - [`Widget`]: the closed set of widget kinds, dispatched by `match`
//! - [`Gui`]: a flat widget list with focus routing and event collection
//!
//! Input is translated from raw `egui::Event`s into [`WidgetInput`] once and
//! then routed, so widgets never look at egui's input state directly.

pub mod animated_picture;
pub mod clipboard;
pub mod edit_box;
pub mod gui;
pub mod id;
pub mod input;
pub mod style;
pub mod text_metrics;
pub mod widget;

pub use animated_picture::{AnimatedPicture, Frame};
pub use clipboard::EguiClipboard;
pub use edit_box::EditBox;
pub use gui::Gui;
pub use id::WidgetId;
pub use input::{WidgetInput, translate_events};
pub use style::{EditBoxStyle, Padding, StyleError, parse_color};
pub use text_metrics::EguiTextMetrics;
pub use widget::Widget;
