//! Single-line edit box: the editing engine and its egui widget shell.

pub use edit_core;
pub use widgets;
