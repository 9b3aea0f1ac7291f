use std::cell::RefCell;

use edit_core::Clipboard;
use egui::Context;

/// Clipboard backed by the egui platform output.
///
/// Copies are forwarded to the platform through [`Context::copy_text`] and
/// remembered locally. Platform pastes arrive as `Event::Paste` with their
/// text attached, so `get` only needs to serve copies made inside the app.
pub struct EguiClipboard {
    ctx: Context,
    contents: RefCell<String>,
}

impl EguiClipboard {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            contents: RefCell::new(String::new()),
        }
    }
}

impl Clipboard for EguiClipboard {
    fn get(&self) -> String {
        self.contents.borrow().clone()
    }

    fn set(&self, text: &str) {
        self.contents.replace(text.to_owned());
        self.ctx.copy_text(text.to_owned());
    }
}
