//! Clipboard capability injected into the engine.

use std::cell::RefCell;

/// Synchronous clipboard access.
///
/// Methods take `&self` so one clipboard can be shared (`Rc<dyn Clipboard>`)
/// by every edit box of a UI thread; implementations use interior mutability.
pub trait Clipboard {
    /// Current clipboard text. An empty string means nothing to paste.
    fn get(&self) -> String;

    /// Replace the clipboard text.
    fn set(&self, text: &str);
}

/// Process-local clipboard backed by a `String`.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: RefCell::new(text.to_owned()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&self) -> String {
        self.contents.borrow().clone()
    }

    fn set(&self, text: &str) {
        let mut contents = self.contents.borrow_mut();
        contents.clear();
        contents.push_str(text);
    }
}
