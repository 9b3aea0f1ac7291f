//! # edit_core
//!
//! UI-agnostic engine for a single-line edit box.
//!
//! This crate provides the editing semantics of a text field:
//! - [`TextInputEngine`]: text buffer, caret/selection, horizontal scrolling,
//!   password masking, numeric filtering, character and width limits
//! - [`SelectionSpan`]: anchor/caret pair in character offsets
//! - [`EditLayout`]: a render-ready snapshot (before/selected/after segments,
//!   caret and selection positions)
//!
//! ## Design Principles
//!
//! The engine does not depend on any graphics framework. Text measurement
//! and clipboard access are injected through the [`TextMetrics`] and
//! [`Clipboard`] traits, so everything here can be driven and tested
//! headlessly with [`MonospaceMetrics`] and [`MemoryClipboard`].
//!
//! Notifications ([`EditEvent`]) are queued and drained by the owner with
//! [`TextInputEngine::take_events`] instead of being delivered through
//! callbacks.

mod blink;
mod buffer;
mod clipboard;
mod config;
mod engine;
mod event;
mod input;
mod layout;
mod metrics;
mod selection;
mod text;

pub use blink::BLINK_INTERVAL;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use config::{Alignment, EditConfig, TextSize};
pub use engine::TextInputEngine;
pub use event::{EditEvent, EditKey};
pub use layout::{EditLayout, SelectionRect};
pub use metrics::{MonospaceMetrics, TextMetrics};
pub use selection::SelectionSpan;

// Character filters, exposed for integration layers that pre-validate input.
pub use text::{filter_numeric, filter_single_line, is_decimal_separator, is_sign, numeric_accepts};
