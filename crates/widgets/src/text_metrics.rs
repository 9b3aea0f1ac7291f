use std::cell::RefCell;

use edit_core::TextMetrics;
use egui::{Color32, Context, FontId};

/// Boundary offsets of the most recently measured string.
struct OffsetCache {
    revision: u64,
    size_bits: u32,
    /// `offsets[i]` is the x position of boundary `i`; `text.len() + 1` entries.
    offsets: Vec<f32>,
}

/// `egui`-backed adapter for measuring edit box text.
///
/// The engine asks for many prefixes of the same string in a row (scrolling,
/// hit testing), so the whole row is laid out once and every boundary offset
/// is kept until the text revision or the size changes.
pub struct EguiTextMetrics {
    ctx: Context,
    cache: RefCell<Option<OffsetCache>>,
}

impl EguiTextMetrics {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            cache: RefCell::new(None),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn layout_offsets(&self, text: &[char], character_size: f32) -> Vec<f32> {
        let string: String = text.iter().collect();
        let font_id = FontId::proportional(character_size.max(1.0));

        // `Color32` does not affect text metrics.
        let galley = self
            .ctx
            .fonts(|f| f.layout_no_wrap(string, font_id, Color32::WHITE));

        let mut offsets = Vec::with_capacity(text.len() + 1);
        match galley.rows.first() {
            Some(row) => {
                for i in 0..=text.len() {
                    offsets.push(row.x_offset(i).max(0.0));
                }
            }
            None => offsets.resize(text.len() + 1, 0.0),
        }
        offsets
    }
}

impl TextMetrics for EguiTextMetrics {
    fn prefix_width(
        &self,
        text: &[char],
        revision: u64,
        count: usize,
        character_size: f32,
    ) -> f32 {
        if count == 0 || text.is_empty() {
            return 0.0;
        }
        let count = count.min(text.len());
        let size_bits = character_size.to_bits();

        let mut cache = self.cache.borrow_mut();
        let fresh = cache
            .as_ref()
            .is_some_and(|c| c.revision == revision && c.size_bits == size_bits);
        if !fresh {
            let offsets = self.layout_offsets(text, character_size);
            *cache = Some(OffsetCache {
                revision,
                size_bits,
                offsets,
            });
        }

        cache
            .as_ref()
            .and_then(|c| c.offsets.get(count).copied())
            .unwrap_or(0.0)
    }
}
