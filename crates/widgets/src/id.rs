//! Handles for widgets owned by a [`Gui`](crate::Gui).

/// Opaque identifier of a widget within a [`Gui`](crate::Gui).
///
/// Handed out by [`Gui::add`](crate::Gui::add) in insertion order and never
/// reused, so an id taken before a widget was removed does not alias a
/// newer widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<WidgetId> for u64 {
    #[inline]
    fn from(id: WidgetId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_round_trip() {
        let id = WidgetId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn widget_ids_order_by_creation() {
        assert!(WidgetId::from_raw(1) < WidgetId::from_raw(2));
    }
}
