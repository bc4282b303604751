//! Order status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Writes are unconstrained — any status may follow any other, and the admin
/// select has always allowed re-opening delivered or cancelled orders. The
/// routine-transition table below exists so tests and logs can flag those
/// moves; nothing rejects them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Новый — every order is created in this status.
    New,
    /// В обработке
    Processing,
    /// Отправлен
    Shipped,
    /// Доставлен
    Delivered,
    /// Отменён
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the admin select lists them.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Новый",
            Self::Processing => "В обработке",
            Self::Shipped => "Отправлен",
            Self::Delivered => "Доставлен",
            Self::Cancelled => "Отменён",
        }
    }

    /// Whether the order has reached an end state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether moving to `next` is an ordinary lifecycle step.
    ///
    /// Staying put is routine, as is any move out of a non-terminal status.
    /// Leaving [`Delivered`](Self::Delivered) or
    /// [`Cancelled`](Self::Cancelled) is flagged as non-routine.
    #[must_use]
    pub const fn is_routine_transition(self, next: Self) -> bool {
        !self.is_terminal() || self as u8 == next as u8
    }
}
