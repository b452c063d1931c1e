//! Quick action shortcuts for the chat UI

/// Predefined questions the chat UI offers as one-tap chips
///
/// Tapping a chip submits the action's question through the normal
/// resolution path, so quick actions and typed questions behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// How room booking works
    BookRoom,
    /// Available mess plans
    MessPlans,
    /// Cancelling an existing booking
    CancelBooking,
    /// Supported payment methods
    PaymentMethods,
}

impl QuickAction {
    /// Get all quick actions in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::BookRoom,
            Self::MessPlans,
            Self::CancelBooking,
            Self::PaymentMethods,
        ]
    }

    /// Get the display label for the chip
    pub fn label(&self) -> &str {
        match self {
            Self::BookRoom => "Book a room",
            Self::MessPlans => "Mess plans",
            Self::CancelBooking => "Cancel booking",
            Self::PaymentMethods => "Payment methods",
        }
    }

    /// Get the question submitted when the chip is tapped
    pub fn question(&self) -> &str {
        match self {
            Self::BookRoom => "How do I book a room?",
            Self::MessPlans => "What mess plans are available?",
            Self::CancelBooking => "How do I cancel my booking?",
            Self::PaymentMethods => "Which payment methods are supported?",
        }
    }
}
