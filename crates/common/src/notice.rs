/// Blocking message shown after a form interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PaymentAccepted,
    PaymentFailed,
    BranchRegistered,
    BranchRejected,
    /// Client side validation failed; carries the fixed message.
    Invalid(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::PaymentAccepted => "Payment completed successfully",
            Notice::PaymentFailed => "There was an error processing the payment",
            Notice::BranchRegistered => "Store branch registered",
            Notice::BranchRejected => "The store branch could not be registered",
            Notice::Invalid(msg) => msg,
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Notice::PaymentAccepted | Notice::BranchRegistered)
    }
}
