//! Card capture form state.

use thiserror::Error;
use tracing::error;

use crate::{masks, models::Payment, notice::Notice, services::ResultKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Number,
    Name,
    Expiration,
    Cvv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentFormError {
    #[error("invalid card number")]
    CardNumber,
    #[error("invalid holder name")]
    HolderName,
    #[error("invalid expiration date")]
    Expiration,
    #[error("invalid CVV")]
    Cvv,
    #[error("a payment is already being processed")]
    Busy,
}

impl From<PaymentFormError> for Notice {
    fn from(value: PaymentFormError) -> Self {
        Notice::Invalid(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub card_number: String,
    pub card_name: String,
    pub card_expiration: String,
    pub card_cvv: String,
    is_submitting: bool,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Replaces `field` with the masked form of `raw`.
    pub fn input(&mut self, field: CardField, raw: &str) {
        match field {
            CardField::Number => self.card_number = masks::card_number(raw),
            CardField::Name => self.card_name = masks::holder_name(raw),
            CardField::Expiration => self.card_expiration = masks::expiration(raw),
            CardField::Cvv => self.card_cvv = masks::cvv(raw),
        }
    }

    /// Checks run in order and stop at the first failure.
    pub fn validate(&self) -> Result<(), PaymentFormError> {
        let number = self.card_number.chars().count();
        if number == 0 || number > 19 {
            return Err(PaymentFormError::CardNumber);
        }
        if self.card_name.chars().count() == 0 {
            return Err(PaymentFormError::HolderName);
        }
        let expiration = self.card_expiration.chars().count();
        if !(5..=7).contains(&expiration) {
            return Err(PaymentFormError::Expiration);
        }
        if self.card_cvv.chars().count() <= 2 {
            return Err(PaymentFormError::Cvv);
        }
        Ok(())
    }

    /// Validates and marks the form busy. The returned payment is what must
    /// be sent; nothing goes out when this fails.
    pub fn begin_submit(&mut self) -> Result<Payment, PaymentFormError> {
        if self.is_submitting {
            return Err(PaymentFormError::Busy);
        }
        self.validate()?;
        self.is_submitting = true;
        Ok(Payment {
            card_number: self.card_number.clone(),
            card_name: self.card_name.clone(),
            card_expiration: self.card_expiration.clone(),
            card_cvv: self.card_cvv.clone(),
        })
    }

    /// Settles the attempt started by [`Self::begin_submit`] using that
    /// attempt's own result.
    pub fn finish_submit(&mut self, result: Result<ResultKind, String>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(ResultKind::Success) => {
                self.clear();
                Notice::PaymentAccepted
            }
            Ok(kind) => {
                error!("Payment not accepted: {:?}", kind);
                Notice::PaymentFailed
            }
            Err(e) => {
                error!("Payment request failed: {}", e);
                Notice::PaymentFailed
            }
        }
    }

    pub fn clear(&mut self) {
        self.card_number.clear();
        self.card_name.clear();
        self.card_expiration.clear();
        self.card_cvv.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentForm {
        let mut form = PaymentForm::new();
        form.input(CardField::Number, "4242424242424242");
        form.input(CardField::Name, "jane doe");
        form.input(CardField::Expiration, "1229");
        form.input(CardField::Cvv, "123");
        form
    }

    #[test]
    fn masks_applied_on_input() {
        let form = filled();
        assert_eq!(form.card_number, "4242 4242 4242 4242");
        assert_eq!(form.card_name, "JANE DOE");
        assert_eq!(form.card_expiration, "12/29");
        assert_eq!(form.card_cvv, "123");
    }

    #[test]
    fn valid_card_passes() {
        let form = PaymentForm {
            card_number: String::from("4242 4242 4242 4242"),
            card_name: String::from("JANE DOE"),
            card_expiration: String::from("12/29"),
            card_cvv: String::from("123"),
            ..Default::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn checks_run_in_order() {
        let empty = PaymentForm::new();
        assert_eq!(empty.validate(), Err(PaymentFormError::CardNumber));

        let mut form = filled();
        form.card_name.clear();
        form.card_cvv.clear();
        assert_eq!(form.validate(), Err(PaymentFormError::HolderName));

        let mut form = filled();
        form.input(CardField::Expiration, "122");
        assert_eq!(form.validate(), Err(PaymentFormError::Expiration));

        let mut form = filled();
        form.card_number = String::from("4242 4242 4242 4242 4");
        assert_eq!(form.validate(), Err(PaymentFormError::CardNumber));
    }

    #[test]
    fn short_cvv_never_reaches_the_network() {
        let mut form = filled();
        form.input(CardField::Cvv, "12");
        assert_eq!(form.begin_submit(), Err(PaymentFormError::Cvv));
        assert!(!form.is_submitting());
    }

    #[test]
    fn long_cvv_is_cut_before_sending() {
        let mut form = filled();
        form.input(CardField::Cvv, "12345");
        assert_eq!(form.begin_submit().unwrap().card_cvv, "123");
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        let payment = form.begin_submit().unwrap();
        assert_eq!(payment.card_number, "4242 4242 4242 4242");
        assert!(form.is_submitting());

        let notice = form.finish_submit(Ok(ResultKind::Success));
        assert_eq!(notice, Notice::PaymentAccepted);
        assert!(!form.is_submitting());
        assert_eq!(form, PaymentForm::new());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let notice = form.finish_submit(Err(String::from("connection refused")));
        assert_eq!(notice, Notice::PaymentFailed);
        assert!(!form.is_submitting());
        assert_eq!(form.card_cvv, "123");

        form.begin_submit().unwrap();
        assert_eq!(
            form.finish_submit(Ok(ResultKind::ServerError)),
            Notice::PaymentFailed
        );
    }

    #[test]
    fn outcome_reflects_current_attempt() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(
            form.finish_submit(Ok(ResultKind::RequestError)),
            Notice::PaymentFailed
        );
        form.begin_submit().unwrap();
        assert_eq!(
            form.finish_submit(Ok(ResultKind::Success)),
            Notice::PaymentAccepted
        );
    }

    #[test]
    fn second_submit_while_busy_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(PaymentFormError::Busy));
    }
}
