use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use crate::{
    models::Payment,
    network::{NetworkClient, Transport},
};

use super::{Outcome, PAYMENT_STATUS};

impl<T: Transport> NetworkClient<T> {
    /// Sends the card fields exactly as captured, masks included.
    pub async fn submit_payment(&self, payment: &Payment) -> Result<Outcome<Value>> {
        let url = self.endpoint(&["payments"])?;
        let resp = self
            .post(url, serde_json::to_value(payment)?, self.token())
            .await?;
        let outcome = PAYMENT_STATUS.outcome(resp)?;
        if !outcome.is_success() {
            warn!("Payment returned {:?}", outcome.kind());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        network::{ApiResponse, fake},
        services::ResultKind,
    };

    use super::*;

    fn payment() -> Payment {
        Payment {
            card_number: String::from("4242 4242 4242 4242"),
            card_name: String::from("JANE DOE"),
            card_expiration: String::from("12/29"),
            card_cvv: String::from("123"),
        }
    }

    #[tokio::test]
    async fn posts_card_fields() {
        let client = fake::client(vec![Ok(ApiResponse::new(200, None))], Some("tok"));
        let out = client.submit_payment(&payment()).await.unwrap();
        assert!(out.is_success());

        let req = &client.transport().requests()[0];
        assert_eq!(req.url.as_str(), "http://api.test/api/payments");
        assert_eq!(req.token.as_deref(), Some("tok"));
        assert_eq!(
            req.body.clone().unwrap(),
            json!({
                "cardNumber": "4242 4242 4242 4242",
                "cardName": "JANE DOE",
                "cardExpiration": "12/29",
                "cardCvv": "123",
            })
        );
    }

    #[tokio::test]
    async fn declined_is_request_error() {
        let client = fake::client(
            vec![Ok(ApiResponse::new(400, Some(json!({"reason": "declined"}))))],
            None,
        );
        let out = client.submit_payment(&payment()).await.unwrap();
        assert_eq!(out.kind(), ResultKind::RequestError);
    }
}
