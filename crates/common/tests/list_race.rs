use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use common::{
    auth::StaticToken,
    listing::{FetchRequest, ListView, ResponseOrdering},
    models::Product,
    network::{ApiResponse, NetworkClient, Transport, parse_base_url},
};
use serde_json::json;
use url::Url;

/// Answers searches for "a" slowly and everything else immediately.
struct SlowKeyword;

#[async_trait]
impl Transport for SlowKeyword {
    async fn get(&self, url: Url) -> Result<ApiResponse> {
        let keyword = url
            .path_segments()
            .and_then(|s| s.last())
            .unwrap_or_default()
            .to_string();
        if keyword == "a" {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(ApiResponse::new(
            200,
            Some(json!({
                "results": [{
                    "id": 1,
                    "barcode": "0001",
                    "name": format!("match for {}", keyword),
                    "price": 1.0,
                    "provider": "Acme",
                }],
                "currentPage": 1,
                "totalPages": 1,
            })),
        ))
    }

    async fn post(&self, _url: Url, _body: serde_json::Value, _token: Option<String>) -> Result<ApiResponse> {
        Ok(ApiResponse::new(500, None))
    }
}

fn client() -> Arc<NetworkClient<SlowKeyword>> {
    Arc::new(NetworkClient::new(
        SlowKeyword,
        parse_base_url("http://api.test/").unwrap(),
        Arc::new(StaticToken::none()),
    ))
}

/// Runs both keystroke fetches concurrently and applies results in the
/// order they complete.
async fn type_a_then_ab(view: &mut ListView<Product>) {
    let client = client();
    let first = view.set_query(String::from("a"));
    let second = view.set_query(String::from("ab"));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for req in [first, second] {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let FetchRequest { token, params } = req;
            let out = client.search_products(&params).await;
            tx.send((token, out)).unwrap();
        });
    }
    drop(tx);

    while let Some((token, out)) = rx.recv().await {
        view.apply(token, out);
    }
}

#[tokio::test]
async fn latest_keystroke_wins_by_default() {
    let mut view = ListView::new(15);
    type_a_then_ab(&mut view).await;
    assert_eq!(view.rows()[0].name, "match for ab");
}

#[tokio::test]
async fn arrival_order_wins_when_requested() {
    let mut view = ListView::new(15).with_ordering(ResponseOrdering::LastArrived);
    type_a_then_ab(&mut view).await;
    assert_eq!(view.rows()[0].name, "match for a");
}
