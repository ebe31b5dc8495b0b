use anyhow::Result;

use crate::{
    models::{Product, SearchPage},
    network::{NetworkClient, Transport},
};

use super::{Outcome, SearchParams};

impl<T: Transport> NetworkClient<T> {
    pub async fn search_products(
        &self,
        params: &SearchParams,
    ) -> Result<Outcome<SearchPage<Product>>> {
        self.search("products", params).await
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

    fn product(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "barcode": format!("779{:010}", id),
            "name": format!("Product {}", id),
            "price": 10.5,
            "provider": "Acme",
        })
    }

    #[tokio::test]
    async fn decodes_a_page() {
        let body = json!({
            "results": (1..=15).map(product).collect::<Vec<_>>(),
            "currentPage": 2,
            "totalPages": 5,
        });
        let client = fake::client(vec![Ok(ApiResponse::new(200, Some(body)))], None);

        let out = client
            .search_products(&SearchParams::new("prod", 15, 2))
            .await
            .unwrap();
        let page = out.success().unwrap();
        assert_eq!(page.results.len(), 15);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.results[0].name, "Product 1");

        let reqs = client.transport().requests();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].method, "GET");
        assert_eq!(
            reqs[0].url.as_str(),
            "http://api.test/api/products/search/prod?maxResults=15&page=2"
        );
    }

    #[tokio::test]
    async fn forbidden_is_unknown() {
        let client = fake::client(vec![Ok(ApiResponse::new(403, None))], None);
        let out = client
            .search_products(&SearchParams::default())
            .await
            .unwrap();
        assert_eq!(out.kind(), ResultKind::UnknownError);
    }

    #[tokio::test]
    async fn server_error_drops_body() {
        let client = fake::client(
            vec![Ok(ApiResponse::new(500, Some(json!({"error": "boom"}))))],
            None,
        );
        let out = client
            .search_products(&SearchParams::default())
            .await
            .unwrap();
        assert_eq!(out, Outcome::ServerError);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let client = fake::client(vec![], None);
        assert!(
            client
                .search_products(&SearchParams::default())
                .await
                .is_err()
        );
    }
}
