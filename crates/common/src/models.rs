use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Product {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub price: f64,
    pub provider: String,
}

impl Product {
    pub fn display_price(&self) -> String {
        format!("$ {}", self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct StoreBranch {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    #[tabled(rename = "opens")]
    pub opening_hours: String,
    #[tabled(rename = "closes")]
    pub closing_hours: String,
}

/// Body of `POST storebranches`. Coordinates travel as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewStoreBranch {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub opening_hours: String,
    pub closing_hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub card_number: String,
    pub card_name: String,
    pub card_expiration: String,
    pub card_cvv: String,
}

/// One page of a server side search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<R> {
    pub results: Vec<R>,
    pub current_page: u32,
    pub total_pages: u32,
}
