use std::{fmt::Debug, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use common::{
    listing::RequestToken,
    models::{Product, SearchPage, StoreBranch},
    network::NetworkClient,
    services::{Outcome, SearchParams},
};
use iced::Length;

pub mod widget;

#[derive(Debug, Clone)]
pub enum ListMessage<R> {
    Mount,
    QueryChanged(String),
    SelectPage(u32),
    NextPage,
    PreviousPage,
    Fetched(RequestToken, Result<Outcome<SearchPage<R>>, String>),
}

/// A row type that can be searched and shown by [`widget::ListWidget`].
#[async_trait]
pub trait Listable: Debug + Clone + Send + Sync + 'static {
    const TITLE: &'static str;
    const PLACEHOLDER: &'static str;

    fn columns() -> Vec<(&'static str, Length)>;
    fn cells(&self) -> Vec<String>;

    async fn fetch(
        network: Arc<NetworkClient>,
        params: SearchParams,
    ) -> Result<Outcome<SearchPage<Self>>>;
}

#[async_trait]
impl Listable for Product {
    const TITLE: &'static str = "Products";
    const PLACEHOLDER: &'static str = "Search products";

    fn columns() -> Vec<(&'static str, Length)> {
        vec![
            ("Barcode", Length::FillPortion(2)),
            ("Name", Length::FillPortion(3)),
            ("Price", Length::FillPortion(1)),
            ("Provider", Length::FillPortion(2)),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.barcode.clone(),
            self.name.clone(),
            self.display_price(),
            self.provider.clone(),
        ]
    }

    async fn fetch(
        network: Arc<NetworkClient>,
        params: SearchParams,
    ) -> Result<Outcome<SearchPage<Self>>> {
        network.search_products(&params).await
    }
}

#[async_trait]
impl Listable for StoreBranch {
    const TITLE: &'static str = "Store branches";
    const PLACEHOLDER: &'static str = "Search store branches";

    fn columns() -> Vec<(&'static str, Length)> {
        vec![
            ("Name", Length::FillPortion(2)),
            ("Address", Length::FillPortion(3)),
            ("Location", Length::FillPortion(2)),
            ("Hours", Length::FillPortion(2)),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.address.clone(),
            format!("{}, {}", self.latitude, self.longitude),
            format!("{} - {}", self.opening_hours, self.closing_hours),
        ]
    }

    async fn fetch(
        network: Arc<NetworkClient>,
        params: SearchParams,
    ) -> Result<Outcome<SearchPage<Self>>> {
        network.search_store_branches(&params).await
    }
}
