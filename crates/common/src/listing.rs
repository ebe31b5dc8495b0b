//! State behind a paginated, searchable list.
//!
//! The view never performs I/O itself. Every transition that needs data
//! hands back a [`FetchRequest`]; whoever runs it reports the result with
//! [`ListView::apply`] along with the request's token. Responses may come
//! back in any order.

use std::fmt::Display;

use tracing::{debug, warn};

use crate::{
    models::SearchPage,
    services::{DEFAULT_PAGE_SIZE, Outcome, SearchParams},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub params: SearchParams,
}

/// Which of several overlapping responses ends up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request is applied.
    #[default]
    LastIssued,
    /// Every response is applied as it arrives, so a slow early response
    /// can overwrite a faster later one.
    LastArrived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub links: Vec<PageLink>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Debug, Clone)]
pub struct ListView<R> {
    query: String,
    current_page: u32,
    total_pages: u32,
    rows: Vec<R>,
    page_size: u32,
    ordering: ResponseOrdering,
    issued: u64,
}

impl<R> Default for ListView<R> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<R> ListView<R> {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_pages: 1,
            rows: vec![],
            page_size: page_size.max(1),
            ordering: ResponseOrdering::default(),
            issued: 0,
        }
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn fetch(&mut self, page: u32) -> FetchRequest {
        self.issued += 1;
        FetchRequest {
            token: RequestToken(self.issued),
            params: SearchParams::new(self.query.clone(), self.page_size, page),
        }
    }

    /// First load: empty query, first page.
    pub fn mount(&mut self) -> FetchRequest {
        self.query.clear();
        self.fetch(1)
    }

    /// Every keystroke refetches the page currently shown.
    pub fn set_query(&mut self, query: String) -> FetchRequest {
        self.query = query;
        self.fetch(self.current_page)
    }

    pub fn select_page(&mut self, page: u32) -> Option<FetchRequest> {
        if page < 1 || page > self.total_pages {
            return None;
        }
        Some(self.fetch(page))
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.select_page(self.current_page.checked_add(1)?)
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        self.select_page(self.current_page.checked_sub(1)?)
    }

    fn accepts(&self, token: RequestToken) -> bool {
        match self.ordering {
            ResponseOrdering::LastArrived => true,
            ResponseOrdering::LastIssued => token.0 == self.issued,
        }
    }

    /// Returns whether the page was applied.
    pub fn apply_success(&mut self, token: RequestToken, page: SearchPage<R>) -> bool {
        if !self.accepts(token) {
            debug!("Dropping stale list response {:?}", token);
            return false;
        }
        self.total_pages = page.total_pages.max(1);
        self.current_page = page.current_page.clamp(1, self.total_pages);
        self.rows = page.results;
        true
    }

    /// Empties the rows. Pagination stays where it was.
    pub fn apply_failure(&mut self, token: RequestToken) -> bool {
        if !self.accepts(token) {
            debug!("Dropping stale list failure {:?}", token);
            return false;
        }
        warn!(
            "List fetch failed for query {:?} page {}",
            self.query, self.current_page
        );
        self.rows.clear();
        true
    }

    /// Applies whatever a fetch produced. Anything but `Success` clears the
    /// rows.
    pub fn apply<E: Display>(
        &mut self,
        token: RequestToken,
        result: Result<Outcome<SearchPage<R>>, E>,
    ) -> bool {
        match result {
            Ok(Outcome::Success(page)) => self.apply_success(token, page),
            Ok(other) => {
                warn!("List fetch returned {:?}", other.kind());
                self.apply_failure(token)
            }
            Err(e) => {
                warn!("List fetch errored: {}", e);
                self.apply_failure(token)
            }
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            links: (1..=self.total_pages)
                .map(|page| PageLink {
                    page,
                    active: page == self.current_page,
                })
                .collect(),
            previous_disabled: self.current_page <= 1,
            next_disabled: self.current_page >= self.total_pages,
        }
    }
}
