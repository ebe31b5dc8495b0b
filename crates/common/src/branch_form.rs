use thiserror::Error;
use tracing::error;

use crate::{models::NewStoreBranch, notice::Notice, services::ResultKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchField {
    Name,
    Address,
    Latitude,
    Longitude,
    OpeningHours,
    ClosingHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BranchFormError {
    #[error("invalid branch name")]
    Name,
    #[error("invalid address")]
    Address,
    #[error("invalid latitude")]
    Latitude,
    #[error("invalid longitude")]
    Longitude,
    #[error("invalid opening hours")]
    OpeningHours,
    #[error("invalid closing hours")]
    ClosingHours,
    #[error("a registration is already being processed")]
    Busy,
}

impl From<BranchFormError> for Notice {
    fn from(value: BranchFormError) -> Self {
        Notice::Invalid(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchForm {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub opening_hours: String,
    pub closing_hours: String,
    is_submitting: bool,
}

fn coordinate(raw: &str, limit: f64) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
}

impl BranchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn input(&mut self, field: BranchField, value: String) {
        match field {
            BranchField::Name => self.name = value,
            BranchField::Address => self.address = value,
            BranchField::Latitude => self.latitude = value,
            BranchField::Longitude => self.longitude = value,
            BranchField::OpeningHours => self.opening_hours = value,
            BranchField::ClosingHours => self.closing_hours = value,
        }
    }

    /// Builds the request body, or the first field that does not check out.
    pub fn to_request(&self) -> Result<NewStoreBranch, BranchFormError> {
        if self.name.trim().is_empty() {
            return Err(BranchFormError::Name);
        }
        if self.address.trim().is_empty() {
            return Err(BranchFormError::Address);
        }
        let latitude = coordinate(&self.latitude, 90.0).ok_or(BranchFormError::Latitude)?;
        let longitude = coordinate(&self.longitude, 180.0).ok_or(BranchFormError::Longitude)?;
        if self.opening_hours.trim().is_empty() {
            return Err(BranchFormError::OpeningHours);
        }
        if self.closing_hours.trim().is_empty() {
            return Err(BranchFormError::ClosingHours);
        }
        Ok(NewStoreBranch {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            opening_hours: self.opening_hours.trim().to_string(),
            closing_hours: self.closing_hours.trim().to_string(),
        })
    }

    pub fn begin_submit(&mut self) -> Result<NewStoreBranch, BranchFormError> {
        if self.is_submitting {
            return Err(BranchFormError::Busy);
        }
        let req = self.to_request()?;
        self.is_submitting = true;
        Ok(req)
    }

    /// Server side validation details are logged, never shown.
    pub fn finish_submit(&mut self, result: Result<ResultKind, String>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(ResultKind::Success) => {
                *self = Self::default();
                Notice::BranchRegistered
            }
            Ok(kind) => {
                error!("Store branch not registered: {:?}", kind);
                Notice::BranchRejected
            }
            Err(e) => {
                error!("Store branch request failed: {}", e);
                Notice::BranchRejected
            }
        }
    }
}
