use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

/// Vehicle condition, stored as its variant name in the condition column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::Type)]
pub enum Condition {
    New,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// All conditions in the order selection widgets present them
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];
}

impl Default for Condition {
    fn default() -> Self {
        Self::New
    }
}

/// Database listing model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Listing {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i64,
    pub condition: Condition,
    pub description: Option<String>,
    pub added_on: DateTime<Utc>,
}

/// Write payload for creating or updating a listing; `id` and `added_on`
/// are assigned by the database and never supplied by callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i64,
    pub condition: Condition,
    pub description: Option<String>,
}

impl ListingDraft {
    /// Check field constraints, returning the draft with make and model trimmed
    pub fn validated(mut self) -> Result<Self> {
        self.make = self.make.trim().to_string();
        self.model = self.model.trim().to_string();

        if self.make.is_empty() {
            return Err(AppError::InvalidListing("make cannot be empty".into()));
        }
        if self.model.is_empty() {
            return Err(AppError::InvalidListing("model cannot be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::InvalidListing(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        if self.mileage < 0 {
            return Err(AppError::InvalidListing(format!(
                "mileage must be non-negative, got {}",
                self.mileage
            )));
        }

        Ok(self)
    }
}

impl From<Listing> for ListingDraft {
    fn from(listing: Listing) -> Self {
        Self {
            make: listing.make,
            model: listing.model,
            year: listing.year,
            price: listing.price,
            mileage: listing.mileage,
            condition: listing.condition,
            description: listing.description,
        }
    }
}
