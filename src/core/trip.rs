//! Trip data model - One logged freight job with its route, cargo and money fields.
//!
//! Trips are serialized with camelCase keys, the same shape the FreteSmart web app keeps
//! in local storage. Amounts are `Decimal`; they are written as strings and read back
//! from either strings or JSON numbers. The web app's Portuguese enum labels
//! (`"Em andamento"`, `"Combustível"`, ...) are accepted on read.

use crate::{
    core::input::{format_start_date, parse_money_field},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable trip identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    /// Generates a fresh unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrows the id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trip lifecycle status. Trips start `InProgress`; nothing moves them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    /// The freight is still on the road
    #[serde(alias = "Em andamento")]
    InProgress,
    /// The freight was delivered
    #[serde(alias = "Concluído")]
    Completed,
}

impl TripStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// Category of an itemized trip expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Diesel and other fuel
    #[serde(alias = "Combustível")]
    Fuel,
    /// Road tolls
    #[serde(alias = "Pedágio")]
    Toll,
    /// Meals on the road
    #[serde(alias = "Alimentação")]
    Food,
    /// Repairs and upkeep
    #[serde(alias = "Manutenção")]
    Maintenance,
    /// Anything else
    #[serde(alias = "Outros")]
    Other,
}

/// An itemized expense attached to a trip. Not aggregated into trip totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: String,
    /// What the money was spent on
    pub category: ExpenseCategory,
    /// Amount spent
    pub amount: Decimal,
    /// Date of the expense, display format
    pub date: String,
    /// Free text description
    pub description: String,
}

/// One freight job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier, assigned at creation
    pub id: TripId,
    /// Departure place name
    pub origin: String,
    /// Arrival place name
    pub destination: String,
    /// Route length in kilometres
    pub distance: Decimal,
    /// Gross revenue billed for the trip
    pub freight_value: Decimal,
    /// Portion of the freight paid to the driver
    pub driver_commission: Decimal,
    /// Fuel spent
    pub fuel_cost: Decimal,
    /// Tolls paid
    pub toll_cost: Decimal,
    /// Any other cost
    pub other_expenses: Decimal,
    /// Pre-payment to the driver; cash-flow timing only, never a cost
    pub advance_amount: Decimal,
    /// Cargo description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    /// Cargo weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    /// Vehicle plate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    /// Itemized expenses
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Lifecycle status
    pub status: TripStatus,
    /// Start date, `DD/MM/YYYY`
    pub start_date: String,
    /// End date, `DD/MM/YYYY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trip {
    /// Builds a new in-progress trip from a text submission.
    ///
    /// Numeric fields go through [`parse_money_field`], so malformed numbers become zero
    /// rather than failing. The weight is always present (zero when left blank).
    #[must_use]
    pub fn from_draft(draft: &TripDraft, id: TripId, today: NaiveDate) -> Self {
        Self {
            id,
            origin: draft.origin.trim().to_string(),
            destination: draft.destination.trim().to_string(),
            distance: parse_money_field(&draft.distance),
            freight_value: parse_money_field(&draft.freight_value),
            driver_commission: parse_money_field(&draft.driver_commission),
            fuel_cost: parse_money_field(&draft.fuel_cost),
            toll_cost: parse_money_field(&draft.toll_cost),
            other_expenses: parse_money_field(&draft.other_expenses),
            advance_amount: parse_money_field(&draft.advance_amount),
            cargo: non_empty(&draft.cargo),
            weight: Some(parse_money_field(&draft.weight)),
            plate: non_empty(&draft.plate),
            expenses: Vec::new(),
            status: TripStatus::InProgress,
            start_date: format_start_date(&draft.start_date, today),
            end_date: None,
            notes: non_empty(&draft.notes),
        }
    }

    /// Sum of the costs that count against profit.
    ///
    /// `advance_amount` is not a cost and is left out. Saturates at `Decimal::MAX`
    /// for stored documents carrying out-of-range amounts.
    #[must_use]
    pub fn total_costs(&self) -> Decimal {
        self.fuel_cost
            .saturating_add(self.toll_cost)
            .saturating_add(self.driver_commission)
            .saturating_add(self.other_expenses)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A trip submission as typed by the user. Every field is raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDraft {
    /// Departure place name
    pub origin: String,
    /// Arrival place name
    pub destination: String,
    /// Start date, usually `YYYY-MM-DD`
    pub start_date: String,
    /// Distance in kilometres
    pub distance: String,
    /// Gross freight value
    pub freight_value: String,
    /// Driver commission
    pub driver_commission: String,
    /// Fuel cost
    pub fuel_cost: String,
    /// Toll cost
    pub toll_cost: String,
    /// Other expenses
    pub other_expenses: String,
    /// Advance paid to the driver
    pub advance_amount: String,
    /// Cargo description
    pub cargo: String,
    /// Cargo weight
    pub weight: String,
    /// Vehicle plate
    pub plate: String,
    /// Free text notes
    pub notes: String,
}

impl TripDraft {
    /// Checks the fields a trip cannot do without.
    ///
    /// Only the route is required; numbers are never rejected.
    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(Error::InvalidDraft {
                message: "origin cannot be empty".to_string(),
            });
        }
        if self.destination.trim().is_empty() {
            return Err(Error::InvalidDraft {
                message: "destination cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
