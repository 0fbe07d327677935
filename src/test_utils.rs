//! Shared test utilities for FreteSmart.
//!
//! Helpers for setting up an in-memory database and building trips and drafts
//! with sensible defaults.

use crate::{
    core::trip::{Trip, TripDraft, TripId, TripStatus},
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all storage tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A complete draft matching the first example trip.
///
/// # Defaults
/// * route: Curitiba, PR → Florianópolis, SC, 300 km, 2026-02-11
/// * money: freight 2800, commission 300, fuel 400, tolls 160, other 100, advance 1000
/// * cargo: Eletrônicos, 12000 kg, plate XYZ-9876
#[must_use]
pub fn sample_draft() -> TripDraft {
    TripDraft {
        origin: "Curitiba, PR".to_string(),
        destination: "Florianópolis, SC".to_string(),
        start_date: "2026-02-11".to_string(),
        distance: "300".to_string(),
        freight_value: "2800".to_string(),
        driver_commission: "300".to_string(),
        fuel_cost: "400".to_string(),
        toll_cost: "160".to_string(),
        other_expenses: "100".to_string(),
        advance_amount: "1000".to_string(),
        cargo: "Eletrônicos".to_string(),
        weight: "12000".to_string(),
        plate: "XYZ-9876".to_string(),
        notes: String::new(),
    }
}

/// Builds a trip with whole-number money fields.
///
/// Argument order follows the profit formula: freight, fuel, toll, commission,
/// other expenses, then the advance.
#[must_use]
pub fn trip_with_amounts(
    id: &str,
    freight_value: i64,
    fuel_cost: i64,
    toll_cost: i64,
    driver_commission: i64,
    other_expenses: i64,
    advance_amount: i64,
) -> Trip {
    Trip {
        id: TripId::from(id),
        origin: "Origin".to_string(),
        destination: "Destination".to_string(),
        distance: Decimal::from(100),
        freight_value: Decimal::from(freight_value),
        driver_commission: Decimal::from(driver_commission),
        fuel_cost: Decimal::from(fuel_cost),
        toll_cost: Decimal::from(toll_cost),
        other_expenses: Decimal::from(other_expenses),
        advance_amount: Decimal::from(advance_amount),
        cargo: None,
        weight: None,
        plate: None,
        expenses: Vec::new(),
        status: TripStatus::InProgress,
        start_date: "01/01/2026".to_string(),
        end_date: None,
        notes: None,
    }
}
