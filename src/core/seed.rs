//! Example trips used to seed an empty trip log.

use crate::core::trip::{Trip, TripId, TripStatus};
use rust_decimal::Decimal;

/// The two demo trips shown on first start, newest first.
#[must_use]
pub fn example_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: TripId::from("1"),
            origin: "Curitiba, PR".to_string(),
            destination: "Florianópolis, SC".to_string(),
            distance: Decimal::from(300),
            freight_value: Decimal::from(2800),
            driver_commission: Decimal::from(300),
            fuel_cost: Decimal::from(400),
            toll_cost: Decimal::from(160),
            other_expenses: Decimal::from(100),
            advance_amount: Decimal::from(1000),
            cargo: Some("Eletrônicos".to_string()),
            weight: Some(Decimal::from(12_000)),
            plate: Some("XYZ-9876".to_string()),
            expenses: Vec::new(),
            status: TripStatus::InProgress,
            start_date: "11/02/2026".to_string(),
            end_date: None,
            notes: None,
        },
        Trip {
            id: TripId::from("2"),
            origin: "São Paulo, SP".to_string(),
            destination: "Curitiba, PR".to_string(),
            distance: Decimal::from(408),
            freight_value: Decimal::from(4500),
            driver_commission: Decimal::from(450),
            fuel_cost: Decimal::from(900),
            toll_cost: Decimal::from(400),
            other_expenses: Decimal::from(100),
            advance_amount: Decimal::from(1500),
            cargo: Some("Grãos".to_string()),
            weight: Some(Decimal::from(25_000)),
            plate: Some("ABC-1234".to_string()),
            expenses: Vec::new(),
            status: TripStatus::Completed,
            start_date: "08/02/2026".to_string(),
            end_date: None,
            notes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::{compute_stats, profit_ratio};

    #[test]
    fn test_example_trips_dashboard() {
        let stats = compute_stats(&example_trips());
        assert_eq!(stats.total_revenue, Decimal::from(7300));
        assert_eq!(stats.total_expenses, Decimal::from(2710));
        assert_eq!(stats.net_profit, Decimal::from(4590));
        assert_eq!(profit_ratio(&stats), 63);
    }
}
