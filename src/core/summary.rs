//! Financial summary engine.
//!
//! Pure functions over a slice of trips: dashboard totals, the profit ratio and the
//! per-trip profit. All arithmetic is `Decimal`, so the dashboard net profit is
//! exactly the sum of per-trip profits. The driver advance never enters either side.
//! Sums saturate instead of overflowing, so out-of-range stored amounts still render.

use crate::core::trip::Trip;
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Aggregate statistics over every trip in the store. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Sum of freight values
    pub total_revenue: Decimal,
    /// Sum of fuel, toll, commission and other expenses
    pub total_expenses: Decimal,
    /// Revenue minus expenses
    pub net_profit: Decimal,
    /// Number of trips
    pub trip_count: usize,
}

impl DashboardStats {
    /// Share of revenue consumed by expenses, as a rounded percentage.
    ///
    /// Zero when there is no revenue. Together with [`profit_ratio`] this is the
    /// profit/expense split of the dashboard chart.
    #[must_use]
    pub fn expense_share(&self) -> i64 {
        percent_of_revenue(self.total_expenses, self.total_revenue)
    }
}

/// Computes dashboard totals in a single pass.
///
/// An empty slice yields all zeros.
#[must_use]
pub fn compute_stats(trips: &[Trip]) -> DashboardStats {
    let (total_revenue, total_expenses) = trips.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(revenue, expenses), trip| {
            (
                revenue.saturating_add(trip.freight_value),
                expenses.saturating_add(trip.total_costs()),
            )
        },
    );

    DashboardStats {
        total_revenue,
        total_expenses,
        net_profit: total_revenue.saturating_sub(total_expenses),
        trip_count: trips.len(),
    }
}

/// Net profit as a percentage of revenue, rounded to the nearest integer.
///
/// Zero when revenue is zero. Halves round up (toward positive infinity).
#[must_use]
pub fn profit_ratio(stats: &DashboardStats) -> i64 {
    percent_of_revenue(stats.net_profit, stats.total_revenue)
}

/// Freight value minus fuel, toll, commission and other expenses.
#[must_use]
pub fn profit(trip: &Trip) -> Decimal {
    trip.freight_value.saturating_sub(trip.total_costs())
}

fn percent_of_revenue(part: Decimal, revenue: Decimal) -> i64 {
    if revenue.is_zero() {
        return 0;
    }

    // Out of range results pin to the i64 bound with the sign of the ratio.
    let saturated = if part.is_sign_negative() == revenue.is_sign_negative() {
        i64::MAX
    } else {
        i64::MIN
    };

    part.checked_div(revenue)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|percent| percent.checked_add(Decimal::new(5, 1)))
        .and_then(|percent| percent.floor().to_i64())
        .unwrap_or(saturated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::trip_with_amounts;

    fn first_trip() -> Trip {
        trip_with_amounts("1", 2800, 400, 160, 300, 100, 1000)
    }

    fn second_trip() -> Trip {
        trip_with_amounts("2", 4500, 900, 400, 450, 100, 1500)
    }

    #[test]
    fn test_profit_of_single_trip() {
        assert_eq!(profit(&first_trip()), Decimal::from(1840));
    }

    #[test]
    fn test_advance_does_not_change_profit() {
        let mut trip = first_trip();
        trip.advance_amount = Decimal::from(2500);
        assert_eq!(profit(&trip), Decimal::from(1840));
    }

    #[test]
    fn test_compute_stats_two_trips() {
        let stats = compute_stats(&[first_trip(), second_trip()]);
        assert_eq!(
            stats,
            DashboardStats {
                total_revenue: Decimal::from(7300),
                total_expenses: Decimal::from(2710),
                net_profit: Decimal::from(4590),
                trip_count: 2,
            }
        );
        assert_eq!(profit_ratio(&stats), 63);
        assert_eq!(stats.expense_share(), 37);
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.trip_count, 0);
    }

    #[test]
    fn test_profit_ratio_zero_revenue() {
        let stats = DashboardStats {
            total_revenue: Decimal::ZERO,
            total_expenses: Decimal::from(500),
            net_profit: Decimal::from(-500),
            trip_count: 1,
        };
        assert_eq!(profit_ratio(&stats), 0);
        assert_eq!(stats.expense_share(), 0);
    }

    #[test]
    fn test_profit_ratio_rounds_half_up() {
        let stats = DashboardStats {
            total_revenue: Decimal::from(200),
            total_expenses: Decimal::from(199),
            net_profit: Decimal::from(1),
            trip_count: 1,
        };
        // 0.5% rounds up, like Math.round
        assert_eq!(profit_ratio(&stats), 1);

        let losing = DashboardStats {
            total_revenue: Decimal::from(200),
            total_expenses: Decimal::from(201),
            net_profit: Decimal::from(-1),
            trip_count: 1,
        };
        // -0.5% rounds toward positive infinity
        assert_eq!(profit_ratio(&losing), 0);
    }

    #[test]
    fn test_profit_ratio_negative() {
        let stats = compute_stats(&[trip_with_amounts("x", 1000, 900, 200, 100, 0, 0)]);
        assert_eq!(stats.net_profit, Decimal::from(-200));
        assert_eq!(profit_ratio(&stats), -20);
    }

    #[test]
    fn test_huge_amounts_do_not_panic() {
        let mut trip = trip_with_amounts("big", 0, 0, 0, 0, 0, 0);
        trip.fuel_cost = Decimal::MAX;
        trip.toll_cost = Decimal::MAX;
        let stats = compute_stats(&[trip.clone(), trip.clone()]);

        assert_eq!(stats.total_expenses, Decimal::MAX);
        assert_eq!(stats.net_profit, Decimal::MIN);
        assert_eq!(profit(&trip), Decimal::MIN);
        assert_eq!(profit_ratio(&stats), 0);
    }

    #[test]
    fn test_tiny_revenue_against_large_cost_saturates_ratio() {
        let stats = DashboardStats {
            total_revenue: Decimal::new(1, 7),
            total_expenses: Decimal::from(10_i64.pow(18)) * Decimal::from(10_000),
            net_profit: -(Decimal::from(10_i64.pow(18)) * Decimal::from(10_000)),
            trip_count: 1,
        };
        assert_eq!(profit_ratio(&stats), i64::MIN);
        assert_eq!(stats.expense_share(), i64::MAX);
    }

    #[test]
    fn test_sum_of_profits_equals_net_profit() {
        // Fractional cents that would drift under binary floating point.
        let mut trips = Vec::new();
        for i in 0..50_i64 {
            let mut trip = trip_with_amounts(&i.to_string(), 1000 + i * 37, 10 * i, 3, 7 * i, 1, 0);
            trip.freight_value += Decimal::new(i * 11 + 1, 2);
            trip.fuel_cost += Decimal::new(i * 3 + 7, 2);
            trip.toll_cost += Decimal::new(10, 2);
            trip.other_expenses += Decimal::new(20, 2);
            trips.push(trip);

            let summed: Decimal = trips.iter().map(profit).sum();
            let stats = compute_stats(&trips);
            assert_eq!(summed, stats.net_profit);
            assert_eq!(stats.trip_count, trips.len());
        }
    }
}
