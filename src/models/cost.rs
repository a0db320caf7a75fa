//! Cost breakdown and cost-optimization suggestions.

use serde::{Deserialize, Serialize};

/// Distance (km) above which a single vehicle is considered overloaded.
pub const LONG_ROUTE_KM: f64 = 50.0;

/// Stop count below which trips are considered under-batched.
pub const MIN_BATCHED_STOPS: usize = 3;

/// Expected saving from optimized scheduling, as a fraction of operating cost.
pub const SCHEDULING_SAVING_RATE: f64 = 0.15;

/// Operating days per month used for savings projections.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Operating cost and recycling offset of one collection route.
///
/// All figures are unrounded; round only when displaying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total distance including depot overhead (km).
    pub distance_km: f64,
    /// Driving plus service time (hours).
    pub elapsed_hours: f64,
    /// Number of stops served.
    pub stops: usize,
    /// Fuel cost.
    pub fuel: f64,
    /// Crew labor cost.
    pub labor: f64,
    /// Vehicle depreciation.
    pub depreciation: f64,
    /// Estimated recycling revenue.
    pub recycling_revenue: f64,
}

impl CostBreakdown {
    /// Fuel + labor + depreciation.
    pub fn operating_cost(&self) -> f64 {
        self.fuel + self.labor + self.depreciation
    }

    /// Operating cost minus recycling revenue. Negative means a net profit.
    pub fn net_cost(&self) -> f64 {
        self.operating_cost() - self.recycling_revenue
    }

    /// Returns `true` if revenue exceeds operating cost.
    pub fn is_profitable(&self) -> bool {
        self.net_cost() < 0.0
    }

    /// Cost-optimization hints for this route.
    ///
    /// Always ends with the projected monthly saving.
    pub fn suggestions(&self) -> Vec<CostSuggestion> {
        let mut out = Vec::new();
        if self.distance_km > LONG_ROUTE_KM {
            out.push(CostSuggestion::AddVehicles);
        }
        if self.stops < MIN_BATCHED_STOPS {
            out.push(CostSuggestion::BatchMoreBins);
        }
        out.push(CostSuggestion::MonthlySavings(
            self.operating_cost() * DAYS_PER_MONTH * SCHEDULING_SAVING_RATE,
        ));
        out
    }
}

/// A cost-optimization hint derived from a [`CostBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CostSuggestion {
    /// Route is long enough to justify a second vehicle.
    AddVehicles,
    /// Too few stops per trip; collect less often in larger batches.
    BatchMoreBins,
    /// Projected monthly saving from optimized scheduling.
    MonthlySavings(f64),
}

impl std::fmt::Display for CostSuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostSuggestion::AddVehicles => {
                f.write_str("Consider deploying additional collection vehicles for long routes")
            }
            CostSuggestion::BatchMoreBins => {
                f.write_str("Optimize collection frequency to batch more bins per trip")
            }
            CostSuggestion::MonthlySavings(amount) => {
                write!(f, "Potential monthly savings: ${amount:.2}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(distance_km: f64, stops: usize, revenue: f64) -> CostBreakdown {
        CostBreakdown {
            distance_km,
            elapsed_hours: 1.0,
            stops,
            fuel: 10.0,
            labor: 25.0,
            depreciation: 5.0,
            recycling_revenue: revenue,
        }
    }

    #[test]
    fn test_operating_and_net() {
        let c = breakdown(10.0, 4, 15.0);
        assert!((c.operating_cost() - 40.0).abs() < 1e-10);
        assert!((c.net_cost() - 25.0).abs() < 1e-10);
        assert!(!c.is_profitable());
    }

    #[test]
    fn test_net_cost_may_be_negative() {
        let c = breakdown(10.0, 4, 55.0);
        assert!((c.net_cost() + 15.0).abs() < 1e-10);
        assert!(c.is_profitable());
    }

    #[test]
    fn test_suggestions_short_busy_route() {
        let s = breakdown(10.0, 4, 0.0).suggestions();
        assert_eq!(s.len(), 1);
        match s[0] {
            CostSuggestion::MonthlySavings(v) => assert!((v - 40.0 * 30.0 * 0.15).abs() < 1e-10),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_suggestions_long_sparse_route() {
        let s = breakdown(50.5, 2, 0.0).suggestions();
        assert_eq!(s[0], CostSuggestion::AddVehicles);
        assert_eq!(s[1], CostSuggestion::BatchMoreBins);
        assert!(matches!(s[2], CostSuggestion::MonthlySavings(_)));
    }

    #[test]
    fn test_suggestion_boundaries() {
        let s = breakdown(50.0, 3, 0.0).suggestions();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_suggestion_display() {
        assert_eq!(
            CostSuggestion::MonthlySavings(180.0).to_string(),
            "Potential monthly savings: $180.00"
        );
    }
}
