//! Route coster that derives elapsed time, operating cost and recycling revenue.

use crate::config::CostRates;
use crate::estimation::{YieldEstimate, YieldEstimator};
use crate::models::{CostBreakdown, Route};

/// Costs a collection route.
///
/// Distance comes from the route itself (legs plus depot overhead). Elapsed
/// time is driving time at the average speed plus a fixed service time per
/// stop; fuel and depreciation scale with distance, labor with time.
/// Recycling revenue is summed over per-stop yield estimates.
///
/// # Examples
///
/// ```
/// use waste_routing::config::CostRates;
/// use waste_routing::estimation::FixedYield;
/// use waste_routing::evaluation::RouteCoster;
/// use waste_routing::models::Route;
///
/// let coster = RouteCoster::new(CostRates::default());
/// let cost = coster.cost(&Route::empty(), &mut FixedYield::new(80.0, 0.1));
/// assert_eq!(cost.operating_cost(), 0.0);
/// assert_eq!(cost.recycling_revenue, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteCoster {
    rates: CostRates,
}

impl RouteCoster {
    /// Creates a coster with the given rates.
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    /// Rates in use.
    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Driving time at the average speed plus service time for `stops`.
    pub fn elapsed_hours(&self, distance_km: f64, stops: usize) -> f64 {
        distance_km / self.rates.average_speed_kmh
            + self.rates.service_hours_per_stop * stops as f64
    }

    /// Costs `route`, drawing one yield estimate per stop.
    pub fn cost<E>(&self, route: &Route, estimator: &mut E) -> CostBreakdown
    where
        E: YieldEstimator + ?Sized,
    {
        self.cost_with_yields(route, estimator).0
    }

    /// Costs `route` and also returns the per-stop yield estimates in stop order.
    pub fn cost_with_yields<E>(
        &self,
        route: &Route,
        estimator: &mut E,
    ) -> (CostBreakdown, Vec<YieldEstimate>)
    where
        E: YieldEstimator + ?Sized,
    {
        let distance_km = route.total_distance_km();
        let stops = route.len();
        let elapsed_hours = self.elapsed_hours(distance_km, stops);

        let yields: Vec<YieldEstimate> = route
            .stops()
            .iter()
            .map(|stop| estimator.estimate(stop))
            .collect();
        let recycling_revenue: f64 = yields.iter().map(YieldEstimate::revenue).sum();

        let breakdown = CostBreakdown {
            distance_km,
            elapsed_hours,
            stops,
            fuel: distance_km * self.rates.fuel_per_km,
            labor: elapsed_hours * self.rates.labor_per_hour,
            depreciation: distance_km * self.rates.depreciation_per_km,
            recycling_revenue,
        };
        (breakdown, yields)
    }
}
