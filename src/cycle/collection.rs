//! One daily collection pass.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::CycleReporter;
use crate::config::CycleConfig;
use crate::constructive::nearest_neighbor_route;
use crate::estimation::{
    EnvironmentalImpact, FixedConfidence, SortingConfidence, YieldEstimate, YieldEstimator,
};
use crate::evaluation::RouteCoster;
use crate::models::{CategoryTable, CostBreakdown, CostSuggestion, Fleet, Route};
use crate::selection::BinSelector;
use crate::sensors::SensorSource;

/// What was picked up at one stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedLoad {
    /// Bin the load came from.
    pub bin_id: String,
    /// Category label of the bin's waste type.
    pub category: String,
    /// Weight recorded by the bin sensor at selection time (kg).
    pub recorded_weight_kg: f64,
    /// Estimated collected weight and value.
    pub estimate: YieldEstimate,
    /// Confidence (0..=1) with which the load was sorted into `category`.
    pub confidence: f64,
}

impl CollectedLoad {
    /// Estimated recycling revenue of this load.
    pub fn revenue(&self) -> f64 {
        self.estimate.revenue()
    }

    /// Sorting outcome, e.g. `Recyclable Materials (93.4% confidence)`.
    pub fn sorting_summary(&self) -> String {
        format!("{} ({:.1}% confidence)", self.category, self.confidence * 100.0)
    }
}

/// Result of a cycle in which at least one bin was collected.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Visiting order.
    pub route: Route,
    /// Cost of driving the route.
    pub cost: CostBreakdown,
    /// Per-stop loads in route order.
    pub loads: Vec<CollectedLoad>,
    /// Impact of the estimated collected weight.
    pub impact: EnvironmentalImpact,
    /// Cost-optimization hints.
    pub suggestions: Vec<CostSuggestion>,
}

/// Outcome of one collection cycle.
#[derive(Debug, Clone, Serialize)]
pub enum CycleOutcome {
    /// No bin qualified; nothing was routed, costed or emptied.
    NoCollectionNeeded,
    /// A route was built, costed and driven.
    Collected(CycleReport),
}

impl CycleOutcome {
    /// The report, if anything was collected.
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            CycleOutcome::NoCollectionNeeded => None,
            CycleOutcome::Collected(report) => Some(report),
        }
    }
}

/// Orchestrates select → route → cost → collect → report.
///
/// The cycle holds no state between runs other than its estimator and
/// sorter; the only
/// lasting effect of [`run`](Self::run) is the sensor refresh and the
/// collection reset applied to the fleet.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use waste_routing::config::CycleConfig;
/// use waste_routing::cycle::{CollectionCycle, CycleOutcome};
/// use waste_routing::estimation::FixedYield;
/// use waste_routing::models::{Bin, Coordinate, Fleet, SensorReading, WasteType};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let mut fleet = Fleet::new();
/// fleet.deploy(Bin::new("BIN001", "Downtown Plaza", Coordinate::new(40.7589, -73.9851), now));
/// fleet.deploy(Bin::new("BIN002", "Central Park", Coordinate::new(40.7829, -73.9654), now));
///
/// let mut cycle = CollectionCycle::new(&CycleConfig::default(), FixedYield::new(80.0, 0.1));
/// let mut sensors = |_: &Bin| SensorReading::new(90, 75.0, WasteType::Recyclable).unwrap();
/// let mut reporter = |_: &CycleOutcome| {};
///
/// let outcome = cycle.run(&mut fleet, &mut sensors, now, &mut reporter);
/// let report = outcome.report().unwrap();
/// assert_eq!(report.route.len(), 2);
/// assert_eq!(fleet.get("BIN001").unwrap().fill_level(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CollectionCycle<E, C = FixedConfidence> {
    selector: BinSelector,
    coster: RouteCoster,
    categories: CategoryTable,
    depot_overhead_km: f64,
    estimator: E,
    sorter: C,
}

impl<E: YieldEstimator> CollectionCycle<E> {
    /// Creates a cycle from configuration and a yield estimator.
    ///
    /// Loads are reported as sorted with full confidence until a sorter is
    /// attached with [`with_sorter`](Self::with_sorter).
    pub fn new(config: &CycleConfig, estimator: E) -> Self {
        Self {
            selector: BinSelector::from_policy(&config.selection),
            coster: RouteCoster::new(config.rates.clone()),
            categories: CategoryTable::standard(),
            depot_overhead_km: config.depot_overhead_km,
            estimator,
            sorter: FixedConfidence::default(),
        }
    }
}

impl<E: YieldEstimator, C: SortingConfidence> CollectionCycle<E, C> {
    /// Replaces the source of per-load sorting confidence.
    pub fn with_sorter<S: SortingConfidence>(self, sorter: S) -> CollectionCycle<E, S> {
        CollectionCycle {
            selector: self.selector,
            coster: self.coster,
            categories: self.categories,
            depot_overhead_km: self.depot_overhead_km,
            estimator: self.estimator,
            sorter,
        }
    }

    /// Replaces the category table used to label loads.
    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    /// Selection policy in use.
    pub fn selector(&self) -> &BinSelector {
        &self.selector
    }

    /// Coster in use.
    pub fn coster(&self) -> &RouteCoster {
        &self.coster
    }

    /// Selects, routes and costs without touching the fleet.
    ///
    /// Returns [`CycleOutcome::NoCollectionNeeded`] without building a route
    /// when no bin qualifies.
    pub fn plan(&mut self, fleet: &Fleet, now: DateTime<Utc>) -> CycleOutcome {
        let candidates = self.selector.select(fleet.bins(), now);
        if candidates.is_empty() {
            return CycleOutcome::NoCollectionNeeded;
        }

        let route = nearest_neighbor_route(&candidates, self.depot_overhead_km);
        let (cost, yields) = self.coster.cost_with_yields(&route, &mut self.estimator);

        let mut loads = Vec::with_capacity(route.len());
        for (stop, estimate) in route.stops().iter().zip(yields) {
            loads.push(CollectedLoad {
                bin_id: stop.bin_id().to_string(),
                category: self.categories.lookup(stop.waste_type()).label().to_string(),
                recorded_weight_kg: stop.weight_kg(),
                estimate,
                confidence: self.sorter.confidence(stop),
            });
        }
        let impact = EnvironmentalImpact::from_weights(loads.iter().map(|l| l.estimate.weight_kg));
        let suggestions = cost.suggestions();

        CycleOutcome::Collected(CycleReport {
            route,
            cost,
            loads,
            impact,
            suggestions,
        })
    }

    /// Runs one full daily pass.
    ///
    /// Refreshes every bin from `sensors`, plans the pass, empties the routed
    /// bins (once each, stamped `now`) and hands the outcome to `reporter`.
    pub fn run<S, P>(
        &mut self,
        fleet: &mut Fleet,
        sensors: &mut S,
        now: DateTime<Utc>,
        reporter: &mut P,
    ) -> CycleOutcome
    where
        S: SensorSource + ?Sized,
        P: CycleReporter + ?Sized,
    {
        info!(bins = fleet.len(), %now, "collection cycle started");
        fleet.apply_readings(|bin| sensors.read(bin));

        let outcome = self.plan(fleet, now);
        match &outcome {
            CycleOutcome::NoCollectionNeeded => {
                info!("no bins require collection");
            }
            CycleOutcome::Collected(report) => {
                for load in &report.loads {
                    debug!(
                        bin = %load.bin_id,
                        category = %load.category,
                        confidence = load.confidence,
                        collected_kg = load.estimate.weight_kg,
                        revenue = load.revenue(),
                        "stop collected"
                    );
                }
                let emptied = fleet.mark_collected(report.route.bin_ids(), now);
                debug!(emptied, "bins reset after collection");
                info!(
                    stops = report.route.len(),
                    distance_km = report.route.rounded_distance_km(),
                    net_cost = report.cost.net_cost(),
                    "collection route completed"
                );
            }
        }

        reporter.report(&outcome);
        outcome
    }
}
