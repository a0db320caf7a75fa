//! Reporting collaborator.
//!
//! Every cycle ends by handing its [`CycleOutcome`] to a [`CycleReporter`],
//! including cycles that collected nothing.

use tracing::info;

use super::CycleOutcome;

/// Receives the outcome of every cycle.
pub trait CycleReporter {
    /// Reports one cycle outcome.
    fn report(&mut self, outcome: &CycleOutcome);
}

impl<F> CycleReporter for F
where
    F: FnMut(&CycleOutcome),
{
    fn report(&mut self, outcome: &CycleOutcome) {
        self(outcome)
    }
}

/// Writes the cycle summary through `tracing` at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl CycleReporter for LogReporter {
    fn report(&mut self, outcome: &CycleOutcome) {
        let report = match outcome {
            CycleOutcome::NoCollectionNeeded => {
                info!("no collection needed today");
                return;
            }
            CycleOutcome::Collected(report) => report,
        };

        info!(
            route = %report.route.description(),
            distance_km = report.route.rounded_distance_km(),
            "optimized route"
        );
        for load in &report.loads {
            info!(
                bin = %load.bin_id,
                sorted = %load.sorting_summary(),
                recorded_kg = load.recorded_weight_kg,
                collected_kg = format_args!("{:.1}", load.estimate.weight_kg),
                revenue = format_args!("{:.2}", load.revenue()),
                "collected"
            );
        }

        let cost = &report.cost;
        info!(
            hours = format_args!("{:.2}", cost.elapsed_hours),
            fuel = format_args!("{:.2}", cost.fuel),
            labor = format_args!("{:.2}", cost.labor),
            depreciation = format_args!("{:.2}", cost.depreciation),
            operating = format_args!("{:.2}", cost.operating_cost()),
            revenue = format_args!("{:.2}", cost.recycling_revenue),
            net = format_args!("{:.2}", cost.net_cost()),
            "route cost"
        );

        let impact = &report.impact;
        info!(
            co2_saved_kg = format_args!("{:.1}", impact.co2_saved_kg),
            energy_saved_kwh = format_args!("{:.1}", impact.energy_saved_kwh),
            compost_kg = format_args!("{:.0}", impact.compost_kg),
            "environmental impact"
        );

        for suggestion in &report.suggestions {
            info!(%suggestion, "cost suggestion");
        }
    }
}
