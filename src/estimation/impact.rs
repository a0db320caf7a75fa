//! Environmental impact of a collection pass.

use serde::{Deserialize, Serialize};

/// kg of CO₂ avoided per kg of properly handled waste.
pub const CO2_SAVED_PER_KG: f64 = 0.5;

/// kWh saved through recycling per kg of waste.
pub const ENERGY_SAVED_KWH_PER_KG: f64 = 1.2;

/// Assumed organic share of collected waste.
pub const ORGANIC_SHARE: f64 = 0.3;

/// kg of organic waste needed per kg of finished compost.
pub const ORGANIC_PER_COMPOST_KG: f64 = 3.0;

/// Impact figures derived from the total collected weight.
///
/// # Examples
///
/// ```
/// use waste_routing::estimation::EnvironmentalImpact;
///
/// let impact = EnvironmentalImpact::from_total_weight(300.0);
/// assert_eq!(impact.co2_saved_kg, 150.0);
/// assert_eq!(impact.compost_kg, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// Total collected weight (kg).
    pub total_weight_kg: f64,
    /// CO₂ emissions avoided (kg).
    pub co2_saved_kg: f64,
    /// Energy saved through recycling (kWh).
    pub energy_saved_kwh: f64,
    /// Organic waste that could be composted (kg).
    pub organic_kg: f64,
    /// Compost that organic share could yield, rounded to whole kg.
    pub compost_kg: f64,
}

impl EnvironmentalImpact {
    /// Derives impact figures from a total weight.
    pub fn from_total_weight(total_weight_kg: f64) -> Self {
        let organic_kg = total_weight_kg * ORGANIC_SHARE;
        Self {
            total_weight_kg,
            co2_saved_kg: total_weight_kg * CO2_SAVED_PER_KG,
            energy_saved_kwh: total_weight_kg * ENERGY_SAVED_KWH_PER_KG,
            organic_kg,
            compost_kg: (organic_kg / ORGANIC_PER_COMPOST_KG).round(),
        }
    }

    /// Impact of collecting all `weights_kg`.
    pub fn from_weights<I: IntoIterator<Item = f64>>(weights_kg: I) -> Self {
        Self::from_total_weight(weights_kg.into_iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weight() {
        let i = EnvironmentalImpact::from_total_weight(0.0);
        assert_eq!(i.co2_saved_kg, 0.0);
        assert_eq!(i.energy_saved_kwh, 0.0);
        assert_eq!(i.compost_kg, 0.0);
    }

    #[test]
    fn test_factors() {
        let i = EnvironmentalImpact::from_weights([80.0, 70.0, 90.0, 60.0]);
        assert!((i.total_weight_kg - 300.0).abs() < 1e-10);
        assert!((i.co2_saved_kg - 150.0).abs() < 1e-10);
        assert!((i.energy_saved_kwh - 360.0).abs() < 1e-10);
        assert!((i.organic_kg - 90.0).abs() < 1e-10);
        assert_eq!(i.compost_kg, 30.0);
    }

    #[test]
    fn test_compost_rounds() {
        // organic 30.5 kg -> 10.17 kg compost -> 10
        let i = EnvironmentalImpact::from_total_weight(30.5 / 0.3);
        assert_eq!(i.compost_kg, 10.0);
    }
}
