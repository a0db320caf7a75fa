//! Sensor collaborator.
//!
//! The cycle asks a [`SensorSource`] for one [`SensorReading`] per bin and
//! makes no assumption about where readings come from. Closures work as
//! sources; [`SimulatedSensors`] draws plausible random readings.

use rand::Rng;

use crate::models::{Bin, SensorReading, WasteType};

/// Supplies the current reading for a bin.
pub trait SensorSource {
    /// Reads the sensor of `bin`.
    fn read(&mut self, bin: &Bin) -> SensorReading;
}

impl<F> SensorSource for F
where
    F: FnMut(&Bin) -> SensorReading,
{
    fn read(&mut self, bin: &Bin) -> SensorReading {
        self(bin)
    }
}

/// Random readings skewed towards full bins.
///
/// Fill level is uniform in `[60, 100)`, weight is `0.8 kg` per percent of
/// fill plus up to 20 kg of noise, and the waste type is uniform.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use rand::{rngs::StdRng, SeedableRng};
/// use waste_routing::models::{Bin, Coordinate};
/// use waste_routing::sensors::{SensorSource, SimulatedSensors};
///
/// let bin = Bin::new("BIN001", "Downtown Plaza", Coordinate::new(40.7589, -73.9851), Utc::now());
/// let mut sensors = SimulatedSensors::new(StdRng::seed_from_u64(3));
/// let r = sensors.read(&bin);
/// assert!((60..100).contains(&r.fill_level()));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedSensors<R> {
    rng: R,
}

/// Lowest simulated fill level.
pub const MIN_SIMULATED_FILL: u8 = 60;

/// Weight per percent of fill (kg).
pub const KG_PER_FILL_PERCENT: f64 = 0.8;

/// Upper bound of additive weight noise (kg).
pub const WEIGHT_NOISE_KG: f64 = 20.0;

impl<R: Rng> SimulatedSensors<R> {
    /// Creates a simulator driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SensorSource for SimulatedSensors<R> {
    fn read(&mut self, _bin: &Bin) -> SensorReading {
        let fill = self.rng.random_range(MIN_SIMULATED_FILL..100);
        let weight =
            f64::from(fill) * KG_PER_FILL_PERCENT + self.rng.random_range(0.0..WEIGHT_NOISE_KG);
        let waste_type = WasteType::ALL[self.rng.random_range(0..WasteType::ALL.len())];
        SensorReading::from_trusted(fill, weight, waste_type)
    }
}
