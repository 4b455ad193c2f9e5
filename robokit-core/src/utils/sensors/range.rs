//! Distance sensing.

use core::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Distance reported by [`SimulatedRangeSensor`] unless configured otherwise.
pub const SIMULATED_DISTANCE_CM: f32 = 100.0;

/// A single distance measurement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RangeReading {
    /// Distance to the nearest obstacle in centimeters (non-negative).
    pub distance_cm: f32,
    /// Unconverted sensor value, when the hardware exposes one.
    pub raw_value: Option<u32>,
}

impl RangeReading {
    pub fn new(distance_cm: f32) -> Self {
        Self {
            distance_cm,
            raw_value: None,
        }
    }
}

/// Contract for an obstacle-detection sensor.
pub trait RangeSensor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Take a fresh reading and remember it as the last reading.
    fn read(&mut self) -> Result<RangeReading, Self::Error>;

    /// The most recent reading, if any.
    fn last_reading(&self) -> Option<&RangeReading>;
}

/// Placeholder sensor that always reports the same distance.
#[derive(Debug)]
pub struct SimulatedRangeSensor {
    distance_cm: f32,
    last_reading: Option<RangeReading>,
}

impl SimulatedRangeSensor {
    pub fn new() -> Self {
        Self::with_distance(SIMULATED_DISTANCE_CM)
    }

    /// A simulated sensor that reports `distance_cm` on every poll.
    pub fn with_distance(distance_cm: f32) -> Self {
        Self {
            distance_cm,
            last_reading: None,
        }
    }
}

impl Default for SimulatedRangeSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSensor for SimulatedRangeSensor {
    type Error = Infallible;

    fn read(&mut self) -> Result<RangeReading, Self::Error> {
        let reading = RangeReading::new(self.distance_cm);
        self.last_reading = Some(reading);
        tracing::info!("[DistanceSensor] distance={:.1}cm", reading.distance_cm);
        Ok(reading)
    }

    fn last_reading(&self) -> Option<&RangeReading> {
        self.last_reading.as_ref()
    }
}
