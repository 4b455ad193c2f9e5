//! Sensor contracts for the robotics kit.
//!
//! - `range`: distance readings used for obstacle avoidance

pub mod range;

pub use range::{RangeReading, RangeSensor, SimulatedRangeSensor};
