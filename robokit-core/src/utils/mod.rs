//! Utility re-exports for the robotics kit.
//!
//! - `config`: robot configuration and its JSON loader
//! - `controllers`: the `Robot` facade and motor drivers
//! - `math`: differential-drive mixing
//! - `sensors`: range sensor contract and simulated sensor
//! - `speech`: speaker contract, console fallback and espeak backend

pub mod config;
pub mod controllers;
pub mod math;
pub mod sensors;
pub mod speech;

pub use config::{ConfigError, RobotConfig};
pub use controllers::{
    DriveAction, DriveCommand, MotorDriver, PwmMotorDriver, Robot, RobotError, RobotState,
    SimulatedMotorDriver, OBSTACLE_THRESHOLD_CM,
};
pub use sensors::{RangeReading, RangeSensor, SimulatedRangeSensor};
pub use speech::{system_speaker, ConsoleSpeaker, EspeakSpeaker, Playback, Speaker, SpeechError, SystemSpeaker};
