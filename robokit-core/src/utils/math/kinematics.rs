//! Kinematics utilities for two-wheeled differential-drive robots.
//!
//! A [`DriveCommand`] carries one signed speed. Moves drive both wheels with
//! the same duty; turns spin in place by driving the wheels in opposite
//! directions (positive speed turns left, counter-clockwise seen from above).
//!
//! # Example
//! ```rust
//! use robokit_core::utils::controllers::DriveCommand;
//! use robokit_core::utils::math::kinematics::wheel_duties;
//!
//! let [left, right] = wheel_duties(&DriveCommand::turn(0.4, None));
//! assert!(left < 0.0 && right > 0.0);
//! ```

use crate::utils::controllers::{DriveAction, DriveCommand};

/// Largest duty magnitude a wheel can be driven with.
pub const MAX_DUTY: f32 = 1.0;

/// Map a drive command to signed `[left, right]` wheel duties in `[-1, 1]`.
pub fn wheel_duties(command: &DriveCommand) -> [f32; 2] {
    let s = command.speed;
    let raw = match command.action {
        DriveAction::Move => [s, s],
        DriveAction::Turn => [-s, s],
        DriveAction::Stop => [0.0, 0.0],
    };
    raw.map(clamp_duty)
}

fn clamp_duty(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-MAX_DUTY, MAX_DUTY)
    }
}
