//! Hardware-abstraction layer for the student robotics kit.
//!
//! A single [`Robot`](utils::Robot) facade coordinates speech, a two-wheeled
//! drivetrain and a distance sensor. Every collaborator sits behind a small
//! trait so the simulated stand-ins can be swapped for real hardware.
//!
//! For a runnable demo, see the `sim-robot` binary under `robokit-app/`.

pub mod utils;
