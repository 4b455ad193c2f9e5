//! Math utilities for the robotics kit.
//!
//! This module provides differential-drive mixing for two-wheeled robots.

pub mod kinematics;
