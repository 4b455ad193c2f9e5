//! Drivetrain commands and the motor driver contract.
//!
//! Every locomotion request is captured as an immutable [`DriveCommand`].
//! Drivers retain only the most recent command; there is no history.

use core::{convert::Infallible, fmt};

use serde::{Deserialize, Serialize};

/// What the drivetrain is asked to do.
///
/// Serialized as snake_case strings (`"move"`, `"turn"`, `"stop"`).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DriveAction {
    /// Straight-line motion; the sign of the speed selects forward/backward.
    Move,
    /// Spin in place; positive speed turns left.
    Turn,
    /// Halt all motion.
    Stop,
}

impl fmt::Display for DriveAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            DriveAction::Move => "move",
            DriveAction::Turn => "turn",
            DriveAction::Stop => "stop",
        })
    }
}

/// A single instruction issued to the drivetrain.
///
/// Direction is encoded purely in the sign of `speed`. `duration` is
/// descriptive metadata in seconds; drivers are free to ignore it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    pub action: DriveAction,
    pub speed: f32,
    pub duration: Option<f32>,
}

impl DriveCommand {
    pub fn new(
        action: DriveAction,
        speed: f32,
        duration: Option<f32>,
    ) -> Self {
        Self {
            action,
            speed,
            duration,
        }
    }

    /// Straight-line motion at signed `speed`.
    pub fn drive(
        speed: f32,
        duration: Option<f32>,
    ) -> Self {
        Self::new(DriveAction::Move, speed, duration)
    }

    /// In-place rotation at signed `speed`.
    pub fn turn(
        speed: f32,
        duration: Option<f32>,
    ) -> Self {
        Self::new(DriveAction::Turn, speed, duration)
    }

    /// Stop command: zero speed, no duration.
    pub fn stop() -> Self {
        Self::new(DriveAction::Stop, 0.0, None)
    }
}

impl fmt::Display for DriveCommand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "action={} speed={:.2}", self.action, self.speed)?;
        if let Some(duration) = self.duration {
            write!(f, " duration={duration:.2}s")?;
        }
        Ok(())
    }
}

/// Contract for anything that can drive the two-wheeled base.
///
/// Implementors only need [`apply`](MotorDriver::apply) and
/// [`last_command`](MotorDriver::last_command); the command builders are
/// provided.
pub trait MotorDriver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `command` to the hardware and remember it as the last command.
    fn apply(
        &mut self,
        command: DriveCommand,
    ) -> Result<(), Self::Error>;

    /// The most recently applied command, if any.
    fn last_command(&self) -> Option<&DriveCommand>;

    /// Move forward or backward depending on the sign of `speed`.
    fn drive(
        &mut self,
        speed: f32,
        duration: Option<f32>,
    ) -> Result<DriveCommand, Self::Error> {
        let command = DriveCommand::drive(speed, duration);
        self.apply(command)?;
        Ok(command)
    }

    /// Turn in place using the differential drivetrain.
    fn turn(
        &mut self,
        speed: f32,
        duration: Option<f32>,
    ) -> Result<DriveCommand, Self::Error> {
        let command = DriveCommand::turn(speed, duration);
        self.apply(command)?;
        Ok(command)
    }

    /// Stop all motion immediately.
    fn stop(&mut self) -> Result<DriveCommand, Self::Error> {
        let command = DriveCommand::stop();
        self.apply(command)?;
        Ok(command)
    }
}

/// Placeholder driver that logs commands instead of moving wheels.
///
/// Replace with a real binding such as
/// [`PwmMotorDriver`](super::PwmMotorDriver).
#[derive(Debug, Default)]
pub struct SimulatedMotorDriver {
    last_command: Option<DriveCommand>,
}

impl SimulatedMotorDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MotorDriver for SimulatedMotorDriver {
    type Error = Infallible;

    fn apply(
        &mut self,
        command: DriveCommand,
    ) -> Result<(), Self::Error> {
        self.last_command = Some(command);
        tracing::info!("[MotorController] {}", command);
        Ok(())
    }

    fn last_command(&self) -> Option<&DriveCommand> {
        self.last_command.as_ref()
    }
}
