//! Robot facade and drivetrain controllers.
//!
//! - `motor`: drive commands, the `MotorDriver` contract and a simulated driver
//! - `pwm`: PCA9685-based differential drive over I2C
//! - `error`: the facade's error type
//!
//! [`Robot`] owns one motor driver, one range sensor and one speaker and is
//! the only thing callers talk to.

pub mod error;
pub mod motor;
pub mod pwm;

use serde::Serialize;

pub use error::RobotError;
pub use motor::{DriveAction, DriveCommand, MotorDriver, SimulatedMotorDriver};
pub use pwm::{DeviceError, PwmMotorDriver};

use crate::utils::{
    config::RobotConfig,
    sensors::{RangeSensor, SimulatedRangeSensor},
    speech::{system_speaker, Playback, Speaker, SystemSpeaker},
};

/// Readings strictly below this distance stop the robot.
pub const OBSTACLE_THRESHOLD_CM: f32 = 30.0;

/// In-memory snapshot of what the robot was last told to do.
///
/// Reflects commanded intent, not measured motion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RobotState {
    pub is_moving: bool,
    pub last_message: Option<String>,
}

/// High-level interface to the kit: speech, movement and obstacle checks.
///
/// Collaborators are injected through [`Robot::with_collaborators`];
/// [`Robot::new`] uses the simulated drivetrain and sensor together with the
/// best speech backend found on this machine.
pub struct Robot<M = SimulatedMotorDriver, S = SimulatedRangeSensor, V = SystemSpeaker> {
    config: RobotConfig,
    motor: M,
    sensor: S,
    speaker: V,
    state: RobotState,
}

impl Robot {
    /// Build a robot with the default collaborators.
    pub fn new(config: RobotConfig) -> Result<Self, RobotError> {
        Self::with_collaborators(
            config,
            SimulatedMotorDriver::new(),
            SimulatedRangeSensor::new(),
            system_speaker(),
        )
    }
}

impl<M, S, V> Robot<M, S, V>
where
    M: MotorDriver,
    S: RangeSensor,
    V: Speaker,
{
    /// Build a robot around caller-supplied collaborators.
    ///
    /// Speaks the configured greeting once if `say_hello_on_start` is set.
    pub fn with_collaborators(
        config: RobotConfig,
        motor: M,
        sensor: S,
        speaker: V,
    ) -> Result<Self, RobotError> {
        let mut robot = Robot {
            config,
            motor,
            sensor,
            speaker,
            state: RobotState::default(),
        };
        tracing::info!(
            name = %robot.config.name,
            voice_enabled = robot.config.voice_enabled,
            "robot initialised"
        );

        if robot.config.say_hello_on_start {
            let greeting = robot.config.greeting_message.clone();
            robot.say(greeting.as_str())?;
        }
        Ok(robot)
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn speaker(&self) -> &V {
        &self.speaker
    }

    /// Make the robot speak `message`, waiting for playback to finish.
    ///
    /// Absent or empty messages are ignored.
    pub fn say<'a>(
        &mut self,
        message: impl Into<Option<&'a str>>,
    ) -> Result<(), RobotError> {
        self.say_with(message, Playback::Blocking)
    }

    /// Like [`say`](Self::say) with caller-chosen playback.
    ///
    /// The message is recorded even when voice is disabled; in that case the
    /// speaker is not touched and a muted notice is logged instead.
    pub fn say_with<'a>(
        &mut self,
        message: impl Into<Option<&'a str>>,
        playback: Playback,
    ) -> Result<(), RobotError> {
        let Some(message) = message.into().filter(|m| !m.is_empty()) else {
            return Ok(());
        };
        self.state.last_message = Some(message.to_owned());

        if self.config.voice_enabled {
            self.speaker
                .speak_with(message, playback)
                .map_err(RobotError::speech)
        } else {
            tracing::info!("[Robot muted] {}", message);
            Ok(())
        }
    }

    /// Drive forward for `duration` seconds at `speed` (default speed if `None`).
    pub fn move_forward(
        &mut self,
        duration: Option<f32>,
        speed: Option<f32>,
    ) -> Result<(), RobotError> {
        let speed = speed.unwrap_or(self.config.default_speed);
        self.state.is_moving = true;
        self.motor
            .drive(speed.abs(), duration)
            .map_err(RobotError::motor)?;
        Ok(())
    }

    /// Drive backward for `duration` seconds at `speed` (default speed if `None`).
    pub fn move_backward(
        &mut self,
        duration: Option<f32>,
        speed: Option<f32>,
    ) -> Result<(), RobotError> {
        let speed = speed.unwrap_or(self.config.default_speed);
        self.state.is_moving = true;
        self.motor
            .drive(-speed.abs(), duration)
            .map_err(RobotError::motor)?;
        Ok(())
    }

    /// Turn in place by `angle_degrees`: non-negative turns left, negative right.
    ///
    /// Announces the turn after the command is issued. Unlike the move
    /// operations, no duration reaches the driver.
    pub fn turn(
        &mut self,
        angle_degrees: f32,
        speed: Option<f32>,
    ) -> Result<(), RobotError> {
        let speed = speed.unwrap_or(self.config.turn_speed);
        let direction = if angle_degrees >= 0.0 { 1.0 } else { -1.0 };
        self.state.is_moving = true;
        self.motor
            .turn(direction * speed.abs(), None)
            .map_err(RobotError::motor)?;

        let side = if direction > 0.0 { "left" } else { "right" };
        let announcement = format!("Turning {side} {:.0} degrees.", angle_degrees.abs());
        self.say(announcement.as_str())
    }

    /// Stop all motion.
    pub fn stop(&mut self) -> Result<(), RobotError> {
        self.motor.stop().map_err(RobotError::motor)?;
        self.state.is_moving = false;
        Ok(())
    }

    /// Poll the range sensor and stop if something is closer than
    /// [`OBSTACLE_THRESHOLD_CM`].
    ///
    /// Returns the measured distance in centimeters either way.
    pub fn check_obstacles(&mut self) -> Result<f32, RobotError> {
        let reading = self.sensor.read().map_err(RobotError::sensor)?;
        if reading.distance_cm < OBSTACLE_THRESHOLD_CM {
            tracing::warn!(distance_cm = reading.distance_cm, "obstacle within threshold");
            self.say("Obstacle detected! Stopping to avoid a collision.")?;
            self.stop()?;
        }
        Ok(reading.distance_cm)
    }

    /// Fixed demo choreography showcasing speech and movement.
    #[tracing::instrument(skip_all, fields(name = %self.config.name))]
    pub fn perform_intro_sequence(&mut self) -> Result<(), RobotError> {
        self.say("Starting intro sequence.")?;
        self.move_forward(Some(1.5), None)?;
        self.turn(90.0, None)?;
        self.move_forward(Some(1.0), None)?;
        self.stop()?;
        let distance = self.check_obstacles()?;
        let report = format!("Obstacle distance: {distance:.1} centimeters.");
        self.say(report.as_str())?;
        self.say("Intro sequence complete.")
    }
}
