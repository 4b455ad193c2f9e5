//! PCA9685 motor driver for the kit's differential drivetrain.
//!
//! Each wheel motor sits on an H-bridge driven by two PWM channels: a phase
//! channel selecting direction and an enable channel carrying the duty. The
//! controller is reached over any `embedded-hal` 1.0 I2C bus.

use core::fmt::Debug;

use embedded_hal::i2c::I2c;
use pwm_pca9685::{Channel, Error as PwmError, Pca9685};

use super::motor::{DriveCommand, MotorDriver};
use crate::utils::math::kinematics::wheel_duties;

/// Full-scale PCA9685 output count.
const MAX_DUTY: u16 = 4095;

/// Prescale value written by [`PwmMotorDriver::configure`].
pub const DEFAULT_PRESCALE: u8 = 100;

/// Errors that can occur when talking to the PWM controller.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError<E: Debug> {
    #[error("PWM controller error: {0:?}")]
    Pwm(PwmError<E>),
}

/// Differential-drive motor driver on a PCA9685 PWM controller.
pub struct PwmMotorDriver<I2C> {
    pwm: Pca9685<I2C>,
    /// `(phase, enable)` channel pairs for the left and right wheels.
    motor_channels: [(Channel, Channel); 2],
    last_command: Option<DriveCommand>,
}

impl<I2C, E> PwmMotorDriver<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    /// Wrap an already constructed PCA9685 using the kit's default wiring.
    ///
    /// Left wheel on `(C6, C7)`, right wheel on `(C2, C3)`.
    pub fn new(pwm: Pca9685<I2C>) -> Self {
        Self::with_channels(pwm, (Channel::C6, Channel::C7), (Channel::C2, Channel::C3))
    }

    /// Wrap a PCA9685 with custom `(phase, enable)` channel pairs.
    pub fn with_channels(
        pwm: Pca9685<I2C>,
        left: (Channel, Channel),
        right: (Channel, Channel),
    ) -> Self {
        PwmMotorDriver {
            pwm,
            motor_channels: [left, right],
            last_command: None,
        }
    }

    /// Enable the controller and set the output prescale.
    pub fn configure(&mut self) -> Result<(), DeviceError<E>> {
        self.pwm.enable().map_err(DeviceError::Pwm)?;
        tracing::info!("PWM enabled");
        self.pwm
            .set_prescale(DEFAULT_PRESCALE)
            .map_err(DeviceError::Pwm)?;
        tracing::info!(prescale = DEFAULT_PRESCALE, "PWM prescale set");
        Ok(())
    }

    /// Apply signed `[left, right]` duties in `[-1, 1]` to the motor channels.
    pub fn apply_wheel_duties(
        &mut self,
        duties: [f32; 2],
    ) -> Result<(), DeviceError<E>> {
        for (&(phase_channel, enable_channel), &duty) in self.motor_channels.iter().zip(&duties) {
            let magnitude = duty.abs().min(1.0);
            let forward = duty >= 0.0;

            // Reverse holds the phase line high for the whole cycle.
            if forward {
                self.pwm.set_channel_on_off(phase_channel, 0, 0)
            } else {
                self.pwm.set_channel_full_on(phase_channel, 0)
            }
            .map_err(DeviceError::Pwm)?;
            self.pwm
                .set_channel_on_off(enable_channel, 0, (magnitude * MAX_DUTY as f32) as u16)
                .map_err(DeviceError::Pwm)?;
        }
        Ok(())
    }

    /// Give back the underlying PCA9685 handle.
    pub fn release(self) -> Pca9685<I2C> {
        self.pwm
    }
}

impl<I2C, E> MotorDriver for PwmMotorDriver<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug + Send + Sync + 'static,
{
    type Error = DeviceError<E>;

    fn apply(
        &mut self,
        command: DriveCommand,
    ) -> Result<(), Self::Error> {
        let duties = wheel_duties(&command);
        self.apply_wheel_duties(duties)?;
        self.last_command = Some(command);
        tracing::info!(left = duties[0], right = duties[1], "[PwmMotorDriver] {}", command);
        Ok(())
    }

    fn last_command(&self) -> Option<&DriveCommand> {
        self.last_command.as_ref()
    }
}
