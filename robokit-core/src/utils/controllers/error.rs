//! Error type for facade operations.

use thiserror::Error;

/// Boxed collaborator error carried as the source of a [`RobotError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of one of the robot's collaborators.
///
/// The facade performs no recovery; whatever the driver, sensor or speaker
/// reports is handed straight back to the caller.
#[derive(Error, Debug)]
pub enum RobotError {
    /// The motor driver rejected or failed to deliver a command.
    #[error("motor driver failed")]
    Motor(#[source] BoxError),

    /// The range sensor could not produce a reading.
    #[error("range sensor failed")]
    Sensor(#[source] BoxError),

    /// The speaker could not deliver a message.
    #[error("speaker failed")]
    Speech(#[source] BoxError),
}

impl RobotError {
    pub(crate) fn motor<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        RobotError::Motor(Box::new(e))
    }

    pub(crate) fn sensor<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        RobotError::Sensor(Box::new(e))
    }

    pub(crate) fn speech<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        RobotError::Speech(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_robot_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "espeak-ng");
        let err = RobotError::speech(io);
        assert_eq!(err.to_string(), "speaker failed");
        let source = err.source().expect("source should be kept");
        assert!(source.to_string().contains("espeak-ng"));
    }
}
