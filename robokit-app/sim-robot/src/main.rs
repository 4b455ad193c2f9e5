use robokit_core::utils::{Robot, RobotConfig, RobotError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RobotError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RobotConfig::default();
    let mut robot = Robot::new(config)?;
    robot.perform_intro_sequence()?;

    tracing::info!(state = ?robot.state(), "demo finished");
    Ok(())
}
