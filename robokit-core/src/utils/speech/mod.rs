//! Speech output for the robot.
//!
//! - `console`: text fallback that prints what the robot would say
//! - `espeak`: drives an installed `espeak-ng`/`espeak` binary
//!
//! [`system_speaker`] picks a backend once at startup; callers only ever see
//! the [`Speaker`] trait.

pub mod console;
pub mod espeak;

use std::process::ExitStatus;

use thiserror::Error;

pub use console::ConsoleSpeaker;
pub use espeak::EspeakSpeaker;

/// Whether `speak` waits for playback to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Blocking,
    Detached,
}

/// Errors raised by the bundled speakers.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{program}` exited with {status}")]
    Backend { program: String, status: ExitStatus },
}

/// Contract for turning text into audible (or visible) output.
pub trait Speaker {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver `message`. Empty messages are ignored.
    fn speak_with(
        &mut self,
        message: &str,
        playback: Playback,
    ) -> Result<(), Self::Error>;

    /// Deliver `message` and wait for playback to finish.
    fn speak(
        &mut self,
        message: &str,
    ) -> Result<(), Self::Error> {
        self.speak_with(message, Playback::Blocking)
    }
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    type Error = S::Error;

    fn speak_with(
        &mut self,
        message: &str,
        playback: Playback,
    ) -> Result<(), Self::Error> {
        (**self).speak_with(message, playback)
    }
}

/// Speaker chosen at startup by [`system_speaker`].
pub type SystemSpeaker = Box<dyn Speaker<Error = SpeechError>>;

/// Pick the best available speech backend.
///
/// Uses espeak when one of its binaries answers, otherwise falls back to
/// printing messages on stdout.
pub fn system_speaker() -> SystemSpeaker {
    match EspeakSpeaker::detect() {
        Some(espeak) => {
            tracing::info!(program = espeak.program(), "using espeak speech backend");
            Box::new(espeak)
        }
        None => {
            tracing::warn!("no speech backend found, printing messages instead");
            Box::new(ConsoleSpeaker::stdout())
        }
    }
}
