//! Speech through the `espeak-ng`/`espeak` command-line synthesizer.

use std::process::{Child, Command, Stdio};

use super::{Playback, Speaker, SpeechError};

/// Programs probed by [`EspeakSpeaker::detect`], in order of preference.
pub const CANDIDATES: [&str; 2] = ["espeak-ng", "espeak"];

/// Speaks by running an espeak binary with the message as its argument.
#[derive(Debug)]
pub struct EspeakSpeaker {
    program: String,
    /// Detached utterances that may still be playing.
    pending: Vec<Child>,
}

impl EspeakSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            pending: Vec::new(),
        }
    }

    /// Probe the standard espeak binaries.
    pub fn detect() -> Option<Self> {
        Self::detect_from(&CANDIDATES)
    }

    /// Return a speaker for the first of `programs` that answers `--version`.
    pub fn detect_from(programs: &[&str]) -> Option<Self> {
        programs.iter().find_map(|&program| {
            let answered = Command::new(program)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok_and(|status| status.success());
            tracing::debug!(program, answered, "probed speech backend");
            answered.then(|| Self::new(program))
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Drop handles of detached utterances that have finished.
    fn reap(&mut self) {
        self.pending
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl Speaker for EspeakSpeaker {
    type Error = SpeechError;

    fn speak_with(
        &mut self,
        message: &str,
        playback: Playback,
    ) -> Result<(), Self::Error> {
        if message.is_empty() {
            return Ok(());
        }
        self.reap();

        let mut command = Command::new(&self.program);
        // `--` ends option parsing so dash-leading messages are spoken as text.
        command.arg("--").arg(message).stdout(Stdio::null());
        match playback {
            Playback::Blocking => {
                let status = command.status()?;
                if !status.success() {
                    return Err(SpeechError::Backend {
                        program: self.program.clone(),
                        status,
                    });
                }
            }
            Playback::Detached => self.pending.push(command.spawn()?),
        }
        tracing::debug!(program = %self.program, ?playback, "spoke message");
        Ok(())
    }
}
