//! Text fallback speaker.

use std::io::{self, Stdout, Write};

use super::{Playback, Speaker, SpeechError};

/// Writes `[Robot] <message>` lines to a sink instead of producing audio.
#[derive(Debug)]
pub struct ConsoleSpeaker<W = Stdout> {
    out: W,
}

impl ConsoleSpeaker<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    type Error = SpeechError;

    /// Playback mode is irrelevant for text; the line is written immediately.
    fn speak_with(
        &mut self,
        message: &str,
        _playback: Playback,
    ) -> Result<(), Self::Error> {
        if message.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "[Robot] {message}")?;
        self.out.flush()?;
        Ok(())
    }
}
