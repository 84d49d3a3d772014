//! Simulated narration timing.
//!
//! There is no real text-to-speech: the narrator shows the line and holds
//! it for a duration derived from its length, which is enough to pace the
//! auto-advancing overview flow.

use std::time::Duration;

/// Floor for very short lines.
pub const MIN_PLAYBACK: Duration = Duration::from_secs(2);

/// Per-character speaking rate of the simulated voice.
pub const MS_PER_CHAR: u64 = 100;

/// Pause between a narration finishing and the overview auto-advancing.
pub const ADVANCE_PAUSE: Duration = Duration::from_secs(1);

/// Simulated playback duration for a voice line.
#[must_use]
pub fn playback_duration(text: &str) -> Duration {
    let spoken = Duration::from_millis(MS_PER_CHAR.saturating_mul(text.chars().count() as u64));
    spoken.max(MIN_PLAYBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_hit_the_floor() {
        assert_eq!(playback_duration("Hi."), MIN_PLAYBACK);
        assert_eq!(playback_duration(""), MIN_PLAYBACK);
    }

    #[test]
    fn long_lines_scale_with_length() {
        let line = "x".repeat(40);
        assert_eq!(playback_duration(&line), Duration::from_secs(4));
    }

    #[test]
    fn multibyte_text_counts_characters_not_bytes() {
        let line = "é".repeat(30);
        assert_eq!(playback_duration(&line), Duration::from_secs(3));
    }
}
