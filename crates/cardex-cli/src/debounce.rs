//! Cooldown between keystroke-triggered searches.

use std::time::{Duration, Instant};

/// Minimum quiet period between keystroke-triggered searches.
pub const KEYSTROKE_QUIET: Duration = Duration::from_millis(600);

/// Coarse rate limiter for search triggers.
///
/// Keystroke-level input passes through [`ready`]; explicit submit actions
/// call [`force`] and fire immediately. This is not a cancellation
/// mechanism: an allowed trigger's fetch runs to completion regardless.
///
/// [`ready`]: Cooldown::ready
/// [`force`]: Cooldown::force
#[derive(Debug)]
pub struct Cooldown {
    quiet: Duration,
    last: Option<Instant>,
}

impl Cooldown {
    /// Create a cooldown with the given quiet period.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, last: None }
    }

    /// Cooldown tuned for keystroke-level input.
    #[must_use]
    pub fn keystroke() -> Self {
        Self::new(KEYSTROKE_QUIET)
    }

    /// Whether a trigger may fire now. Firing arms the cooldown.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    /// Record an explicit submit, which always fires; re-arms the cooldown.
    pub fn force(&mut self) {
        self.last = Some(Instant::now());
    }

    fn ready_at(&mut self, now: Instant) -> bool {
        let quiet_elapsed = self
            .last
            .is_none_or(|last| now.duration_since(last) >= self.quiet);
        if quiet_elapsed {
            self.last = Some(now);
        }
        quiet_elapsed
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::keystroke()
    }
}
