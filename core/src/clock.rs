use web_time::Instant;

/// Elapsed-time bookkeeping for one game.
///
/// The clock starts on the first reveal and freezes when the game ends; the
/// 1-second display tick is the presentation layer's job, the core only
/// derives the reading. Restarting means a new clock on a new board.
#[derive(Copy, Clone, Debug, Default)]
pub struct GameClock {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameClock {
    pub(crate) fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub(crate) fn stop(&mut self) {
        if self.started_at.is_some() && self.ended_at.is_none() {
            self.ended_at = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Whole seconds since the first reveal, 0 if the game has not started.
    pub fn elapsed_secs(&self) -> u64 {
        match self.started_at {
            Some(started_at) => {
                let end = self.ended_at.unwrap_or_else(Instant::now);
                end.duration_since(started_at).as_secs()
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_clock_reads_zero() {
        let clock = GameClock::default();
        assert_eq!(clock.elapsed_secs(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn stop_freezes_the_reading() {
        let mut clock = GameClock::default();
        clock.start();
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
        let frozen = clock.elapsed_secs();
        assert_eq!(clock.elapsed_secs(), frozen);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut clock = GameClock::default();
        clock.start();
        clock.start();
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(), 0);
    }

    #[test]
    fn stop_without_start_is_a_no_op() {
        let mut clock = GameClock::default();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(), 0);
    }
}
