//! Bounded retry with fixed backoff for best-effort settings loads.

use std::thread;
use std::time::Duration;

use tracing::error;

use crate::store::SettingsError;

/// Retry policy for the settings reload path.
///
/// An operation runs at most `max_retries + 1` times in total. Failures are
/// logged and, once the budget is exhausted, swallowed: a persistently broken
/// settings file degrades to stale in-memory settings, never to an error in
/// the host process.
///
/// The whole loop runs on the calling thread under the caller's lock; it is
/// not re-entrant.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries allowed after the initial attempt.
    pub max_retries: u32,
    /// Delay slept after each failed attempt.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds or the retry budget is exhausted.
    ///
    /// Each failure is logged at error level with its attempt number, then
    /// followed by the backoff sleep, the final failure included. The last
    /// error is swallowed; nothing propagates to the caller.
    pub fn run<F>(&self, mut op: F)
    where
        F: FnMut() -> Result<(), SettingsError>,
    {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match op() {
                Ok(()) => return,
                Err(e) => {
                    let exhausted = attempt > self.max_retries;
                    error!(attempt, error = %e, "failed to read changed settings");
                    thread::sleep(self.delay);
                    if exhausted {
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn fail() -> Result<(), SettingsError> {
        Err(SettingsError::Io(std::io::Error::other("transient")))
    }

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn success_runs_once() {
        let mut attempts = 0;
        policy(5).run(|| {
            attempts += 1;
            Ok(())
        });
        assert_eq!(attempts, 1);
    }

    #[test]
    fn retries_until_success() {
        let mut attempts = 0;
        policy(5).run(|| {
            attempts += 1;
            if attempts < 3 { fail() } else { Ok(()) }
        });
        assert_eq!(attempts, 3);
    }

    #[test]
    fn exhausts_after_max_retries_plus_one_attempts() {
        let mut attempts = 0;
        policy(3).run(|| {
            attempts += 1;
            fail()
        });
        assert_eq!(attempts, 4);
    }

    #[test]
    fn sleeps_after_every_failed_attempt() {
        let delay = Duration::from_millis(10);
        let policy = RetryPolicy {
            max_retries: 3,
            delay,
        };
        let start = Instant::now();
        policy.run(|| fail());
        // 4 attempts, each followed by the backoff sleep
        assert!(start.elapsed() >= delay * 4);
    }

    #[test]
    fn zero_retries_still_attempts_once() {
        let mut attempts = 0;
        policy(0).run(|| {
            attempts += 1;
            fail()
        });
        assert_eq!(attempts, 1);
    }
}
