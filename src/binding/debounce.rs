use std::time::Duration;

/// Trailing-edge debounce driven by the host's monotonic frame clock.
///
/// Every `schedule` pushes the deadline out by `delay`; `poll` fires once the
/// clock has passed the latest deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once per settled burst.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/debounce.rs"]
mod tests;
