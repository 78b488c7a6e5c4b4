//! High-level runtime engine settings
//!
//! How long the headless runner drives a `Scenario` and how often it
//! reports body state

pub const DEFAULT_STEPS: u64 = 600;
pub const DEFAULT_REPORT_EVERY: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub steps: u64, // number of advance() calls
    pub report_every: u64, // log a body snapshot every N steps, 0 = never
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

impl Engine {
    /// Whether the runner should report after step number `step` (1-based)
    pub fn should_report(&self, step: u64) -> bool {
        self.report_every != 0 && step % self.report_every == 0
    }
}
