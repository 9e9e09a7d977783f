/// Simulated backend round-trip delays.

use std::time::Duration;

/// Pause before a text synthesis completes.
pub const TEXT_LATENCY: Duration = Duration::from_millis(1500);
/// Pause before a visual synthesis completes.
pub const VISUAL_LATENCY: Duration = Duration::from_millis(1000);

/// Artificial delays applied to synthesis calls to mimic a remote
/// inference service. The delays are plain data: sessions carry a value
/// of this type, so tests and embedded hosts swap in [`Latency::none`]
/// and the stock demo keeps [`Latency::realistic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub text: Duration,
    pub visual: Duration,
}

impl Latency {
    /// The stock demo pacing.
    pub fn realistic() -> Latency {
        Latency {
            text: TEXT_LATENCY,
            visual: VISUAL_LATENCY,
        }
    }

    /// No delay at all. Synthesis futures complete on the first poll,
    /// which also means they never need a timer to be running.
    pub fn none() -> Latency {
        Latency {
            text: Duration::ZERO,
            visual: Duration::ZERO,
        }
    }

    pub(crate) async fn pause_text(&self) {
        pause(self.text).await;
    }

    pub(crate) async fn pause_visual(&self) {
        pause(self.visual).await;
    }
}

impl Default for Latency {
    fn default() -> Latency {
        Latency::realistic()
    }
}

// Zero skips the timer entirely, so zero-latency callers can run
// outside a reactor.
async fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    tokio::time::sleep(duration).await;
}
