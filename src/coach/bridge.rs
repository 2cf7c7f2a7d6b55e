//! Coach bridge - connects the sync game loop to the async advice client
//!
//! The game loop is single-threaded and must never wait on the coach. The
//! bridge owns a tokio runtime, spawns one task per advice request, and the
//! loop polls `try_recv` once per tick. Responses are display-only; a late
//! response may overwrite a newer one.

use rand::Rng;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::coach::client::{fetch_advice, CoachConfig};
use crate::coach::protocol::AdviceRequest;
use crate::core::SessionEvent;

/// Running coach instance
pub struct CoachBridge {
    runtime: Runtime,
    config: CoachConfig,
    advice_tx: mpsc::UnboundedSender<String>,
    advice_rx: mpsc::UnboundedReceiver<String>,
}

impl CoachBridge {
    /// Start the bridge from environment variables.
    ///
    /// Returns None when no coach endpoint is configured.
    pub fn start_from_env() -> Option<Self> {
        CoachConfig::from_env().map(Self::start)
    }

    pub fn start(config: CoachConfig) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let (advice_tx, advice_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            config,
            advice_tx,
            advice_rx,
        }
    }

    /// Fire-and-forget advice fetch; the result arrives via `try_recv`.
    /// In-flight requests are not cancelled by newer ones.
    pub fn request(&self, request: AdviceRequest) {
        let config = self.config.clone();
        let tx = self.advice_tx.clone();
        self.runtime.spawn(async move {
            let advice = fetch_advice(&config, &request).await;
            let _ = tx.send(advice);
        });
    }

    /// Poll for completed fetches, keeping only the most recent one
    pub fn try_recv(&mut self) -> Option<String> {
        let mut latest = None;
        while let Ok(advice) = self.advice_rx.try_recv() {
            latest = Some(advice);
        }
        latest
    }

    /// Decide whether a session event warrants a fetch: always on level-up,
    /// with configured probability on any other clear, never on top-out
    /// (that gets a canned message).
    pub fn should_fetch(&self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::LinesCleared { level_up: true, .. } => true,
            SessionEvent::LinesCleared { .. } => {
                rand::rng().random::<f64>() < self.config.line_clear_chance
            }
            SessionEvent::ToppedOut => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge_with_chance(chance: f64) -> CoachBridge {
        let mut config = CoachConfig::for_url("http://127.0.0.1:9/advice");
        config.line_clear_chance = chance;
        CoachBridge::start(config)
    }

    #[test]
    fn test_level_up_always_fetches() {
        let bridge = bridge_with_chance(0.0);
        assert!(bridge.should_fetch(&SessionEvent::LinesCleared {
            rows: 1,
            level_up: true
        }));
    }

    #[test]
    fn test_plain_clear_respects_chance_bounds() {
        let never = bridge_with_chance(0.0);
        let always = bridge_with_chance(1.0);
        let event = SessionEvent::LinesCleared {
            rows: 2,
            level_up: false,
        };
        for _ in 0..50 {
            assert!(!never.should_fetch(&event));
            assert!(always.should_fetch(&event));
        }
    }

    #[test]
    fn test_top_out_never_fetches() {
        let bridge = bridge_with_chance(1.0);
        assert!(!bridge.should_fetch(&SessionEvent::ToppedOut));
    }

    #[test]
    fn test_try_recv_empty_when_nothing_requested() {
        let mut bridge = bridge_with_chance(0.2);
        assert_eq!(bridge.try_recv(), None);
    }
}
