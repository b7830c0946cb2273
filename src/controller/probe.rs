//! Per-track duration probes for the playlist.
//!
//! Each probe runs on its own thread and reports through a channel. Probes
//! are never joined: one that hangs simply never reports. A shared
//! `CancelToken` makes results of a torn-down playlist disappear.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::catalog::Track;
use crate::media::probe_duration;

/// Resolves the duration behind a source locator.
pub type Prober = Arc<dyn Fn(&str) -> Option<Duration> + Send + Sync>;

/// Probe local files through their container metadata.
pub fn default_prober() -> Prober {
    Arc::new(|src: &str| Track::locator_path(src).and_then(probe_duration))
}

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    pub index: usize,
    pub duration: Duration,
}

/// The probes of one playlist build. Dropping the set cancels them.
pub struct ProbeSet {
    token: CancelToken,
    rx: Receiver<ProbeResult>,
}

impl ProbeSet {
    /// Start one probe per `(row index, source locator)`.
    pub fn spawn(sources: Vec<(usize, String)>, prober: Prober) -> Self {
        let token = CancelToken::default();
        let (tx, rx) = mpsc::channel::<ProbeResult>();

        for (index, src) in sources {
            let tx = tx.clone();
            let token = token.clone();
            let prober = prober.clone();
            let spawned = thread::Builder::new()
                .name(format!("probe-{index}"))
                .spawn(move || {
                    if token.is_cancelled() {
                        return;
                    }
                    let Some(duration) = prober(&src) else {
                        log::debug!("probe: no duration for {src}");
                        return;
                    };
                    if !token.is_cancelled() {
                        let _ = tx.send(ProbeResult { index, duration });
                    }
                });
            if let Err(e) = spawned {
                log::warn!("probe: could not start probe {index}: {e}");
            }
        }

        Self { token, rx }
    }

    /// Results resolved since the last call; empty once cancelled.
    pub fn try_results(&self) -> Vec<ProbeResult> {
        if self.token.is_cancelled() {
            return Vec::new();
        }
        self.rx.try_iter().collect()
    }

    #[cfg(test)]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for ProbeSet {
    fn drop(&mut self) {
        self.cancel();
    }
}
