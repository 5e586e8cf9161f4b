//! Process lifecycle: signal-driven cancellation
//!
//! A single listener task waits on a one-slot signal channel; the first
//! interrupt-class signal is logged and cancels the shared context exactly
//! once. Cancellation is cooperative: consumers observe the token and are
//! expected to halt promptly.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::logging::{Entry, Level, Logger};

/// A cancellable execution context handle. Clones observe the same
/// cancellation; once canceled it never un-cancels.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    pub fn is_canceled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the context is canceled
    pub async fn canceled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|canceled| *canceled).await.is_err() {
            // Publisher went away without canceling; this context can no
            // longer be canceled, so there is nothing to wait for.
            std::future::pending::<()>().await;
        }
    }
}

/// Create a cancellable context wired to SIGINT/SIGTERM
pub fn interruptible(logger: Arc<Logger>) -> CancelToken {
    let (signal_tx, signal_rx) = mpsc::channel(1);
    spawn_signal_waiters(signal_tx);
    wire_cancellation(logger, signal_rx)
}

fn spawn_signal_waiters(signal_tx: mpsc::Sender<&'static str>) {
    let interrupt_tx = signal_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = interrupt_tx.try_send("SIGINT");
        }
    });

    #[cfg(unix)]
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};

        if let Ok(mut terminate) = signal(SignalKind::terminate()) {
            if terminate.recv().await.is_some() {
                let _ = signal_tx.try_send("SIGTERM");
            }
        }
    });

    #[cfg(not(unix))]
    drop(signal_tx);
}

/// Consume at most one signal from the channel, log it, and cancel the
/// returned token. The one-slot buffer drops redundant signals; anything
/// arriving after cancellation has no further effect here.
pub(crate) fn wire_cancellation(
    logger: Arc<Logger>,
    mut signals: mpsc::Receiver<&'static str>,
) -> CancelToken {
    let (tx, rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Some(signal) = signals.recv().await {
            logger.log(
                Entry::new(Level::Info, "signal received, canceling").field("signal", signal),
            );
            let _ = tx.send(true);
        }
    });

    CancelToken::new(rx)
}
