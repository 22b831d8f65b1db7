//! Cancellable settle timer
//!
//! Each `schedule` cancels the previous pending callback, so only the last
//! value scheduled within a quiet period is ever delivered.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `on_settle` after the quiet period unless another call to
    /// `schedule` or `cancel` comes first. Must be called inside a tokio runtime.
    pub fn schedule<F>(&mut self, on_settle: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => on_settle(),
            }
        });
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_settles_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(move || {
            let _ = tx.send("dune");
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some("dune"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_settles() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        for value in ["d", "du", "dun", "dune"] {
            let tx = tx.clone();
            debouncer.schedule(move || {
                let _ = tx.send(value);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        drop(tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(rx.recv().await, Some("dune"));
        assert_eq!(rx.try_recv().ok(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (tx, mut rx) = mpsc::unbounded_channel::<&str>();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(move || {
            let _ = tx.send("alien");
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }
}
