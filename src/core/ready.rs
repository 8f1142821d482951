use futures::channel::oneshot;
use futures::future::{FutureExt, Shared};
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadyError {
    #[error("producer dropped before publishing a value")]
    Canceled,
    #[error("no one is waiting for the value")]
    Closed,
}

/// Create a single-assignment readiness signal.
///
/// The `Fulfill` half publishes at most once (it is consumed); every `Ready`
/// clone, including ones created after publishing, sees the same value.
/// Dropping `Fulfill` unpublished resolves all waiters to
/// `ReadyError::Canceled`.
pub fn channel<T: Clone>() -> (Fulfill<T>, Ready<T>) {
    let (tx, rx) = oneshot::channel();
    (Fulfill { tx }, Ready { inner: rx.shared() })
}

pub struct Fulfill<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Fulfill<T> {
    pub fn fulfill(self, value: T) -> Result<(), ReadyError> {
        self.tx.send(value).map_err(|_| ReadyError::Closed)
    }
}

#[derive(Clone)]
pub struct Ready<T: Clone> {
    inner: Shared<oneshot::Receiver<T>>,
}

impl<T: Clone> Ready<T> {
    pub fn wait(&self) -> impl Future<Output = Result<T, ReadyError>> {
        self.inner
            .clone()
            .map(|r| r.map_err(|oneshot::Canceled| ReadyError::Canceled))
    }

    /// Value if already published, without waiting.
    pub fn get(&self) -> Option<T> {
        self.inner.clone().now_or_never()?.ok()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.inner.clone().now_or_never(), Some(Ok(_)))
    }
}
