use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PQueueError {
    /// `pop` or `peek` on a queue without elements. Nothing was changed.
    #[error("queue is empty")]
    EmptyQueue,
}
