//! Background resolution and delivery

pub mod assign;
pub mod deliver;

use std::future::Future;

/// How background continuations are scheduled.
///
/// Production uses [`SpawnMode::Background`]; tests inject
/// [`SpawnMode::Inline`] so the whole pipeline can be awaited
/// deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpawnMode {
    /// Fire-and-forget on the runtime; the caller returns immediately.
    #[default]
    Background,
    /// Await the continuation before returning.
    Inline,
}

/// Run `continuation` according to `mode`.
pub async fn dispatch<F>(mode: SpawnMode, continuation: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match mode {
        SpawnMode::Background => {
            tokio::spawn(continuation);
        }
        SpawnMode::Inline => continuation.await,
    }
}
