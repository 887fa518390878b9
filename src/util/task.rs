use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Run a future, turning a panic into `Err(panic message)`.
///
/// Used inside spawned fetch tasks so a panicking transport still produces a
/// load result instead of a task that silently disappears.
pub async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: Future<Output = T>,
{
    AssertUnwindSafe(future).catch_unwind().await.map_err(|panic| {
        if let Some(s) = panic.downcast_ref::<&'static str>() {
            s.to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passes_through_value() {
        assert_eq!(catch_task_panic(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_captures_panic_message() {
        let index = 3;
        let result = catch_task_panic(async move {
            if index > 2 {
                panic!("bad index {}", index);
            }
        })
        .await;
        assert_eq!(result, Err("bad index 3".to_string()));
    }
}
