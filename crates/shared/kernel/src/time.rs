use std::time::Duration;

/// Suspends the current task for `duration`.
///
/// Native builds need a tokio runtime with the time driver (the Dioxus
/// desktop launcher provides one).
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleep_advances_virtual_clock() {
        let started = Instant::now();
        sleep(Duration::from_millis(2000)).await;
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_returns_immediately() {
        let started = Instant::now();
        sleep(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(1));
    }
}
