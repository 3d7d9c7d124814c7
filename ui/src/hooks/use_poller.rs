use std::future::Future;
use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::poll::PollTracker;

/// Drives one widget's poll cycle: an immediate first fetch, then one
/// fetch per `interval`, each folded into the returned [`PollTracker`]
/// signal.
///
/// The timer loop runs as a coroutine owned by the calling component's
/// scope and every fetch is spawned in that same scope, so unmounting
/// the component cancels both the pending ticks and any in-flight
/// request. Fetches are tagged with the tracker's sequence number; a
/// response that arrives after a newer request was issued is discarded.
pub fn use_poller<T, F, Fut>(
    name: &'static str,
    interval: Duration,
    fetch: F,
) -> Signal<PollTracker<T>>
where
    T: 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut tracker = use_signal(PollTracker::<T>::new);

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let fetch = fetch.clone();
        async move {
            loop {
                let seq = tracker.write().begin();
                let fetch = fetch.clone();
                spawn(async move {
                    let result = fetch().await;
                    if let Err(e) = &result {
                        warn!("{} poll failed: {}", name, e);
                    }
                    tracker.write().complete(seq, result);
                });
                crate::compat::sleep(interval).await;
            }
        }
    });

    tracker
}
