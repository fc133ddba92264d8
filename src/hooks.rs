use std::future::Future;

use dioxus::prelude::*;

use crate::error::FetchError;
use crate::shared::types::WeddingInfo;
use crate::state::Lifecycle;

/// Load the wedding document once per mount.
///
/// `fetch` is only invoked on the first render; later renders drop the
/// closure they pass in. The request runs as a task of the calling scope,
/// and unmounting invalidates its ticket.
pub fn use_wedding<F, Fut>(fetch: F) -> Signal<Lifecycle>
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<WeddingInfo, FetchError>> + 'static,
{
    let lifecycle = use_hook(move || {
        let (lc, ticket) = Lifecycle::started();
        let mut lifecycle = Signal::new(lc);
        spawn(async move {
            let outcome = fetch().await;
            // the signal is gone if the view unmounted mid-flight
            if let Ok(mut lc) = lifecycle.try_write() {
                lc.complete(ticket, outcome);
            }
        });
        lifecycle
    });

    use_drop({
        let mut lifecycle = lifecycle;
        move || {
            if let Ok(mut lc) = lifecycle.try_write() {
                lc.teardown();
            }
        }
    });

    lifecycle
}
