//! Leptos Paginated Feed
//!
//! Incremental list loading with infinite scroll for Leptos CSR apps.
//! One `Feed` owns the loaded items, the pagination state machine and the
//! sentinel status; `observe_sentinel` wires an IntersectionObserver to the
//! scroll trigger element. The re-entrancy guard lives in [`FeedState`]:
//! a visibility event that fires while a page is in flight is a no-op.

mod outcome;
mod state;

pub use outcome::{settle_page, PageError, SentinelStatus};
pub use state::{FeedState, PageOutcome, PagePolicy, PageRequest};

use std::future::Future;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

/// Signal-backed handle for one paginated list.
///
/// Cheap to copy into event handlers; each list on a page gets its own
/// instance, so independent feeds cannot share mutable state.
pub struct Feed<T: Clone + Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub status: RwSignal<SentinelStatus>,
    state: RwSignal<FeedState>,
}

// The handle is Copy for any item type: the fields are signal keys, not data.
impl<T: Clone + Send + Sync + 'static> Clone for Feed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for Feed<T> {}

impl<T: Clone + Send + Sync + 'static> Feed<T> {
    pub fn new(policy: PagePolicy) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            status: RwSignal::new(SentinelStatus::Loading),
            state: RwSignal::new(FeedState::new(policy)),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.with_untracked(|s| s.is_exhausted())
    }

    /// Load the next page. Skipped outright while a load is in flight or the
    /// feed is exhausted, so calling this from every scroll event is safe.
    pub fn load_next<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, PageError>> + 'static,
    {
        self.load_next_with(fetch, || {});
    }

    /// Like [`Feed::load_next`], with a hook invoked on a 401 so the page can
    /// redirect to login instead of showing an error card.
    pub fn load_next_with<F, Fut, U>(&self, fetch: F, on_unauthorized: U)
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, PageError>> + 'static,
        U: FnOnce() + 'static,
    {
        let Some(req) = self.state.try_update(|s| s.begin()).flatten() else {
            return;
        };
        self.status.set(SentinelStatus::Loading);

        let feed = *self;
        let fut = fetch(req);
        spawn_local(async move {
            match fut.await {
                Ok(page) => {
                    let received = page.len();
                    feed.items.update(|all| all.extend(page));
                    let outcome = feed
                        .state
                        .try_update(|s| s.complete(received))
                        .unwrap_or(PageOutcome::End);
                    let nothing = feed.items.with_untracked(|all| all.is_empty());
                    let (status, _) = settle_page(Ok(outcome), nothing);
                    feed.status.set(status);
                }
                Err(err) => {
                    if let PageError::Failed(reason) = &err {
                        web_sys::console::error_1(
                            &format!("[pagefeed] page {} failed: {}", req.page, reason).into(),
                        );
                    }
                    feed.state.update(|s| s.fail());
                    let nothing = feed.items.with_untracked(|all| all.is_empty());
                    let (status, redirect) = settle_page(Err(&err), nothing);
                    feed.status.set(status);
                    if redirect {
                        on_unauthorized();
                    }
                }
            }
        });
    }

    /// Drop everything and start a fresh cycle from page one. Used after a
    /// mutation (create/update/delete) instead of patching the list in place.
    pub fn reset(&self) {
        self.items.update(|all| all.clear());
        self.state.update(|s| s.reset());
        self.status.set(SentinelStatus::Loading);
    }
}

/// Attach an IntersectionObserver to the sentinel element and call
/// `on_visible` whenever it scrolls into view.
pub fn observe_sentinel(sentinel: NodeRef<Div>, on_visible: impl Fn() + 'static) {
    let attached = StoredValue::new(false);
    let on_visible = StoredValue::new_local(on_visible);

    Effect::new(move |_| {
        let Some(el) = sentinel.get() else { return };
        if attached.get_value() {
            return;
        }
        attached.set_value(true);

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible.with_value(|f| f());
                }
            }
        });

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&el);
                callback.forget();
            }
            Err(err) => {
                web_sys::console::error_1(&err);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_copy<T: Copy>() {}

    #[test]
    fn feed_handle_is_copy_for_non_copy_items() {
        assert_copy::<Feed<String>>();
    }
}
