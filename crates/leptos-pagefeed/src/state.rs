//! Feed State Machine
//!
//! Pure pagination state, independent of the DOM and the network layer.
//! `Idle -> Loading -> {Idle, Exhausted}`; `Exhausted` is terminal until
//! an explicit `reset()`.

/// Page size policy: a larger first request, then a smaller steady-state size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePolicy {
    pub first: usize,
    pub steady: usize,
}

impl PagePolicy {
    pub const fn new(first: usize, steady: usize) -> Self {
        Self { first, steady }
    }

    /// Same size for every page.
    pub const fn fixed(size: usize) -> Self {
        Self { first: size, steady: size }
    }
}

/// One page request: 1-based page number plus requested size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Exhausted,
}

/// Result of completing a page load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageOutcome {
    /// Full page received, more pages may follow.
    More,
    /// Short page (possibly empty): the feed is exhausted.
    End,
}

/// Pagination state for one feed instance.
///
/// At most one fetch is in flight: `begin()` hands out a request only from
/// `Idle`, and every terminal condition (short page, 404, server error) parks
/// the state in `Exhausted` so scroll events stop issuing requests.
#[derive(Clone, Debug)]
pub struct FeedState {
    policy: PagePolicy,
    phase: Phase,
    page: u32,
    per_page: usize,
    in_flight: Option<PageRequest>,
}

impl FeedState {
    pub fn new(policy: PagePolicy) -> Self {
        Self {
            policy,
            phase: Phase::Idle,
            page: 1,
            per_page: policy.first,
            in_flight: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Claim the next page request, or `None` while loading or exhausted.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.phase != Phase::Idle {
            return None;
        }
        let req = PageRequest { page: self.page, per_page: self.per_page };
        self.phase = Phase::Loading;
        self.in_flight = Some(req);
        Some(req)
    }

    /// Record a successful response of `received` items.
    ///
    /// A page shorter than requested (including empty) is the last one.
    pub fn complete(&mut self, received: usize) -> PageOutcome {
        let requested = self.in_flight.take().map(|r| r.per_page).unwrap_or(self.per_page);
        if received < requested {
            self.phase = Phase::Exhausted;
            PageOutcome::End
        } else {
            self.page += 1;
            self.per_page = self.policy.steady;
            self.phase = Phase::Idle;
            PageOutcome::More
        }
    }

    /// Record a failed response. Terminal, so scroll events cannot retry-storm.
    pub fn fail(&mut self) {
        self.in_flight = None;
        self.phase = Phase::Exhausted;
    }

    /// Start a fresh cycle from page one. The only exit from `Exhausted`.
    pub fn reset(&mut self) {
        *self = Self::new(self.policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_uses_first_page_size() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        let req = state.begin().expect("fresh feed should hand out a request");
        assert_eq!(req, PageRequest { page: 1, per_page: 8 });
    }

    #[test]
    fn begin_is_rejected_while_loading() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        assert!(state.begin().is_some());
        // Second call before the first resolves: no request issued.
        assert!(state.begin().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn full_page_advances_and_shrinks_page_size() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        state.begin().unwrap();
        assert_eq!(state.complete(8), PageOutcome::More);

        let req = state.begin().unwrap();
        assert_eq!(req, PageRequest { page: 2, per_page: 4 });
        assert_eq!(state.complete(4), PageOutcome::More);
        assert_eq!(state.begin().unwrap(), PageRequest { page: 3, per_page: 4 });
    }

    #[test]
    fn short_page_exhausts_the_feed() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        state.begin().unwrap();
        assert_eq!(state.complete(3), PageOutcome::End);
        assert!(state.is_exhausted());
        assert!(state.begin().is_none());
    }

    #[test]
    fn empty_page_exhausts_the_feed() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        state.begin().unwrap();
        assert_eq!(state.complete(0), PageOutcome::End);
        assert!(state.begin().is_none());
    }

    #[test]
    fn failure_is_terminal() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        state.begin().unwrap();
        state.fail();
        assert!(state.is_exhausted());
        assert!(state.begin().is_none());
        state.fail();
        assert!(state.is_exhausted());
    }

    #[test]
    fn reset_starts_a_fresh_cycle() {
        let mut state = FeedState::new(PagePolicy::new(8, 4));
        state.begin().unwrap();
        state.complete(8);
        state.begin().unwrap();
        state.complete(1);
        assert!(state.is_exhausted());

        state.reset();
        assert_eq!(state.begin().unwrap(), PageRequest { page: 1, per_page: 8 });
    }

    #[test]
    fn fixed_policy_keeps_one_size() {
        let mut state = FeedState::new(PagePolicy::fixed(20));
        state.begin().unwrap();
        state.complete(20);
        assert_eq!(state.begin().unwrap(), PageRequest { page: 2, per_page: 20 });
    }
}
