//! Fetch Outcome Mapping
//!
//! What a settled page fetch means for the sentinel, independent of any
//! signal or DOM machinery so the mapping is testable on the host.

use crate::state::PageOutcome;

/// Errors a page fetcher can report to the feed.
#[derive(Clone, Debug, PartialEq)]
pub enum PageError {
    /// The endpoint signalled "no data" (404 by backend convention).
    Empty,
    /// Session is missing or expired; the caller should redirect, not render.
    Unauthorized,
    /// Transient failure: network, timeout, server error, bad payload.
    Failed(String),
}

/// What the sentinel element should display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SentinelStatus {
    Hidden,
    Loading,
    /// Terminal: the resource has no items at all.
    Empty,
    /// Terminal: end of pagination after at least one item.
    End,
    /// Terminal: a load failed; recovery is a page reload.
    Error,
}

/// Map a settled fetch to the sentinel display plus whether the caller
/// should redirect to login.
///
/// A 401 never turns into an error card; exhaustion reads as "empty" only
/// when nothing at all has loaded.
pub fn settle_page(
    result: Result<PageOutcome, &PageError>,
    nothing_loaded: bool,
) -> (SentinelStatus, bool) {
    match result {
        Ok(PageOutcome::More) => (SentinelStatus::Hidden, false),
        Ok(PageOutcome::End) | Err(PageError::Empty) => {
            let status = if nothing_loaded {
                SentinelStatus::Empty
            } else {
                SentinelStatus::End
            };
            (status, false)
        }
        Err(PageError::Unauthorized) => (SentinelStatus::Hidden, true),
        Err(PageError::Failed(_)) => (SentinelStatus::Error, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_keeps_the_sentinel_hidden() {
        assert_eq!(
            settle_page(Ok(PageOutcome::More), false),
            (SentinelStatus::Hidden, false)
        );
    }

    #[test]
    fn exhaustion_message_depends_on_what_loaded() {
        assert_eq!(
            settle_page(Ok(PageOutcome::End), true),
            (SentinelStatus::Empty, false)
        );
        assert_eq!(
            settle_page(Ok(PageOutcome::End), false),
            (SentinelStatus::End, false)
        );
    }

    #[test]
    fn missing_resource_reads_like_exhaustion() {
        assert_eq!(
            settle_page(Err(&PageError::Empty), true),
            (SentinelStatus::Empty, false)
        );
        assert_eq!(
            settle_page(Err(&PageError::Empty), false),
            (SentinelStatus::End, false)
        );
    }

    #[test]
    fn unauthorized_redirects_instead_of_rendering_an_error_card() {
        let (status, redirect) = settle_page(Err(&PageError::Unauthorized), false);
        assert_eq!(status, SentinelStatus::Hidden);
        assert!(redirect);
    }

    #[test]
    fn failure_shows_the_error_line_and_never_redirects() {
        let (status, redirect) = settle_page(Err(&PageError::Failed("500".to_string())), true);
        assert_eq!(status, SentinelStatus::Error);
        assert!(!redirect);
    }
}
