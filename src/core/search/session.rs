// ─── Search Session ───
// Offset pagination with a result accumulator. A fresh search (new query or
// filter) resets everything; load-more appends. Each fresh search bumps a
// generation so responses from superseded requests are dropped.

use serde::Serialize;
use tracing::debug;

use super::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "detail", rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    /// Fresh search in flight; results are empty.
    Loading,
    /// Load-more in flight; earlier results stay visible.
    LoadingMore,
    Ready,
    /// A fresh search returned nothing.
    Empty,
    /// A fresh search failed.
    Failed(String),
}

/// Everything needed to issue one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub filter: Option<String>,
    pub offset: usize,
    pub load_more: bool,
}

#[derive(Debug, Clone)]
pub struct SearchSession<T> {
    query: String,
    filter: Option<String>,
    offset: usize,
    results: Vec<T>,
    phase: SearchPhase,
    generation: u64,
    last_page_len: usize,
    page_size: usize,
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl<T> SearchSession<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            filter: None,
            offset: 0,
            results: Vec::new(),
            phase: SearchPhase::Idle,
            generation: 0,
            last_page_len: 0,
            page_size: page_size.max(1),
        }
    }

    /// Start a fresh search: offset back to 0, accumulator cleared.
    pub fn begin_fresh(&mut self, query: impl Into<String>, filter: Option<String>) -> SearchTicket {
        self.generation += 1;
        self.query = query.into();
        self.filter = filter;
        self.offset = 0;
        self.results.clear();
        self.last_page_len = 0;
        self.phase = SearchPhase::Loading;

        SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
            filter: self.filter.clone(),
            offset: 0,
            load_more: false,
        }
    }

    /// Request the next page. `None` unless a load-more control is on offer.
    pub fn begin_load_more(&mut self) -> Option<SearchTicket> {
        if !self.can_load_more() {
            return None;
        }
        self.phase = SearchPhase::LoadingMore;

        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
            filter: self.filter.clone(),
            offset: self.offset,
            load_more: true,
        })
    }

    fn is_current(&self, ticket: &SearchTicket) -> bool {
        let current = ticket.generation == self.generation;
        if !current {
            debug!(
                "Dropping stale search response (generation {} < {})",
                ticket.generation, self.generation
            );
        }
        current
    }

    /// Apply a page. The offset advances by the number of hits received.
    /// Returns `false` when the ticket was superseded and nothing changed.
    pub fn apply_page(&mut self, ticket: &SearchTicket, page: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.last_page_len = page.len();
        self.offset += page.len();
        self.results.extend(page);
        self.phase = if self.results.is_empty() && !ticket.load_more {
            SearchPhase::Empty
        } else {
            SearchPhase::Ready
        };
        true
    }

    /// Apply a failure. A failed fresh search shows the error; a failed
    /// load-more keeps earlier results and offers the control again.
    pub fn apply_error(&mut self, ticket: &SearchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        if ticket.load_more {
            self.phase = SearchPhase::Ready;
        } else {
            self.results.clear();
            self.phase = SearchPhase::Failed(message.into());
        }
        true
    }

    /// A full last page means there may be more.
    pub fn can_load_more(&self) -> bool {
        self.phase == SearchPhase::Ready && self.last_page_len >= self.page_size
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(start: usize, len: usize) -> Vec<usize> {
        (start..start + len).collect()
    }

    #[test]
    fn full_page_offers_load_more() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("sodium", None);
        assert!(s.apply_page(&t, page(0, 20)));
        assert!(s.can_load_more());
        assert_eq!(s.offset(), 20);

        let t = s.begin_load_more().unwrap();
        assert_eq!(t.offset, 20);
        assert_eq!(s.phase(), &SearchPhase::LoadingMore);
        assert!(s.begin_load_more().is_none());

        s.apply_page(&t, page(20, 7));
        assert_eq!(s.results().len(), 27);
        assert_eq!(s.offset(), 27);
        assert!(!s.can_load_more());
    }

    #[test]
    fn short_page_is_exhausted() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("", None);
        s.apply_page(&t, page(0, 19));
        assert_eq!(s.phase(), &SearchPhase::Ready);
        assert!(!s.can_load_more());
        assert!(s.begin_load_more().is_none());
    }

    #[test]
    fn fresh_search_resets_offset_and_results() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("a", None);
        s.apply_page(&t, page(0, 20));

        let t = s.begin_fresh("b", Some("1.20.1".into()));
        assert_eq!(t.offset, 0);
        assert_eq!(s.offset(), 0);
        assert!(s.results().is_empty());
        assert_eq!(s.phase(), &SearchPhase::Loading);
        assert_eq!(s.filter(), Some("1.20.1"));

        s.apply_page(&t, vec![100]);
        assert_eq!(s.results(), &[100]);
    }

    #[test]
    fn empty_fresh_page_is_nothing_found() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("zzz", None);
        s.apply_page(&t, Vec::new());
        assert_eq!(s.phase(), &SearchPhase::Empty);
    }

    #[test]
    fn load_more_error_keeps_results() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("", None);
        s.apply_page(&t, page(0, 20));
        let t = s.begin_load_more().unwrap();

        assert!(s.apply_error(&t, "timeout"));
        assert_eq!(s.results().len(), 20);
        assert_eq!(s.phase(), &SearchPhase::Ready);
        assert!(s.can_load_more());
    }

    #[test]
    fn fresh_error_is_distinct_state() {
        let mut s = SearchSession::<usize>::default();
        let t = s.begin_fresh("x", None);
        s.apply_error(&t, "offline");
        assert_eq!(s.phase(), &SearchPhase::Failed("offline".into()));
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut s = SearchSession::<usize>::default();
        let old = s.begin_fresh("so", None);
        let new = s.begin_fresh("sodium", None);

        assert!(s.apply_page(&new, vec![1, 2]));
        assert!(!s.apply_page(&old, page(50, 20)));
        assert!(!s.apply_error(&old, "late"));
        assert_eq!(s.results(), &[1, 2]);
        assert_eq!(s.query(), "sodium");
    }
}
