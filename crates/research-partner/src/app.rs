//! Front-end application state.
//!
//! Holds everything a research UI displays: the active view, search filters,
//! the latest tool results, a transient banner and the bookmark set. All
//! handlers take the caller's clock so banner expiry stays deterministic.

use chrono::{DateTime, TimeDelta, Utc};

use crate::bookmarks::{BlobStore, BookmarkStore};
use crate::citation::{CitationStyle, format_citation};
use crate::models::{Dataset, NetworkPaper, Paper, PaperDetails, Payload, ToolEnvelope};

/// Seconds a banner stays visible.
pub const BANNER_TTL_SECS: i64 = 5;

/// Active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Conversation with the assistant.
    #[default]
    Chat,
    /// Paper results.
    Papers,
    /// Dataset results.
    Datasets,
    /// Citations and references of one paper.
    CitationNetwork,
    /// Saved papers.
    Bookmarks,
}

/// Client-side filters over the current paper results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Only open-access papers.
    pub open_access_only: bool,
    /// Earliest publication year. Papers without a year are hidden when set.
    pub min_year: Option<i32>,
    /// Minimum citation count.
    pub min_citations: Option<u64>,
}

impl SearchFilters {
    /// Whether a paper passes every active filter.
    #[must_use]
    pub fn matches(&self, paper: &Paper) -> bool {
        if self.open_access_only && !paper.is_open_access {
            return false;
        }
        if let Some(min) = self.min_year {
            if paper.year.value().is_none_or(|year| year < min) {
                return false;
            }
        }
        self.min_citations.is_none_or(|min| paper.citation_count >= min)
    }
}

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// Transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Severity.
    pub kind: BannerKind,
    /// Text shown to the user.
    pub message: String,
    /// When it was raised.
    pub raised_at: DateTime<Utc>,
}

impl Banner {
    /// Whether the banner has outlived [`BANNER_TTL_SECS`] at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.raised_at > TimeDelta::seconds(BANNER_TTL_SECS)
    }
}

/// Citations and references of the last inspected paper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationNetwork {
    /// Papers citing it.
    pub citations: Vec<NetworkPaper>,
    /// Papers it cites.
    pub references: Vec<NetworkPaper>,
}

/// Complete UI state.
#[derive(Debug)]
pub struct AppState<S: BlobStore> {
    view: ViewMode,
    filters: SearchFilters,
    banner: Option<Banner>,
    papers: Vec<Paper>,
    datasets: Vec<Dataset>,
    network: Option<CitationNetwork>,
    recommendations: Vec<Paper>,
    selected: Option<PaperDetails>,
    bookmarks: BookmarkStore<S>,
}

impl<S: BlobStore> AppState<S> {
    /// State over an already loaded bookmark store.
    #[must_use]
    pub fn new(bookmarks: BookmarkStore<S>) -> Self {
        Self {
            view: ViewMode::default(),
            filters: SearchFilters::default(),
            banner: None,
            papers: Vec::new(),
            datasets: Vec::new(),
            network: None,
            recommendations: Vec::new(),
            selected: None,
            bookmarks,
        }
    }

    /// Load bookmarks from `blob`; a corrupt blob starts empty with an error banner.
    pub fn load(blob: S, now: DateTime<Utc>) -> Self {
        let (bookmarks, error) = BookmarkStore::load(blob);
        let mut state = Self::new(bookmarks);
        if let Some(err) = error {
            state.raise(BannerKind::Error, format!("Failed to load bookmarks: {err}"), now);
        }
        state
    }

    /// Apply a tool result.
    ///
    /// The matching result list is replaced wholesale, even on failure. The
    /// view only changes on success, and only for payloads that have a view.
    pub fn apply_envelope(&mut self, envelope: ToolEnvelope, now: DateTime<Utc>) {
        let ToolEnvelope { success, message, payload } = envelope;

        let view = match payload {
            Payload::Papers { papers, .. } => {
                self.papers = papers;
                Some(ViewMode::Papers)
            }
            Payload::Datasets { datasets } => {
                self.datasets = datasets;
                Some(ViewMode::Datasets)
            }
            Payload::Network { citations, references } => {
                self.network = Some(CitationNetwork { citations, references });
                Some(ViewMode::CitationNetwork)
            }
            // No view of their own: read through `recommendations()` and `selected()`.
            Payload::Recommendations { recommendations } => {
                self.recommendations = recommendations;
                None
            }
            Payload::Details { paper } => {
                self.selected = paper.map(|details| *details);
                None
            }
            Payload::None => None,
        };

        if success {
            if let Some(view) = view {
                self.view = view;
            }
            self.raise(BannerKind::Success, message, now);
        } else {
            self.raise(BannerKind::Error, message, now);
        }
    }

    /// Bookmark a paper. Returns whether it was added.
    pub fn bookmark(&mut self, paper: Paper, now: DateTime<Utc>) -> bool {
        let title = paper.title.clone();
        match self.bookmarks.add(paper) {
            Ok(()) => {
                self.raise(BannerKind::Success, format!("Bookmarked \"{title}\""), now);
                true
            }
            Err(err) => {
                self.raise(BannerKind::Error, err.to_string(), now);
                false
            }
        }
    }

    /// Remove a bookmark by title. Returns whether one was removed.
    pub fn unbookmark(&mut self, title: &str, now: DateTime<Utc>) -> bool {
        match self.bookmarks.remove(title) {
            Ok(true) => {
                self.raise(BannerKind::Success, format!("Removed \"{title}\" from bookmarks"), now);
                true
            }
            Ok(false) => false,
            Err(err) => {
                self.raise(BannerKind::Error, err.to_string(), now);
                false
            }
        }
    }

    /// Flip the bookmark state of a paper. Returns whether it is now bookmarked.
    pub fn toggle_bookmark(&mut self, paper: Paper, now: DateTime<Utc>) -> bool {
        if self.bookmarks.is_bookmarked(&paper.title) {
            let title = paper.title;
            !self.unbookmark(&title, now)
        } else {
            self.bookmark(paper, now)
        }
    }

    /// Cite a bookmarked paper, `None` if the title is not bookmarked.
    #[must_use]
    pub fn cite(&self, title: &str, style: CitationStyle) -> Option<String> {
        self.bookmarks.get(title).map(|paper| format_citation(paper, style))
    }

    /// Current papers passing the filters, in result order.
    #[must_use]
    pub fn visible_papers(&self) -> Vec<&Paper> {
        self.papers.iter().filter(|p| self.filters.matches(p)).collect()
    }

    /// Clear the banner if it has expired. Returns whether it was cleared.
    pub fn dismiss_expired_banner(&mut self, now: DateTime<Utc>) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
            return true;
        }
        false
    }

    /// Drop every result list and return to the chat view.
    pub fn clear_results(&mut self) {
        self.papers.clear();
        self.datasets.clear();
        self.network = None;
        self.recommendations.clear();
        self.selected = None;
        self.view = ViewMode::Chat;
    }

    /// Switch views.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Replace the filters.
    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    /// Active view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    /// Active filters.
    #[must_use]
    pub const fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Current banner.
    #[must_use]
    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Unfiltered paper results.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Dataset results.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Citation network.
    #[must_use]
    pub const fn network(&self) -> Option<&CitationNetwork> {
        self.network.as_ref()
    }

    /// Recommendations.
    #[must_use]
    pub fn recommendations(&self) -> &[Paper] {
        &self.recommendations
    }

    /// Paper shown in the detail pane.
    #[must_use]
    pub const fn selected(&self) -> Option<&PaperDetails> {
        self.selected.as_ref()
    }

    /// Bookmark store.
    #[must_use]
    pub const fn bookmarks(&self) -> &BookmarkStore<S> {
        &self.bookmarks
    }

    fn raise(&mut self, kind: BannerKind, message: String, now: DateTime<Utc>) {
        self.banner = Some(Banner { kind, message, raised_at: now });
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::bookmarks::{BOOKMARKS_KEY, MemoryBlobStore};
    use crate::models::{PayloadKind, Year};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn paper(title: &str, year: Option<i32>, citations: u64, open: bool) -> Paper {
        Paper {
            title: title.to_string(),
            year: Year::from(year),
            citation_count: citations,
            is_open_access: open,
            ..Paper::default()
        }
    }

    fn papers_envelope(papers: Vec<Paper>) -> ToolEnvelope {
        ToolEnvelope::success(
            format!("Found {} papers", papers.len()),
            Payload::Papers { total_results: None, query: None, author_name: None, papers },
        )
    }

    fn state() -> AppState<MemoryBlobStore> {
        AppState::load(MemoryBlobStore::new(), t0())
    }

    #[test]
    fn test_apply_replaces_not_merges() {
        let mut app = state();
        app.apply_envelope(papers_envelope(vec![paper("A", None, 0, false)]), t0());
        app.apply_envelope(papers_envelope(vec![paper("B", None, 0, false)]), t0());
        assert_eq!(app.papers().len(), 1);
        assert_eq!(app.papers()[0].title, "B");
        assert_eq!(app.view(), ViewMode::Papers);
        assert_eq!(app.banner().unwrap().kind, BannerKind::Success);
    }

    #[test]
    fn test_failed_envelope_keeps_view_and_raises_error() {
        let mut app = state();
        app.apply_envelope(ToolEnvelope::failure(PayloadKind::Datasets, "No datasets"), t0());
        assert_eq!(app.view(), ViewMode::Chat);
        let banner = app.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "No datasets");
    }

    #[test]
    fn test_recommendations_keep_search_view() {
        let mut app = state();
        app.apply_envelope(papers_envelope(vec![paper("Search hit", None, 0, false)]), t0());
        app.set_view(ViewMode::Datasets);

        app.apply_envelope(
            ToolEnvelope::success(
                "Found 1 recommended papers",
                Payload::Recommendations { recommendations: vec![paper("Related", None, 0, false)] },
            ),
            t0(),
        );

        assert_eq!(app.view(), ViewMode::Datasets);
        assert_eq!(app.recommendations()[0].title, "Related");
        assert_eq!(app.papers()[0].title, "Search hit");
        assert_eq!(app.banner().unwrap().kind, BannerKind::Success);
    }

    #[test]
    fn test_banner_expires_after_ttl() {
        let mut app = state();
        app.apply_envelope(papers_envelope(vec![]), t0());
        assert!(!app.dismiss_expired_banner(t0() + TimeDelta::seconds(BANNER_TTL_SECS)));
        assert!(app.banner().is_some());
        assert!(app.dismiss_expired_banner(t0() + TimeDelta::seconds(BANNER_TTL_SECS + 1)));
        assert!(app.banner().is_none());
    }

    #[test]
    fn test_filters_never_reorder() {
        let mut app = state();
        app.apply_envelope(
            papers_envelope(vec![
                paper("old", Some(2001), 500, true),
                paper("new", Some(2022), 3, true),
                paper("closed", Some(2023), 90, false),
                paper("undated", None, 90, true),
            ]),
            t0(),
        );
        app.set_filters(SearchFilters {
            open_access_only: true,
            min_year: Some(2000),
            min_citations: Some(1),
        });
        let titles: Vec<_> = app.visible_papers().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["old", "new"]);
    }

    #[test]
    fn test_duplicate_bookmark_raises_error_banner() {
        let mut app = state();
        assert!(app.bookmark(paper("X", Some(2020), 0, false), t0()));
        assert!(!app.bookmark(paper("X", Some(2020), 0, false), t0()));
        assert_eq!(app.banner().unwrap().kind, BannerKind::Error);
        assert_eq!(app.bookmarks().len(), 1);
    }

    #[test]
    fn test_toggle_and_cite() {
        let mut app = state();
        assert!(app.toggle_bookmark(paper("X", Some(2020), 0, false), t0()));
        assert!(app.cite("X", CitationStyle::Apa).unwrap().contains("(2020). X."));
        assert!(!app.toggle_bookmark(paper("X", Some(2020), 0, false), t0()));
        assert!(app.cite("X", CitationStyle::Apa).is_none());
    }

    #[test]
    fn test_corrupt_bookmarks_raise_banner() {
        let app = AppState::load(MemoryBlobStore::with_blob(BOOKMARKS_KEY, "oops"), t0());
        assert!(app.bookmarks().is_empty());
        assert!(app.banner().unwrap().message.starts_with("Failed to load bookmarks"));
    }

    #[test]
    fn test_clear_results_returns_to_chat() {
        let mut app = state();
        app.apply_envelope(papers_envelope(vec![paper("A", None, 0, false)]), t0());
        app.clear_results();
        assert!(app.papers().is_empty());
        assert_eq!(app.view(), ViewMode::Chat);
    }
}
