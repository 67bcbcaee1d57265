//! Feed of match announcements: filter state, page cursor and the page
//! button window.
//!
//! Every fetch asks for [`PAGE_SIZE`] items at `(current_page - 1) * PAGE_SIZE`.
//! Filter changes always go back to page 1, and the backend's page block is
//! authoritative once a response arrives.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::dtos::results::FindMatchAnnouncementsResult;
use crate::models::match_announcement::{FindMatchAnnouncementsQuery, MatchAnnouncement, PaginationInfo};
use crate::models::team::Sport;
use crate::usecases::FindMatchAnnouncementsUseCase;

pub const PAGE_SIZE: u32 = 9;
pub const MAX_PAGE_BUTTONS: u32 = 10;

/// Identifies one issued fetch. Only the latest ticket may update the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    pub ticket: RequestTicket,
    pub query: FindMatchAnnouncementsQuery,
}

/// Page numbers to render as buttons, at most [`MAX_PAGE_BUTTONS`] of them.
pub fn page_window(current_page: u32, total_pages: u32) -> RangeInclusive<u32> {
    if total_pages == 0 {
        return 1..=0;
    }
    if current_page <= 5 {
        1..=total_pages.min(MAX_PAGE_BUTTONS)
    } else if current_page + 5 > total_pages {
        total_pages.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1)..=total_pages
    } else {
        current_page - 4..=current_page + 5
    }
}

#[derive(Debug, Clone)]
pub struct AnnouncementFeed {
    current_page: u32,
    total_pages: u32,
    selected_sports: Vec<Sport>,
    from_date: Option<String>,
    to_date: Option<String>,
    loading: bool,
    error: Option<String>,
    announcements: Vec<MatchAnnouncement>,
    pagination: PaginationInfo,
    scroll_to_top: bool,
    last_ticket: u64,
}

impl Default for AnnouncementFeed {
    fn default() -> Self {
        AnnouncementFeed {
            current_page: 1,
            total_pages: 0,
            selected_sports: Vec::new(),
            from_date: None,
            to_date: None,
            loading: false,
            error: None,
            announcements: Vec::new(),
            pagination: PaginationInfo::empty(),
            scroll_to_top: false,
            last_ticket: 0,
        }
    }
}

impl AnnouncementFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn selected_sports(&self) -> &[Sport] {
        &self.selected_sports
    }

    pub fn announcements(&self) -> &[MatchAnnouncement] {
        &self.announcements
    }

    pub fn pagination(&self) -> PaginationInfo {
        self.pagination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_sports(&mut self, sports: Vec<Sport>) {
        self.selected_sports = sports;
        self.current_page = 1;
    }

    pub fn toggle_sport(&mut self, sport: Sport) {
        let mut sports = self.selected_sports.clone();
        match sports.iter().position(|s| *s == sport) {
            Some(index) => {
                sports.remove(index);
            }
            None => sports.push(sport),
        }
        self.set_sports(sports);
    }

    /// Empty strings clear the bound.
    pub fn set_date_range(&mut self, from_date: Option<String>, to_date: Option<String>) {
        self.from_date = from_date.filter(|d| !d.is_empty());
        self.to_date = to_date.filter(|d| !d.is_empty());
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.selected_sports.clear();
        self.from_date = None;
        self.to_date = None;
        self.current_page = 1;
    }

    /// Moves the cursor, clamped to the known pages. Returns whether it moved.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.scroll_to_top = true;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.show_next() && self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.current_page > 1 && self.go_to_page(self.current_page - 1)
    }

    pub fn visible_pages(&self) -> RangeInclusive<u32> {
        page_window(self.current_page, self.total_pages)
    }

    pub fn show_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Consumes a pending scroll-to-top request raised by a page move.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    pub fn query(&self) -> FindMatchAnnouncementsQuery {
        FindMatchAnnouncementsQuery {
            sports: self.selected_sports.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            limit: Some(PAGE_SIZE),
            offset: Some((self.current_page - 1) * PAGE_SIZE),
            ..Default::default()
        }
    }

    /// Marks the feed as loading and issues a new ticket, superseding any
    /// request still in flight.
    pub fn prepare_request(&mut self) -> FeedRequest {
        self.last_ticket += 1;
        self.loading = true;
        self.error = None;
        FeedRequest {
            ticket: RequestTicket(self.last_ticket),
            query: self.query(),
        }
    }

    /// Applies a fetch outcome. Outcomes of superseded tickets are dropped and
    /// `false` is returned.
    pub fn apply_response(&mut self, ticket: RequestTicket, result: FindMatchAnnouncementsResult) -> bool {
        if ticket.0 != self.last_ticket {
            debug!("Dropping stale feed response {:?}", ticket);
            return false;
        }
        self.loading = false;

        if !result.success {
            self.announcements.clear();
            self.error = Some(
                result
                    .error
                    .unwrap_or_else(|| "Error al cargar los anuncios".to_string()),
            );
            return true;
        }

        self.announcements = result.announcements;
        self.pagination = result.pagination;
        self.total_pages = result.pagination.out_of;
        if result.pagination.number >= 1 && result.pagination.number != self.current_page {
            debug!(
                "Backend moved the feed from page {} to {}",
                self.current_page, result.pagination.number
            );
            self.current_page = result.pagination.number;
        }
        true
    }

    pub async fn load(&mut self, use_case: &FindMatchAnnouncementsUseCase) {
        let request = self.prepare_request();
        let result = use_case.execute(&request.query).await;
        self.apply_response(request.ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::usecases::fakes::{announcement_json, api_err, ok, FakeAnnouncementRepository};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page_reply(number: u32, out_of: u32, total: u64) -> crate::usecases::fakes::Reply {
        ok(
            200,
            json!({
                "data": [announcement_json("Boca")],
                "pagination": {"number": number, "out_of": out_of, "total": total}
            }),
        )
    }

    fn feed_use_case(fake: &Arc<FakeAnnouncementRepository>) -> FindMatchAnnouncementsUseCase {
        FindMatchAnnouncementsUseCase::new(fake.clone())
            .with_today(|| chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn window_follows_the_current_page() {
        assert_eq!(page_window(3, 20), 1..=10);
        assert_eq!(page_window(18, 20), 11..=20);
        assert_eq!(page_window(10, 20), 6..=15);
        assert_eq!(page_window(1, 4), 1..=4);
        assert_eq!(page_window(7, 8), 1..=8);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn offsets_follow_the_page() {
        let mut feed = AnnouncementFeed::new();
        assert_eq!(feed.query().offset, Some(0));
        assert_eq!(feed.query().limit, Some(PAGE_SIZE));

        feed.total_pages = 5;
        assert!(feed.go_to_page(4));
        assert_eq!(feed.query().offset, Some(27));
        assert!(feed.take_scroll_request());
        assert!(!feed.take_scroll_request());
    }

    #[test]
    fn navigation_is_bounded() {
        let mut feed = AnnouncementFeed::new();
        assert!(!feed.show_controls());
        assert!(!feed.next_page());

        feed.total_pages = 2;
        assert!(feed.show_controls());
        assert!(feed.next_page());
        assert!(!feed.show_next());
        assert!(!feed.next_page());
        assert!(!feed.go_to_page(9));
        assert!(feed.previous_page());
        assert_eq!(feed.current_page(), 1);
    }

    #[tokio::test]
    async fn changing_sport_on_page_three_fetches_page_one() {
        let fake = Arc::new(FakeAnnouncementRepository::default());
        fake.push(page_reply(1, 5, 41));
        fake.push(page_reply(1, 2, 12));
        let use_case = feed_use_case(&fake);

        let mut feed = AnnouncementFeed::new();
        feed.load(&use_case).await;
        assert!(feed.go_to_page(3));

        feed.toggle_sport(Sport::Paddle);
        assert_eq!(feed.current_page(), 1);
        feed.load(&use_case).await;

        let queries = fake.queries();
        assert_eq!(queries[1].offset, Some(0));
        assert_eq!(queries[1].sports, vec![Sport::Paddle]);
        assert_eq!(feed.total_pages(), 2);
    }

    #[tokio::test]
    async fn backend_page_number_wins() {
        let fake = Arc::new(FakeAnnouncementRepository::replying(page_reply(4, 4, 30)));
        let mut feed = AnnouncementFeed::new();
        feed.total_pages = 9;
        feed.go_to_page(7);

        feed.load(&feed_use_case(&fake)).await;

        assert_eq!(feed.current_page(), 4);
        assert_eq!(feed.total_pages(), 4);
        assert!(!feed.is_loading());
        assert_eq!(feed.announcements().len(), 1);
    }

    #[tokio::test]
    async fn failures_clear_loading_and_keep_the_message() {
        let fake = Arc::new(FakeAnnouncementRepository::replying(api_err(500, None, "boom")));
        let mut feed = AnnouncementFeed::new();

        feed.load(&feed_use_case(&fake)).await;

        assert!(!feed.is_loading());
        assert_eq!(feed.error(), Some(crate::error_messages::GENERIC_ERROR));
        feed.dismiss_error();
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut feed = AnnouncementFeed::new();
        let first = feed.prepare_request();
        feed.total_pages = 3;
        feed.go_to_page(2);
        let second = feed.prepare_request();

        let late = FindMatchAnnouncementsResult::page(Vec::new(), PaginationInfo { number: 1, out_of: 3, total: 20 });
        assert!(!feed.apply_response(first.ticket, late));
        assert!(feed.is_loading());
        assert_eq!(feed.current_page(), 2);

        let fresh = FindMatchAnnouncementsResult::page(Vec::new(), PaginationInfo { number: 2, out_of: 3, total: 20 });
        assert!(feed.apply_response(second.ticket, fresh));
        assert!(!feed.is_loading());
        assert_eq!(second.query.offset, Some(9));
    }

    #[test]
    fn date_filters_reset_the_page() {
        let mut feed = AnnouncementFeed::new();
        feed.total_pages = 4;
        feed.go_to_page(3);

        feed.set_date_range(Some("2025-04-01".into()), Some(String::new()));

        assert_eq!(feed.current_page(), 1);
        let query = feed.query();
        assert_eq!(query.from_date.as_deref(), Some("2025-04-01"));
        assert_eq!(query.to_date, None);

        feed.clear_filters();
        assert_eq!(feed.query().from_date, None);
    }
}
