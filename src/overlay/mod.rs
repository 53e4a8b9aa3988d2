//! Reader overlay state machine.
//!
//! The overlay shows one item's full content on top of the lists. It has
//! to agree with the navigation history at all times: opening pushes a
//! deep-link entry, a user-initiated close pushes the base path back,
//! and a close caused by back-navigation pushes nothing at all (the
//! history already moved). Body fetches resolve asynchronously, so the
//! controller remembers which item's fetch is outstanding and drops any
//! result that no longer matches the open item.

pub mod navigation;

pub use navigation::{HistoryStack, HistoryState, NavigationPort, BASE_PATH};

use crate::app::Result;
use crate::domain::{ContentItem, ContentKind};

/// User-facing message when every body source came up empty.
pub const LOAD_FAILED_MESSAGE: &str = "記事の読み込みに失敗しました。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open,
}

/// What the overlay body pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyState {
    /// Overlay closed; nothing to show.
    Empty,
    Loading,
    Ready(String),
    Failed(String),
}

/// Item metadata known without any I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayMeta {
    pub date: String,
    pub tags: Vec<String>,
    pub author: Option<String>,
}

/// The body fetch the caller must perform after an open. Carries the
/// key the controller will match the result against.
#[derive(Debug, Clone)]
pub struct BodyRequest {
    pub key: String,
    pub item: ContentItem,
}

pub struct OverlayController {
    phase: OverlayPhase,
    kind: Option<ContentKind>,
    meta: OverlayMeta,
    body: BodyState,
    open_key: Option<String>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            kind: None,
            meta: OverlayMeta::default(),
            body: BodyState::Empty,
            open_key: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn kind(&self) -> Option<ContentKind> {
        self.kind
    }

    pub fn meta(&self) -> &OverlayMeta {
        &self.meta
    }

    pub fn body(&self) -> &BodyState {
        &self.body
    }

    pub fn open_key(&self) -> Option<&str> {
        self.open_key.as_deref()
    }

    /// Open the overlay for an item. Valid from `Closed` or `Open`
    /// (switching items reuses the open overlay).
    ///
    /// Meta comes synchronously from the item's known fields; the body
    /// starts as a loading placeholder, and a history entry for the
    /// item's deep link is pushed. The returned request must be resolved
    /// by the caller and handed back through [`apply_body`].
    ///
    /// [`apply_body`]: OverlayController::apply_body
    pub fn open_item(&mut self, item: &ContentItem, nav: &mut dyn NavigationPort) -> BodyRequest {
        self.phase = OverlayPhase::Open;
        self.kind = Some(item.kind);
        self.meta = OverlayMeta {
            date: match item.kind {
                ContentKind::Product => "Product".to_string(),
                ContentKind::Post => item.display_date(),
            },
            tags: item.tags.clone(),
            author: item.author_name().map(str::to_string),
        };
        self.body = BodyState::Loading;

        let key = item.key().to_string();
        self.open_key = Some(key.clone());

        let path = format!("/{}/{}", item.kind.path_segment(), key);
        nav.push_path(
            &path,
            Some(HistoryState {
                kind: item.kind,
                id: key.clone(),
            }),
        );

        BodyRequest {
            key,
            item: item.clone(),
        }
    }

    /// Apply the outcome of a body fetch.
    ///
    /// A result whose key no longer matches the open item is stale: the
    /// user closed the overlay or opened something else while the fetch
    /// was in flight. Stale results are discarded, not errors.
    pub fn apply_body(&mut self, key: &str, result: Result<String>) {
        if self.phase != OverlayPhase::Open || self.open_key.as_deref() != Some(key) {
            tracing::debug!("discarding stale body result for {}", key);
            return;
        }

        self.body = match result {
            Ok(text) => BodyState::Ready(text),
            Err(e) => {
                tracing::warn!("body resolution failed for {}: {}", key, e);
                BodyState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
    }

    /// User-initiated close (close button, click outside, Escape).
    ///
    /// Pushes the base path back onto the history unless the current
    /// path is already the base path. No-op when already closed.
    pub fn close(&mut self, nav: &mut dyn NavigationPort) {
        if self.phase != OverlayPhase::Open {
            return;
        }
        self.reset();
        if nav.current_path() != BASE_PATH {
            nav.push_path(BASE_PATH, None);
        }
    }

    /// Close caused by back/forward navigation landing on the base path.
    ///
    /// The browser-side history already moved, so pushing here would
    /// make the back button need two presses; this path never touches
    /// the history.
    pub fn close_from_history(&mut self) {
        if self.phase == OverlayPhase::Open {
            self.reset();
        }
    }

    /// Handle a popstate-style event that landed on `path`. Only a base
    /// path arrival while open closes anything; everything else is
    /// ignored, including any popstate while closed.
    pub fn handle_pop(&mut self, path: &str) {
        if self.phase == OverlayPhase::Open && path == BASE_PATH {
            self.close_from_history();
        }
    }

    /// Escape key: same path as a user-initiated close, active only
    /// while open.
    pub fn handle_escape(&mut self, nav: &mut dyn NavigationPort) {
        if self.phase == OverlayPhase::Open {
            self.close(nav);
        }
    }

    fn reset(&mut self) {
        self.phase = OverlayPhase::Closed;
        self.kind = None;
        self.meta = OverlayMeta::default();
        self.body = BodyState::Empty;
        self.open_key = None;
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EngawaError;

    fn post(id: &str, slug: Option<&str>) -> ContentItem {
        ContentItem {
            id: id.into(),
            slug: slug.map(String::from),
            title: format!("Post {}", id),
            tags: vec!["AI".into()],
            created_at: Some("2024-05-01T09:30:00Z".into()),
            ..Default::default()
        }
    }

    fn product(id: &str) -> ContentItem {
        ContentItem {
            id: id.into(),
            kind: ContentKind::Product,
            title: format!("Product {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_pushes_deep_link_with_state() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        let request = overlay.open_item(&post("a1", Some("x")), &mut history);

        assert!(overlay.is_open());
        assert_eq!(request.key, "x");
        assert_eq!(history.current_path(), "/post/x");
        assert_eq!(
            history.state(),
            Some(&HistoryState {
                kind: ContentKind::Post,
                id: "x".into()
            })
        );
        assert_eq!(overlay.body(), &BodyState::Loading);
        assert_eq!(overlay.meta().date, "2024.05.01");
        assert_eq!(overlay.meta().tags, vec!["AI".to_string()]);
    }

    #[test]
    fn test_product_meta_has_no_date() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&product("w"), &mut history);
        assert_eq!(overlay.meta().date, "Product");
        assert_eq!(history.current_path(), "/product/w");
    }

    #[test]
    fn test_apply_body_success_and_failure() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        let request = overlay.open_item(&post("a1", None), &mut history);
        overlay.apply_body(&request.key, Ok("content".into()));
        assert_eq!(overlay.body(), &BodyState::Ready("content".into()));

        let request = overlay.open_item(&post("a2", None), &mut history);
        overlay.apply_body(&request.key, Err(EngawaError::SourceExhausted("a2".into())));
        assert_eq!(
            overlay.body(),
            &BodyState::Failed(LOAD_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_stale_fetch_never_clobbers_newer_open() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        let first = overlay.open_item(&post("a", Some("slow")), &mut history);
        let second = overlay.open_item(&post("b", Some("fast")), &mut history);

        // Second fetch lands first
        overlay.apply_body(&second.key, Ok("fast content".into()));
        // First fetch lands late and must be dropped
        overlay.apply_body(&first.key, Ok("slow content".into()));

        assert_eq!(overlay.body(), &BodyState::Ready("fast content".into()));
    }

    #[test]
    fn test_result_after_close_is_discarded() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        let request = overlay.open_item(&post("a", None), &mut history);
        overlay.close(&mut history);
        overlay.apply_body(&request.key, Ok("late".into()));

        assert!(!overlay.is_open());
        assert_eq!(overlay.body(), &BodyState::Empty);
    }

    #[test]
    fn test_close_pushes_base_path() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        assert_eq!(history.len(), 2);

        overlay.close(&mut history);
        assert!(!overlay.is_open());
        assert_eq!(history.current_path(), BASE_PATH);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_close_does_not_push_when_already_at_base() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        // Back navigation already restored the base path
        history.back();

        overlay.close(&mut history);
        assert_eq!(history.current_path(), BASE_PATH);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_navigation_closes_without_push() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        assert_eq!(history.current_path(), "/post/x");

        let path = history.back().unwrap().to_string();
        overlay.handle_pop(&path);

        assert!(!overlay.is_open());
        assert_eq!(history.current_path(), BASE_PATH);
        // No new entry was pushed
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_pop_while_closed_is_ignored() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        overlay.close(&mut history);

        // A synthetic back event arriving after the close
        overlay.handle_pop(BASE_PATH);
        assert!(!overlay.is_open());
        assert_eq!(overlay.body(), &BodyState::Empty);
    }

    #[test]
    fn test_pop_to_non_base_path_is_ignored() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        overlay.handle_pop("/post/other");
        assert!(overlay.is_open());
    }

    #[test]
    fn test_escape_closes_like_user_close() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        overlay.handle_escape(&mut history);
        assert!(!overlay.is_open());
        assert_eq!(history.current_path(), BASE_PATH);

        // Escape while closed does nothing
        let len = history.len();
        overlay.handle_escape(&mut history);
        assert_eq!(history.len(), len);
    }

    #[test]
    fn test_switching_items_reuses_open_overlay() {
        let mut overlay = OverlayController::new();
        let mut history = HistoryStack::new();

        overlay.open_item(&post("a", Some("x")), &mut history);
        overlay.open_item(&product("y"), &mut history);

        assert!(overlay.is_open());
        assert_eq!(overlay.kind(), Some(ContentKind::Product));
        assert_eq!(history.current_path(), "/product/y");
        assert_eq!(overlay.body(), &BodyState::Loading);
    }
}
