use crate::config::{PagingConfig, RecommendConfig};
use crate::domain::ContentItem;
use crate::overlay::{HistoryStack, OverlayController};
use crate::paging::{self, DisclosurePolicy, DisclosureState, PageWindow};
use crate::recommend::{self, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSection {
    Home,
    Blog,
    Product,
    About,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Home => ActiveSection::Blog,
            ActiveSection::Blog => ActiveSection::Product,
            ActiveSection::Product => ActiveSection::About,
            ActiveSection::About => ActiveSection::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Home => ActiveSection::About,
            ActiveSection::Blog => ActiveSection::Home,
            ActiveSection::Product => ActiveSection::Blog,
            ActiveSection::About => ActiveSection::Product,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActiveSection::Home => 0,
            ActiveSection::Blog => 1,
            ActiveSection::Product => 2,
            ActiveSection::About => 3,
        }
    }
}

/// Synthetic section tops for the nav view-model. The terminal has no
/// real page scroll; switching sections jumps to these.
pub const SECTION_OFFSETS: [(&str, i64); 4] =
    [("home", 0), ("blog", 600), ("product", 1400), ("about", 2200)];

pub struct TuiApp {
    pub active_section: ActiveSection,
    pub posts: Vec<ContentItem>,
    pub products: Vec<ContentItem>,
    pub recommended_products: Vec<ContentItem>,
    pub recommended_posts: Vec<ContentItem>,
    pub blog_page: usize,
    pub product_state: DisclosureState,
    pub home_index: usize,
    pub blog_index: usize,
    pub product_index: usize,
    pub overlay: OverlayController,
    pub history: HistoryStack,
    pub overlay_scroll: u16,
    pub should_quit: bool,
    pub is_loading: bool,
    pub status_message: Option<String>,
    blog_per_page: usize,
    pub disclosure_policy: DisclosurePolicy,
}

impl TuiApp {
    pub fn new(paging: &PagingConfig) -> Self {
        let disclosure_policy = DisclosurePolicy {
            reveal_step: paging.reveal_step,
            page_size: paging.product_per_page,
            paged_threshold: paging.paged_threshold,
        };

        Self {
            active_section: ActiveSection::Home,
            posts: Vec::new(),
            products: Vec::new(),
            recommended_products: Vec::new(),
            recommended_posts: Vec::new(),
            blog_page: 0,
            product_state: DisclosureState::initial(&disclosure_policy, 0),
            home_index: 0,
            blog_index: 0,
            product_index: 0,
            overlay: OverlayController::new(),
            history: HistoryStack::new(),
            overlay_scroll: 0,
            should_quit: false,
            is_loading: false,
            status_message: None,
            blog_per_page: paging.blog_per_page,
            disclosure_policy,
        }
    }

    /// Install freshly resolved collections and recompute everything
    /// derived from them: recommendations, disclosure, selections.
    pub fn set_collections(
        &mut self,
        posts: Vec<ContentItem>,
        products: Vec<ContentItem>,
        caps: &RecommendConfig,
        rng: &mut dyn RandomSource,
    ) {
        self.recommended_products =
            recommend::select(&products, caps.product_cap, caps.product_cap, rng);
        self.recommended_posts = recommend::select(&posts, caps.post_cap, caps.post_cap, rng);

        self.product_state = DisclosureState::initial(&self.disclosure_policy, products.len());
        self.posts = posts;
        self.products = products;
        self.blog_page = 0;
        self.home_index = 0;
        self.blog_index = 0;
        self.product_index = 0;
    }

    pub fn blog_window(&self) -> PageWindow<'_, ContentItem> {
        paging::window(&self.posts, self.blog_per_page, self.blog_page)
    }

    pub fn visible_products(&self) -> &[ContentItem] {
        self.product_state
            .visible(&self.disclosure_policy, &self.products)
    }

    /// The home section's recommended list, products first.
    pub fn home_items(&self) -> Vec<&ContentItem> {
        self.recommended_products
            .iter()
            .chain(self.recommended_posts.iter())
            .collect()
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        match self.active_section {
            ActiveSection::Home => self.home_items().get(self.home_index).copied(),
            ActiveSection::Blog => self.blog_window().items.get(self.blog_index),
            ActiveSection::Product => self.visible_products().get(self.product_index),
            ActiveSection::About => None,
        }
    }

    fn list_len(&self) -> usize {
        match self.active_section {
            ActiveSection::Home => self.recommended_products.len() + self.recommended_posts.len(),
            ActiveSection::Blog => self.blog_window().items.len(),
            ActiveSection::Product => self.visible_products().len(),
            ActiveSection::About => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.active_section {
            ActiveSection::Home => Some(&mut self.home_index),
            ActiveSection::Blog => Some(&mut self.blog_index),
            ActiveSection::Product => Some(&mut self.product_index),
            ActiveSection::About => None,
        }
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.selection_mut() {
            if *index > 0 {
                *index -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        let len = self.list_len();
        if let Some(index) = self.selection_mut() {
            if len > 0 && *index < len - 1 {
                *index += 1;
            }
        }
    }

    /// Page forward in the active list. Past the last page this is a
    /// no-op; the index never leaves its bounds.
    pub fn next_page(&mut self) {
        match self.active_section {
            ActiveSection::Blog => {
                let count = paging::page_count(self.posts.len(), self.blog_per_page);
                let new = paging::clamp_index(self.blog_page + 1, count);
                if new != self.blog_page {
                    self.blog_page = new;
                    self.blog_index = 0;
                }
            }
            ActiveSection::Product => {
                let before = self.product_state.page_index;
                self.product_state
                    .next_page(&self.disclosure_policy, self.products.len());
                if self.product_state.page_index != before {
                    self.product_index = 0;
                }
            }
            _ => {}
        }
    }

    pub fn prev_page(&mut self) {
        match self.active_section {
            ActiveSection::Blog => {
                let count = paging::page_count(self.posts.len(), self.blog_per_page);
                let new = paging::clamp_index(self.blog_page.saturating_sub(1), count);
                if new != self.blog_page {
                    self.blog_page = new;
                    self.blog_index = 0;
                }
            }
            ActiveSection::Product => {
                let before = self.product_state.page_index;
                self.product_state
                    .prev_page(&self.disclosure_policy, self.products.len());
                if self.product_state.page_index != before {
                    self.product_index = 0;
                }
            }
            _ => {}
        }
    }

    pub fn reveal_more(&mut self) {
        if self.active_section == ActiveSection::Product {
            self.product_state
                .reveal_more(&self.disclosure_policy, self.products.len());
        }
    }

    /// Synthetic scroll position matching the active section's top.
    pub fn scroll_y(&self) -> i64 {
        SECTION_OFFSETS[self.active_section.index()].1
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;
    use crate::paging::DisclosureMode;
    use crate::recommend::SeededRandom;

    fn posts(n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| ContentItem {
                id: format!("post{}", i),
                title: format!("Post {}", i),
                ..Default::default()
            })
            .collect()
    }

    fn products(n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| ContentItem {
                id: format!("prod{}", i),
                kind: ContentKind::Product,
                title: format!("Product {}", i),
                ..Default::default()
            })
            .collect()
    }

    fn app_with(posts_n: usize, products_n: usize) -> TuiApp {
        let mut app = TuiApp::new(&PagingConfig::default());
        let mut rng = SeededRandom::new(1);
        app.set_collections(
            posts(posts_n),
            products(products_n),
            &RecommendConfig::default(),
            &mut rng,
        );
        app
    }

    #[test]
    fn test_section_cycle_round_trips() {
        let mut section = ActiveSection::Home;
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Home);
        assert_eq!(ActiveSection::Home.prev(), ActiveSection::About);
    }

    #[test]
    fn test_recommended_set_is_bounded() {
        let app = app_with(10, 10);
        assert_eq!(app.recommended_products.len(), 2);
        assert_eq!(app.recommended_posts.len(), 3);
        assert_eq!(app.home_items().len(), 5);
    }

    #[test]
    fn test_blog_window_uses_seven_per_page() {
        let mut app = app_with(10, 0);
        app.active_section = ActiveSection::Blog;

        let w = app.blog_window();
        assert_eq!(w.items.len(), 7);
        assert_eq!(w.page_count, 2);

        app.next_page();
        assert_eq!(app.blog_window().items.len(), 3);
        // Past the end: no-op
        app.next_page();
        assert_eq!(app.blog_page, 1);
    }

    #[test]
    fn test_prev_page_at_start_is_noop() {
        let mut app = app_with(10, 0);
        app.active_section = ActiveSection::Blog;
        app.prev_page();
        assert_eq!(app.blog_page, 0);
    }

    #[test]
    fn test_page_change_resets_selection() {
        let mut app = app_with(10, 0);
        app.active_section = ActiveSection::Blog;
        app.move_down();
        app.move_down();
        assert_eq!(app.blog_index, 2);
        app.next_page();
        assert_eq!(app.blog_index, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with(2, 0);
        app.active_section = ActiveSection::Blog;
        app.move_up();
        assert_eq!(app.blog_index, 0);
        for _ in 0..5 {
            app.move_down();
        }
        assert_eq!(app.blog_index, 1);
    }

    #[test]
    fn test_product_disclosure_through_app() {
        let mut app = app_with(0, 15);
        app.active_section = ActiveSection::Product;
        assert_eq!(app.visible_products().len(), 4);

        app.reveal_more();
        app.reveal_more();
        assert_eq!(app.product_state.mode, DisclosureMode::Paged);
        assert_eq!(app.visible_products().len(), 12);

        app.next_page();
        assert_eq!(app.visible_products().len(), 3);
    }

    #[test]
    fn test_selected_item_per_section() {
        let mut app = app_with(10, 10);
        assert!(app.selected_item().is_some());

        app.active_section = ActiveSection::About;
        assert!(app.selected_item().is_none());

        app.active_section = ActiveSection::Blog;
        assert_eq!(app.selected_item().unwrap().id, "post0");
    }

    #[test]
    fn test_scroll_y_tracks_section() {
        let mut app = app_with(0, 0);
        assert_eq!(app.scroll_y(), 0);
        app.active_section = ActiveSection::Product;
        assert_eq!(app.scroll_y(), 1400);
    }
}
