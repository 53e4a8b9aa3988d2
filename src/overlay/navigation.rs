use crate::domain::ContentKind;

/// Base ("closed") path of the site.
pub const BASE_PATH: &str = "/";

/// State payload attached to a history entry when the overlay opens.
/// Only a marker; the content itself lives in the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub kind: ContentKind,
    pub id: String,
}

/// The slice of browser-style navigation the overlay controller needs.
///
/// Injectable so the controller can be driven by the in-app history in
/// production and inspected directly in tests.
pub trait NavigationPort {
    fn current_path(&self) -> &str;
    fn push_path(&mut self, path: &str, state: Option<HistoryState>);
}

/// In-app history stack emulating the browser's.
///
/// `push_path` drops any forward entries, like `history.pushState`;
/// `back`/`forward` move the cursor and report the path now current so
/// the caller can feed it to the overlay's popstate handling.
#[derive(Debug)]
pub struct HistoryStack {
    entries: Vec<(String, Option<HistoryState>)>,
    pos: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            entries: vec![(BASE_PATH.to_string(), None)],
            pos: 0,
        }
    }

    /// Back one entry. Returns the path now current, or None when
    /// already at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        Some(self.entries[self.pos].0.as_str())
    }

    /// Forward one entry, if back was used before.
    pub fn forward(&mut self) -> Option<&str> {
        if self.pos + 1 >= self.entries.len() {
            return None;
        }
        self.pos += 1;
        Some(self.entries[self.pos].0.as_str())
    }

    /// State payload of the current entry.
    pub fn state(&self) -> Option<&HistoryState> {
        self.entries[self.pos].1.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false // always holds at least the base entry
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationPort for HistoryStack {
    fn current_path(&self) -> &str {
        &self.entries[self.pos].0
    }

    fn push_path(&mut self, path: &str, state: Option<HistoryState>) {
        self.entries.truncate(self.pos + 1);
        self.entries.push((path.to_string(), state));
        self.pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_base_path() {
        let history = HistoryStack::new();
        assert_eq!(history.current_path(), BASE_PATH);
        assert!(history.state().is_none());
    }

    #[test]
    fn test_push_and_back() {
        let mut history = HistoryStack::new();
        history.push_path(
            "/post/x",
            Some(HistoryState {
                kind: ContentKind::Post,
                id: "x".into(),
            }),
        );
        assert_eq!(history.current_path(), "/post/x");
        assert_eq!(history.state().map(|s| s.id.as_str()), Some("x"));

        assert_eq!(history.back(), Some(BASE_PATH));
        assert_eq!(history.current_path(), BASE_PATH);
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = HistoryStack::new();
        history.push_path("/post/x", None);
        history.back();
        assert_eq!(history.forward(), Some("/post/x"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = HistoryStack::new();
        history.push_path("/post/x", None);
        history.back();
        history.push_path("/product/y", None);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current_path(), "/product/y");
        assert_eq!(history.forward(), None);
    }
}
