//! Skill category tabs

/// A set of tabs with exactly one active at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<String>,
    active: usize,
}

impl TabSet {
    /// Create a tab set with the first tab active; `None` if `tabs` is empty
    pub fn new<I, S>(tabs: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        if tabs.is_empty() {
            return None;
        }
        Some(Self { tabs, active: 0 })
    }

    pub fn active(&self) -> &str {
        &self.tabs[self.active]
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active() == tab
    }

    /// Activate a tab by name; unknown names leave the selection unchanged
    pub fn select(&mut self, tab: &str) -> bool {
        match self.tabs.iter().position(|t| t == tab) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}
