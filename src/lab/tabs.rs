/// Exclusive selection over a lab's fixed panel set.
///
/// Buttons and panels are both driven from the single active index, so at any
/// time exactly one of each is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    panels: Vec<&'static str>,
    active: usize,
}

impl TabController {
    /// Start with `initial` active, or the first panel when `initial` is not
    /// one of `panels`.
    pub fn new(panels: Vec<&'static str>, initial: &str) -> Self {
        let active = panels.iter().position(|p| *p == initial).unwrap_or(0);
        Self { panels, active }
    }

    /// Activate `panel`. Unknown ids leave the selection untouched.
    pub fn select(&mut self, panel: &str) -> bool {
        match self.panels.iter().position(|p| *p == panel) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => {
                tracing::debug!(panel, "ignoring selection of unknown panel");
                false
            }
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.panels.get(self.active).copied()
    }

    pub fn is_active(&self, panel: &str) -> bool {
        self.active() == Some(panel)
    }

    pub fn panels(&self) -> &[&'static str] {
        &self.panels
    }
}
