//! Navigation and panel state shared across the dashboard.

/// Section ids used as scroll targets.
pub mod sections {
    /// Hero/overview block.
    pub const OVERVIEW: &str = "overview";
    /// Subscribe overlay panel.
    pub const ADD_PANEL: &str = "add-panel";
    /// Tabbed dashboard holding the feed and episode lists.
    pub const DASHBOARD: &str = "dashboard-panel";
}

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    /// Subscribed feeds.
    #[default]
    Feeds,
    /// Recent episodes.
    Episodes,
}

impl DashboardTab {
    /// All tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Feeds, Self::Episodes]
    }

    /// Identifier used for `data-tab-*` attributes and translation keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feeds => "feeds",
            Self::Episodes => "episodes",
        }
    }
}

/// Sidebar navigation entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTarget {
    /// Overview hero.
    #[default]
    Overview,
    /// Subscribe panel.
    Subscribe,
    /// Feeds tab of the dashboard.
    Feeds,
    /// Episodes tab of the dashboard.
    Episodes,
}

impl NavTarget {
    /// All entries in sidebar order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Overview, Self::Subscribe, Self::Feeds, Self::Episodes]
    }

    /// Translation key for the entry label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "nav.overview",
            Self::Subscribe => "nav.subscribe",
            Self::Feeds => "nav.feeds",
            Self::Episodes => "nav.episodes",
        }
    }

    /// Element id the entry scrolls to.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Overview => sections::OVERVIEW,
            Self::Subscribe => sections::ADD_PANEL,
            Self::Feeds | Self::Episodes => sections::DASHBOARD,
        }
    }

    /// Tab a dashboard entry switches to.
    #[must_use]
    pub const fn tab(self) -> Option<DashboardTab> {
        match self {
            Self::Feeds => Some(DashboardTab::Feeds),
            Self::Episodes => Some(DashboardTab::Episodes),
            Self::Overview | Self::Subscribe => None,
        }
    }
}

/// Side effects the view performs after a navigation click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPlan {
    /// Element id to scroll into view.
    pub scroll_to: &'static str,
}

/// Navigation, tab and overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Subscribe overlay visibility.
    pub add_panel_open: bool,
    /// Selected dashboard tab.
    pub active_tab: DashboardTab,
    /// Highlighted sidebar entry.
    pub active_nav: NavTarget,
}

impl UiState {
    /// Select a tab. Returns `false` when it was already active.
    pub fn select_tab(&mut self, tab: DashboardTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Apply a sidebar click and describe the scroll to perform.
    pub fn navigate(&mut self, target: NavTarget) -> NavPlan {
        if target == NavTarget::Subscribe {
            self.add_panel_open = true;
        }
        if let Some(tab) = target.tab() {
            self.active_tab = tab;
        }
        self.active_nav = target;
        NavPlan {
            scroll_to: target.section(),
        }
    }

    /// Open the subscribe overlay.
    pub const fn open_add_panel(&mut self) {
        self.add_panel_open = true;
    }

    /// Close the subscribe overlay.
    pub const fn close_add_panel(&mut self) {
        self.add_panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_active_tab_is_a_no_op() {
        let mut ui = UiState::default();
        assert!(!ui.select_tab(DashboardTab::Feeds));
        assert!(ui.select_tab(DashboardTab::Episodes));
        assert_eq!(ui.active_tab, DashboardTab::Episodes);
        assert!(!ui.select_tab(DashboardTab::Episodes));
    }

    #[test]
    fn subscribe_navigation_opens_panel() {
        let mut ui = UiState::default();
        let plan = ui.navigate(NavTarget::Subscribe);
        assert!(ui.add_panel_open);
        assert_eq!(plan.scroll_to, sections::ADD_PANEL);
        assert_eq!(ui.active_nav, NavTarget::Subscribe);
        assert_eq!(ui.active_tab, DashboardTab::Feeds);
    }

    #[test]
    fn dashboard_navigation_switches_tab() {
        let mut ui = UiState::default();
        let plan = ui.navigate(NavTarget::Episodes);
        assert_eq!(plan.scroll_to, sections::DASHBOARD);
        assert_eq!(ui.active_tab, DashboardTab::Episodes);
        assert!(!ui.add_panel_open);

        ui.navigate(NavTarget::Overview);
        assert_eq!(ui.active_tab, DashboardTab::Episodes);
        assert_eq!(ui.active_nav, NavTarget::Overview);
    }

    #[test]
    fn panel_toggles() {
        let mut ui = UiState::default();
        ui.open_add_panel();
        assert!(ui.add_panel_open);
        ui.close_add_panel();
        assert!(!ui.add_panel_open);
    }
}
