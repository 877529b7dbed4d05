//! Section navigation and order-status filter selection for the account
//! area.

use shared::domain::{Section, StatusFilter};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Section(Section),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: MenuTarget,
}

impl MenuEntry {
    pub fn target_path(&self) -> Option<&'static str> {
        match self.target {
            MenuTarget::Section(section) => Some(section.route()),
            MenuTarget::Logout => None,
        }
    }

    pub fn is_logout(&self) -> bool {
        self.target == MenuTarget::Logout
    }
}

/// The fixed account menu. Exactly one entry is the logout sentinel.
pub const MENU: [MenuEntry; 4] = [
    MenuEntry {
        label: "Orders",
        target: MenuTarget::Section(Section::Orders),
    },
    MenuEntry {
        label: "Profile",
        target: MenuTarget::Section(Section::Profile),
    },
    MenuEntry {
        label: "Addresses",
        target: MenuTarget::Section(Section::Addresses),
    },
    MenuEntry {
        label: "Logout",
        target: MenuTarget::Logout,
    },
];

/// Menu entry backing `section`.
pub fn entry_for_section(section: Section) -> &'static MenuEntry {
    match section {
        Section::Orders => &MENU[0],
        Section::Profile => &MENU[1],
        Section::Addresses => &MENU[2],
    }
}

/// The logout sentinel entry.
pub fn logout_entry() -> &'static MenuEntry {
    &MENU[3]
}

/// Side effect requested by a menu click. The controller never performs the
/// effect itself; the routing/auth collaborators consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    Navigate { path: String },
    Logout,
}

/// Snapshot of the derived view state, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Option<Section>,
    pub filters_visible: bool,
    pub active_filter: Option<StatusFilter>,
}

#[derive(Debug)]
pub struct NavigationFilterController {
    path: String,
    active_filter: Option<StatusFilter>,
}

impl NavigationFilterController {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            path: initial_path.into(),
            active_filter: None,
        }
    }

    pub fn menu(&self) -> &'static [MenuEntry] {
        &MENU
    }

    /// Fixed ordered list of the selectable status filters.
    pub fn visible_filter_options(&self) -> [StatusFilter; 3] {
        StatusFilter::ALL
    }

    pub fn current_path(&self) -> &str {
        &self.path
    }

    pub fn active_filter(&self) -> Option<StatusFilter> {
        self.active_filter
    }

    /// A logout entry yields a logout intent and leaves location and filter
    /// untouched. Every other entry yields a navigation intent and clears
    /// the filter, even when the entry is already active.
    pub fn on_menu_click(&mut self, entry: &MenuEntry) -> NavIntent {
        match entry.target {
            MenuTarget::Logout => {
                debug!(label = entry.label, "menu click: logout");
                NavIntent::Logout
            }
            MenuTarget::Section(section) => {
                self.active_filter = None;
                debug!(label = entry.label, path = section.route(), "menu click");
                NavIntent::Navigate {
                    path: section.route().to_string(),
                }
            }
        }
    }

    /// Toggle the status filter: re-selecting the active one deselects it.
    /// Off the Orders section the filter bar is not rendered, so a click
    /// arriving here anyway is dropped.
    pub fn on_filter_click(&mut self, filter: StatusFilter) {
        if Self::section_for_path(&self.path) != Some(Section::Orders) {
            debug!(?filter, path = %self.path, "filter click off orders section dropped");
            return;
        }
        self.active_filter = if self.active_filter == Some(filter) {
            None
        } else {
            Some(filter)
        };
        debug!(filter = ?self.active_filter, "status filter changed");
    }

    /// Record a location change pushed by the routing collaborator. Unlike a
    /// menu click this keeps the filter selection, so drilling into an order
    /// detail and coming back does not lose the narrowed list.
    pub fn on_location_change(&mut self, path: &str) {
        self.path = path.to_string();
    }

    /// Section owning `path`: the canonical route itself or any sub-path
    /// below it (`/account/orders/42/7` belongs to Orders). Unknown paths
    /// highlight nothing.
    pub fn section_for_path(path: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| {
            let route = section.route();
            path == route
                || path
                    .strip_prefix(route)
                    .map_or(false, |rest| rest.starts_with('/'))
        })
    }

    pub fn view_state(&self) -> ViewState {
        let active_section = Self::section_for_path(&self.path);
        ViewState {
            active_section,
            filters_visible: active_section == Some(Section::Orders),
            active_filter: self.active_filter,
        }
    }
}
