//! View-state coordination for the customer account area.
//!
//! Two components carry all of the transition logic: the navigation/filter
//! controller and the notification coordinator. Both are synchronous and
//! total; collaborators (routing, auth, data store) sit behind the seams
//! declared here and are driven by the embedding application.

use std::time::Instant;

use shared::domain::StatusFilter;
use shared::store::StoreSnapshot;

pub mod navigation;
pub mod notifications;

pub use navigation::{
    entry_for_section, logout_entry, MenuEntry, MenuTarget, NavIntent, NavigationFilterController,
    ViewState, MENU,
};
pub use notifications::{
    Notification, NotificationCoordinator, Severity, AUTO_DISMISS, GENERIC_SUCCESS_MESSAGE,
    ORDER_CANCELED_MESSAGE,
};
pub use shared::store::MutationSignals;

/// Routing collaborator: owns the current location and performs transitions.
pub trait Router {
    fn current_path(&self) -> &str;
    fn navigate(&mut self, path: &str);
}

/// Auth collaborator: consumes logout intents. After a logout, subsequent
/// store snapshots observe a signed-out user.
pub trait AuthSession {
    fn logout(&mut self);
}

/// Wires the two core components to their collaborators, mirroring how the
/// account page feeds clicks and store updates into them. The presentation
/// layer only ever reads `view_state` and `notification`.
pub struct AccountShell<R: Router, A: AuthSession> {
    controller: NavigationFilterController,
    coordinator: NotificationCoordinator,
    router: R,
    auth: A,
}

impl<R: Router, A: AuthSession> AccountShell<R, A> {
    pub fn new(router: R, auth: A) -> Self {
        let controller = NavigationFilterController::new(router.current_path());
        Self {
            controller,
            coordinator: NotificationCoordinator::new(),
            router,
            auth,
        }
    }

    pub fn menu(&self) -> &'static [MenuEntry] {
        self.controller.menu()
    }

    pub fn handle_menu_click(&mut self, entry: &MenuEntry) {
        match self.controller.on_menu_click(entry) {
            NavIntent::Navigate { path } => {
                self.router.navigate(&path);
                let landed = self.router.current_path().to_string();
                self.controller.on_location_change(&landed);
            }
            NavIntent::Logout => self.auth.logout(),
        }
    }

    pub fn handle_filter_click(&mut self, filter: StatusFilter) {
        self.controller.on_filter_click(filter);
    }

    /// Direct navigation not going through the menu (deep link, order detail
    /// drill-down). The filter selection survives this path.
    pub fn navigate_to(&mut self, path: &str) {
        self.router.navigate(path);
        let landed = self.router.current_path().to_string();
        self.controller.on_location_change(&landed);
    }

    pub fn handle_store_update(&mut self, snapshot: &StoreSnapshot, now: Instant) {
        self.coordinator.evaluate(&snapshot.signals(), now);
    }

    pub fn dismiss_notification(&mut self) {
        self.coordinator.dismiss();
    }

    pub fn tick(&mut self, now: Instant) {
        self.coordinator.on_tick(now);
    }

    pub fn view_state(&self) -> ViewState {
        self.controller.view_state()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.coordinator.current()
    }

    pub fn current_path(&self) -> &str {
        self.controller.current_path()
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
