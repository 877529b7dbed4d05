use super::*;
use shared::domain::{Section, StatusFilter};

#[derive(Default)]
struct FakeRouter {
    path: String,
    transitions: Vec<String>,
}

impl FakeRouter {
    fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            transitions: Vec::new(),
        }
    }
}

impl Router for FakeRouter {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        self.path = path.to_string();
        self.transitions.push(path.to_string());
    }
}

#[derive(Default)]
struct FakeAuth {
    logout_calls: u32,
}

impl AuthSession for FakeAuth {
    fn logout(&mut self) {
        self.logout_calls += 1;
    }
}

fn shell_at(path: &str) -> AccountShell<FakeRouter, FakeAuth> {
    AccountShell::new(FakeRouter::at(path), FakeAuth::default())
}

fn entry(label: &str) -> &'static MenuEntry {
    MENU.iter().find(|e| e.label == label).expect("menu entry")
}

#[test]
fn menu_click_drives_the_router_and_updates_the_section() {
    let mut shell = shell_at("/account/orders");
    shell.handle_menu_click(entry("Addresses"));

    assert_eq!(shell.current_path(), "/account/addresses");
    assert_eq!(shell.router().transitions, vec!["/account/addresses"]);
    assert_eq!(shell.view_state().active_section, Some(Section::Addresses));
}

#[test]
fn logout_click_goes_to_auth_and_skips_the_router() {
    let mut shell = shell_at("/account/orders");
    shell.handle_menu_click(entry("Logout"));

    assert!(shell.router().transitions.is_empty());
    assert_eq!(shell.current_path(), "/account/orders");
    assert_eq!(shell.auth.logout_calls, 1);
}

#[test]
fn menu_navigation_clears_the_filter_but_drill_down_keeps_it() {
    let mut shell = shell_at("/account/orders");
    shell.handle_filter_click(StatusFilter::Arriving);

    shell.navigate_to("/account/orders/42/7");
    assert_eq!(
        shell.view_state().active_filter,
        Some(StatusFilter::Arriving)
    );

    shell.handle_menu_click(entry("Orders"));
    assert_eq!(shell.view_state().active_filter, None);
}

#[test]
fn store_update_reaches_the_coordinator() {
    use shared::store::StoreSnapshot;
    use std::time::Instant;

    let mut shell = shell_at("/account/orders");
    let mut snapshot = StoreSnapshot::default();
    snapshot.orders.order_canceled = true;

    shell.handle_store_update(&snapshot, Instant::now());
    let n = shell.notification().expect("notification");
    assert_eq!(n.message, ORDER_CANCELED_MESSAGE);

    shell.dismiss_notification();
    assert!(shell.notification().is_none());
}
