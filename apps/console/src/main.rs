//! Scripted walk through an account session: navigation, filtering, order
//! cancellation, auth failure, and the notification lifecycle, against an
//! in-memory store.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use account_core::{
    entry_for_section, logout_entry, AccountShell, AuthSession, Router, AUTO_DISMISS,
};
use anyhow::{Context, Result};
use clap::Parser;
use shared::domain::{Section, StatusFilter};
use shared::error::{ApiError, ErrorCode};
use tracing::info;

mod store;

use store::MemoryStore;

#[derive(Parser, Debug)]
struct Args {
    /// Customer name for the seeded session.
    #[arg(long, default_value = "Avery Quinn")]
    full_name: String,
    /// Skip the real-time wait before the auto-dismiss step.
    #[arg(long)]
    fast: bool,
}

struct Location {
    path: String,
}

impl Router for Location {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        info!(path, "location change");
        self.path = path.to_string();
    }
}

/// Routes logout intents into the shared store.
struct StoreAuth(Rc<RefCell<MemoryStore>>);

impl AuthSession for StoreAuth {
    fn logout(&mut self) {
        self.0.borrow_mut().logout();
    }
}

type Shell = AccountShell<Location, StoreAuth>;

fn print_view(shell: &Shell) {
    let state = shell.view_state();
    println!(
        "[{}] section={} filter_bar={} filter={}",
        shell.current_path(),
        state.active_section.map_or("-", |s| s.label()),
        state.filters_visible,
        state.active_filter.map_or("-", |f| f.label()),
    );
}

fn print_notification(shell: &Shell) {
    match shell.notification() {
        Some(n) => println!("  notification [{:?}] {}", n.severity, n.message),
        None => println!("  notification: none"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let store = Rc::new(RefCell::new(MemoryStore::seed(&args.full_name)));
    let mut shell = AccountShell::new(
        Location {
            path: "/account".into(),
        },
        StoreAuth(Rc::clone(&store)),
    );

    let snapshot = store.borrow().snapshot();
    let signed_in = snapshot
        .user
        .user
        .as_ref()
        .map_or("(nobody)", |u| u.full_name.as_str());
    println!("Signed in as {signed_in}");
    print_view(&shell);

    // Orders section, narrowed to what is still on its way.
    shell.handle_menu_click(entry_for_section(Section::Orders));
    shell.handle_filter_click(StatusFilter::Arriving);
    print_view(&shell);
    let arriving: Vec<_> = snapshot
        .orders
        .visible_with(shell.view_state().active_filter)
        .into_iter()
        .cloned()
        .collect();
    for order in &arriving {
        println!(
            "  #{} {} ({}, due {})",
            order.order_id.0,
            order.title,
            order.status.label(),
            order.deliver_by.date_naive(),
        );
    }

    // Drill into the first arriving order; the filter selection survives.
    let first = arriving.first().context("seed has no arriving orders")?;
    shell.navigate_to(&first.detail_path());
    print_view(&shell);

    // Cancel it; the coordinator picks the outcome up from the next
    // snapshot.
    let raised_at = Instant::now();
    store.borrow_mut().cancel_order(first.order_id);
    shell.handle_store_update(&store.borrow().snapshot(), raised_at);
    print_notification(&shell);

    // The notice hides on its own once the deadline passes.
    let deadline = if args.fast {
        raised_at + AUTO_DISMISS
    } else {
        tokio::time::sleep(AUTO_DISMISS).await;
        Instant::now()
    };
    shell.tick(deadline);
    print_notification(&shell);

    // Back to the profile via the menu; the filter resets.
    shell.handle_menu_click(entry_for_section(Section::Profile));
    print_view(&shell);
    store
        .borrow_mut()
        .update_profile(&format!("{} Jr.", args.full_name));
    shell.handle_store_update(&store.borrow().snapshot(), Instant::now());
    print_notification(&shell);
    shell.dismiss_notification();

    // An auth failure outranks everything else.
    store.borrow_mut().fail_authentication(ApiError::new(
        ErrorCode::Unauthorized,
        "Invalid token: session expired",
    ));
    shell.handle_store_update(&store.borrow().snapshot(), Instant::now());
    print_notification(&shell);
    shell.dismiss_notification();
    store.borrow_mut().acknowledge_error();

    // Logout is consumed by the auth collaborator, not the router.
    shell.handle_menu_click(logout_entry());
    let snapshot = store.borrow().snapshot();
    println!(
        "Signed in after logout: {}",
        snapshot
            .user
            .user
            .as_ref()
            .map_or("(nobody)", |u| u.full_name.as_str())
    );
    println!("Final snapshot: {}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
