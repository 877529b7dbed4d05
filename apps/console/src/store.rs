//! In-memory stand-in for the storefront data layer. Mutations mirror the
//! request lifecycle of the real store: starting a new mutation clears the
//! previous outcome flags, finishing one raises its own flag.

use chrono::{Duration, Utc};
use shared::domain::{
    Address, AddressId, OrderId, OrderItemId, OrderStatus, OrderSummary, UserId, UserSummary,
};
use shared::error::ApiError;
use shared::store::StoreSnapshot;
use tracing::info;

pub struct MemoryStore {
    snapshot: StoreSnapshot,
}

impl MemoryStore {
    pub fn seed(full_name: &str) -> Self {
        let mut snapshot = StoreSnapshot::default();
        snapshot.user.user = Some(UserSummary {
            user_id: UserId(1),
            full_name: full_name.to_string(),
        });
        snapshot.user.addresses = vec![Address {
            address_id: AddressId(1),
            name: full_name.to_string(),
            street: "12 Harbour Lane".into(),
            city: "Rotterdam".into(),
            postal_code: "3011 AB".into(),
            mobile: "+31 6 1234 5678".into(),
        }];
        snapshot.orders.orders = vec![
            Self::order(41, "Canvas weekender bag", OrderStatus::Shipped, 3),
            Self::order(42, "Merino crew sweater", OrderStatus::Arriving, 1),
            Self::order(43, "Espresso tamper", OrderStatus::Delivered, -2),
            Self::order(44, "Linen table runner", OrderStatus::Placed, 6),
        ];
        Self { snapshot }
    }

    fn order(id: i64, title: &str, status: OrderStatus, due_in_days: i64) -> OrderSummary {
        OrderSummary {
            order_id: OrderId(id),
            item_id: OrderItemId(id * 10),
            title: title.to_string(),
            status,
            deliver_by: Utc::now() + Duration::days(due_in_days),
        }
    }

    /// Consistent read of the whole store, the only surface the view-state
    /// core ever sees.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.snapshot.clone()
    }

    pub fn update_profile(&mut self, full_name: &str) {
        self.clear_outcome_flags();
        if let Some(user) = &mut self.snapshot.user.user {
            user.full_name = full_name.to_string();
        }
        self.snapshot.user.profile_updated = true;
        info!(full_name, "profile updated");
    }

    pub fn cancel_order(&mut self, order_id: OrderId) {
        self.clear_outcome_flags();
        for order in &mut self.snapshot.orders.orders {
            if order.order_id == order_id {
                order.status = OrderStatus::Canceled;
                self.snapshot.orders.order_canceled = true;
                info!(order_id = order_id.0, "order canceled");
            }
        }
    }

    pub fn fail_authentication(&mut self, error: ApiError) {
        self.clear_outcome_flags();
        info!(%error, "authentication failure recorded");
        self.snapshot.user.error = Some(error.to_string());
    }

    /// The store clears the failure once it has been surfaced.
    pub fn acknowledge_error(&mut self) {
        self.snapshot.user.error = None;
    }

    pub fn logout(&mut self) {
        self.snapshot = StoreSnapshot::default();
        info!("session cleared");
    }

    fn clear_outcome_flags(&mut self) {
        self.snapshot.user.profile_updated = false;
        self.snapshot.orders.order_canceled = false;
        self.snapshot.user.error = None;
    }
}
