//! Read-only snapshot contract of the external data store.
//!
//! The coordination core never reaches into a live store; collaborators hand
//! it an immutable snapshot at evaluation time, so every derivation is
//! reproducible in tests without a data layer behind it.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, OrderSummary, StatusFilter, UserSummary};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserState {
    pub user: Option<UserSummary>,
    pub addresses: Vec<Address>,
    /// Outcome flag of the latest profile mutation; cleared by the store on
    /// the next request cycle.
    pub profile_updated: bool,
    /// Auth/API failure text, shown verbatim. Cleared by the store once the
    /// failure has been surfaced.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersState {
    pub orders: Vec<OrderSummary>,
    /// Outcome flag of the latest cancellation; cleared by the store on the
    /// next request cycle.
    pub order_canceled: bool,
}

impl OrdersState {
    /// Rows admitted by `filter`, in stored order. No filter means the full
    /// list.
    pub fn visible_with(&self, filter: Option<StatusFilter>) -> Vec<&OrderSummary> {
        self.orders
            .iter()
            .filter(|order| filter.map_or(true, |f| f.covers(order.status)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub user: UserState,
    pub orders: OrdersState,
}

/// The three mutation-outcome signals, read together as one consistent
/// snapshot so priority evaluation never observes a torn update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSignals {
    pub profile_updated: bool,
    pub order_canceled: bool,
    pub auth_error: Option<String>,
}

impl StoreSnapshot {
    pub fn signals(&self) -> MutationSignals {
        MutationSignals {
            profile_updated: self.user.profile_updated,
            order_canceled: self.orders.order_canceled,
            auth_error: self.user.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, OrderItemId, OrderStatus};
    use chrono::Utc;

    fn order(id: i64, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            order_id: OrderId(id),
            item_id: OrderItemId(id * 10),
            title: format!("order {id}"),
            status,
            deliver_by: Utc::now(),
        }
    }

    fn sample_orders() -> OrdersState {
        OrdersState {
            orders: vec![
                order(1, OrderStatus::Placed),
                order(2, OrderStatus::Confirmed),
                order(3, OrderStatus::Processing),
                order(4, OrderStatus::Shipped),
                order(5, OrderStatus::Arriving),
                order(6, OrderStatus::Delivered),
                order(7, OrderStatus::Canceled),
            ],
            order_canceled: false,
        }
    }

    #[test]
    fn arriving_filter_admits_every_pre_delivery_status() {
        let orders = sample_orders();
        let visible = orders.visible_with(Some(StatusFilter::Arriving));
        let ids: Vec<i64> = visible.iter().map(|o| o.order_id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn delivered_and_cancelled_filters_are_single_status() {
        let orders = sample_orders();
        assert_eq!(orders.visible_with(Some(StatusFilter::Delivered)).len(), 1);
        assert_eq!(orders.visible_with(Some(StatusFilter::Cancelled)).len(), 1);
    }

    #[test]
    fn no_filter_keeps_the_full_list_in_stored_order() {
        let orders = sample_orders();
        let visible = orders.visible_with(None);
        assert_eq!(visible.len(), orders.orders.len());
        assert_eq!(visible[0].order_id, OrderId(1));
    }

    #[test]
    fn signals_project_all_three_flags() {
        let mut snapshot = StoreSnapshot::default();
        snapshot.user.profile_updated = true;
        snapshot.user.error = Some("expired".into());
        snapshot.orders.order_canceled = true;

        let signals = snapshot.signals();
        assert!(signals.profile_updated);
        assert!(signals.order_canceled);
        assert_eq!(signals.auth_error.as_deref(), Some("expired"));
    }
}
