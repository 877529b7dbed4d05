use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(OrderId);
id_newtype!(OrderItemId);
id_newtype!(AddressId);

/// Lifecycle status of a single order item, from checkout to handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Processing,
    Shipped,
    Arriving,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Placed => "Placed",
            Self::Confirmed => "Confirmed",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Arriving => "Arriving",
            Self::Delivered => "Delivered",
            Self::Canceled => "Canceled",
        }
    }
}

/// Path-backed top-level areas of the account page. The logout action is a
/// menu entry but not a section; it has no route and is never highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Orders,
    Profile,
    Addresses,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Orders, Section::Profile, Section::Addresses];

    pub fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Profile => "Profile",
            Self::Addresses => "Addresses",
        }
    }

    /// Canonical route for the section. Sub-paths below the route (order
    /// detail drill-downs) still belong to the section.
    pub fn route(self) -> &'static str {
        match self {
            Self::Orders => "/account/orders",
            Self::Profile => "/account/profile",
            Self::Addresses => "/account/addresses",
        }
    }
}

/// Named grouping of order statuses used to narrow the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    Arriving,
    Delivered,
    Cancelled,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::Arriving,
        StatusFilter::Delivered,
        StatusFilter::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Arriving => "Arriving",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether an order in `status` falls under this filter. "Arriving"
    /// covers every pre-delivery status, not just the literal one.
    pub fn covers(self, status: OrderStatus) -> bool {
        match self {
            Self::Arriving => matches!(
                status,
                OrderStatus::Placed
                    | OrderStatus::Confirmed
                    | OrderStatus::Processing
                    | OrderStatus::Shipped
                    | OrderStatus::Arriving
            ),
            Self::Delivered => status == OrderStatus::Delivered,
            Self::Cancelled => status == OrderStatus::Canceled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub address_id: AddressId,
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub mobile: String,
}

/// One row of the order list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub item_id: OrderItemId,
    pub title: String,
    pub status: OrderStatus,
    pub deliver_by: DateTime<Utc>,
}

impl OrderSummary {
    /// Location path of the order detail view for this row.
    pub fn detail_path(&self) -> String {
        format!(
            "{}/{}/{}",
            Section::Orders.route(),
            self.order_id.0,
            self.item_id.0
        )
    }
}
