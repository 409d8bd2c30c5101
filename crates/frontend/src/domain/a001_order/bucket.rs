//! The two order buckets the dashboard exposes. Each bucket decides which
//! statuses belong to it, which date the filters run against, and which
//! transitions a vendor may request from it.

use chrono::NaiveDate;
use contracts::domain::a001_order::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBucket {
    Pending,
    Delivered,
}

impl OrderBucket {
    pub fn title(&self) -> &'static str {
        match self {
            OrderBucket::Pending => "Pending Orders",
            OrderBucket::Delivered => "Delivered Orders",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            OrderBucket::Pending => "orders",
            OrderBucket::Delivered => "delivered",
        }
    }

    pub fn endpoint(&self, vendor_id: &str) -> String {
        match self {
            OrderBucket::Pending => format!("/api/vendor/pendingorders/{vendor_id}"),
            OrderBucket::Delivered => format!("/api/vendor/deliveredorders/{vendor_id}"),
        }
    }

    /// Membership is derived from the order's current status, never from
    /// which endpoint originally returned the row.
    pub fn contains(&self, status: OrderStatus) -> bool {
        match self {
            OrderBucket::Pending => matches!(
                status,
                OrderStatus::Pending | OrderStatus::Accepted | OrderStatus::RiderAssigned
            ),
            OrderBucket::Delivered => status == OrderStatus::Delivered,
        }
    }

    /// Which date the list filters and sorts against. Pending work is judged
    /// by when the order was placed, delivered work by when it last moved.
    pub fn day_of(&self) -> fn(&Order) -> Option<NaiveDate> {
        match self {
            OrderBucket::Pending => Order::created_day,
            OrderBucket::Delivered => Order::updated_day,
        }
    }

    pub fn date_label(&self) -> &'static str {
        match self {
            OrderBucket::Pending => "Order date",
            OrderBucket::Delivered => "Delivered date",
        }
    }

    /// Statuses a vendor may move an order to from this bucket.
    pub fn allowed_targets(&self) -> &'static [OrderStatus] {
        match self {
            OrderBucket::Pending => &[
                OrderStatus::Accepted,
                OrderStatus::Rejected,
                OrderStatus::RiderAssigned,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
            ],
            OrderBucket::Delivered => &[OrderStatus::Cancelled],
        }
    }

    /// Options for the status picker: the current status first, then every
    /// allowed target that differs from it.
    pub fn status_options(&self, current: OrderStatus) -> Vec<OrderStatus> {
        let mut options = vec![current];
        for status in self.allowed_targets() {
            if *status != current {
                options.push(*status);
            }
        }
        options
    }

    pub fn csv_filename(&self) -> &'static str {
        match self {
            OrderBucket::Pending => "pending_orders.csv",
            OrderBucket::Delivered => "delivered_orders.csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_bucket_tracks_pre_delivery_statuses() {
        let bucket = OrderBucket::Pending;
        assert!(bucket.contains(OrderStatus::Pending));
        assert!(bucket.contains(OrderStatus::Accepted));
        assert!(bucket.contains(OrderStatus::RiderAssigned));
        assert!(!bucket.contains(OrderStatus::Delivered));
        assert!(!bucket.contains(OrderStatus::Rejected));
        assert!(!bucket.contains(OrderStatus::Cancelled));
    }

    #[test]
    fn delivered_bucket_only_holds_delivered() {
        let bucket = OrderBucket::Delivered;
        assert!(bucket.contains(OrderStatus::Delivered));
        assert!(!bucket.contains(OrderStatus::Pending));
        assert!(!bucket.contains(OrderStatus::Cancelled));
    }

    #[test]
    fn status_options_put_current_first_without_duplicates() {
        let options = OrderBucket::Pending.status_options(OrderStatus::Accepted);
        assert_eq!(options[0], OrderStatus::Accepted);
        assert_eq!(
            options.iter().filter(|s| **s == OrderStatus::Accepted).count(),
            1
        );
        assert!(options.contains(&OrderStatus::Rejected));
        assert!(options.contains(&OrderStatus::Delivered));
    }

    #[test]
    fn delivered_bucket_offers_only_cancellation() {
        let options = OrderBucket::Delivered.status_options(OrderStatus::Delivered);
        assert_eq!(options, vec![OrderStatus::Delivered, OrderStatus::Cancelled]);
    }
}
