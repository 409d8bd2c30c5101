//! Pure state machine behind the status-change dialog. The UI layer owns a
//! single `StatusFlow` value per list page and steps it through these
//! transitions; everything here is synchronous and testable without a DOM.

use contracts::domain::a001_order::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFlow {
    /// No dialog open.
    #[default]
    Idle,
    /// Dialog open for one order; `proposed` starts at the order's current
    /// status and follows the picker. A failed submit lands back here with
    /// the error filled in and the proposal intact.
    Editing {
        order_id: String,
        proposed: OrderStatus,
        error: Option<String>,
    },
    /// Request in flight. Further submits and edits are ignored until the
    /// server answers.
    Submitting {
        order_id: String,
        proposed: OrderStatus,
    },
}

impl StatusFlow {
    /// Open the dialog for an order, seeding the proposal with its current
    /// status. Ignored while a submit is in flight.
    pub fn open(&self, order_id: &str, current: OrderStatus) -> StatusFlow {
        match self {
            StatusFlow::Submitting { .. } => self.clone(),
            _ => StatusFlow::Editing {
                order_id: order_id.to_string(),
                proposed: current,
                error: None,
            },
        }
    }

    /// Close the dialog. Ignored while a submit is in flight.
    pub fn close(&self) -> StatusFlow {
        match self {
            StatusFlow::Submitting { .. } => self.clone(),
            _ => StatusFlow::Idle,
        }
    }

    /// Change the proposed status. Clears any stale error from a previous
    /// failed attempt.
    pub fn propose(&self, status: OrderStatus) -> StatusFlow {
        match self {
            StatusFlow::Editing { order_id, .. } => StatusFlow::Editing {
                order_id: order_id.clone(),
                proposed: status,
                error: None,
            },
            _ => self.clone(),
        }
    }

    /// Move into `Submitting` and hand back what to send. Returns `None`
    /// from any state other than `Editing`, which is what makes a second
    /// click on the submit button a no-op.
    pub fn begin_submit(&self) -> (StatusFlow, Option<(String, OrderStatus)>) {
        match self {
            StatusFlow::Editing {
                order_id, proposed, ..
            } => (
                StatusFlow::Submitting {
                    order_id: order_id.clone(),
                    proposed: *proposed,
                },
                Some((order_id.clone(), *proposed)),
            ),
            _ => (self.clone(), None),
        }
    }

    /// Server accepted the change: dialog closes.
    pub fn complete(&self) -> StatusFlow {
        match self {
            StatusFlow::Submitting { .. } => StatusFlow::Idle,
            _ => self.clone(),
        }
    }

    /// Server rejected the change: back to editing with the proposal kept
    /// so the vendor can retry or pick something else.
    pub fn fail(&self, message: &str) -> StatusFlow {
        match self {
            StatusFlow::Submitting { order_id, proposed } => StatusFlow::Editing {
                order_id: order_id.clone(),
                proposed: *proposed,
                error: Some(message.to_string()),
            },
            _ => self.clone(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, StatusFlow::Submitting { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, StatusFlow::Idle)
    }

    pub fn order_id(&self) -> Option<&str> {
        match self {
            StatusFlow::Idle => None,
            StatusFlow::Editing { order_id, .. } | StatusFlow::Submitting { order_id, .. } => {
                Some(order_id)
            }
        }
    }

    pub fn proposed(&self) -> Option<OrderStatus> {
        match self {
            StatusFlow::Idle => None,
            StatusFlow::Editing { proposed, .. } | StatusFlow::Submitting { proposed, .. } => {
                Some(*proposed)
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StatusFlow::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

/// Apply a confirmed status change to the loaded rows. The matching order
/// gets the new status (idempotent if it already carries it), then rows
/// whose status no longer belongs to the bucket are dropped.
pub fn apply_status_change(
    orders: &mut Vec<Order>,
    order_id: &str,
    new_status: OrderStatus,
    still_member: impl Fn(OrderStatus) -> bool,
) {
    for order in orders.iter_mut() {
        if order.id == order_id {
            order.status = new_status;
        }
    }
    orders.retain(|order| order.id != order_id || still_member(order.status));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::bucket::OrderBucket;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            status,
            ..Order::default()
        }
    }

    #[test]
    fn open_seeds_proposal_with_current_status() {
        let flow = StatusFlow::Idle.open("o1", OrderStatus::Accepted);
        assert_eq!(flow.order_id(), Some("o1"));
        assert_eq!(flow.proposed(), Some(OrderStatus::Accepted));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn propose_clears_previous_error() {
        let flow = StatusFlow::Editing {
            order_id: "o1".into(),
            proposed: OrderStatus::Accepted,
            error: Some("boom".into()),
        };
        let flow = flow.propose(OrderStatus::Delivered);
        assert_eq!(flow.proposed(), Some(OrderStatus::Delivered));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn begin_submit_only_fires_once() {
        let flow = StatusFlow::Idle.open("o1", OrderStatus::Pending);
        let flow = flow.propose(OrderStatus::Accepted);

        let (flow, payload) = flow.begin_submit();
        assert_eq!(payload, Some(("o1".to_string(), OrderStatus::Accepted)));
        assert!(flow.is_submitting());

        // A second click while the request is in flight does nothing.
        let (flow, payload) = flow.begin_submit();
        assert_eq!(payload, None);
        assert!(flow.is_submitting());
    }

    #[test]
    fn open_and_close_are_ignored_while_submitting() {
        let (flow, _) = StatusFlow::Idle
            .open("o1", OrderStatus::Pending)
            .begin_submit();
        assert!(flow.is_submitting());
        assert!(flow.open("o2", OrderStatus::Pending).is_submitting());
        assert!(flow.close().is_submitting());
    }

    #[test]
    fn successful_submit_closes_the_dialog() {
        let (flow, _) = StatusFlow::Idle
            .open("o1", OrderStatus::Pending)
            .propose(OrderStatus::Accepted)
            .begin_submit();
        assert_eq!(flow.complete(), StatusFlow::Idle);
    }

    #[test]
    fn failed_submit_returns_to_editing_with_error_and_proposal() {
        let (flow, _) = StatusFlow::Idle
            .open("o1", OrderStatus::Pending)
            .propose(OrderStatus::Delivered)
            .begin_submit();
        let flow = flow.fail("Order already taken by a rider");
        assert_eq!(flow.proposed(), Some(OrderStatus::Delivered));
        assert_eq!(flow.error(), Some("Order already taken by a rider"));
        assert!(!flow.is_submitting());
    }

    #[test]
    fn status_change_keeps_rows_that_stay_in_the_bucket() {
        let bucket = OrderBucket::Pending;
        let mut orders = vec![
            order("o1", OrderStatus::Pending),
            order("o2", OrderStatus::Pending),
        ];
        apply_status_change(&mut orders, "o1", OrderStatus::Accepted, |s| {
            bucket.contains(s)
        });
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::Accepted);
        assert_eq!(orders[1].status, OrderStatus::Pending);
    }

    #[test]
    fn status_change_drops_rows_that_leave_the_bucket() {
        let bucket = OrderBucket::Pending;
        let mut orders = vec![
            order("o1", OrderStatus::Accepted),
            order("o2", OrderStatus::Pending),
        ];
        apply_status_change(&mut orders, "o1", OrderStatus::Delivered, |s| {
            bucket.contains(s)
        });
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, "o2");
    }

    #[test]
    fn status_change_is_idempotent() {
        let bucket = OrderBucket::Pending;
        let mut orders = vec![order("o1", OrderStatus::Accepted)];
        apply_status_change(&mut orders, "o1", OrderStatus::Accepted, |s| {
            bucket.contains(s)
        });
        apply_status_change(&mut orders, "o1", OrderStatus::Accepted, |s| {
            bucket.contains(s)
        });
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Accepted);
    }

    #[test]
    fn cancelling_a_delivered_order_removes_it_from_the_bucket() {
        let bucket = OrderBucket::Delivered;
        let mut orders = vec![order("o1", OrderStatus::Delivered)];
        apply_status_change(&mut orders, "o1", OrderStatus::Cancelled, |s| {
            bucket.contains(s)
        });
        assert!(orders.is_empty());
    }
}
