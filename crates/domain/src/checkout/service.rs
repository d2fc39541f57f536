//! Checkout operations spanning customers and orders.

use common::OrderId;
use uuid::Uuid;

use super::{Order, OrderError, OrderItem};
use crate::customer::Customer;
use crate::money::Money;

/// Stateless checkout operations.
pub struct OrderService;

impl OrderService {
    /// Sums the totals of `orders`.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places an order for `customer` and credits reward points worth half
    /// the order total, in whole currency units.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(
        customer: &mut Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }

        let order = Order::new(
            OrderId::new(Uuid::new_v4().to_string()),
            customer.id().clone(),
            items,
        )?;
        let points = (order.total().dollars() / 2).max(0) as u64;
        customer.add_reward_points(points);

        tracing::info!(order_id = %order.id(), total = %order.total(), points, "order placed");
        Ok(order)
    }
}
