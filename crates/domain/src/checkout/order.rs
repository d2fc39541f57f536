use common::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};

use super::{OrderError, OrderItem};
use crate::money::Money;
use crate::repository::Entity;

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a validated order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        self.items.iter().try_for_each(validate_item)
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of every item's total.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Appends an item.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        validate_item(&item)?;
        self.items.push(item);
        Ok(())
    }
}

fn validate_item(item: &OrderItem) -> Result<(), OrderError> {
    if item.quantity() == 0 {
        return Err(OrderError::InvalidQuantity);
    }
    if item.price().is_negative() {
        return Err(OrderError::NegativePrice);
    }
    Ok(())
}

impl Entity for Order {
    type Id = OrderId;

    const NAME: &'static str = "Order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, dollars: i64, quantity: u32) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), Money::from_dollars(dollars), "p1", quantity)
    }

    #[test]
    fn id_is_required() {
        assert_eq!(
            Order::new("", "123", vec![item("i1", 10, 1)]).unwrap_err(),
            OrderError::IdRequired
        );
    }

    #[test]
    fn customer_id_is_required() {
        assert_eq!(
            Order::new("123", "", vec![item("i1", 10, 1)]).unwrap_err(),
            OrderError::CustomerIdRequired
        );
    }

    #[test]
    fn items_are_required() {
        assert_eq!(
            Order::new("123", "123", vec![]).unwrap_err(),
            OrderError::ItemsRequired
        );
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(
            Order::new("o1", "c1", vec![item("i1", 100, 0)]).unwrap_err(),
            OrderError::InvalidQuantity
        );
    }

    #[test]
    fn total_sums_items() {
        let order = Order::new("o1", "c1", vec![item("i1", 100, 2), item("i2", 200, 2)]).unwrap();
        assert_eq!(order.total(), Money::from_dollars(600));
    }

    #[test]
    fn add_item_updates_total() {
        let mut order = Order::new("1", "1", vec![item("1", 10, 2)]).unwrap();
        order.add_item(item("2", 10, 1)).unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), Money::from_dollars(30));

        assert_eq!(order.add_item(item("3", 10, 0)).unwrap_err(), OrderError::InvalidQuantity);
        assert_eq!(order.items().len(), 2);
    }
}
