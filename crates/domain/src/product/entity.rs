use common::ProductId;
use serde::{Deserialize, Serialize};

use super::ProductError;
use crate::money::Money;
use crate::repository::Entity;

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_blank() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.price.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        Ok(())
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Renames the product.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Changes the unit price.
    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        self.price = price;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    const NAME: &'static str = "Product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(
            Product::new("", "Product 1", Money::from_dollars(100)).unwrap_err(),
            ProductError::IdRequired
        );
        assert_eq!(
            Product::new("123", "", Money::from_dollars(100)).unwrap_err(),
            ProductError::NameRequired
        );
        assert_eq!(
            Product::new("123", "Product 1", Money::from_cents(-1)).unwrap_err(),
            ProductError::NegativePrice
        );
    }

    #[test]
    fn free_products_are_allowed() {
        let product = Product::new("123", "Sample", Money::zero()).unwrap();
        assert_eq!(product.price(), Money::zero());
    }

    #[test]
    fn change_name_and_price() {
        let mut product = Product::new("123", "Product 1", Money::from_dollars(100)).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(Money::from_dollars(150)).unwrap();
        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), Money::from_dollars(150));

        assert_eq!(
            product.change_price(Money::from_cents(-100)).unwrap_err(),
            ProductError::NegativePrice
        );
        assert_eq!(product.price(), Money::from_dollars(150));
    }
}
