use common::CustomerId;
use serde::{Deserialize, Serialize};

use super::{Address, CustomerError};
use crate::repository::Entity;

/// A customer of the store.
///
/// Customers start inactive and without an address. Activation requires an
/// address; reward points accumulate as orders are placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Creates an inactive customer with no address.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuilds a customer from stored state, re-checking its invariants.
    pub fn restore(
        id: CustomerId,
        name: String,
        address: Option<Address>,
        active: bool,
        reward_points: u64,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id,
            name,
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_blank() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    /// Renames the customer.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the customer's address.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits reward points.
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points += points;
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const NAME: &'static str = "Customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap()
    }

    #[test]
    fn id_is_required() {
        assert_eq!(Customer::new("", "John").unwrap_err(), CustomerError::IdRequired);
    }

    #[test]
    fn name_is_required() {
        assert_eq!(Customer::new("123", "").unwrap_err(), CustomerError::NameRequired);
    }

    #[test]
    fn change_name() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert_eq!(customer.change_name(" ").unwrap_err(), CustomerError::NameRequired);
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn activate_requires_address() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        assert_eq!(customer.activate().unwrap_err(), CustomerError::AddressRequired);
        assert!(!customer.is_active());

        customer.change_address(address());
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn reward_points_accumulate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        assert_eq!(customer.reward_points(), 0);

        customer.add_reward_points(10);
        customer.add_reward_points(10);
        assert_eq!(customer.reward_points(), 20);
    }

    #[test]
    fn restore_rejects_active_customer_without_address() {
        let err = Customer::restore(CustomerId::new("1"), "C".into(), None, true, 0).unwrap_err();
        assert_eq!(err, CustomerError::AddressRequired);

        let restored =
            Customer::restore(CustomerId::new("1"), "C".into(), Some(address()), true, 5).unwrap();
        assert!(restored.is_active());
        assert_eq!(restored.reward_points(), 5);
    }
}
