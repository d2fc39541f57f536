//! Customer service: persistence plus event notification.

use common::CustomerId;
use event_dispatcher::{Event, SharedEventDispatcher};

use super::{Address, ChangedAddress, Customer, CustomerCreated};
use crate::error::DomainError;
use crate::repository::{CustomerRepository, Repository};

/// Registers customers and changes their addresses.
///
/// Each operation persists first and then notifies the dispatcher. A handler
/// failure is reported as [`DomainError::Handler`]; the change is already
/// stored at that point.
pub struct CustomerService<R: CustomerRepository> {
    repository: R,
    dispatcher: SharedEventDispatcher,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service over `repository` that publishes to `dispatcher`.
    pub fn new(repository: R, dispatcher: SharedEventDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the dispatcher events are published to.
    pub fn dispatcher(&self) -> &SharedEventDispatcher {
        &self.dispatcher
    }

    /// Creates and stores a customer, then publishes `CustomerCreatedEvent`.
    #[tracing::instrument(skip(self, name, user_login))]
    pub async fn register(
        &self,
        id: CustomerId,
        name: impl Into<String> + Send,
        user_login: impl Into<String> + Send,
    ) -> Result<Customer, DomainError> {
        let customer = Customer::new(id, name)?;
        self.repository.create(&customer).await?;

        let event = Event::new(CustomerCreated {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            user_login: user_login.into(),
        });
        self.dispatcher.notify(&event).map_err(DomainError::Handler)?;

        tracing::info!(customer_id = %customer.id(), "customer registered");
        Ok(customer)
    }

    /// Replaces a customer's address, then publishes `ChangedAddressEvent`.
    #[tracing::instrument(skip(self, address))]
    pub async fn change_address(
        &self,
        id: &CustomerId,
        address: Address,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.repository.find(id).await?;
        customer.change_address(address);
        self.repository.update(&customer).await?;

        let event = Event::new(ChangedAddress {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            address: customer
                .address()
                .map(ToString::to_string)
                .unwrap_or_default(),
        });
        self.dispatcher.notify(&event).map_err(DomainError::Handler)?;

        Ok(customer)
    }

    /// Activates a stored customer.
    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        let mut customer = self.repository.find(id).await?;
        customer.activate()?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    /// Loads a customer.
    pub async fn find(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        Ok(self.repository.find(id).await?)
    }
}
