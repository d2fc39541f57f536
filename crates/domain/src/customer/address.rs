use serde::{Deserialize, Serialize};

use super::CustomerError;

/// A postal address.
///
/// Addresses are immutable; changing a customer's address replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::StreetRequired);
        }
        if self.number == 0 {
            return Err(CustomerError::NumberRequired);
        }
        if self.zip.trim().is_empty() {
            return Err(CustomerError::ZipRequired);
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::CityRequired);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address() {
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        assert_eq!(address.street(), "Street 1");
        assert_eq!(address.number(), 1);
        assert_eq!(address.to_string(), "Street 1, 1, Zipcode 1 City 1");
    }

    #[test]
    fn each_field_is_required() {
        assert_eq!(
            Address::new("", 1, "Zip", "City").unwrap_err(),
            CustomerError::StreetRequired
        );
        assert_eq!(
            Address::new("Street", 0, "Zip", "City").unwrap_err(),
            CustomerError::NumberRequired
        );
        assert_eq!(
            Address::new("Street", 1, " ", "City").unwrap_err(),
            CustomerError::ZipRequired
        );
        assert_eq!(
            Address::new("Street", 1, "Zip", "").unwrap_err(),
            CustomerError::CityRequired
        );
    }
}
