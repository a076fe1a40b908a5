//! Session model
//!
//! The in-memory record of whoever is "logged in". Nothing here checks
//! credentials; the store keeps whatever value it is handed.

use serde::{Deserialize, Serialize};

/// A postal address on a user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    /// Label such as "Home" or "Work"
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

impl Address {
    /// Single line rendering, e.g. "123 Main Street, New York, NY 10001, USA"
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Session {
    /// Mock sign-in: accepts any email and name, grants no admin rights
    pub fn sign_in(email: &str, name: &str) -> Self {
        let email = email.trim().to_string();
        Self {
            id: format!("user-{}", email.to_lowercase()),
            name: name.trim().to_string(),
            email,
            is_admin: false,
            addresses: Vec::new(),
        }
    }

    /// Replace the saved addresses
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = addresses;
        self
    }

    /// The address flagged as default, else the first one
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|address| address.is_default)
            .or_else(|| self.addresses.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: id.to_string(),
            name: "Home".to_string(),
            street: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "USA".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_sign_in() {
        let session = Session::sign_in(" Jane@Example.com ", "Jane Smith");
        assert_eq!(session.id, "user-jane@example.com");
        assert_eq!(session.email, "Jane@Example.com");
        assert_eq!(session.name, "Jane Smith");
        assert!(!session.is_admin);
        assert!(session.addresses.is_empty());
    }

    #[test]
    fn test_default_address() {
        let session = Session::sign_in("a@b.c", "A");
        assert!(session.default_address().is_none());

        let mut session = session.with_addresses(vec![address("1", false), address("2", true)]);
        assert_eq!(session.default_address().unwrap().id, "2");

        session.addresses[1].is_default = false;
        assert_eq!(session.default_address().unwrap().id, "1");
    }

    #[test]
    fn test_address_one_line() {
        assert_eq!(
            address("1", true).one_line(),
            "123 Main Street, New York, NY 10001, USA"
        );
    }
}
