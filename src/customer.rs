use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Account holder identity. The id is fixed for the lifetime of the
/// customer; the name may be corrected later via [`Customer::set_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    pub fn new(id: &str, name: &str) -> Result<Self, LedgerError> {
        if id.trim().is_empty() {
            return Err(LedgerError::EmptyCustomerId);
        }
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyCustomerName);
        }
        Ok(Customer {
            id: id.to_owned(),
            name: name.to_owned(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), LedgerError> {
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyCustomerName);
        }
        self.name = name.to_owned();
        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.name)
    }
}
