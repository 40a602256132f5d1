use serde::{Deserialize, Serialize};

use crate::entity::Validate;
use crate::errors::{require, ModelError};

/// Contact request; `status` is assigned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl Validate for TicketInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        if !is_plausible_email(&self.email) {
            return Err(ModelError::Validation("invalid email".into()));
        }
        Ok(())
    }
}
