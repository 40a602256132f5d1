//! Public contact form: composes a ticket from the visitor's input.

use std::sync::Mutex;

use common::{FeatureIcon, IconId};
use models::{Ticket, TicketInput, Validate};
use tracing::{info, warn};

use crate::api::TicketApi;
use crate::errors::ScreenError;
use crate::screens::{lock, BusyFlag};

pub const DEFAULT_SUBJECT: &str = "Project inquiry";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub company: String,
    pub budget: String,
    pub timeline: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: DEFAULT_SUBJECT.into(),
            message: String::new(),
            company: String::new(),
            budget: String::new(),
            timeline: String::new(),
        }
    }
}

impl ContactFields {
    fn has_details(&self) -> bool {
        [&self.company, &self.budget, &self.timeline].iter().any(|v| !v.trim().is_empty())
    }

    /// Message body sent with the ticket. The details block is only added
    /// when one of the optional fields is filled.
    pub fn compose_message(&self) -> String {
        if !self.has_details() {
            return self.message.clone();
        }
        format!(
            "{}\n\nAdditional Details:\nCompany: {}\nBudget Range: {}\nTimeline: {}",
            self.message,
            self.company.trim(),
            self.budget.trim(),
            self.timeline.trim()
        )
    }

    pub fn to_ticket(&self) -> TicketInput {
        TicketInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.compose_message(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub struct ContactForm {
    fields: Mutex<ContactFields>,
    status: Mutex<ContactStatus>,
    busy: BusyFlag,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactFields::default())
    }
}

impl ContactForm {
    pub fn new(fields: ContactFields) -> Self {
        Self { fields: Mutex::new(fields), status: Mutex::new(ContactStatus::Idle), busy: BusyFlag::default() }
    }

    pub fn fields(&self) -> ContactFields {
        lock(&self.fields).clone()
    }

    pub fn status(&self) -> ContactStatus {
        lock(&self.status).clone()
    }

    pub fn edit(&self, f: impl FnOnce(&mut ContactFields)) {
        f(&mut lock(&self.fields));
    }

    /// Validate and send. On success the fields go back to their defaults;
    /// on failure they are kept for another attempt.
    pub async fn submit<A: TicketApi + ?Sized>(&self, api: &A) -> Result<Ticket, ScreenError> {
        let _busy = self.busy.acquire()?;
        let input = self.fields().to_ticket();
        if let Err(e) = input.validate() {
            *lock(&self.status) = ContactStatus::Failed(e.to_string());
            return Err(e.into());
        }
        *lock(&self.status) = ContactStatus::Sending;
        match api.create_ticket(&input).await {
            Ok(ticket) => {
                info!(ticket_id = ticket.id, "contact_sent");
                *lock(&self.fields) = ContactFields::default();
                *lock(&self.status) = ContactStatus::Sent;
                Ok(ticket)
            }
            Err(e) => {
                warn!(error = %e, "contact_failed");
                *lock(&self.status) = ContactStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }
}

/// Selling points listed beside the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: FeatureIcon::icon(IconId::CheckCircle),
            title: "Proven Track Record",
            desc: "Over 50+ successful projects delivered across various industries",
        },
        Feature {
            icon: FeatureIcon::glyph("🔒"),
            title: "Security First",
            desc: "Enterprise-grade security and data protection in every solution",
        },
        Feature {
            icon: FeatureIcon::glyph("💎"),
            title: "Transparent Pricing",
            desc: "No hidden costs or surprises - clear, upfront pricing",
        },
        Feature {
            icon: FeatureIcon::glyph("🤝"),
            title: "Personal Touch",
            desc: "Direct access to our expert team throughout your project",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Need a migration plan".into(),
            ..Default::default()
        }
    }

    #[test]
    fn plain_message_without_details() {
        assert_eq!(filled().compose_message(), "Need a migration plan");
        assert_eq!(filled().to_ticket().subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn details_block_when_any_optional_field_is_set() {
        let f = ContactFields { budget: "$10k-$25k".into(), ..filled() };
        assert_eq!(
            f.compose_message(),
            "Need a migration plan\n\nAdditional Details:\nCompany: \nBudget Range: $10k-$25k\nTimeline: "
        );
    }

    #[test]
    fn features_mix_glyphs_and_icons() {
        let rendered: Vec<String> = features().iter().map(|f| common::render_icon(&f.icon)).collect();
        assert_eq!(rendered, vec!["icon:check-circle", "🔒", "💎", "🤝"]);
    }
}
