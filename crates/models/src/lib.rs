//! Content entities shared by the API client, the admin screens and the
//! public site loaders.
//!
//! Every entity comes with an `*Input` companion: the create/update payload,
//! which never carries the server-assigned `id`.

pub mod errors;
pub mod entity;
pub mod about;
pub mod leader;
pub mod service;
pub mod resource;
pub mod partner;
pub mod ticket;
pub mod defaults;

pub use about::{About, AboutInput};
pub use entity::{AssetField, CollectionEntity, Validate};
pub use errors::ModelError;
pub use leader::{Leader, LeaderInput};
pub use partner::{Partner, PartnerInput};
pub use resource::{Resource, ResourceInput, ResourceKind};
pub use service::{Service, ServiceInput};
pub use ticket::{Ticket, TicketInput};

#[cfg(test)]
mod tests;
