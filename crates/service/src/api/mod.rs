pub mod client;
pub mod endpoints;
pub mod traits;

pub use client::ApiClient;
pub use traits::{AboutApi, AuthApi, CrudApi, SiteApi, TicketApi};
