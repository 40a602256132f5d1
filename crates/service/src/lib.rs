//! Client side of the content API.
//! - `api`: typed HTTP calls with fixed per-operation error messages.
//! - `session`: injectable token storage.
//! - `screens`, `gate`: admin controllers built on the API traits.
//! - `public`, `contact`: visitor-facing loaders and the contact form.

pub mod api;
pub mod contact;
pub mod errors;
pub mod gate;
pub mod public;
pub mod runtime;
pub mod screens;
pub mod session;
pub mod storage;
pub mod upload;

pub use api::{AboutApi, ApiClient, AuthApi, CrudApi, SiteApi, TicketApi};
pub use errors::{ApiError, ScreenError, SessionError};
pub use session::Session;
pub use upload::{upload_into, UploadFile, Uploader};
