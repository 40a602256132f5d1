//! Seams between the controllers and the HTTP client.
//!
//! [`ApiClient`] implements all of them; tests swap in doubles.

use async_trait::async_trait;
use models::{About, AboutInput, CollectionEntity, Leader, Partner, Resource, Service, Ticket, TicketInput};
use tracing::{debug, info, instrument};

use crate::api::client::ApiClient;
use crate::errors::ApiError;

/// List/create/update/delete for one collection entity.
#[async_trait]
pub trait CrudApi<E: CollectionEntity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, ApiError>;
    async fn create(&self, input: &E::Input) -> Result<E, ApiError>;
    async fn update(&self, id: i64, input: &E::Input) -> Result<E, ApiError>;
    async fn delete(&self, id: i64) -> Result<bool, ApiError>;
}

#[async_trait]
pub trait AboutApi: Send + Sync {
    async fn fetch_about(&self) -> Result<About, ApiError>;
    async fn update_about(&self, input: &AboutInput) -> Result<About, ApiError>;
}

#[async_trait]
pub trait TicketApi: Send + Sync {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError>;
    async fn create_ticket(&self, input: &TicketInput) -> Result<Ticket, ApiError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn has_session(&self) -> Result<bool, ApiError>;
}

/// Everything the admin dashboard and the public site talk to.
pub trait SiteApi:
    AuthApi
    + AboutApi
    + TicketApi
    + CrudApi<Leader>
    + CrudApi<Service>
    + CrudApi<Resource>
    + CrudApi<Partner>
    + 'static
{
}

impl<T> SiteApi for T where
    T: AuthApi
        + AboutApi
        + TicketApi
        + CrudApi<Leader>
        + CrudApi<Service>
        + CrudApi<Resource>
        + CrudApi<Partner>
        + 'static
{
}

#[async_trait]
impl<E: CollectionEntity> CrudApi<E> for ApiClient {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        let req = self.http().get(self.url(E::PATH));
        let items: Vec<E> = Self::fetch_json(req, &format!("Failed to fetch {}", E::PATH)).await?;
        debug!(entity = E::PATH, count = items.len(), "fetched");
        Ok(items)
    }

    async fn create(&self, input: &E::Input) -> Result<E, ApiError> {
        let message = format!("Failed to create {}", E::SINGULAR);
        let req = self.authorized(self.http().post(self.url(E::PATH)).json(input), &message).await?;
        let created: E = Self::fetch_json(req, &message).await?;
        info!(entity = E::SINGULAR, id = created.id(), "created");
        Ok(created)
    }

    async fn update(&self, id: i64, input: &E::Input) -> Result<E, ApiError> {
        let url = self.url(&format!("{}/{id}", E::PATH));
        let message = format!("Failed to update {}", E::SINGULAR);
        let req = self.authorized(self.http().patch(url).json(input), &message).await?;
        let updated: E = Self::fetch_json(req, &message).await?;
        info!(entity = E::SINGULAR, id, "updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let url = self.url(&format!("{}/{id}", E::PATH));
        let message = format!("Failed to delete {}", E::SINGULAR);
        let req = self.authorized(self.http().delete(url), &message).await?;
        Self::send(req, &message).await?;
        info!(entity = E::SINGULAR, id, "deleted");
        Ok(true)
    }
}

#[async_trait]
impl AboutApi for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_about(&self) -> Result<About, ApiError> {
        Self::fetch_json(self.http().get(self.url("about")), "Failed to fetch about").await
    }

    #[instrument(skip(self, input))]
    async fn update_about(&self, input: &AboutInput) -> Result<About, ApiError> {
        let req = self.authorized(self.http().put(self.url("about")).json(input), "Failed to update about").await?;
        let about: About = Self::fetch_json(req, "Failed to update about").await?;
        info!(entity = "about", "updated");
        Ok(about)
    }
}

#[async_trait]
impl TicketApi for ApiClient {
    #[instrument(skip(self))]
    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        let req = self.authorized(self.http().get(self.url("tickets")), "Failed to load tickets").await?;
        Self::fetch_json(req, "Failed to load tickets").await
    }

    /// Anonymous: the session token is never sent here.
    #[instrument(skip(self, input))]
    async fn create_ticket(&self, input: &TicketInput) -> Result<Ticket, ApiError> {
        let req = self.http().post(self.url("tickets")).json(input);
        let ticket: Ticket = Self::fetch_json(req, "Failed to submit ticket").await?;
        info!(ticket_id = ticket.id, status = %ticket.status, "ticket_submitted");
        Ok(ticket)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        ApiClient::login(self, username, password).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }

    async fn has_session(&self) -> Result<bool, ApiError> {
        Ok(self.session().is_authenticated().await?)
    }
}
