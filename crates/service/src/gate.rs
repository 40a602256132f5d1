//! Admin surface: login form or dashboard, decided by the session token.

use std::sync::Arc;

use models::{Leader, Partner, Resource, Service};
use tracing::{info, warn};

use crate::api::SiteApi;
use crate::errors::ApiError;
use crate::screens::{AboutScreen, CrudScreen, TicketsPanel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self { username: "admin".into(), error: None }
    }
}

/// All admin screens, created together on login and dropped on logout.
pub struct Dashboard<C: ?Sized> {
    pub about: AboutScreen<C>,
    pub leaders: CrudScreen<Leader, C>,
    pub services: CrudScreen<Service, C>,
    pub resources: CrudScreen<Resource, C>,
    pub partners: CrudScreen<Partner, C>,
    pub tickets: TicketsPanel<C>,
}

impl<C: SiteApi> Dashboard<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self {
            about: AboutScreen::new(Arc::clone(&api)),
            leaders: CrudScreen::new(Arc::clone(&api)),
            services: CrudScreen::new(Arc::clone(&api)),
            resources: CrudScreen::new(Arc::clone(&api)),
            partners: CrudScreen::new(Arc::clone(&api)),
            tickets: TicketsPanel::new(api),
        }
    }

    /// Load every screen concurrently. Failures stay on the individual screens.
    pub async fn load_all(&self) {
        let _ = tokio::join!(
            self.about.load(),
            self.leaders.load(),
            self.services.load(),
            self.resources.load(),
            self.partners.load(),
            self.tickets.load(),
        );
    }
}

pub enum AdminView<C: ?Sized> {
    Login(LoginForm),
    Dashboard(Box<Dashboard<C>>),
}

pub struct AdminGate<C> {
    api: Arc<C>,
    view: AdminView<C>,
}

impl<C: SiteApi> AdminGate<C> {
    /// Start on the dashboard when a token is already stored.
    pub async fn new(api: Arc<C>) -> Result<Self, ApiError> {
        let view = if api.has_session().await? {
            AdminView::Dashboard(Box::new(Dashboard::new(Arc::clone(&api))))
        } else {
            AdminView::Login(LoginForm::default())
        };
        Ok(Self { api, view })
    }

    pub fn view(&self) -> &AdminView<C> {
        &self.view
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.view, AdminView::Dashboard(_))
    }

    pub fn dashboard(&self) -> Option<&Dashboard<C>> {
        match &self.view {
            AdminView::Dashboard(d) => Some(d),
            AdminView::Login(_) => None,
        }
    }

    pub fn into_dashboard(self) -> Option<Box<Dashboard<C>>> {
        match self.view {
            AdminView::Dashboard(d) => Some(d),
            AdminView::Login(_) => None,
        }
    }

    pub fn login_form(&self) -> Option<&LoginForm> {
        match &self.view {
            AdminView::Login(form) => Some(form),
            AdminView::Dashboard(_) => None,
        }
    }

    /// On success a fresh dashboard replaces the login form; on failure the
    /// form stays with the error message.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        match self.api.login(username, password).await {
            Ok(()) => {
                info!(%username, "admin_login");
                self.view = AdminView::Dashboard(Box::new(Dashboard::new(Arc::clone(&self.api))));
                Ok(())
            }
            Err(e) => {
                warn!(%username, error = %e, "admin_login_failed");
                self.view = AdminView::Login(LoginForm { username: username.to_string(), error: Some(e.to_string()) });
                Err(e)
            }
        }
    }

    /// Clear the token and discard all dashboard state.
    pub async fn logout(&mut self) -> Result<(), ApiError> {
        self.api.logout().await?;
        self.view = AdminView::Login(LoginForm::default());
        info!("admin_logout");
        Ok(())
    }
}
