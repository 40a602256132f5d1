//! Loaders for the public pages.
//!
//! Nothing here fails: when the API is unreachable the pages show
//! placeholder content instead of an empty or broken section.

use std::sync::Arc;

use common::{render_icon, resolve_asset_path, resolve_link, AssetCategory, FeatureIcon, IconId};
use models::defaults::{default_resources, default_services, default_team};
use models::{CollectionEntity, Leader, Partner, Resource, ResourceKind, Service};
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{CrudApi, SiteApi};
use crate::errors::ApiError;

/// Filter id that matches every card.
pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AboutView {
    pub content: String,
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Portrait {
    Photo { src: String },
    Placeholder { initials: String, icon: FeatureIcon },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderCard {
    pub name: String,
    pub bio: Option<String>,
    pub portrait: Portrait,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceCard {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_label: String,
    pub category: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceCard {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Raw type tag, used for filtering.
    pub kind: String,
    pub label: String,
    pub icon: FeatureIcon,
    pub href: String,
    pub download: bool,
    pub cta: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartnerTile {
    pub name: String,
    pub logo: Option<String>,
    pub link: Option<String>,
}

/// A filter tab with its badge count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: &'static str,
    pub name: &'static str,
    pub count: usize,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|r| !r.is_empty())
}

impl From<&Leader> for LeaderCard {
    fn from(l: &Leader) -> Self {
        let portrait = match non_empty(l.photo.as_deref()) {
            Some(photo) => Portrait::Photo { src: resolve_asset_path(AssetCategory::Leaders, photo) },
            None => Portrait::Placeholder { initials: l.initials(), icon: FeatureIcon::icon(IconId::User) },
        };
        Self { name: l.name.clone(), bio: l.bio.clone(), portrait }
    }
}

impl From<&Service> for ServiceCard {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            slug: s.slug.clone(),
            description: s.description.clone(),
            price_label: s.price_label(),
            category: s.category.clone(),
            image: non_empty(s.photo.as_deref()).map(|p| resolve_asset_path(AssetCategory::Services, p)),
        }
    }
}

impl From<&Resource> for ResourceCard {
    fn from(r: &Resource) -> Self {
        let href = match non_empty(Some(&r.url)) {
            Some(url) => resolve_link(AssetCategory::Resources, url),
            None => "#".to_string(),
        };
        Self {
            id: r.id,
            title: r.title.clone(),
            description: r.description.clone(),
            kind: r.kind.clone(),
            label: r.label(),
            icon: FeatureIcon::icon(r.kind().icon()),
            href,
            download: r.is_download(),
            cta: r.cta_label(),
        }
    }
}

impl From<&Partner> for PartnerTile {
    fn from(p: &Partner) -> Self {
        Self {
            name: p.name.clone(),
            logo: non_empty(p.logo.as_deref()).map(|l| resolve_asset_path(AssetCategory::Partners, l)),
            link: non_empty(p.link.as_deref()).map(str::to_string),
        }
    }
}

/// Content loaders for the public site.
pub struct PublicSite<C: ?Sized> {
    api: Arc<C>,
}

impl<C: SiteApi + ?Sized> PublicSite<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }

    async fn fetch<E: CollectionEntity>(&self) -> Result<Vec<E>, ApiError>
    where
        C: CrudApi<E>,
    {
        let result = CrudApi::<E>::list(&*self.api).await;
        if let Err(e) = &result {
            warn!(entity = E::PATH, error = %e, "public fetch failed, using fallback");
        }
        result
    }

    pub async fn about(&self) -> Option<AboutView> {
        match self.api.fetch_about().await {
            Ok(a) => Some(AboutView {
                content: a.content,
                photo: non_empty(a.photo.as_deref()).map(|p| resolve_asset_path(AssetCategory::Aboutus, p)),
            }),
            Err(e) => {
                debug!(error = %e, "about unavailable");
                None
            }
        }
    }

    /// Default team when the fetch fails or returns nobody.
    pub async fn leaders(&self) -> Vec<LeaderCard> {
        let leaders = match self.fetch::<Leader>().await {
            Ok(list) if !list.is_empty() => list,
            _ => default_team(),
        };
        leaders.iter().map(LeaderCard::from).collect()
    }

    pub async fn services(&self) -> Vec<ServiceCard> {
        let services = self.fetch::<Service>().await.unwrap_or_else(|_| default_services());
        services.iter().map(ServiceCard::from).collect()
    }

    pub async fn resources(&self) -> Vec<ResourceCard> {
        let resources = self.fetch::<Resource>().await.unwrap_or_else(|_| default_resources());
        resources.iter().map(ResourceCard::from).collect()
    }

    /// Empty on failure; the page shows "No partners to display".
    pub async fn partners(&self) -> Vec<PartnerTile> {
        let partners = self.fetch::<Partner>().await.unwrap_or_default();
        partners.iter().map(PartnerTile::from).collect()
    }
}

const SERVICE_TABS: [(&str, &str); 5] = [
    (ALL, "All Services"),
    ("development", "Development"),
    ("infrastructure", "Infrastructure"),
    ("security", "Security"),
    ("support", "Support"),
];

const RESOURCE_TABS: [(&str, &str); 5] = [
    (ALL, "All Resources"),
    ("guide", "Guides"),
    ("checklist", "Checklists"),
    ("report", "Reports"),
    ("assessment", "Assessments"),
];

pub fn filter_services<'a>(cards: &'a [ServiceCard], category: &str) -> Vec<&'a ServiceCard> {
    cards
        .iter()
        .filter(|c| category == ALL || c.category.as_deref() == Some(category))
        .collect()
}

pub fn filter_resources<'a>(cards: &'a [ResourceCard], kind: &str) -> Vec<&'a ResourceCard> {
    cards.iter().filter(|c| kind == ALL || c.kind == kind).collect()
}

pub fn category_counts(cards: &[ServiceCard]) -> Vec<Tab> {
    SERVICE_TABS
        .iter()
        .map(|&(id, name)| Tab { id, name, count: filter_services(cards, id).len() })
        .collect()
}

pub fn kind_counts(cards: &[ResourceCard]) -> Vec<Tab> {
    RESOURCE_TABS
        .iter()
        .map(|&(id, name)| Tab { id, name, count: filter_resources(cards, id).len() })
        .collect()
}

/// Icon shown on a resource filter tab.
pub fn tab_icon(id: &str) -> String {
    let icon = if id == ALL { IconId::BookOpen } else { ResourceKind::from_tag(id).icon() };
    render_icon(&FeatureIcon::icon(icon))
}
