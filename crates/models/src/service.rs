use common::AssetCategory;
use serde::{Deserialize, Serialize};

use crate::entity::{AssetField, CollectionEntity, Validate};
use crate::errors::{require, ModelError};

/// An offered IT service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Service {
    /// Price with a currency sign and exactly two decimals, e.g. `$1500.00`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Lowercase ASCII letters, digits and single inner hyphens.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Derive a slug from a display name ("Cloud Migration" -> "cloud-migration").
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

impl CollectionEntity for Service {
    type Input = ServiceInput;
    const PATH: &'static str = "services";
    const SINGULAR: &'static str = "service";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            price: self.price,
            photo: self.photo.clone(),
            category: self.category.clone(),
        }
    }
}

impl Validate for ServiceInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        require("slug", &self.slug)?;
        require("description", &self.description)?;
        if !is_url_safe_slug(&self.slug) {
            return Err(ModelError::Validation(
                "slug may only contain lowercase letters, digits and hyphens".into(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ModelError::Validation("price must be a number >= 0".into()));
        }
        Ok(())
    }
}

impl AssetField for ServiceInput {
    const CATEGORY: AssetCategory = AssetCategory::Services;

    fn asset(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    fn set_asset(&mut self, reference: String) {
        self.photo = Some(reference);
    }
}
