use common::AssetCategory;
use serde::{Deserialize, Serialize};

use crate::entity::{AssetField, CollectionEntity, Validate};
use crate::errors::{require, ModelError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl CollectionEntity for Partner {
    type Input = PartnerInput;
    const PATH: &'static str = "partners";
    const SINGULAR: &'static str = "partner";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> PartnerInput {
        PartnerInput { name: self.name.clone(), logo: self.logo.clone(), link: self.link.clone() }
    }
}

impl Validate for PartnerInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        if let Some(link) = self.link.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            if !(link.starts_with("http://") || link.starts_with("https://")) {
                return Err(ModelError::Validation("link must be an http(s) URL".into()));
            }
        }
        Ok(())
    }
}

impl AssetField for PartnerInput {
    const CATEGORY: AssetCategory = AssetCategory::Partners;

    fn asset(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    fn set_asset(&mut self, reference: String) {
        self.logo = Some(reference);
    }
}
