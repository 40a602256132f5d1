use common::AssetCategory;
use serde::{Deserialize, Serialize};

use crate::entity::{AssetField, Validate};
use crate::errors::ModelError;

/// Singleton "About us" record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Body of `PUT /about`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutInput {
    pub content: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl About {
    pub fn to_input(&self) -> AboutInput {
        AboutInput { content: self.content.clone(), photo: self.photo.clone() }
    }
}

impl Validate for AboutInput {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

impl AssetField for AboutInput {
    const CATEGORY: AssetCategory = AssetCategory::Aboutus;

    fn asset(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    fn set_asset(&mut self, reference: String) {
        self.photo = Some(reference);
    }
}
