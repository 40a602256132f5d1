use common::AssetCategory;
use serde::{Deserialize, Serialize};

use crate::entity::{AssetField, CollectionEntity, Validate};
use crate::errors::{require, ModelError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderInput {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Leader {
    /// Up to two uppercase initials for the portrait placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl CollectionEntity for Leader {
    type Input = LeaderInput;
    const PATH: &'static str = "leaders";
    const SINGULAR: &'static str = "leader";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> LeaderInput {
        LeaderInput { name: self.name.clone(), photo: self.photo.clone(), bio: self.bio.clone() }
    }
}

impl Validate for LeaderInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)
    }
}

impl AssetField for LeaderInput {
    const CATEGORY: AssetCategory = AssetCategory::Leaders;

    fn asset(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    fn set_asset(&mut self, reference: String) {
        self.photo = Some(reference);
    }
}
