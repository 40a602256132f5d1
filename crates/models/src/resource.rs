use common::{AssetCategory, IconId};
use serde::{Deserialize, Serialize};

use crate::entity::{AssetField, CollectionEntity, Validate};
use crate::errors::{require, ModelError};

/// A downloadable or linkable knowledge resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form tag such as `guide`, `article` or `file`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Known resource tags; anything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Guide,
    Checklist,
    Report,
    Assessment,
    File,
    Other,
}

impl ResourceKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "guide" => ResourceKind::Guide,
            "checklist" => ResourceKind::Checklist,
            "report" => ResourceKind::Report,
            "assessment" => ResourceKind::Assessment,
            "file" => ResourceKind::File,
            _ => ResourceKind::Other,
        }
    }

    pub fn icon(self) -> IconId {
        match self {
            ResourceKind::Guide | ResourceKind::Assessment => IconId::DocumentText,
            ResourceKind::Checklist => IconId::AcademicCap,
            ResourceKind::Report => IconId::Newspaper,
            ResourceKind::File => IconId::ArrowDownTray,
            ResourceKind::Other => IconId::BookOpen,
        }
    }
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        ResourceKind::from_tag(&self.kind)
    }

    /// Tag with its first letter capitalised, used as the badge text.
    pub fn label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether the link is offered as a file download.
    pub fn is_download(&self) -> bool {
        self.kind() == ResourceKind::File
    }

    pub fn cta_label(&self) -> &'static str {
        if self.is_download() || self.url.to_ascii_lowercase().contains(".pdf") {
            "Download"
        } else {
            "Access Resource"
        }
    }
}

impl CollectionEntity for Resource {
    type Input = ResourceInput;
    const PATH: &'static str = "resources";
    const SINGULAR: &'static str = "resource";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> ResourceInput {
        ResourceInput {
            title: self.title.clone(),
            description: self.description.clone(),
            kind: self.kind.clone(),
            url: self.url.clone(),
        }
    }
}

impl Validate for ResourceInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("title", &self.title)?;
        require("type", &self.kind)
    }
}

impl AssetField for ResourceInput {
    const CATEGORY: AssetCategory = AssetCategory::Resources;

    fn asset(&self) -> Option<&str> {
        Some(self.url.as_str()).filter(|u| !u.is_empty())
    }

    fn set_asset(&mut self, reference: String) {
        self.url = reference;
    }
}
