use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

/// Named icons from the outline icon set used across the site.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    BookOpen,
    DocumentText,
    AcademicCap,
    Newspaper,
    User,
    CheckCircle,
    ArrowDownTray,
    ArrowTopRightOnSquare,
}

impl IconId {
    pub fn name(self) -> &'static str {
        match self {
            IconId::BookOpen => "book-open",
            IconId::DocumentText => "document-text",
            IconId::AcademicCap => "academic-cap",
            IconId::Newspaper => "newspaper",
            IconId::User => "user",
            IconId::CheckCircle => "check-circle",
            IconId::ArrowDownTray => "arrow-down-tray",
            IconId::ArrowTopRightOnSquare => "arrow-top-right-on-square",
        }
    }
}

/// A feature/badge icon: either a literal glyph (emoji) or a named icon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureIcon {
    Glyph { value: String },
    Icon {
        #[serde(rename = "ref")]
        id: IconId,
    },
}

impl FeatureIcon {
    pub fn glyph(value: impl Into<String>) -> Self {
        FeatureIcon::Glyph { value: value.into() }
    }

    pub fn icon(id: IconId) -> Self {
        FeatureIcon::Icon { id }
    }
}

/// Single dispatch point for turning a [`FeatureIcon`] into render output.
/// Glyphs render verbatim; named icons render as an `icon:<name>` token the
/// front end maps to its icon component.
pub fn render_icon(icon: &FeatureIcon) -> String {
    match icon {
        FeatureIcon::Glyph { value } => value.clone(),
        FeatureIcon::Icon { id } => format!("icon:{}", id.name()),
    }
}
