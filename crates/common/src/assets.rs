//! Static asset path resolution.
//!
//! Stored references (`photo`, `logo`, `url`) are either bare filenames right
//! after an upload, arbitrary server paths, or already-resolved
//! `/assets/<category>/<file>` paths. Everything that renders or links a
//! reference goes through this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root under which the site serves static assets.
pub const ASSET_ROOT: &str = "/assets/";

/// Upload / asset namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Leaders,
    Partners,
    Services,
    Aboutus,
    Resources,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Leaders,
        AssetCategory::Partners,
        AssetCategory::Services,
        AssetCategory::Aboutus,
        AssetCategory::Resources,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Leaders => "leaders",
            AssetCategory::Partners => "partners",
            AssetCategory::Services => "services",
            AssetCategory::Aboutus => "aboutus",
            AssetCategory::Resources => "resources",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown asset category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for AssetCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Resolve a stored reference to a displayable path.
///
/// Values already under [`ASSET_ROOT`] are returned unchanged; anything else
/// is reduced to its basename and placed under `/assets/<category>/`.
/// Callers render a placeholder instead of calling this for empty values.
pub fn resolve_asset_path(category: AssetCategory, raw: &str) -> String {
    if raw.starts_with(ASSET_ROOT) {
        return raw.to_string();
    }
    format!("{ASSET_ROOT}{}/{}", category.as_str(), basename(raw))
}

/// Resolve a link target. Absolute web URLs and in-page anchors are kept;
/// everything else is treated as an asset reference.
pub fn resolve_link(category: AssetCategory, raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('#') {
        return raw.to_string();
    }
    resolve_asset_path(category, raw)
}

fn basename(raw: &str) -> &str {
    match raw.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "jane.png",
        "/src/assets/leaders/jane.png",
        "C:\\Users\\me\\Pictures\\jane.png",
        "uploads/2024/logo.svg",
        "/assets/leaders/jane.png",
        "/assets/partners/other.png",
        "weird/",
        "no-ext",
    ];

    #[test]
    fn bare_filename_gets_category_prefix() {
        assert_eq!(resolve_asset_path(AssetCategory::Leaders, "jane.png"), "/assets/leaders/jane.png");
        assert_eq!(resolve_asset_path(AssetCategory::Aboutus, "team.jpg"), "/assets/aboutus/team.jpg");
    }

    #[test]
    fn server_paths_are_reduced_to_basename() {
        assert_eq!(
            resolve_asset_path(AssetCategory::Services, "/src/assets/services/cloud.jpg"),
            "/assets/services/cloud.jpg"
        );
        assert_eq!(
            resolve_asset_path(AssetCategory::Partners, "C:\\logos\\acme.png"),
            "/assets/partners/acme.png"
        );
    }

    #[test]
    fn already_resolved_is_untouched() {
        let p = "/assets/leaders/jane.png";
        assert_eq!(resolve_asset_path(AssetCategory::Leaders, p), p);
        // a path under the root keeps its own category
        let other = "/assets/partners/x.png";
        assert_eq!(resolve_asset_path(AssetCategory::Leaders, other), other);
    }

    #[test]
    fn resolution_is_idempotent() {
        for category in AssetCategory::ALL {
            for raw in SAMPLES {
                let once = resolve_asset_path(category, raw);
                assert_eq!(resolve_asset_path(category, &once), once, "{category} {raw}");
            }
        }
    }

    #[test]
    fn output_only_contains_the_fixed_prefix_separators() {
        for category in AssetCategory::ALL {
            for raw in SAMPLES.iter().filter(|r| !r.starts_with(ASSET_ROOT)) {
                let out = resolve_asset_path(category, raw);
                let prefix = format!("/assets/{category}/");
                let rest = out.strip_prefix(&prefix).expect("fixed prefix");
                assert!(!rest.contains('/') && !rest.contains('\\'), "{out}");
            }
        }
    }

    #[test]
    fn links_keep_absolute_urls_and_anchors() {
        let c = AssetCategory::Resources;
        assert_eq!(resolve_link(c, "https://example.com/a.pdf"), "https://example.com/a.pdf");
        assert_eq!(resolve_link(c, "http://example.com"), "http://example.com");
        assert_eq!(resolve_link(c, "#"), "#");
        assert_eq!(resolve_link(c, "/src/assets/resources/guide.pdf"), "/assets/resources/guide.pdf");
    }

    #[test]
    fn category_parses_from_wire_name() {
        for c in AssetCategory::ALL {
            assert_eq!(c.as_str().parse::<AssetCategory>(), Ok(c));
        }
        assert!("photos".parse::<AssetCategory>().is_err());
        assert_eq!(serde_json::to_string(&AssetCategory::Aboutus).unwrap(), "\"aboutus\"");
    }
}
