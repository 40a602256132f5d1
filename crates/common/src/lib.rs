pub mod assets;
pub mod env;
pub mod types;
pub mod utils;

pub use assets::{resolve_asset_path, resolve_link, AssetCategory, ASSET_ROOT};
pub use types::{render_icon, FeatureIcon, IconId};
