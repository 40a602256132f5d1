use std::fmt::Debug;

use common::AssetCategory;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Client-side constraints checked before a payload reaches the API.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

/// A list entity served under `/<PATH>` with `/<PATH>/{id}` item routes.
pub trait CollectionEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Input: Validate + AssetField + Serialize + Clone + Debug + Send + Sync + 'static;

    /// Collection path segment, also the plural used in messages.
    const PATH: &'static str;
    /// Singular noun used in messages and prompts.
    const SINGULAR: &'static str;

    fn id(&self) -> i64;

    /// Payload that would recreate this entity, used to prefill edit forms.
    fn to_input(&self) -> Self::Input;
}

/// The single uploadable reference on an input (photo, logo or file url).
pub trait AssetField {
    const CATEGORY: AssetCategory;

    fn asset(&self) -> Option<&str>;
    fn set_asset(&mut self, reference: String);
}
