//! Named per-entity calls. Each one delegates to the generic [`CrudApi`]
//! implementation so request shape and error messages stay in one place.

use models::{Leader, LeaderInput, Partner, PartnerInput, Resource, ResourceInput, Service, ServiceInput};

use crate::api::client::ApiClient;
use crate::api::traits::CrudApi;
use crate::errors::ApiError;

macro_rules! collection_endpoints {
    ($entity:ty, $input:ty, $fetch:ident, $create:ident, $update:ident, $delete:ident) => {
        impl ApiClient {
            pub async fn $fetch(&self) -> Result<Vec<$entity>, ApiError> {
                CrudApi::<$entity>::list(self).await
            }

            pub async fn $create(&self, input: &$input) -> Result<$entity, ApiError> {
                CrudApi::<$entity>::create(self, input).await
            }

            pub async fn $update(&self, id: i64, input: &$input) -> Result<$entity, ApiError> {
                CrudApi::<$entity>::update(self, id, input).await
            }

            pub async fn $delete(&self, id: i64) -> Result<bool, ApiError> {
                CrudApi::<$entity>::delete(self, id).await
            }
        }
    };
}

collection_endpoints!(Leader, LeaderInput, fetch_leaders, create_leader, update_leader, delete_leader);
collection_endpoints!(Service, ServiceInput, fetch_services, create_service, update_service, delete_service);
collection_endpoints!(Resource, ResourceInput, fetch_resources, create_resource, update_resource, delete_resource);
collection_endpoints!(Partner, PartnerInput, fetch_partners, create_partner, update_partner, delete_partner);
