//! Small file-backed stores for client-side state.

pub mod json_map_store;
