
/// Wire shape (serde) of entities and payloads
pub mod wire_tests;
