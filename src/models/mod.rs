//! Core data models for requests, responses, and key/value collections.

pub mod keyvalue;
pub mod request;
pub mod response;

pub use keyvalue::{add_pair, remove_pair, update_pair, KeyValueField, KeyValuePair};
pub use request::{ApiRequest, HttpMethod};
pub use response::ApiResponse;
