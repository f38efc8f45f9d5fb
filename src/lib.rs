//! Conversion of domain types to and from JSON:API resource objects.
//!
//! A domain type takes part by implementing the small capability traits in
//! [`adapter`] (identity, attributes, relationships, links, meta) and
//! advertising them with [`read_adapter!`] / [`write_adapter!`]. The
//! [`to_resource`] and [`from_resource`] functions then build or apply a
//! [`Resource`], which serializes with `serde_json`.
//!
//! <http://jsonapi.org/format/>

pub mod adapter;
pub mod api;
pub mod document;
pub mod error;
pub mod links;
pub mod relationships;
pub mod resource;
pub mod serialization;

pub use api::{from_resource, to_resource};
pub use document::{Document, ErrorObject, Info, MEDIA_TYPE};
pub use error::{AdapterError, AdapterResult, JsonApiError};
pub use links::{Link, LinkValue, Links};
pub use relationships::{Relationship, Relationships};
pub use resource::Resource;
pub use serialization::{Meta, RawData};
