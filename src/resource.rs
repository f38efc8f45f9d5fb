use crate::links::Links;
use crate::relationships::Relationships;
use crate::serialization::Meta;
use serde::{Deserialize, Deserializer, Serialize};

/// A JSON:API resource object, or a resource identifier when only `id` and
/// `type` are set.
///
/// `id` and `type` are always encoded. `id` may be empty for a resource the
/// client is about to create. The optional members are left out of the
/// encoded form when absent (`attributes`, `meta`) or empty
/// (`relationships`, `links`).
///
/// <http://jsonapi.org/format/#document-resource-objects>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Meta>,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Resource {
    /// A resource identifier.
    pub fn identifier(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Resource {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// The `{id, type}` projection of this resource.
    #[must_use]
    pub fn to_identifier(&self) -> Resource {
        Resource::identifier(self.id.clone(), self.kind.clone())
    }

    /// Returns `true` if nothing beyond `id` and `type` is set.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.attributes.is_none()
            && self.relationships.is_empty()
            && self.links.is_empty()
            && self.meta.is_none()
    }
}

/// A `null` id decodes as empty, like a missing one.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
