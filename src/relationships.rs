use crate::links::Links;
use crate::serialization::{deserialize_present, Meta, RawData};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// A member of a JSON:API relationships object.
///
/// `data` holds the resource linkage (one resource identifier, an array of
/// them, or `null`) still in its encoded form. Nothing here decodes it: run
/// [`RawData::decode`] and a second [`from_resource`](crate::api::from_resource)
/// pass per related resource.
///
/// <http://jsonapi.org/format/#document-resource-object-relationships>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub data: Option<RawData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Relationship {
    /// A relationship carrying only linkage data.
    pub fn with_data(data: RawData) -> Self {
        Relationship {
            data: Some(data),
            ..Self::default()
        }
    }
}

/// A JSON:API relationships object, mapping names to [`Relationship`]s.
///
/// Like [`Links`], the empty default value is fully usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relationships(BTreeMap<String, Relationship>);

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `relationship` under `name`, replacing any existing value.
    pub fn add(&mut self, name: impl Into<String>, relationship: Relationship) {
        self.0.insert(name.into(), relationship);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.0.get(name)
    }

    /// Removes the relationship under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        self.0.remove(name);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Relationship> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Relationships {
    type Item = (&'a String, &'a Relationship);
    type IntoIter = btree_map::Iter<'a, String, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
