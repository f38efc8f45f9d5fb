use crate::serialization::Meta;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};

/// A JSON:API link object: the required `href` plus optional `meta`.
///
/// <http://jsonapi.org/format/#document-links>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            meta: None,
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Reads `href` and `meta` out of a generic JSON object, ignoring members
    /// of the wrong type. Returns `None` when neither key is present.
    fn from_generic(map: &serde_json::Map<String, Value>) -> Option<Self> {
        if !map.contains_key("href") && !map.contains_key("meta") {
            return None;
        }
        let href = match map.get("href") {
            Some(Value::String(href)) => href.clone(),
            _ => String::new(),
        };
        let meta = match map.get("meta") {
            Some(Value::Object(meta)) => Some(meta.clone()),
            _ => None,
        };
        Some(Link { href, meta })
    }
}

/// One member of a links object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LinkValue {
    /// A bare URL string.
    Reference(String),
    /// A link object with `href` and optional `meta`.
    Object(Link),
    /// Any other JSON shape, retained as decoded so it re-encodes unchanged.
    Unrecognized(Value),
}

impl LinkValue {
    /// Classifies a generically decoded JSON value.
    ///
    /// Strings become references. Objects become link objects only when
    /// they hold a string `href` and nothing besides an object `meta`;
    /// everything else is kept as [`LinkValue::Unrecognized`].
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(href) => LinkValue::Reference(href),
            Value::Object(map) if is_link_object(&map) => match Link::from_generic(&map) {
                Some(link) => LinkValue::Object(link),
                None => LinkValue::Unrecognized(Value::Object(map)),
            },
            other => LinkValue::Unrecognized(other),
        }
    }

    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            LinkValue::Reference(href) => Some(href),
            _ => None,
        }
    }

    /// Returns the link object form. Unrecognized JSON objects carrying
    /// `href` or `meta` are normalized into a fresh [`Link`].
    #[must_use]
    pub fn as_object(&self) -> Option<Cow<'_, Link>> {
        match self {
            LinkValue::Object(link) => Some(Cow::Borrowed(link)),
            LinkValue::Unrecognized(Value::Object(map)) => Link::from_generic(map).map(Cow::Owned),
            _ => None,
        }
    }
}

fn is_link_object(map: &serde_json::Map<String, Value>) -> bool {
    let href_ok = matches!(map.get("href"), Some(Value::String(_)));
    let meta_ok = matches!(map.get("meta"), None | Some(Value::Object(_)));
    let extra = map.keys().any(|k| k != "href" && k != "meta");
    href_ok && meta_ok && !extra
}

impl<'de> Deserialize<'de> for LinkValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(LinkValue::from_value)
    }
}

impl From<String> for LinkValue {
    fn from(href: String) -> Self {
        LinkValue::Reference(href)
    }
}

impl From<&str> for LinkValue {
    fn from(href: &str) -> Self {
        LinkValue::Reference(href.to_string())
    }
}

impl From<Link> for LinkValue {
    fn from(link: Link) -> Self {
        LinkValue::Object(link)
    }
}

/// A JSON:API links object, mapping names to string or object links.
///
/// The default value is an empty, fully usable container: every accessor
/// reports "not found" on it and every mutator simply works.
///
/// <http://jsonapi.org/format/#document-links>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, LinkValue>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `href` as a bare string link, replacing any existing value.
    pub fn add_string(&mut self, name: impl Into<String>, href: impl Into<String>) {
        self.0.insert(name.into(), LinkValue::Reference(href.into()));
    }

    /// Stores `link` as a link object, replacing any existing value.
    pub fn add(&mut self, name: impl Into<String>, link: Link) {
        self.0.insert(name.into(), LinkValue::Object(link));
    }

    /// Stores a generically decoded JSON value, classified as by
    /// [`LinkValue::from_value`].
    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), LinkValue::from_value(value));
    }

    /// Returns the bare string link under `name`. Link objects are not
    /// narrowed to their `href`; they report `None` here.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(LinkValue::as_reference)
    }

    /// Returns the link object under `name`, normalizing generic JSON
    /// objects that carry `href`/`meta`. String links report `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Cow<'_, Link>> {
        self.0.get(name).and_then(LinkValue::as_object)
    }

    /// Returns the stored value under `name` without any narrowing.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&LinkValue> {
        self.0.get(name)
    }

    /// Removes the value under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        self.0.remove(name);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, LinkValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = (&'a String, &'a LinkValue);
    type IntoIter = btree_map::Iter<'a, String, LinkValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<LinkValue>> FromIterator<(K, V)> for Links {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Links(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_sniffs_shape() {
        assert_eq!(
            LinkValue::from_value(json!("http://a.test")),
            LinkValue::Reference("http://a.test".into())
        );
        assert_eq!(
            LinkValue::from_value(json!({ "href": "http://a.test" })),
            LinkValue::Object(Link::new("http://a.test"))
        );
        assert!(matches!(
            LinkValue::from_value(json!({ "href": "http://a.test", "title": "A" })),
            LinkValue::Unrecognized(_)
        ));
        assert!(matches!(LinkValue::from_value(Value::Null), LinkValue::Unrecognized(_)));
        assert!(matches!(LinkValue::from_value(json!(7)), LinkValue::Unrecognized(_)));
    }

    #[test]
    fn test_reencode_keeps_shape() {
        let source = json!({
            "self": "http://a.test/1",
            "related": { "href": "http://a.test/1/author", "meta": { "count": 1 } },
            "describedby": { "href": "http://a.test/schema", "type": "application/json" },
            "prev": null
        });

        let links: Links = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&links).unwrap(), source);
    }

    #[test]
    fn test_object_without_meta_omits_meta() {
        let mut links = Links::new();
        links.add("self", Link::new("http://a.test"));
        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            json!({ "self": { "href": "http://a.test" } })
        );
    }

    #[test]
    fn test_get_normalizes_meta_only_object() {
        let mut links = Links::new();
        links.insert_value("about", json!({ "meta": { "a": 1 }, "href": 3 }));

        let link = links.get("about").unwrap();
        assert_eq!(link.href, "");
        assert_eq!(link.meta.as_ref().unwrap()["a"], json!(1));
    }

    #[test]
    fn test_get_ignores_objects_without_link_keys() {
        let mut links = Links::new();
        links.insert_value("odd", json!({ "title": "no href" }));
        assert!(links.contains("odd"));
        assert!(links.get("odd").is_none());
        assert!(links.get_string("odd").is_none());
    }
}
