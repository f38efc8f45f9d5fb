use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

/// A free-form JSON object, used for `attributes` and every `meta` member.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// A JSON fragment kept in its encoded form.
///
/// Used for relationship linkage and for a document's primary data, which
/// may hold one resource or an array of resources. Captured fragments are
/// stored compacted and emitted as stored; turning them into resources is
/// left to the caller through [`RawData::decode`]. Equality is structural,
/// so formatting and member order do not matter.
#[derive(Clone)]
pub struct RawData(Box<RawValue>);

impl RawData {
    /// Encodes `value` into a raw fragment.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if `value` cannot be serialized.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(RawData)
    }

    /// Wraps already encoded JSON text, compacting it.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::encode(&value)
    }

    /// Decodes the fragment into `T`.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if the fragment does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }

    /// The fragment's compact JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

impl PartialEq for RawData {
    fn eq(&self, other: &Self) -> bool {
        if self.as_str() == other.as_str() {
            return true;
        }
        match (self.decode::<Value>(), other.decode::<Value>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for RawData {}

impl fmt::Debug for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawData").field(&self.as_str()).finish()
    }
}

impl fmt::Display for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RawData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RawData::encode(&value).map_err(de::Error::custom)
    }
}

/// Deserializes a present member, `null` included, as `Some`. Paired with
/// `#[serde(default)]` so only a missing member becomes `None`.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<RawData>, D::Error>
where
    D: Deserializer<'de>,
{
    RawData::deserialize(deserializer).map(Some)
}
