use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{Bson, Document as BsonDocument};
use serde_json::{Map, Value};

/// Key under which the store keeps a document's identifier.
pub const STORE_ID_KEY: &str = "_id";

/// Key the identifier is exposed under in API responses.
pub const API_ID_KEY: &str = "id";

/// A stored field value, tagged by how it must be rendered for JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// Store-assigned opaque identifier, already in its textual form.
    Identifier(String),
    Timestamp(DateTime<Utc>),
    /// Any other value, already JSON-safe.
    Scalar(Value),
}

impl StoreValue {
    pub fn from_bson(value: Bson) -> Self {
        match value {
            Bson::ObjectId(oid) => StoreValue::Identifier(oid.to_hex()),
            Bson::DateTime(dt) => StoreValue::Timestamp(dt.to_chrono()),
            other => StoreValue::Scalar(other.into_relaxed_extjson()),
        }
    }

    /// Reads the `_id` field. Non-ObjectId identifiers keep their textual form.
    fn identifier_from_bson(value: Bson) -> Self {
        match value {
            Bson::ObjectId(oid) => StoreValue::Identifier(oid.to_hex()),
            Bson::String(s) => StoreValue::Identifier(s),
            other => StoreValue::Identifier(other.into_relaxed_extjson().to_string()),
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            StoreValue::Identifier(id) => Value::String(id),
            StoreValue::Timestamp(ts) => {
                Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            StoreValue::Scalar(value) => value,
        }
    }

    fn into_identifier_string(self) -> String {
        match self.into_json() {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

/// A document as returned by a store adapter, fields in store order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredDocument {
    fields: Vec<(String, StoreValue)>,
}

impl StoredDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: StoreValue) -> Self {
        self.fields.push((key.into(), value));
        self
    }

    pub fn from_bson(doc: BsonDocument) -> Self {
        let fields = doc
            .into_iter()
            .map(|(key, value)| {
                let value = if key == STORE_ID_KEY {
                    StoreValue::identifier_from_bson(value)
                } else {
                    StoreValue::from_bson(value)
                };
                (key, value)
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&StoreValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Converts to the JSON shape served by the API.
    ///
    /// `_id` becomes `id`; if the source also has its own `id` field the store
    /// identifier takes precedence.
    pub fn normalize(self) -> NormalizedDocument {
        let mut out = Map::with_capacity(self.fields.len());
        let mut identifier = None;

        for (key, value) in self.fields {
            if key == STORE_ID_KEY {
                identifier = Some(value.into_identifier_string());
            } else {
                out.insert(key, value.into_json());
            }
        }

        if let Some(id) = identifier {
            out.insert(API_ID_KEY.to_string(), Value::String(id));
        }

        out
    }
}

/// JSON-safe rendition of a stored document.
pub type NormalizedDocument = Map<String, Value>;
