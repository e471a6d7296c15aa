use crate::Value;
use serde_json::Value as Json;

/// Arrays become sequences, objects become mappings and everything else a scalar.
impl From<Json> for Value<Json> {
    fn from(json: Json) -> Self {
        match json {
            Json::Array(a) => Value::Sequence(a.into_iter().map(Into::into).collect()),
            Json::Object(m) => Value::Mapping(m.into_iter().map(|(k, v)| (k, v.into())).collect()),
            scalar => Value::Scalar(scalar),
        }
    }
}

impl From<Value<Json>> for Json {
    fn from(value: Value<Json>) -> Self {
        match value {
            Value::Sequence(a) => Json::Array(a.into_iter().map(Into::into).collect()),
            Value::Mapping(m) => Json::Object(m.into_iter().map(|(k, v)| (k, v.into())).collect()),
            Value::Scalar(scalar) => scalar,
        }
    }
}
