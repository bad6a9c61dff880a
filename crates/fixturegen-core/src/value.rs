use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A randomly shaped value tree.
///
/// Values are built once, handed to a serializer and dropped; nothing in the
/// tree is shared or re-referenced, so plain ownership is enough.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

/// Discriminant of a [`Value`], used when drawing which variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Variants allowed at the depth limit.
    pub const SCALARS: [ValueKind; 3] = [ValueKind::Integer, ValueKind::Float, ValueKind::String];

    /// Variants allowed above the depth limit.
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Integer,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Sequence,
        ValueKind::Mapping,
    ];

    pub fn is_scalar(self) -> bool {
        !matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    /// Nesting depth: scalars and empty containers count as 1.
    pub fn depth(&self) -> usize {
        match self {
            Value::Integer(_) | Value::Float(_) | Value::String(_) => 1,
            Value::Sequence(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Value::Mapping(mapping) => 1 + mapping.depth(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

/// Ordered string-keyed entries.
///
/// Keys are drawn independently per entry and are not deduplicated, so a
/// mapping may hold the same key twice. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, key: String, value: Value) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == key)
            .map(|(_, value)| value)
    }

    /// Deepest value held by this mapping, 0 when empty.
    pub fn depth(&self) -> usize {
        self.values().map(Value::depth).max().unwrap_or(0)
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_nesting() {
        let leaf = Value::Integer(7);
        assert_eq!(leaf.depth(), 1);

        let empty = Value::Sequence(Vec::new());
        assert_eq!(empty.depth(), 1);

        let nested = Value::Sequence(vec![
            Value::Float(1.5),
            Value::Mapping(Mapping::from_iter([(
                "abc".to_string(),
                Value::String("xyz".to_string()),
            )])),
        ]);
        assert_eq!(nested.depth(), 3);
    }

    #[test]
    fn mapping_keeps_duplicate_keys() {
        let mut mapping = Mapping::new();
        mapping.push("dup".to_string(), Value::Integer(1));
        mapping.push("dup".to_string(), Value::Integer(2));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("dup"), Some(&Value::Integer(1)));
    }
}
