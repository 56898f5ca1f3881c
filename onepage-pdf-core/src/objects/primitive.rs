use crate::objects::Dictionary;
use std::fmt;

/// Indirect object identity: object number plus generation.
///
/// Freshly generated documents only ever use generation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub const fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// The PDF object kinds the writer knows how to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Dictionary, Vec<u8>),
    Reference(ObjectId),
}

impl Object {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Dictionary view of the object; for a stream this is its header dictionary.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) | Object::Stream(dict, _) => Some(dict),
            _ => None,
        }
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId::new(6, 0).to_string(), "6 0 R");
    }

    #[test]
    fn test_object_id_ordering_follows_number() {
        let mut ids = vec![ObjectId::new(3, 0), ObjectId::new(1, 0), ObjectId::new(2, 0)];
        ids.sort();
        let numbers: Vec<u32> = ids.iter().map(|id| id.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Object::Integer(42).as_integer(), Some(42));
        assert_eq!(Object::Name("Page".to_string()).as_name(), Some("Page"));
        assert_eq!(
            Object::Reference(ObjectId::new(2, 0)).as_reference(),
            Some(ObjectId::new(2, 0))
        );
        assert!(Object::Integer(1).as_dict().is_none());
        assert!(Object::Real(1.0).as_array().is_none());
    }

    #[test]
    fn test_stream_exposes_header_dictionary() {
        let mut dict = Dictionary::new();
        dict.set("Length", 3i64);
        let stream = Object::Stream(dict, b"abc".to_vec());

        let header = stream.as_dict().unwrap();
        assert_eq!(header.get("Length").and_then(Object::as_integer), Some(3));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Object::from(7i64), Object::Integer(7));
        assert_eq!(Object::from(1.5f64), Object::Real(1.5));
        assert_eq!(
            Object::from(ObjectId::new(4, 0)),
            Object::Reference(ObjectId::new(4, 0))
        );
    }
}
