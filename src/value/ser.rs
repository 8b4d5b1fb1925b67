use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{
    array::{Array, SharedArray},
    object::{Object, SharedObject},
    var::Var,
};

impl Serialize for Var {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Var::Empty => serializer.serialize_unit(),
            Var::Bool(b) => serializer.serialize_bool(*b),
            Var::Int(i) => serializer.serialize_i64(*i),
            Var::UInt(u) => serializer.serialize_u64(*u),
            Var::Float(f) => serializer.serialize_f64(*f),
            Var::Char(c) => serializer.serialize_char(*c),
            Var::String(s) => serializer.serialize_str(s.as_str()),
            Var::Array(a) => a.serialize(serializer),
            Var::Object(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    /// Serializes the entries in the object's key order.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for v in self.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

impl Serialize for SharedObject {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.borrow().serialize(serializer)
    }
}

impl Serialize for SharedArray {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.borrow().serialize(serializer)
    }
}
