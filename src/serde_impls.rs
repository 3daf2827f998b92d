//! Serialization as a plain sequence of elements.
//!
//! Collections serialize to a sequence (a JSON array, never an object).
//! Deserialization re-validates every element through the target variant.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::Collection;
use crate::constraint::Constraint;

#[cfg_attr(docs_rs, doc(cfg(feature = "serde")))]
impl<T: Serialize, C: Constraint<T>> Serialize for Collection<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct CollectionVisitor<T, C> {
    marker: PhantomData<fn() -> (T, C)>,
}

impl<'de, T, C> Visitor<'de> for CollectionVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Constraint<T>,
{
    type Value = Collection<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of elements admitted by `{}`", C::NAME)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        const MAX_PREALLOCATE: usize = 4096;

        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE));
        while let Some(element) = seq.next_element()? {
            items.push(element);
        }

        Collection::try_from_iter(items).map_err(A::Error::custom)
    }
}

#[cfg_attr(docs_rs, doc(cfg(feature = "serde")))]
impl<'de, T, C> Deserialize<'de> for Collection<T, C>
where
    T: Deserialize<'de>,
    C: Constraint<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CollectionVisitor { marker: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{Date, DatesOnly, Value};
    use crate::{element_constraint, AnyCollection, Collection};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    element_constraint!(Short: String = |s| s.len() <= 3);

    #[test]
    fn serializes_as_a_json_array() {
        let mut map = BTreeMap::new();
        map.insert("foo", "bar");
        map.insert("qux", "baz");

        let c = AnyCollection::from_values(map).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"["bar","baz"]"#);

        let empty = AnyCollection::<u8>::empty();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");

        let filtered = AnyCollection::from(vec![1, 2, 3, 4]).filter(|n, _| n % 2 == 0);
        assert_eq!(serde_json::to_value(&filtered).unwrap(), serde_json::json!([2, 4]));
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Collection<String, Short> = serde_json::from_str(r#"["a","bcd"]"#).unwrap();
        assert_eq!(ok, ["a", "bcd"]);

        let err = serde_json::from_str::<Collection<String, Short>>(r#"["a","bcde"]"#).unwrap_err();
        assert!(err.to_string().contains("element at index 1 violates the `Short` constraint"));

        assert!(serde_json::from_str::<Collection<String, Short>>(r#"{"a":"b"}"#).is_err());
    }

    #[test]
    fn variant_values_round_trip() {
        let dates: Collection<Value, DatesOnly> =
            Collection::new([Value::Date(Date::new(2020, 2, 29)), Value::Date(Date::new(1999, 12, 31))]).unwrap();

        let json = serde_json::to_string(&dates).unwrap();
        let back: Collection<Value, DatesOnly> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dates);

        let ints = serde_json::to_string(&AnyCollection::from(vec![Value::Int(3)])).unwrap();
        assert!(serde_json::from_str::<Collection<Value, DatesOnly>>(&ints).is_err());
    }
}
