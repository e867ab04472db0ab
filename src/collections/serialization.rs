//! Serde support for the set representations.
//!
//! Every set serializes as a plain sequence of its elements. Deserialization
//! adds the elements one at a time, so duplicates in the input are dropped and
//! an [`AdaptiveSet`] picks its storage from the number of distinct elements
//! (with the default threshold).

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AdaptiveSet, ArraySet, HashedSet};
use crate::contract::{ComparableSet, Element, Set};

fn serialize_elements<'a, T, I, S>(
    elements: I,
    length: usize,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(length))?;
    for element in elements {
        seq.serialize_element(element)?;
    }
    seq.end()
}

/// Builds any default-constructible set from a sequence.
struct SetVisitor<S, T> {
    marker: PhantomData<(S, T)>,
}

impl<S, T> SetVisitor<S, T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, S, T> Visitor<'de> for SetVisitor<S, T>
where
    S: Set<T> + Default,
    T: Deserialize<'de> + Element,
{
    type Value = S;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = S::default();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

macro_rules! impl_set_serde {
    ($($set:ident),+ $(,)?) => {
        $(
            impl<T: Serialize + Element> Serialize for $set<T> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serialize_elements(self.iter(), self.len(), serializer)
                }
            }

            impl<'de, T> Deserialize<'de> for $set<T>
            where
                T: Deserialize<'de> + Element,
            {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_seq(SetVisitor::<Self, T>::new())
                }
            }
        )+
    };
}

impl_set_serde!(ArraySet, HashedSet, AdaptiveSet);
