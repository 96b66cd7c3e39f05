use core::{
    fmt::{self, Display},
    marker::PhantomData,
};

use serde::{
    Deserialize, Serialize,
    de::{self, SeqAccess, Visitor},
};

use crate::{AllocError, GrowList};

impl<T: Serialize> Serialize for GrowList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <[T]>::serialize(self.as_slice(), serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrowList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(GrowListVisitor(PhantomData))
    }
}

const AN_ARRAY: &str = "an array";

struct AllocationFailed;

impl Display for AllocationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("allocation failed")
    }
}

fn map_alloc_error<T, E: de::Error>(result: Result<T, AllocError>) -> Result<(), E> {
    match result {
        Ok(_) => Ok(()),
        Err(AllocError) => Err(E::custom(&AllocationFailed)),
    }
}

struct GrowListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for GrowListVisitor<T> {
    type Value = GrowList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(AN_ARRAY)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = GrowList::new();

        // Appending one by one keeps the usual growth policy.
        while let Some(value) = seq.next_element()? {
            map_alloc_error(list.try_append(value))?;
        }

        Ok(list)
    }
}
