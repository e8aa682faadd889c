use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Typed identifier that round-trips through its string form (route params, storage keys)
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
