use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of an aggregate.
///
/// The API addresses records by the string form of their id
/// (`PUT /api/category/{id}`), so every id type round-trips through a string.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its path/string form
    fn as_string(&self) -> String;

    /// Parse an id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_string_form() {
        assert_eq!(42i64.as_string(), "42");
        assert_eq!((-1i64).as_string(), "-1");
        assert_eq!(<i64 as AggregateId>::from_string(" 17 "), Ok(17));
        assert!(<i64 as AggregateId>::from_string("abc").is_err());
    }
}
