//! Wire schema of a Pokémon record as returned by the API.
//!
//! Decoding is lenient: unknown keys are ignored, and missing or `null`
//! fields fall back to the zero value of their type.

use crate::error::FetchError;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// One entry of the `stats` list: the stat reference plus its base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub stat: Stat,
    #[serde(deserialize_with = "null_as_default")]
    pub base_stat: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

impl Sprites {
    /// Front sprite URL, if present and non-empty.
    pub fn front_url(&self) -> Option<&str> {
        non_empty(self.front_default.as_deref())
    }

    /// Back sprite URL, if present and non-empty.
    pub fn back_url(&self) -> Option<&str> {
        non_empty(self.back_default.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub base_experience: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sprites: Sprites,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<StatInfo>,
}

/// Decodes a response body into a [`Pokemon`].
pub fn parse_pokemon(body: &[u8]) -> Result<Pokemon, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
