//! Deserialization helpers for query-string parameters.
//!
//! Query strings carry every value as text, and an empty value (`?name=`)
//! means "no filter" rather than "match the empty string".

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

/// Deserializes an optional string, mapping the empty string to `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// Deserializes an id list into `Some(vec![..])`.
///
/// Accepts a comma-separated string such as `3,7,12`, or a sequence of such
/// strings when the key is repeated (`?id=3&id=7,12`). Blank segments are
/// skipped; an empty or absent value yields `None`.
pub fn deserialize_optional_csv<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt: Option<CsvList<T>> = Option::deserialize(deserializer)?;
    Ok(opt.map(|list| list.0).filter(|values| !values.is_empty()))
}

struct CsvList<T>(Vec<T>);

impl<'de, T> Deserialize<'de> for CsvList<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(CsvVisitor(PhantomData))
            .map(CsvList)
    }
}

struct CsvVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for CsvVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a comma-separated list or a sequence of them")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_csv(v)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(part) = seq.next_element::<String>()? {
            values.extend(parse_csv::<T, A::Error>(&part)?);
        }
        Ok(values)
    }
}

fn parse_csv<T, E>(raw: &str) -> Result<Vec<T>, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|e| E::custom(format!("invalid value `{}`: {}", s, e)))
        })
        .collect()
}
