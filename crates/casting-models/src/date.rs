//! Release dates travel as `MM-DD-YYYY`. ISO `YYYY-MM-DD` is also accepted on input.
//!
//! Use with `#[serde(with = "casting_models::date")]` on a [`NaiveDate`] field, or
//! through the [`ReleaseDate`] newtype where a standalone type is needed.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

pub const FORMAT: &str = "%m-%d-%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn parse(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, FORMAT).or_else(|_| NaiveDate::parse_from_str(input, ISO_FORMAT))
}

pub fn format(date: &NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| D::Error::custom(format!("invalid release date {raw:?}: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseDate(pub NaiveDate);

impl From<ReleaseDate> for NaiveDate {
    fn from(date: ReleaseDate) -> Self {
        date.0
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(ReleaseDate)
    }
}
