//! # Domain models for voyages and users
//!
//! These types mirror the JSON documents exchanged with the voyage backend and
//! are `Serialize + Deserialize` so the same structs serve as request bodies,
//! response bodies and the persisted session user.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Voyage`] | A single vessel journey. `id` is assigned by the server (`_id` on the wire) and is never sent back in request bodies. |
//! | [`Cargo`] | The nested cargo record of a voyage: type, quantity unit, total and USD rate. |
//! | [`QuantityUnit`] | Metric tonnes (`"MT"`) or kilograms (`"KG"`). |
//! | [`UserInfo`] | The authenticated user as returned by the login endpoint. |
//!
//! ## Wire tolerance
//!
//! The backend is document-store shaped, so any field may be missing or
//! `null`. Every string decodes either to the empty string, `total` and
//! `rateUSD` also accept bare JSON numbers, and dates accept either a full
//! RFC 3339 timestamp or a plain `YYYY-MM-DD` date. Dates are always written
//! back as midnight UTC with millisecond precision, or `null`. Identifiers
//! are read from `_id` or `id`; when both are present `_id` is used.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeDelta};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A cargo vessel voyage record.
///
/// The `Serialize`/`Deserialize` impls below wrap the derived ones so that
/// documents carrying `id`, `_id` or both decode to the same record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Voyage {
    /// Server-assigned identifier, absent until the voyage is created.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vessel_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub voyage_number: String,
    #[serde(default, with = "iso_date")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_port: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_country: String,
    #[serde(default, with = "iso_date")]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_port: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cargo: Cargo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consignee: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remarks: String,
}

impl Serialize for Voyage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Voyage::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Voyage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = fold_id_key(serde_json::Value::deserialize(deserializer)?);
        Voyage::deserialize(doc).map_err(de::Error::custom)
    }
}

impl Voyage {
    /// "Vessel - Number" heading used by list rows.
    pub fn title(&self) -> String {
        format!("{} - {}", self.vessel_name, self.voyage_number)
    }

    /// "Departure → Arrival" when both ports are known.
    pub fn route_summary(&self) -> Option<String> {
        if self.departure_port.is_empty() || self.arrival_port.is_empty() {
            return None;
        }
        Some(format!("{} → {}", self.departure_port, self.arrival_port))
    }
}

/// Cargo carried on a voyage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_unit: QuantityUnit,
    /// Numeric string, kept verbatim as typed.
    #[serde(default, deserialize_with = "loose_number")]
    pub total: String,
    #[serde(rename = "rateUSD", default, deserialize_with = "loose_number")]
    pub rate_usd: String,
}

/// Unit for [`Cargo::total`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityUnit {
    #[default]
    #[serde(rename = "MT")]
    Mt,
    #[serde(rename = "KG")]
    Kg,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 2] = [QuantityUnit::Mt, QuantityUnit::Kg];

    pub fn as_str(self) -> &'static str {
        match self {
            QuantityUnit::Mt => "MT",
            QuantityUnit::Kg => "KG",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown quantity unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown quantity unit: {0}")]
pub struct UnknownUnit(pub String);

impl FromStr for QuantityUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MT" => Ok(QuantityUnit::Mt),
            "KG" => Ok(QuantityUnit::Kg),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// User information returned by the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct UserInfo {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl Serialize for UserInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        UserInfo::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for UserInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = fold_id_key(serde_json::Value::deserialize(deserializer)?);
        UserInfo::deserialize(doc).map_err(de::Error::custom)
    }
}

impl UserInfo {
    /// Get display name, falling back to email if the username is not set.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Parse a wire date: RFC 3339 timestamp or plain `YYYY-MM-DD`.
///
/// Browsers store a picked date as local midnight converted to UTC, so a
/// `Z` instant is rounded to the nearest UTC midnight: `2023-12-31T16:00Z`
/// (midnight in UTC+8) reads as 2024-01-01 and `2024-01-01T05:00Z`
/// (midnight in UTC-5) as 2024-01-01. This holds for offsets from UTC-11
/// to UTC+12. An instant with an explicit non-zero offset keeps the date in
/// that offset.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        if dt.offset().local_minus_utc() != 0 {
            return Some(dt.date_naive());
        }
        return Some((dt + TimeDelta::hours(12)).date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date as the ISO-8601 instant sent to the backend.
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Fold a plain `id` key into `_id`. When both are present `_id` wins.
fn fold_id_key(mut doc: serde_json::Value) -> serde_json::Value {
    if let Some(map) = doc.as_object_mut() {
        if let Some(id) = map.remove("id") {
            let has_mongo_id = map.get("_id").is_some_and(|v| !v.is_null());
            if !has_mongo_id {
                map.insert("_id".to_string(), id);
            }
        }
    }
    doc
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn loose_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(n)) => n.to_string(),
    })
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&super::format_iso_date(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_iso_date(s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {s}"))),
        }
    }
}
