use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts either a JSON string or a JSON number and keeps its textual form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(value) => value,
        StringOrNumber::Integer(value) => value.to_string(),
        StringOrNumber::Float(value) => value.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

/// Map whose values may each be a single object or a list of them.
pub(crate) fn map_of_one_or_many<'de, D, T>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = BTreeMap::<String, OneOrMany<T>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, entries)| (key, entries.into_vec()))
        .collect())
}

/// `null` and absent both decode to an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and absent both decode to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    Other(serde::de::IgnoredAny),
}

/// Parses RFC 3339, offset-less datetimes (read as UTC), plain dates or epoch
/// milliseconds. Anything else decodes to `None` rather than failing the document.
pub(crate) fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(value)) => parse_timestamp(&value),
        Some(RawTimestamp::Millis(millis)) => DateTime::from_timestamp_millis(millis),
        Some(RawTimestamp::Other(_)) | None => None,
    })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "lenient_timestamp")]
        at: Option<DateTime<Utc>>,
    }

    fn stamp(value: serde_json::Value) -> Option<String> {
        serde_json::from_value::<Stamped>(json!({ "at": value }))
            .expect("never fails on the timestamp")
            .at
            .map(|at| at.to_rfc3339())
    }

    #[test]
    fn accepts_the_common_timestamp_shapes() {
        assert_eq!(
            stamp(json!("2025-02-01T04:05:06+10:00")).as_deref(),
            Some("2025-01-31T18:05:06+00:00")
        );
        assert_eq!(
            stamp(json!("2025-02-01T04:05:06")).as_deref(),
            Some("2025-02-01T04:05:06+00:00")
        );
        assert_eq!(
            stamp(json!("2025-02-01")).as_deref(),
            Some("2025-02-01T00:00:00+00:00")
        );
        assert_eq!(
            stamp(json!(0)).as_deref(),
            Some("1970-01-01T00:00:00+00:00")
        );
    }

    #[test]
    fn unreadable_timestamps_become_none() {
        assert_eq!(stamp(json!("yesterday")), None);
        assert_eq!(stamp(json!(null)), None);
        assert_eq!(stamp(json!({ "nested": true })), None);
        assert!(serde_json::from_value::<Stamped>(json!({})).expect("absent").at.is_none());
    }
}
