// Timestamps are serialized as RFC-3339 strings in UTC.

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        json_to_time(str_time.as_str()).map_err(D::Error::custom)
    }

    pub(super) fn time_to_json(t: NaiveDateTime) -> String {
        DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
    }

    pub(super) fn json_to_time(s: &str) -> chrono::ParseResult<NaiveDateTime> {
        DateTime::parse_from_rfc3339(s).map(|t| t.naive_utc())
    }
}

// Serializer for nullable timestamps such as a loan's return date.
pub mod opt_serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::serializer::{json_to_time, time_to_json};

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(time_to_json).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_time {
            Some(s) => json_to_time(s.as_str()).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::utils::date::serializer::{json_to_time, time_to_json};

    #[test]
    fn test_should_round_trip_timestamp() {
        let now = Utc::now().naive_utc();
        let parsed = json_to_time(time_to_json(now).as_str()).expect("should parse");
        assert_eq!(now, parsed);
    }
}
