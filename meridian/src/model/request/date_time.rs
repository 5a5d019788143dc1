use serde_json::Value;

use crate::model::location::{Location, CURRENT_DATE_TIME};
use crate::model::request::RequestError;

/// departure/arrival semantics of a timestamped request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeType {
    /// depart now; the first location is tagged with the sentinel marker
    Current,
    /// depart at the given time, tagged on the first location
    DepartAt,
    /// arrive by the given time, tagged on the last location
    ArriveBy,
}

impl DateTimeType {
    /// map the integer wire encoding. unrecognized values carry no
    /// date-time semantics.
    pub fn from_wire(value: i64) -> Option<DateTimeType> {
        match value {
            0 => Some(DateTimeType::Current),
            1 => Some(DateTimeType::DepartAt),
            2 => Some(DateTimeType::ArriveBy),
            _ => None,
        }
    }
}

/// read `date_time.type` / `date_time.value` from the request and tag the
/// positionally first or last location accordingly. the mapping is
/// positional, not tied to any named location.
pub fn apply_date_time(
    request: &Value,
    locations: &mut [Location],
) -> Result<Option<DateTimeType>, RequestError> {
    let date_time_type = request
        .get("date_time")
        .and_then(|dt| dt.get("type"))
        .and_then(Value::as_i64)
        .and_then(DateTimeType::from_wire);
    let date_time_value = request
        .get("date_time")
        .and_then(|dt| dt.get("value"))
        .and_then(Value::as_str);

    match date_time_type {
        Some(DateTimeType::Current) => {
            if let Some(first) = locations.first_mut() {
                first.date_time = Some(String::from(CURRENT_DATE_TIME));
            }
        }
        Some(DateTimeType::DepartAt) => {
            let value = date_time_value.ok_or(RequestError::MissingDateTimeValue)?;
            if let Some(first) = locations.first_mut() {
                first.date_time = Some(value.to_string());
            }
        }
        Some(DateTimeType::ArriveBy) => {
            let value = date_time_value.ok_or(RequestError::MissingDateTimeValue)?;
            if let Some(last) = locations.last_mut() {
                last.date_time = Some(value.to_string());
            }
        }
        None => {}
    }
    Ok(date_time_type)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{apply_date_time, DateTimeType};
    use crate::model::location::{Location, CURRENT_DATE_TIME};
    use crate::model::request::RequestError;

    fn locations() -> Vec<Location> {
        vec![
            Location::from_value(&json!({ "lat": 1.0, "lon": 1.0 })).expect("location 0"),
            Location::from_value(&json!({ "lat": 2.0, "lon": 2.0 })).expect("location 1"),
            Location::from_value(&json!({ "lat": 3.0, "lon": 3.0 })).expect("location 2"),
        ]
    }

    #[test]
    fn test_current_tags_first_location_with_sentinel() {
        let mut locations = locations();
        let parsed = apply_date_time(
            &json!({ "date_time": { "type": 0, "value": "ignored" } }),
            &mut locations,
        )
        .expect("type 0 should apply");
        assert_eq!(parsed, Some(DateTimeType::Current));
        assert_eq!(locations[0].date_time.as_deref(), Some(CURRENT_DATE_TIME));
        assert_eq!(locations[1].date_time, None);
        assert_eq!(locations[2].date_time, None);
    }

    #[test]
    fn test_depart_at_tags_first_location_verbatim() {
        let mut locations = locations();
        apply_date_time(
            &json!({ "date_time": { "type": 1, "value": "2016-07-03T08:06" } }),
            &mut locations,
        )
        .expect("type 1 should apply");
        assert_eq!(locations[0].date_time.as_deref(), Some("2016-07-03T08:06"));
        assert_eq!(locations[2].date_time, None);
    }

    #[test]
    fn test_arrive_by_tags_last_location_verbatim() {
        let mut locations = locations();
        apply_date_time(
            &json!({ "date_time": { "type": 2, "value": "2016-07-03T08:06" } }),
            &mut locations,
        )
        .expect("type 2 should apply");
        assert_eq!(locations[0].date_time, None);
        assert_eq!(locations[2].date_time.as_deref(), Some("2016-07-03T08:06"));
    }

    #[test]
    fn test_unrecognized_or_absent_type_tags_nothing() {
        let mut locations = locations();
        let parsed = apply_date_time(
            &json!({ "date_time": { "type": 7, "value": "2016-07-03T08:06" } }),
            &mut locations,
        )
        .expect("an unrecognized type is not an error");
        assert_eq!(parsed, None);
        assert!(locations.iter().all(|l| l.date_time.is_none()));

        let parsed = apply_date_time(&json!({}), &mut locations)
            .expect("an absent date_time is not an error");
        assert_eq!(parsed, None);
        assert!(locations.iter().all(|l| l.date_time.is_none()));
    }

    #[test]
    fn test_missing_value_for_timestamped_type_is_rejected() {
        let mut locations = locations();
        let error = apply_date_time(&json!({ "date_time": { "type": 1 } }), &mut locations)
            .err()
            .expect("type 1 without a value should be rejected");
        assert!(matches!(error, RequestError::MissingDateTimeValue));
    }
}
