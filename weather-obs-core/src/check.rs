//! Plausibility checks that producers run on a populated observation.
//!
//! [`WeatherObservation`] itself accepts any value; this module is where the
//! expected ranges live. Findings are advisory: callers decide whether to log,
//! reject or pass the record through.

use std::fmt;

use crate::model::WeatherObservation;

pub const HUMIDITY_RANGE: (i32, i32) = (0, 100);
pub const PRESSURE_RANGE: (i32, i32) = (800, 1100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    City,
    Country,
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
    Visibility,
    Condition,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::City,
        Field::Country,
        Field::Temperature,
        Field::Humidity,
        Field::Pressure,
        Field::WindSpeed,
        Field::Visibility,
        Field::Condition,
    ];

    /// Key the field is serialized under.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Country => "country",
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::Pressure => "pressure",
            Field::WindSpeed => "windSpeed",
            Field::Visibility => "visibility",
            Field::Condition => "condition",
        }
    }

    fn is_zero(&self, obs: &WeatherObservation) -> bool {
        match self {
            Field::City => obs.city().is_empty(),
            Field::Country => obs.country().is_empty(),
            Field::Temperature => obs.temperature() == 0.0,
            Field::Humidity => obs.humidity() == 0,
            Field::Pressure => obs.pressure() == 0,
            Field::WindSpeed => obs.wind_speed() == 0.0,
            Field::Visibility => obs.visibility() == 0,
            Field::Condition => obs.condition().is_empty(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObservationIssue {
    #[error("{0} is blank")]
    Blank(Field),
    #[error("{0} is not a finite number")]
    NonFinite(Field),
    #[error("{0} is negative")]
    Negative(Field),
    #[error("{field} = {value} is outside the expected range {min}..={max}")]
    OutOfRange {
        field: Field,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Report every range or plausibility problem in `obs`.
///
/// Empty text and zero pressure count as "not supplied" and are not flagged.
pub fn check(obs: &WeatherObservation) -> Vec<ObservationIssue> {
    let mut issues = Vec::new();

    for (field, text) in [
        (Field::City, obs.city()),
        (Field::Country, obs.country()),
        (Field::Condition, obs.condition()),
    ] {
        if !text.is_empty() && text.trim().is_empty() {
            issues.push(ObservationIssue::Blank(field));
        }
    }

    if !obs.temperature().is_finite() {
        issues.push(ObservationIssue::NonFinite(Field::Temperature));
    }

    let wind = obs.wind_speed();
    if !wind.is_finite() {
        issues.push(ObservationIssue::NonFinite(Field::WindSpeed));
    } else if wind < 0.0 {
        issues.push(ObservationIssue::Negative(Field::WindSpeed));
    }

    if obs.visibility() < 0 {
        issues.push(ObservationIssue::Negative(Field::Visibility));
    }

    push_out_of_range(&mut issues, Field::Humidity, obs.humidity(), HUMIDITY_RANGE);
    if obs.pressure() != 0 {
        push_out_of_range(&mut issues, Field::Pressure, obs.pressure(), PRESSURE_RANGE);
    }

    issues
}

/// Fields still holding their zero value, i.e. unknown to a consumer.
pub fn unspecified_fields(obs: &WeatherObservation) -> Vec<Field> {
    Field::ALL.into_iter().filter(|f| f.is_zero(obs)).collect()
}

fn push_out_of_range(
    issues: &mut Vec<ObservationIssue>,
    field: Field,
    value: i32,
    (min, max): (i32, i32),
) {
    if !(min..=max).contains(&value) {
        issues.push(ObservationIssue::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherObservation {
        let mut obs = WeatherObservation::new();
        obs.set_city("Paris");
        obs.set_country("France");
        obs.set_temperature(18.5);
        obs.set_humidity(60);
        obs.set_pressure(1013);
        obs.set_wind_speed(4.2);
        obs.set_visibility(10);
        obs.set_condition("Clear");
        obs
    }

    #[test]
    fn plausible_observation_has_no_issues() {
        assert!(check(&sample()).is_empty());
        assert!(unspecified_fields(&sample()).is_empty());
    }

    #[test]
    fn empty_observation_is_unspecified_but_not_invalid() {
        let obs = WeatherObservation::new();

        assert!(check(&obs).is_empty());
        assert_eq!(unspecified_fields(&obs), Field::ALL.to_vec());
    }

    #[test]
    fn humidity_out_of_range_is_reported() {
        let mut obs = sample();
        obs.set_humidity(150);

        let issues = check(&obs);
        assert_eq!(
            issues,
            vec![ObservationIssue::OutOfRange {
                field: Field::Humidity,
                value: 150,
                min: 0,
                max: 100,
            }]
        );
        assert!(issues[0].to_string().contains("humidity = 150"));

        // The record itself is untouched.
        assert_eq!(obs.humidity(), 150);
    }

    #[test]
    fn negative_and_non_finite_values_are_reported() {
        let mut obs = sample();
        obs.set_wind_speed(-2.0);
        obs.set_visibility(-1);
        obs.set_temperature(f64::NAN);
        obs.set_pressure(700);

        let issues = check(&obs);
        assert!(issues.contains(&ObservationIssue::NonFinite(Field::Temperature)));
        assert!(issues.contains(&ObservationIssue::Negative(Field::WindSpeed)));
        assert!(issues.contains(&ObservationIssue::Negative(Field::Visibility)));
        assert!(issues.contains(&ObservationIssue::OutOfRange {
            field: Field::Pressure,
            value: 700,
            min: 800,
            max: 1100,
        }));
    }

    #[test]
    fn infinite_wind_is_non_finite_not_negative() {
        let mut obs = sample();
        obs.set_wind_speed(f64::NEG_INFINITY);

        assert_eq!(check(&obs), vec![ObservationIssue::NonFinite(Field::WindSpeed)]);
    }

    #[test]
    fn whitespace_text_is_blank() {
        let mut obs = sample();
        obs.set_city("   ");

        assert_eq!(check(&obs), vec![ObservationIssue::Blank(Field::City)]);
        assert!(unspecified_fields(&obs).is_empty());
    }

    #[test]
    fn zero_humidity_is_both_valid_and_unspecified() {
        let mut obs = sample();
        obs.set_humidity(0);

        assert!(check(&obs).is_empty());
        assert_eq!(unspecified_fields(&obs), vec![Field::Humidity]);
    }

    #[test]
    fn wire_names_match_serialized_keys() {
        let value = serde_json::to_value(sample()).expect("serialize");
        for field in Field::ALL {
            assert!(value.get(field.wire_name()).is_some(), "missing {field}");
        }
    }
}
