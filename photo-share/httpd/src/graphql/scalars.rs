use {
    async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value},
    chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc},
};

/// Stored dates are written as ISO 8601 in UTC (`2018-04-15T19:09:57.308Z`).
/// Input strings are taken verbatim and are not checked to be dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iso8601DateTime(String);

/// A valid date time value
#[Scalar(name = "DateTime")]
impl ScalarType for Iso8601DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => Ok(Self(s)),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl From<chrono::DateTime<Utc>> for Iso8601DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<NaiveDateTime> for Iso8601DateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Utc.from_utc_datetime(&dt).into()
    }
}
