use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A timestamp as it reaches the wire boundary.
///
/// `Utc` values are unambiguous instants. `Naive` values only carry wall-clock
/// fields; the boundary reinterprets those fields as UTC without applying any
/// offset. There is deliberately no conversion from offset-bearing values:
/// callers pick `with_timezone(&Utc)` (convert) or `naive_local()`
/// (reinterpret) themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Utc(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Collapse into a UTC instant. Naive wall-clock fields are taken as UTC.
    #[must_use]
    pub fn into_utc(self) -> DateTime<Utc> {
        match self {
            Self::Utc(instant) => instant,
            Self::Naive(wall_clock) => Utc.from_utc_datetime(&wall_clock),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.into_utc()
    }
}

/// Sentinel returned for absent wire values: `0001-01-01T00:00:00.000Z`.
#[must_use]
pub fn unset() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|wall_clock| Utc.from_utc_datetime(&wall_clock))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[must_use]
pub fn is_unset(value: &DateTime<Utc>) -> bool {
    *value == unset()
}
