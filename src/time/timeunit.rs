use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^(?P<value>\d+)(?P<unit>ns|us|ms|s|m|h|d)$").expect("Regex compilation error");
}

/// A duration as written on the command line, e.g. `--upload-timeout 45s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    fn seconds(self) -> Option<u64> {
        match self {
            TimeUnit::Second => Some(1),
            TimeUnit::Minute => Some(60),
            TimeUnit::Hour => Some(60 * 60),
            TimeUnit::Day => Some(60 * 60 * 24),
            _ => None,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = DURATION_REGEX
            .captures(trimmed)
            .ok_or_else(|| Error::Syntax(s.to_owned()))?;
        let value = caps["value"]
            .parse::<u64>()
            .map_err(|_| Error::Overflow(caps["value"].to_owned()))?;
        let unit = caps["unit"].parse::<TimeUnit>()?;
        if let Some(factor) = unit.seconds() {
            value
                .checked_mul(factor)
                .ok_or_else(|| Error::Overflow(trimmed.to_owned()))?;
        }
        Ok(Self { value, unit })
    }
}

impl From<DurationUnit> for Duration {
    fn from(duration: DurationUnit) -> Self {
        match duration.unit {
            TimeUnit::Nanosecond => Duration::from_nanos(duration.value),
            TimeUnit::Microsecond => Duration::from_micros(duration.value),
            TimeUnit::Millisecond => Duration::from_millis(duration.value),
            // checked in from_str
            unit => Duration::from_secs(duration.value * unit.seconds().unwrap_or(1)),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanosecond" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanosecond),
            "us" | "microsecond" | "micros" | "microseconds" => Ok(TimeUnit::Microsecond),
            "ms" | "millisecond" | "millis" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "second" | "secs" | "seconds" => Ok(TimeUnit::Second),
            "m" | "minute" | "mins" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(Error::UnitNotSupported(s.to_owned())),
        }
    }
}

/// Parser hook for structopt's `try_from_str`.
pub fn parse_duration(s: &str) -> Result<Duration, Error> {
    s.parse::<DurationUnit>().map(Duration::from)
}
