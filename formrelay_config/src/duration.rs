use std::ops::Deref;

use serde::Deserialize;

/// A human readable duration such as `30s`, `500ms` or `1m 30s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(parse_part)
            .sum::<Result<_, _>>()
            .map(Self)
    }
}

fn parse_part(part: &str) -> Result<std::time::Duration, &'static str> {
    let split = part
        .find(|c: char| !c.is_ascii_digit())
        .ok_or("Missing duration unit")?;
    let (value, unit) = part.split_at(split);
    let value = value.parse::<u64>().map_err(|_| "Invalid duration")?;

    let millis = match unit {
        "ms" => 1,
        "s" => 1000,
        "m" => 60 * 1000,
        "h" => 60 * 60 * 1000,
        _ => return Err("Invalid duration unit"),
    };

    value
        .checked_mul(millis)
        .map(std::time::Duration::from_millis)
        .ok_or("Duration too large")
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("500ms", Some(500)),
            ("42m", Some(42 * 60_000)),
            ("2h", Some(2 * 3_600_000)),
            ("", Some(0)),
            ("1m 30s", Some(90_000)),
            ("xyz", None),
            ("30", None),
            ("7ss", None),
            ("1d", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_millis());
            assert_eq!(output, expected);
        }
    }
}
