use crate::error::WarrenError;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref VERSION_REGEX: Regex = Regex::new(r#"^(?P<major>\d+)\.(?P<minor>\d+)$"#).unwrap();
}

/// Value of `jsonapi.version`, compared as `(major, minor)`
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct JsonApiVersion {
    pub major: u8,
    pub minor: u8,
}

impl JsonApiVersion {
    pub const V1_0: JsonApiVersion = JsonApiVersion { major: 1, minor: 0 };
    pub const V1_1: JsonApiVersion = JsonApiVersion { major: 1, minor: 1 };
}

impl Default for JsonApiVersion {
    fn default() -> Self { Self::V1_0 }
}

impl fmt::Display for JsonApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for JsonApiVersion {
    type Err = WarrenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| WarrenError::InvalidJsonApiVersion(s.into()))?;
        match (caps["major"].parse::<u8>(), caps["minor"].parse::<u8>()) {
            (Ok(major), Ok(minor)) => Ok(JsonApiVersion { major, minor }),
            _ => Err(WarrenError::InvalidJsonApiVersion(s.into())),
        }
    }
}

impl Serialize for JsonApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
