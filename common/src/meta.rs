use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format_elapsed;

/// Service description record, the `uptime` is computed when the record is created.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Meta {
    pub uptime: String,
    pub info: String,
    pub version: String,
}

impl Meta {
    pub fn new(started: DateTime<Utc>, info: &str, version: &str) -> Self {
        Meta {
            uptime: format_elapsed(started),
            info: info.to_string(),
            version: format!("v{version}"),
        }
    }
}
