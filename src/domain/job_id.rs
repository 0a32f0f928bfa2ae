use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Opaque export job identifier: `job_<unix-millis>_<random suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "job_{}_{}",
            Utc::now().timestamp_millis(),
            &suffix[..SUFFIX_LEN]
        ))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
