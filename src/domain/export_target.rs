use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Output channel or document format requested for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    Email,
    Sms,
    Docx,
    Pdf,
    Gdoc,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 5] = [
        ExportTarget::Email,
        ExportTarget::Sms,
        ExportTarget::Docx,
        ExportTarget::Pdf,
        ExportTarget::Gdoc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTarget::Email => "email",
            ExportTarget::Sms => "sms",
            ExportTarget::Docx => "docx",
            ExportTarget::Pdf => "pdf",
            ExportTarget::Gdoc => "gdoc",
        }
    }
}

impl FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| format!("Invalid export target: {}", s))
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
