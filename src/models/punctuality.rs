use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Punctuality {
    #[serde(rename = "On Time")]
    OnTime,
    Late,
}

impl Punctuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuality::OnTime => "On Time",
            Punctuality::Late => "Late",
        }
    }

    /// Parse a rendered status cell back; blank or unknown text gives `None`.
    pub fn from_label(s: &str) -> Option<Punctuality> {
        match s.trim() {
            "On Time" => Some(Punctuality::OnTime),
            "Late" => Some(Punctuality::Late),
            _ => None,
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, Punctuality::Late)
    }

    /// Blank when no status could be computed.
    pub fn label(status: Option<Punctuality>) -> &'static str {
        status.map(|s| s.as_str()).unwrap_or("")
    }
}
