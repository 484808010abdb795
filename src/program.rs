use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who may discover and join a program on the marketplace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    InviteOnly,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::InviteOnly => "invite_only",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "invite_only" => Ok(Self::InviteOnly),
            "private" => Ok(Self::Private),
            _ => Err(format!("Unknown visibility: {}", s)),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Private
    }
}

/// Program author as shown on cards and feed posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    /// Display emoji chosen by the author.
    #[serde(default)]
    pub emoji: String,
}

/// Read-only snapshot of a shareable training program, as received from
/// the marketplace gateway. Counts and ratings are server-authoritative;
/// the client never mutates them except by re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weeks: u32,
    #[serde(default)]
    pub days_per_week: u32,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub subscriber_count: u32,
    /// Absent or zero means "unrated" (zero is a sentinel, not a score).
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub is_builtin: bool,
    #[serde(default)]
    pub author: Author,
    /// Opaque program content, present when the gateway allows the client
    /// to keep a local copy after joining.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_data: Option<serde_json::Value>,
}

impl ProgramSummary {
    /// Rating shown on cards, or None when the program is unrated.
    pub fn display_rating(&self) -> Option<f64> {
        match self.avg_rating {
            Some(r) if r > 0.0 => Some(r),
            _ => None,
        }
    }
}

/// Local copy of a joined program, persisted in the cache database.
/// Built from the summary's `program_data` blob at join time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomProgramRecord {
    /// Local record id (uuid), distinct from the marketplace id.
    pub id: String,
    pub name: String,
    /// Marketplace linkage — the cache is keyed on this for idempotency.
    pub marketplace_id: i64,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl CustomProgramRecord {
    /// Combine a program summary and its embedded blob into a cache record.
    /// Returns None when the summary carries no program data.
    pub fn from_summary(summary: &ProgramSummary) -> Option<Self> {
        let data = summary.program_data.clone()?;
        Some(Self {
            id: crate::id_gen::program_record_id(),
            name: summary.name.clone(),
            marketplace_id: summary.id,
            data,
            created_at: crate::time_utils::now(),
        })
    }
}
