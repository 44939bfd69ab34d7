use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// Record ids travel as integers or strings depending on the service. A
// string holding a canonical integer is folded into `Int`, so `5` and `"5"`
// name the same record.
macro_rules! record_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(untagged)]
        pub enum $name {
            Int(i64),
            Text(String),
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                match RawId::deserialize(deserializer)? {
                    RawId::Int(value) => Ok(Self::Int(value)),
                    RawId::Text(text) if text.trim().is_empty() => {
                        Err(serde::de::Error::custom("empty id"))
                    }
                    RawId::Text(text) => Ok(Self::from(text.as_str())),
                }
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self::Int(value)
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                match canonical_int(text) {
                    Some(value) => Self::Int(value),
                    None => Self::Text(text.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Int(value) => write!(f, "{value}"),
                    Self::Text(text) => f.write_str(text),
                }
            }
        }
    };
}

record_id!(EntryId);
record_id!(TeamId);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

/// `"42"` folds to 42; `"042"` or `" 42"` stay text since they would not
/// round-trip.
fn canonical_int(text: &str) -> Option<i64> {
    text.parse::<i64>()
        .ok()
        .filter(|value| value.to_string() == text)
}

/// Accepts any JSON scalar for free-text fields such as `status`, so that a
/// numeric `0` stays a present value instead of failing the whole record.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        Some(_) => None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
}

/// Partial team record some endpoints embed inside an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmbeddedTeam {
    #[serde(default)]
    pub id: Option<TeamId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub team: Option<EmbeddedTeam>,
}

impl Entry {
    pub fn new(id: EntryId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            breed: Some(breed.into()),
            status: None,
            image_url: None,
            team_id: None,
            team: None,
        }
    }

    pub fn with_team_id(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_team(mut self, team: EmbeddedTeam) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Name of the embedded team, when the service sent one with a name.
    pub fn embedded_team_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|team| team.name.as_deref())
    }
}

/// Validated payload for `POST /players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub name: String,
    pub breed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}
