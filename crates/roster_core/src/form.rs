//! Raw form input and its client-side validation into an `EntryDraft`.

use shared::domain::{EntryDraft, TeamId};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub breed: String,
    /// Empty means "no team"; otherwise must coerce to an integer id.
    pub team_id: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            team_id: String::new(),
        }
    }

    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required.")]
    MissingName,
    #[error("Breed is required.")]
    MissingBreed,
    #[error("Team must be a numeric id, got '{0}'.")]
    InvalidTeamId(String),
}

/// Trims every field and checks the required ones. Never touches the network.
pub fn validate(input: &FormInput) -> Result<EntryDraft, FormError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(FormError::MissingName);
    }
    let breed = input.breed.trim();
    if breed.is_empty() {
        return Err(FormError::MissingBreed);
    }

    let raw_team = input.team_id.trim();
    let team_id = if raw_team.is_empty() {
        None
    } else {
        let id = raw_team
            .parse::<i64>()
            .map_err(|_| FormError::InvalidTeamId(raw_team.to_string()))?;
        Some(TeamId::Int(id))
    };

    Ok(EntryDraft {
        name: name.to_string(),
        breed: breed.to_string(),
        team_id,
    })
}
