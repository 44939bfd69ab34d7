//! Pure mapping from a `ViewState` snapshot to render models. The same
//! snapshot always yields the same model.

use std::collections::HashSet;

use shared::domain::{Entry, EntryId, TeamId};

use crate::{form::FormInput, store::Store};

pub const EMPTY_ROSTER_MESSAGE: &str = "No puppies found.";
pub const NO_SELECTION_MESSAGE: &str = "Select a puppy to see details.";
pub const CREATE_SUCCESS_MESSAGE: &str = "Puppy added!";
pub const UNKNOWN_VALUE: &str = "Unknown";
pub const MISSING_VALUE: &str = "—";
pub const NO_TEAM_OPTION_LABEL: &str = "Unassigned";
pub const REMOVE_ACTION_LABEL: &str = "Remove from roster";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: FormInput,
    pub message: Option<FormMessage>,
    pub submitting: bool,
}

/// Everything the presenter reads: the store plus transient request status
/// owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub store: Store,
    pub roster_error: Option<String>,
    pub detail_error: Option<String>,
    pub removing: HashSet<EntryId>,
    pub form: FormState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Placeholder,
}

impl ImageRef {
    fn for_entry(entry: &Entry) -> Self {
        match entry.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Self::Url(url.to_string()),
            _ => Self::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: EntryId,
    pub display_name: String,
    pub image: ImageRef,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
    Empty { message: String },
    Cards(Vec<CardView>),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub id: EntryId,
    pub heading: String,
    pub image: ImageRef,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub team: String,
    pub remove: ActionView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Empty { message: String },
    Error { message: String },
    Entry(DetailCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    pub value: Option<TeamId>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOptionsView {
    pub options: Vec<TeamOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub breed: String,
    pub team_id: String,
    pub message: Option<FormMessage>,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub roster: RosterView,
    pub detail: DetailView,
    pub team_options: TeamOptionsView,
    pub form: FormView,
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn roster_view(state: &ViewState) -> RosterView {
    if let Some(message) = &state.roster_error {
        return RosterView::Error {
            message: message.clone(),
        };
    }

    let roster = state.store.roster_list();
    if roster.is_empty() {
        return RosterView::Empty {
            message: EMPTY_ROSTER_MESSAGE.to_string(),
        };
    }

    RosterView::Cards(
        roster
            .iter()
            .map(|entry| CardView {
                id: entry.id.clone(),
                display_name: text_or(entry.name.as_deref(), MISSING_VALUE),
                image: ImageRef::for_entry(entry),
                meta: format!("ID {}", entry.id),
            })
            .collect(),
    )
}

pub fn detail_view(state: &ViewState) -> DetailView {
    if let Some(message) = &state.detail_error {
        return DetailView::Error {
            message: message.clone(),
        };
    }

    let Some(entry) = state.store.selection() else {
        return DetailView::Empty {
            message: NO_SELECTION_MESSAGE.to_string(),
        };
    };

    let name = text_or(entry.name.as_deref(), MISSING_VALUE);
    DetailCard {
        id: entry.id.clone(),
        heading: format!("{name} #{}", entry.id),
        image: ImageRef::for_entry(entry),
        breed: text_or(entry.breed.as_deref(), UNKNOWN_VALUE),
        status: text_or(entry.status.as_deref(), UNKNOWN_VALUE),
        team: state.store.resolve_team_name(entry),
        name,
        remove: ActionView {
            label: REMOVE_ACTION_LABEL.to_string(),
            enabled: !state.removing.contains(&entry.id),
        },
    }
    .into()
}

impl From<DetailCard> for DetailView {
    fn from(card: DetailCard) -> Self {
        Self::Entry(card)
    }
}

pub fn team_options_view(state: &ViewState) -> TeamOptionsView {
    let sentinel = TeamOption {
        value: None,
        label: NO_TEAM_OPTION_LABEL.to_string(),
    };
    let options = std::iter::once(sentinel)
        .chain(state.store.teams().iter().map(|team| TeamOption {
            value: Some(team.id.clone()),
            label: text_or(Some(team.name.as_str()), &format!("Team #{}", team.id)),
        }))
        .collect();
    TeamOptionsView { options }
}

pub fn form_view(state: &ViewState) -> FormView {
    let form = &state.form;
    FormView {
        name: form.input.name.clone(),
        breed: form.input.breed.clone(),
        team_id: form.input.team_id.clone(),
        message: form.message.clone(),
        submit_enabled: !form.submitting,
    }
}

pub fn render(state: &ViewState) -> RenderModel {
    RenderModel {
        roster: roster_view(state),
        detail: detail_view(state),
        team_options: team_options_view(state),
        form: form_view(state),
    }
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
