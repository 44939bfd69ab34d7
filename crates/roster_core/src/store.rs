//! Authoritative client-side snapshot of the roster, team lookup, and
//! selection. Every mutation is a single synchronous step, so a snapshot is
//! never observed half-updated.

use std::collections::HashMap;

use shared::domain::{Entry, EntryId, Team, TeamId};
use tracing::warn;

pub const UNASSIGNED_TEAM: &str = "Unassigned";

#[derive(Debug, Clone, Default)]
pub struct Store {
    roster: Vec<Entry>,
    roster_index: HashMap<EntryId, usize>,
    teams: Vec<Team>,
    team_index: HashMap<TeamId, usize>,
    selection: Option<Entry>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new roster, keeping the service's order. A repeated id keeps
    /// its first occurrence; returns how many duplicates were dropped.
    ///
    /// The selection is left alone: the detail view always shows the record
    /// fetched by id, never the list copy.
    pub fn replace_roster(&mut self, entries: Vec<Entry>) -> usize {
        let mut roster = Vec::with_capacity(entries.len());
        let mut roster_index = HashMap::with_capacity(entries.len());
        let mut duplicates = 0;

        for entry in entries {
            if roster_index.contains_key(&entry.id) {
                duplicates += 1;
                continue;
            }
            roster_index.insert(entry.id.clone(), roster.len());
            roster.push(entry);
        }

        if duplicates > 0 {
            warn!(duplicates, "roster contained repeated ids");
        }
        self.roster = roster;
        self.roster_index = roster_index;
        duplicates
    }

    pub fn replace_teams(&mut self, teams: Vec<Team>) {
        let mut kept = Vec::with_capacity(teams.len());
        let mut team_index = HashMap::with_capacity(teams.len());
        for team in teams {
            if team_index.contains_key(&team.id) {
                continue;
            }
            team_index.insert(team.id.clone(), kept.len());
            kept.push(team);
        }
        self.teams = kept;
        self.team_index = team_index;
    }

    pub fn select(&mut self, entry: Option<Entry>) {
        self.selection = entry;
    }

    /// Clears the selection only when it still points at `id`.
    pub fn clear_selection_if_matches(&mut self, id: &EntryId) -> bool {
        if self.selected_id() == Some(id) {
            self.selection = None;
            true
        } else {
            false
        }
    }

    pub fn roster_list(&self) -> &[Entry] {
        &self.roster
    }

    pub fn roster_entry(&self, id: &EntryId) -> Option<&Entry> {
        self.roster_index.get(id).map(|&idx| &self.roster[idx])
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.roster_index.contains_key(id)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.team_index.get(id).map(|&idx| &self.teams[idx])
    }

    pub fn selection(&self) -> Option<&Entry> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<&EntryId> {
        self.selection.as_ref().map(|entry| &entry.id)
    }

    /// Display name for an entry's team, in order of preference: embedded
    /// team name, looked-up name by `teamId`, `"Team #<id>"`, `"Unassigned"`.
    /// Blank names count as missing, so the result is never empty.
    pub fn resolve_team_name(&self, entry: &Entry) -> String {
        if let Some(name) = entry.embedded_team_name().filter(|name| !name.trim().is_empty()) {
            return name.to_string();
        }
        let Some(team_id) = entry.team_id.as_ref() else {
            return UNASSIGNED_TEAM.to_string();
        };
        match self.team(team_id) {
            Some(team) if !team.name.trim().is_empty() => team.name.clone(),
            _ => format!("Team #{team_id}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
