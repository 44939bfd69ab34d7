//! Intent handlers: each one calls the remote service, applies the result to
//! the store in one synchronous step, and re-renders the affected regions.
//!
//! The state lock is never held across a network await, so intents
//! interleave only at the remote boundary. Select responses carry a
//! staleness token and are dropped when a newer select or a remove of the
//! same id happened while they were in flight.

use std::sync::Arc;

use futures::future::join;
use shared::{
    domain::{Entry, EntryId},
    error::RemoteError,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    form::{self, FormError, FormInput},
    presenter::{self, FormMessage, RenderModel, ViewState, CREATE_SUCCESS_MESSAGE},
    remote::RemoteClient,
    surface::DisplaySurface,
};

const CREATE_IN_PROGRESS_MESSAGE: &str = "A submission is already in progress.";

/// How an intent ended, for callers that want more than the rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// A superseded select response was dropped.
    Discarded,
    /// The same action is already pending for this target.
    Busy,
    Rejected(FormError),
    Failed(RemoteError),
}

#[derive(Debug, Default)]
struct ControllerState {
    view: ViewState,
    select_token: u64,
    pending_select: Option<(u64, EntryId)>,
    creating: bool,
}

impl ControllerState {
    /// Makes any in-flight select for `id` stale.
    fn invalidate_select_for(&mut self, id: &EntryId) {
        let pending = matches!(&self.pending_select, Some((_, pending_id)) if pending_id == id);
        if pending {
            self.select_token += 1;
            self.pending_select = None;
        }
    }

    /// Drops every trace of `id` from the selection side. Used once the
    /// record is known to be gone from the service.
    fn forget_entry(&mut self, id: &EntryId) {
        self.invalidate_select_for(id);
        if self.view.store.clear_selection_if_matches(id) {
            self.view.detail_error = None;
        }
    }

    fn apply_roster_reload(&mut self, reload: Result<Vec<Entry>, RemoteError>) {
        match reload {
            Ok(entries) => {
                self.view.store.replace_roster(entries);
                self.view.roster_error = None;
            }
            Err(err) => {
                warn!(error = %err, "roster reload failed");
                self.view.roster_error = Some(format!("Could not refresh the roster: {err}"));
            }
        }
    }
}

pub struct Controller {
    remote: Arc<dyn RemoteClient>,
    surface: Arc<dyn DisplaySurface>,
    inner: Mutex<ControllerState>,
}

impl Controller {
    pub fn new(remote: Arc<dyn RemoteClient>, surface: Arc<dyn DisplaySurface>) -> Self {
        Self {
            remote,
            surface,
            inner: Mutex::new(ControllerState::default()),
        }
    }

    /// Loads roster and teams concurrently and renders every region. A failed
    /// roster load degrades the roster region and alerts; team failures are
    /// absorbed by the remote client.
    pub async fn initialize(&self) -> Outcome {
        let (roster, teams) = join(
            self.remote.list_entries(),
            self.remote.list_teams_or_empty(),
        )
        .await;

        let mut inner = self.inner.lock().await;
        let outcome = match roster {
            Ok(entries) => {
                info!(entries = entries.len(), teams = teams.len(), "roster loaded");
                inner.view.store.replace_roster(entries);
                inner.view.store.replace_teams(teams);
                inner.view.roster_error = None;
                Outcome::Applied
            }
            Err(err) => {
                error!(error = %err, "initial roster load failed");
                inner.view.roster_error = Some(format!("Could not load the roster: {err}"));
                self.surface.alert("Could not load the roster. Please try again later.");
                Outcome::Failed(err)
            }
        };
        self.surface.render_all(&presenter::render(&inner.view));
        outcome
    }

    /// Re-fetches the full roster and re-renders it.
    pub async fn refresh(&self) -> Outcome {
        let reload = self.remote.list_entries().await;
        let mut inner = self.inner.lock().await;
        let outcome = match &reload {
            Ok(_) => Outcome::Applied,
            Err(err) => Outcome::Failed(err.clone()),
        };
        inner.apply_roster_reload(reload);
        self.surface
            .render_roster(&presenter::roster_view(&inner.view));
        outcome
    }

    pub async fn on_select(&self, id: EntryId) -> Outcome {
        let token = {
            let mut inner = self.inner.lock().await;
            inner.select_token += 1;
            let token = inner.select_token;
            inner.pending_select = Some((token, id.clone()));
            token
        };
        debug!(entry_id = %id, token, "select requested");

        let result = self.remote.get_entry(id.clone()).await;

        let mut inner = self.inner.lock().await;
        if inner.select_token != token {
            debug!(entry_id = %id, token, current = inner.select_token, "discarding stale select response");
            return Outcome::Discarded;
        }
        inner.pending_select = None;

        let outcome = match result {
            Ok(entry) => {
                if entry.id != id {
                    warn!(requested = %id, received = %entry.id, "service returned a different record");
                }
                inner.view.store.select(Some(entry));
                inner.view.detail_error = None;
                Outcome::Applied
            }
            Err(err) => {
                warn!(entry_id = %id, error = %err, "failed to load entry details");
                inner.view.detail_error = Some(format!("Could not load puppy #{id}."));
                Outcome::Failed(err)
            }
        };
        self.surface
            .render_detail(&presenter::detail_view(&inner.view));
        outcome
    }

    pub async fn on_create_submit(&self, input: FormInput) -> Outcome {
        let draft = {
            let mut inner = self.inner.lock().await;
            if inner.creating {
                debug!("create ignored while another submission is pending");
                inner.view.form.message =
                    Some(FormMessage::Error(CREATE_IN_PROGRESS_MESSAGE.to_string()));
                self.surface.render_form(&presenter::form_view(&inner.view));
                return Outcome::Busy;
            }

            let validated = form::validate(&input);
            inner.view.form.input = input;
            match validated {
                Ok(draft) => {
                    inner.creating = true;
                    inner.view.form.submitting = true;
                    inner.view.form.message = None;
                    self.surface.render_form(&presenter::form_view(&inner.view));
                    draft
                }
                Err(err) => {
                    inner.view.form.message = Some(FormMessage::Error(err.to_string()));
                    self.surface.render_form(&presenter::form_view(&inner.view));
                    return Outcome::Rejected(err);
                }
            }
        };

        if let Err(err) = self.remote.create_entry(&draft).await {
            warn!(error = %err, "create failed");
            let mut inner = self.inner.lock().await;
            inner.creating = false;
            inner.view.form.submitting = false;
            inner.view.form.message =
                Some(FormMessage::Error(format!("Could not add puppy: {err}")));
            self.surface.render_form(&presenter::form_view(&inner.view));
            return Outcome::Failed(err);
        }
        info!(name = %draft.name, "entry created");

        let reload = self.remote.list_entries().await;

        let mut inner = self.inner.lock().await;
        inner.creating = false;
        inner.view.form.submitting = false;
        inner.view.form.input = FormInput::default();
        inner.view.form.message = Some(FormMessage::Success(CREATE_SUCCESS_MESSAGE.to_string()));
        inner.apply_roster_reload(reload);
        self.surface
            .render_roster(&presenter::roster_view(&inner.view));
        self.surface.render_form(&presenter::form_view(&inner.view));
        Outcome::Applied
    }

    pub async fn on_remove(&self, id: EntryId) -> Outcome {
        {
            let mut inner = self.inner.lock().await;
            if !inner.view.removing.insert(id.clone()) {
                debug!(entry_id = %id, "remove already in flight");
                return Outcome::Busy;
            }
            self.surface
                .render_detail(&presenter::detail_view(&inner.view));
        }

        let outcome = match self.remote.delete_entry(id.clone()).await {
            Ok(()) => {
                info!(entry_id = %id, "entry removed");
                Outcome::Applied
            }
            Err(err) if err.is_not_found() => {
                // Someone else removed it; reconcile as if our delete had won.
                warn!(entry_id = %id, error = %err, "entry already gone on the service");
                self.surface
                    .alert(&format!("Puppy #{id} no longer exists; the roster was refreshed."));
                Outcome::Failed(err)
            }
            Err(err) => {
                error!(entry_id = %id, error = %err, "remove failed");
                let mut inner = self.inner.lock().await;
                inner.view.removing.remove(&id);
                self.surface
                    .alert(&format!("Could not remove puppy #{id}: {err}"));
                self.surface
                    .render_detail(&presenter::detail_view(&inner.view));
                return Outcome::Failed(err);
            }
        };

        self.inner.lock().await.forget_entry(&id);

        let reload = self.remote.list_entries().await;

        let mut inner = self.inner.lock().await;
        inner.view.removing.remove(&id);
        inner.apply_roster_reload(reload);
        self.surface
            .render_roster(&presenter::roster_view(&inner.view));
        self.surface
            .render_detail(&presenter::detail_view(&inner.view));
        outcome
    }

    pub async fn render_model(&self) -> RenderModel {
        presenter::render(&self.inner.lock().await.view)
    }

    pub async fn selection(&self) -> Option<Entry> {
        self.inner.lock().await.view.store.selection().cloned()
    }

    pub async fn roster(&self) -> Vec<Entry> {
        self.inner.lock().await.view.store.roster_list().to_vec()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
