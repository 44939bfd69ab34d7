use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;
use serde_json::Value;
use shared::{
    domain::{Entry, EntryDraft, EntryId, Team},
    error::{RemoteError, RemoteOperation},
    protocol::{extract_list, extract_record, ListPayload, PLAYERS_KEY, PLAYER_KEY, TEAMS_KEY},
};
use tracing::{debug, warn};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// The collection service as seen by the controller. Each call is exactly
/// one network round trip.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<Entry>, RemoteError>;

    async fn get_entry(&self, id: EntryId) -> Result<Entry, RemoteError>;

    /// Returns the created record when the service echoes one back. Callers
    /// reload the roster instead of trusting it.
    async fn create_entry(&self, draft: &EntryDraft) -> Result<Option<Entry>, RemoteError>;

    async fn delete_entry(&self, id: EntryId) -> Result<(), RemoteError>;

    async fn list_teams(&self) -> Result<Vec<Team>, RemoteError>;

    /// Team names are cosmetic, so a failed team load degrades to no teams.
    async fn list_teams_or_empty(&self) -> Vec<Team> {
        match self.list_teams().await {
            Ok(teams) => teams,
            Err(err) => {
                warn!(operation = %err.operation, error = %err, "team list unavailable");
                Vec::new()
            }
        }
    }
}

pub struct HttpRemoteClient {
    http: Client,
    base_url: Url,
}

impl HttpRemoteClient {
    /// `base_url` is the deployment-scoped collection root, e.g.
    /// `https://host/api/<cohort>`.
    pub fn new(base_url: Url) -> reqwest::Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, mut base_url: Url) -> Self {
        let trimmed = base_url.path().trim_end_matches('/').to_string();
        base_url.set_path(&trimmed);
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends percent-encoded path segments, so text ids cannot escape
    /// their segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(
        &self,
        operation: RemoteOperation,
        request: RequestBuilder,
    ) -> Result<Value, RemoteError> {
        let res = request
            .send()
            .await
            .map_err(|err| RemoteError::transport(operation, err.to_string()))?;
        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|err| RemoteError::transport(operation, err.to_string()))?;

        if !status.is_success() {
            let snippet: String = String::from_utf8_lossy(&body)
                .chars()
                .take(ERROR_BODY_SNIPPET_LEN)
                .collect();
            if status == StatusCode::NOT_FOUND
                && matches!(
                    operation,
                    RemoteOperation::GetEntry | RemoteOperation::DeleteEntry
                )
            {
                return Err(RemoteError::not_found(
                    operation,
                    Some(status.as_u16()),
                    format!("record not found: {snippet}"),
                ));
            }
            return Err(RemoteError::service(
                operation,
                status.as_u16(),
                format!("status {}: {snippet}", status.as_u16()),
            ));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(%operation, error = %err, "unparseable response body treated as empty");
                Ok(Value::Null)
            }
        }
    }
}

fn log_skipped<T>(operation: RemoteOperation, payload: &ListPayload<T>) {
    if payload.skipped > 0 {
        warn!(%operation, skipped = payload.skipped, "dropped malformed list items");
    }
}

#[async_trait]
impl RemoteClient for HttpRemoteClient {
    async fn list_entries(&self) -> Result<Vec<Entry>, RemoteError> {
        let operation = RemoteOperation::ListEntries;
        let body = self
            .send(operation, self.http.get(self.endpoint(&["players"])))
            .await?;
        let payload = extract_list::<Entry>(&body, PLAYERS_KEY);
        log_skipped(operation, &payload);
        debug!(%operation, count = payload.items.len(), "fetched roster");
        Ok(payload.items)
    }

    async fn get_entry(&self, id: EntryId) -> Result<Entry, RemoteError> {
        let operation = RemoteOperation::GetEntry;
        let segment = id.to_string();
        let body = self
            .send(
                operation,
                self.http.get(self.endpoint(&["players", segment.as_str()])),
            )
            .await?;
        extract_record::<Entry>(&body, PLAYER_KEY).ok_or_else(|| {
            RemoteError::not_found(operation, None, format!("no player #{id} in response"))
        })
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<Option<Entry>, RemoteError> {
        let operation = RemoteOperation::CreateEntry;
        let body = self
            .send(operation, self.http.post(self.endpoint(&["players"])).json(draft))
            .await?;
        Ok(extract_record::<Entry>(&body, PLAYER_KEY))
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), RemoteError> {
        let operation = RemoteOperation::DeleteEntry;
        let segment = id.to_string();
        self.send(
            operation,
            self.http.delete(self.endpoint(&["players", segment.as_str()])),
        )
        .await?;
        Ok(())
    }

    async fn list_teams(&self) -> Result<Vec<Team>, RemoteError> {
        let operation = RemoteOperation::ListTeams;
        let body = self
            .send(operation, self.http.get(self.endpoint(&["teams"])))
            .await?;
        let payload = extract_list::<Team>(&body, TEAMS_KEY);
        log_skipped(operation, &payload);
        Ok(payload.items)
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
