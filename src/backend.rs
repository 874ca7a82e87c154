use crate::filters::FilterCriteria;
use crate::models::{ChartPayload, Project, ProjectListResponse, ProjectUser, UserListResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{env, time::Duration};
use thiserror::Error;

/// HTTP client for the time tracking backend that aggregates hour
/// entries. This service never aggregates anything itself; it forwards
/// filter criteria and relays the backend's answers.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unavailable")]
    Unavailable,

    #[error("backend request timed out")]
    Timeout,

    #[error("backend request failed: {0}")]
    Request(reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// `GET /project_hour_entries?project=&start=&end=&users=&users=...`
    pub async fn project_hours(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<ChartPayload, BackendError> {
        self.get_json("/project_hour_entries", &hours_query(criteria))
            .await
    }

    /// `GET /get_users_for_project?project=`
    pub async fn project_users(&self, project: &str) -> Result<Vec<ProjectUser>, BackendError> {
        let response: UserListResponse = self
            .get_json("/get_users_for_project", &[("project", project.to_string())])
            .await?;
        Ok(response.users)
    }

    /// `GET /projects`
    pub async fn projects(&self) -> Result<Vec<Project>, BackendError> {
        let response: ProjectListResponse = self.get_json("/projects", &[]).await?;
        Ok(response.projects)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        response.json().await.map_err(classify)
    }
}

/// Query pairs for the hours endpoint. `users` is multi-valued, one
/// pair per selected user; with no selection the parameter is absent
/// and the request still goes out.
pub fn hours_query(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("project", criteria.project.clone()),
        ("start", criteria.start.clone()),
        ("end", criteria.end.clone()),
    ];
    for user in &criteria.users {
        query.push(("users", user.clone()));
    }
    query
}

fn classify(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else if err.is_connect() {
        BackendError::Unavailable
    } else {
        BackendError::Request(err)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

pub fn resolve_backend_url() -> String {
    env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:9000".to_string())
}

pub fn resolve_backend_timeout() -> Duration {
    let millis = env::var("BACKEND_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(users: &[&str]) -> FilterCriteria {
        FilterCriteria {
            project: "12".into(),
            start: "2023-01-01".into(),
            end: "2023-01-07".into(),
            users: users.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn hours_query_repeats_users() {
        let query = hours_query(&criteria(&["7", "8"]));
        assert_eq!(
            query,
            vec![
                ("project", "12".to_string()),
                ("start", "2023-01-01".to_string()),
                ("end", "2023-01-07".to_string()),
                ("users", "7".to_string()),
                ("users", "8".to_string()),
            ]
        );
    }

    #[test]
    fn hours_query_without_users_still_carries_filters() {
        let query = hours_query(&criteria(&[]));
        assert_eq!(query.len(), 3);
        assert!(query.iter().all(|(key, _)| *key != "users"));
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        assert_eq!(
            normalize_base_url("http://backend:9000//".into()),
            "http://backend:9000"
        );
        assert_eq!(
            normalize_base_url("http://backend:9000".into()),
            "http://backend:9000"
        );
    }
}
