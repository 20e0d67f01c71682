//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Award, Discussion, MergeRequestSummary, Note, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Page size for list endpoints (GitLab maximum)
const PER_PAGE: &str = "100";

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiUser {
    id: Option<u64>,
    username: Option<String>,
}

#[derive(Deserialize)]
struct ApiMergeRequest {
    iid: u64,
    title: String,
    web_url: String,
    description: Option<String>,
    author: Option<ApiUser>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    work_in_progress: bool,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ApiAward {
    name: String,
    user: Option<ApiUser>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct ApiDiscussion {
    id: String,
    #[serde(default)]
    notes: Vec<ApiNote>,
}

#[derive(Deserialize)]
struct ApiNote {
    id: u64,
    author: Option<ApiUser>,
    #[serde(default)]
    resolvable: bool,
    resolved: Option<bool>,
}

/// Error body GitLab sends with failed requests
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl ApiUser {
    fn validate(self, context: &str) -> Result<User> {
        let id = self
            .id
            .ok_or_else(|| Error::InvalidSnapshot(format!("{context}: user has no id")))?;
        let username = self
            .username
            .ok_or_else(|| Error::InvalidSnapshot(format!("{context}: user {id} has no username")))?;
        Ok(User { id, username })
    }
}

fn required_user(user: Option<ApiUser>, context: &str) -> Result<User> {
    user.ok_or_else(|| Error::InvalidSnapshot(format!("{context}: missing author")))?
        .validate(context)
}

impl TryFrom<ApiMergeRequest> for MergeRequestSummary {
    type Error = Error;

    fn try_from(mr: ApiMergeRequest) -> Result<Self> {
        let context = format!("MR !{}", mr.iid);
        Ok(Self {
            iid: mr.iid,
            author: required_user(mr.author, &context)?,
            title: mr.title,
            web_url: mr.web_url,
            description: mr.description.unwrap_or_default(),
            // GitLab renamed WIP to draft; older instances only send the former
            work_in_progress: mr.draft || mr.work_in_progress,
            created_at: mr.created_at,
        })
    }
}

impl TryFrom<ApiAward> for Award {
    type Error = Error;

    fn try_from(award: ApiAward) -> Result<Self> {
        let context = format!("award '{}'", award.name);
        Ok(Self {
            user: required_user(award.user, &context)?,
            name: award.name,
            created_at: award.created_at,
        })
    }
}

impl TryFrom<ApiDiscussion> for Discussion {
    type Error = Error;

    fn try_from(discussion: ApiDiscussion) -> Result<Self> {
        let notes = discussion
            .notes
            .into_iter()
            .map(|note| {
                let context = format!("note {} in discussion {}", note.id, discussion.id);
                Ok(Note {
                    author_id: required_user(note.author, &context)?.id,
                    resolvable: note.resolvable,
                    resolved: note.resolved.unwrap_or(false),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: discussion.id,
            notes,
        })
    }
}

/// Normalize a configured host into a base URL without trailing slash.
///
/// A bare host name gets `https://`.
pub fn normalize_host(host: &str) -> Result<String> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::Config("GitLab host is empty".to_string()));
    }

    let with_scheme = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| Error::Config(format!("invalid GitLab host '{host}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "invalid GitLab host '{host}': unsupported scheme {}",
            url.scheme()
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

impl GitLabService {
    /// Create a new GitLab service for `host` (e.g. `https://gitlab.com`)
    pub fn new(token: String, host: &str) -> Result<Self> {
        let base_url = normalize_host(host)?;

        let client = Client::builder()
            .user_agent(concat!("gitlab-mr/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    fn mr_path(project: &str, mr_iid: u64, tail: &str) -> String {
        format!(
            "/projects/{}/merge_requests/{}/{}",
            urlencoding::encode(project),
            mr_iid,
            tail
        )
    }

    /// Turn a response into `T`, mapping 401 to [`Error::AuthExpired`]
    async fn handle_response<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| Error::GitLabApi(format!("{endpoint}: unexpected response: {e}")));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::AuthExpired);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string));

        let message = match (status, detail) {
            (StatusCode::NOT_FOUND, _) => "not found".to_string(),
            (StatusCode::FORBIDDEN, _) => "access denied".to_string(),
            (StatusCode::TOO_MANY_REQUESTS, _) => "rate limit exceeded".to_string(),
            (_, Some(detail)) => detail,
            _ => body,
        };

        Err(Error::GitLabApi(format!(
            "{endpoint} ({}): {message}",
            status.as_u16()
        )))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self
            .client
            .get(self.api_url(endpoint))
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;
        Self::handle_response(response, endpoint).await
    }

    /// Fetch every page of a list endpoint, following `x-next-page`
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = self.api_url(endpoint);
        let mut items = Vec::new();
        let mut page = "1".to_string();

        loop {
            let response = self
                .client
                .get(&url)
                .header("PRIVATE-TOKEN", &self.token)
                .query(query)
                .query(&[("page", page.as_str()), ("per_page", PER_PAGE)])
                .send()
                .await?;

            // Empty on the last page
            let next_page = response
                .headers()
                .get("x-next-page")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string);

            let batch: Vec<T> = Self::handle_response(response, endpoint).await?;
            items.extend(batch);

            match next_page {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn current_user(&self) -> Result<User> {
        debug!("fetching current user");
        let user: ApiUser = self.get("/user").await?;
        let user = user.validate("current user")?;
        debug!(user_id = user.id, username = %user.username, "authenticated");
        Ok(user)
    }

    async fn list_open_merge_requests(&self, project: &str) -> Result<Vec<MergeRequestSummary>> {
        debug!(project, "listing open MRs");
        let endpoint = format!("/projects/{}/merge_requests", urlencoding::encode(project));

        let mrs: Vec<ApiMergeRequest> = self
            .get_all_pages(&endpoint, &[("state", "opened")])
            .await?;

        let summaries = mrs
            .into_iter()
            .map(MergeRequestSummary::try_from)
            .collect::<Result<Vec<_>>>()?;
        debug!(project, count = summaries.len(), "listed open MRs");
        Ok(summaries)
    }

    async fn list_awards(&self, project: &str, mr_iid: u64) -> Result<Vec<Award>> {
        debug!(project, mr_iid, "listing MR awards");
        let endpoint = Self::mr_path(project, mr_iid, "award_emoji");

        let awards: Vec<ApiAward> = self.get_all_pages(&endpoint, &[]).await?;
        let awards = awards
            .into_iter()
            .map(Award::try_from)
            .collect::<Result<Vec<_>>>()?;
        debug!(project, mr_iid, count = awards.len(), "listed MR awards");
        Ok(awards)
    }

    async fn list_discussions(&self, project: &str, mr_iid: u64) -> Result<Vec<Discussion>> {
        debug!(project, mr_iid, "listing MR discussions");
        let endpoint = Self::mr_path(project, mr_iid, "discussions");

        let discussions: Vec<ApiDiscussion> = self.get_all_pages(&endpoint, &[]).await?;
        let discussions = discussions
            .into_iter()
            .map(Discussion::try_from)
            .collect::<Result<Vec<_>>>()?;
        debug!(
            project,
            mr_iid,
            count = discussions.len(),
            "listed MR discussions"
        );
        Ok(discussions)
    }
}
