//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use gitlab_mr::error::{Error, Result};
use gitlab_mr::platform::PlatformService;
use gitlab_mr::types::{Award, Discussion, MergeRequestSummary, User};
use std::collections::HashMap;
use std::sync::Mutex;

type MrKey = (String, u64);

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// to keep responses and call records easy to inspect.
///
/// Features:
/// - Configurable responses per project / MR
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    user: User,
    merge_requests: Mutex<HashMap<String, Vec<MergeRequestSummary>>>,
    awards: Mutex<HashMap<MrKey, Vec<Award>>>,
    discussions: Mutex<HashMap<MrKey, Vec<Discussion>>>,
    // Call tracking
    current_user_calls: Mutex<usize>,
    list_mr_calls: Mutex<Vec<String>>,
    list_awards_calls: Mutex<Vec<MrKey>>,
    list_discussions_calls: Mutex<Vec<MrKey>>,
    // Error injection
    reject_token: Mutex<bool>,
    error_on_project: Mutex<HashMap<String, String>>,
    error_on_discussions: Mutex<HashMap<MrKey, String>>,
}

impl MockPlatformService {
    /// Create a new mock authenticated as `user`
    pub fn new(user: User) -> Self {
        Self {
            user,
            merge_requests: Mutex::new(HashMap::new()),
            awards: Mutex::new(HashMap::new()),
            discussions: Mutex::new(HashMap::new()),
            current_user_calls: Mutex::new(0),
            list_mr_calls: Mutex::new(Vec::new()),
            list_awards_calls: Mutex::new(Vec::new()),
            list_discussions_calls: Mutex::new(Vec::new()),
            reject_token: Mutex::new(false),
            error_on_project: Mutex::new(HashMap::new()),
            error_on_discussions: Mutex::new(HashMap::new()),
        }
    }

    // === Response setup ===

    /// Set the open MRs of a project
    pub fn set_merge_requests(&self, project: &str, mrs: Vec<MergeRequestSummary>) {
        self.merge_requests
            .lock()
            .unwrap()
            .insert(project.to_string(), mrs);
    }

    /// Set the awards of an MR
    pub fn set_awards(&self, project: &str, mr_iid: u64, awards: Vec<Award>) {
        self.awards
            .lock()
            .unwrap()
            .insert((project.to_string(), mr_iid), awards);
    }

    /// Set the discussions of an MR
    pub fn set_discussions(&self, project: &str, mr_iid: u64, discussions: Vec<Discussion>) {
        self.discussions
            .lock()
            .unwrap()
            .insert((project.to_string(), mr_iid), discussions);
    }

    // === Error injection methods ===

    /// Make `current_user` fail as if the token were revoked
    pub fn reject_token(&self) {
        *self.reject_token.lock().unwrap() = true;
    }

    /// Make `list_open_merge_requests` fail for a project
    pub fn fail_project(&self, project: &str, msg: &str) {
        self.error_on_project
            .lock()
            .unwrap()
            .insert(project.to_string(), msg.to_string());
    }

    /// Make `list_discussions` fail for one MR
    pub fn fail_discussions(&self, project: &str, mr_iid: u64, msg: &str) {
        self.error_on_discussions
            .lock()
            .unwrap()
            .insert((project.to_string(), mr_iid), msg.to_string());
    }

    // === Call inspection ===

    pub fn current_user_calls(&self) -> usize {
        *self.current_user_calls.lock().unwrap()
    }

    pub fn list_mr_calls(&self) -> Vec<String> {
        self.list_mr_calls.lock().unwrap().clone()
    }

    pub fn list_awards_calls(&self) -> Vec<MrKey> {
        self.list_awards_calls.lock().unwrap().clone()
    }

    pub fn list_discussions_calls(&self) -> Vec<MrKey> {
        self.list_discussions_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn current_user(&self) -> Result<User> {
        *self.current_user_calls.lock().unwrap() += 1;
        if *self.reject_token.lock().unwrap() {
            return Err(Error::AuthExpired);
        }
        Ok(self.user.clone())
    }

    async fn list_open_merge_requests(&self, project: &str) -> Result<Vec<MergeRequestSummary>> {
        self.list_mr_calls.lock().unwrap().push(project.to_string());
        if let Some(msg) = self.error_on_project.lock().unwrap().get(project) {
            return Err(Error::GitLabApi(msg.clone()));
        }
        Ok(self
            .merge_requests
            .lock()
            .unwrap()
            .get(project)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_awards(&self, project: &str, mr_iid: u64) -> Result<Vec<Award>> {
        let key = (project.to_string(), mr_iid);
        self.list_awards_calls.lock().unwrap().push(key.clone());
        Ok(self
            .awards
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_discussions(&self, project: &str, mr_iid: u64) -> Result<Vec<Discussion>> {
        let key = (project.to_string(), mr_iid);
        self.list_discussions_calls.lock().unwrap().push(key.clone());
        if let Some(msg) = self.error_on_discussions.lock().unwrap().get(&key) {
            return Err(Error::GitLabApi(msg.clone()));
        }
        Ok(self
            .discussions
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
