//! gitlab-mr: triage open GitLab merge requests
//!
//! Classifies every open merge request of the configured projects into the
//! single next action the current user should take.
//!
//! - [`gather`] fetches immutable snapshots through a [`platform::PlatformService`]
//! - [`review`] decides an [`review::Action`] for each snapshot without I/O

pub mod auth;
pub mod config;
pub mod error;
pub mod gather;
pub mod platform;
pub mod review;
pub mod types;
