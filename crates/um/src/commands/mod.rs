//! Command handler modules for the `um` CLI.

pub mod comment;
pub mod comments;
pub mod init;
pub mod meetings;
pub mod metrics;
pub mod projects;
pub mod stakeholders;
pub mod timeline;
pub mod topics;
