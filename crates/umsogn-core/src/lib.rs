//! Core domain types for the umsögn EIA feedback tracker.
//!
//! This crate contains the entity model for Environmental Impact Assessment
//! public-comment tracking: projects, stakeholders, comments, mitigation
//! strategies, timeline events, and public meetings, plus the pure
//! aggregation logic (metrics, topic grouping) that derives views from them.

pub mod comment;
pub mod enums;
pub mod idgen;
pub mod meeting;
pub mod metrics;
pub mod mitigation;
pub mod project;
pub mod seed;
pub mod stakeholder;
pub mod timeline;
pub mod topics;
