//! AWS-oriented adapters and handlers for blog CRUD and page publishing.
//!
//! This crate owns runtime integration details (the Lambda entry point and
//! the DynamoDB/S3 storage adapters) layered over the pure contracts and
//! rendering in `blog_core`.

pub mod adapters;
pub mod handlers;
