//! Shared blog domain primitives.
//!
//! This crate owns the request/response contracts, content validation, page
//! rendering, and object-store key construction for the blog publisher. It
//! intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod render;
pub mod storage_keys;
pub mod validator;
