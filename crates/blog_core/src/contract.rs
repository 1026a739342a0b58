use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A blog row as stored in the table. Attribute names on the wire match the
/// table schema, which keys rows by `(BlogID, Author)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    #[serde(rename = "BlogID")]
    pub blog_id: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "SavedDate")]
    pub saved_date: String,
    #[serde(rename = "MetaDescription")]
    pub meta_description: String,
    #[serde(rename = "MetaKeywords")]
    pub meta_keywords: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GetBlogPayload {
    #[serde(rename = "blogID")]
    pub blog_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateBlogPayload {
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    #[serde(rename = "metaKeywords")]
    pub meta_keywords: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateBlogPayload {
    #[serde(rename = "blogID")]
    pub blog_id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    #[serde(rename = "metaKeywords")]
    pub meta_keywords: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeleteBlogPayload {
    #[serde(rename = "blogID")]
    pub blog_id: String,
    pub author: String,
}

/// Inbound request, dispatched on the `operation` field.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum BlogRequest {
    Get { blog: GetBlogPayload },
    List,
    Create { blog: CreateBlogPayload },
    Update { blog: UpdateBlogPayload },
    Delete { blog: DeleteBlogPayload },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

/// Uniform envelope returned by every operation. `data` is null unless the
/// operation produced a payload; `errorMessage` is null unless the status is
/// `Error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub status: Status,
    pub data: Value,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl Response {
    pub fn success(data: impl Serialize) -> Self {
        Self {
            status: Status::Success,
            data: serde_json::to_value(data).expect("envelope data should serialize"),
            error_message: None,
        }
    }

    pub fn empty_success() -> Self {
        Self {
            status: Status::Success,
            data: Value::Null,
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: Value::Null,
            error_message: Some(message.into()),
        }
    }

    /// Re-wraps `data` under a caller-supplied label, used for bulk results.
    pub fn format(self, label: &str) -> Self {
        Self {
            data: json!({ label: self.data }),
            ..self
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("envelope should serialize")
    }
}
