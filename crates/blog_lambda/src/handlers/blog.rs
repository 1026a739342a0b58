use blog_core::contract::{
    BlogPost, BlogRequest, CreateBlogPayload, DeleteBlogPayload, GetBlogPayload, Response,
    UpdateBlogPayload,
};
use blog_core::render::{render_index_page, render_post_page};
use blog_core::storage_keys::{post_object_key, INDEX_OBJECT_KEY};
use blog_core::validator::validate_content;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::adapters::object_store::PageStore;
use crate::adapters::table::PostStore;
use crate::adapters::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogHandlerConfig {
    pub bucket: String,
}

/// Parses the inbound event and dispatches to one of the five operations.
/// Every outcome, including a malformed payload, is reported as an envelope.
pub fn handle_blog_request(
    event: Value,
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) -> Response {
    let request = match serde_json::from_value::<BlogRequest>(event) {
        Ok(value) => value,
        Err(error) => return Response::error(format!("Malformed request: {error}")),
    };

    match request {
        BlogRequest::Get { blog } => get_blog(&blog, table),
        BlogRequest::List => get_all_blogs(table),
        BlogRequest::Create { blog } => save_new_blog(blog, config, table, pages),
        BlogRequest::Update { blog } => edit_blog(blog, config, table, pages),
        BlogRequest::Delete { blog } => delete_blog(&blog, config, table, pages),
    }
}

pub fn get_blog(payload: &GetBlogPayload, table: &impl PostStore) -> Response {
    let blog_id = payload.blog_id.trim();
    if blog_id.is_empty() {
        return Response::error("blogID must be provided");
    }

    let matches = match table.query_post(blog_id) {
        Ok(value) => value,
        Err(error) => {
            return Response::error(format!("Unable to get blog data: {}", error.code));
        }
    };

    match matches.into_iter().next() {
        Some(post) => Response::success(post),
        None => Response::error(format!("No blog found with id {blog_id}")),
    }
}

pub fn get_all_blogs(table: &impl PostStore) -> Response {
    match table.scan_posts() {
        Ok(posts) => Response::success(posts).format("All Blogs"),
        Err(error) => Response::error(format!("Unable to get blog data: {}", error.code)),
    }
}

pub fn save_new_blog(
    payload: CreateBlogPayload,
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) -> Response {
    if !validate_content(&payload.content) {
        return Response::error("Invalid blog content");
    }

    let post = BlogPost {
        blog_id: Uuid::new_v4().to_string(),
        author: payload.author,
        title: payload.title,
        content: payload.content,
        saved_date: chrono::Utc::now().to_rfc3339(),
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
    };

    if let Err(error) = table.put_post(&post) {
        return Response::error(format!("Unable to save new blog: {}", error.code));
    }

    log_blog_info(
        "blog_created",
        json!({
            "blog_id": post.blog_id.clone(),
            "author": post.author.clone(),
        }),
    );
    publish_post_and_index(&post, config, table, pages);
    Response::empty_success()
}

pub fn edit_blog(
    payload: UpdateBlogPayload,
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) -> Response {
    if !validate_content(&payload.content) {
        return Response::error("Invalid blog content");
    }

    let existing = match table.query_post(&payload.blog_id) {
        Ok(value) => value,
        Err(error) => {
            return Response::error(format!("Unable to save edited blog: {}", error.code));
        }
    };
    let Some(current) = existing.into_iter().next() else {
        return Response::error(format!("No blog found with id {}", payload.blog_id));
    };

    let post = BlogPost {
        blog_id: payload.blog_id,
        author: payload.author,
        title: payload.title,
        content: payload.content,
        // Edits keep the creation date of the original row.
        saved_date: current.saved_date,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
    };

    if let Err(error) = table.update_post(&post) {
        return Response::error(format!("Unable to save edited blog: {}", error.code));
    }

    log_blog_info(
        "blog_updated",
        json!({
            "blog_id": post.blog_id.clone(),
            "author": post.author.clone(),
        }),
    );
    publish_post_and_index(&post, config, table, pages);
    Response::empty_success()
}

pub fn delete_blog(
    payload: &DeleteBlogPayload,
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) -> Response {
    if let Err(error) = table.delete_post(&payload.blog_id, &payload.author) {
        return Response::error(format!("Unable to delete blog: {}", error.code));
    }

    log_blog_info(
        "blog_deleted",
        json!({
            "blog_id": payload.blog_id.clone(),
            "author": payload.author.clone(),
        }),
    );
    if let Err(error) = pages.delete_page(&post_object_key(&payload.blog_id)) {
        log_publish_divergence("page_delete_failed", &payload.blog_id, &error);
    }
    if let Err(error) = publish_index(config, table, pages) {
        log_publish_divergence("index_publish_failed", &payload.blog_id, &error);
    }
    Response::empty_success()
}

/// Publishes the post's page and a rebuilt index after a successful table
/// write. Publish failures leave the table authoritative and are logged for
/// a later repair pass rather than rolled back.
fn publish_post_and_index(
    post: &BlogPost,
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) {
    if let Err(error) = pages.put_page(&post_object_key(&post.blog_id), &render_post_page(post)) {
        log_publish_divergence("page_publish_failed", &post.blog_id, &error);
    }
    if let Err(error) = publish_index(config, table, pages) {
        log_publish_divergence("index_publish_failed", &post.blog_id, &error);
    }
}

/// The index carries no incremental structure: every rebuild re-scans the
/// table and rewrites the whole page, so it is safe to run after any write.
fn publish_index(
    config: &BlogHandlerConfig,
    table: &impl PostStore,
    pages: &impl PageStore,
) -> Result<(), StoreError> {
    let posts = table.scan_posts()?;
    pages.put_page(INDEX_OBJECT_KEY, &render_index_page(&posts, &config.bucket))
}

fn log_blog_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "blog_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_blog_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "blog_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_publish_divergence(event: &str, blog_id: &str, error: &StoreError) {
    log_blog_error(
        event,
        json!({
            "blog_id": blog_id,
            "error": error.to_string(),
        }),
    );
}
