/// Well-known object key for the generated index page.
pub const INDEX_OBJECT_KEY: &str = "BlogIndex.html";

/// Object key for a single published post page.
pub fn post_object_key(blog_id: &str) -> String {
    format!("blog{blog_id}")
}

/// Public URL of a published post page, used for index links.
pub fn post_page_url(bucket: &str, blog_id: &str) -> String {
    format!(
        "https://s3.amazonaws.com/{bucket}/{}",
        post_object_key(blog_id)
    )
}
