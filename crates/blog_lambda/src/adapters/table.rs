use blog_core::contract::BlogPost;

use super::StoreError;

/// Table-store access for blog rows keyed by `(BlogID, Author)`.
pub trait PostStore {
    /// Returns every row whose partition key matches `blog_id`.
    fn query_post(&self, blog_id: &str) -> Result<Vec<BlogPost>, StoreError>;

    /// Returns every row, read with strong consistency.
    fn scan_posts(&self) -> Result<Vec<BlogPost>, StoreError>;

    fn put_post(&self, post: &BlogPost) -> Result<(), StoreError>;

    /// Rewrites the mutable attributes of an existing row. Fails when the
    /// row is absent.
    fn update_post(&self, post: &BlogPost) -> Result<(), StoreError>;

    /// Removes a row. Fails when the row is absent.
    fn delete_post(&self, blog_id: &str, author: &str) -> Result<(), StoreError>;
}
