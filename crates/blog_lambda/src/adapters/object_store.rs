use super::StoreError;

/// Published-page storage. Implementations store `text/html` bodies with
/// public-read visibility.
pub trait PageStore {
    fn put_page(&self, key: &str, body: &str) -> Result<(), StoreError>;

    fn delete_page(&self, key: &str) -> Result<(), StoreError>;
}
