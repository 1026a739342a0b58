use std::collections::HashMap;

use aws_sdk_dynamodb::error::ProvideErrorMetadata;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use blog_core::contract::{BlogPost, Response};
use blog_lambda::adapters::object_store::PageStore;
use blog_lambda::adapters::table::PostStore;
use blog_lambda::adapters::StoreError;
use blog_lambda::handlers::blog::{handle_blog_request, BlogHandlerConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};

struct DynamoDbPostStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

struct S3PageStore {
    bucket: String,
    client: aws_sdk_s3::Client,
}

fn store_error(
    context: &str,
    error: impl ProvideErrorMetadata + std::fmt::Display,
) -> StoreError {
    let code = error.code().unwrap_or("Unknown").to_string();
    StoreError::new(code, format!("{context}: {error}"))
}

fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, StoreError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            StoreError::new(
                "MalformedItem",
                format!("row is missing string attribute {name}"),
            )
        })
}

fn post_from_item(item: &HashMap<String, AttributeValue>) -> Result<BlogPost, StoreError> {
    Ok(BlogPost {
        blog_id: string_attribute(item, "BlogID")?,
        author: string_attribute(item, "Author")?,
        title: string_attribute(item, "Title")?,
        content: string_attribute(item, "Content")?,
        saved_date: string_attribute(item, "SavedDate")?,
        meta_description: string_attribute(item, "MetaDescription")?,
        meta_keywords: string_attribute(item, "MetaKeywords")?,
    })
}

impl PostStore for DynamoDbPostStore {
    fn query_post(&self, blog_id: &str) -> Result<Vec<BlogPost>, StoreError> {
        let table_name = self.table_name.clone();
        let blog_id = blog_id.to_string();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .query()
                    .table_name(table_name)
                    .key_condition_expression("BlogID = :v1")
                    .expression_attribute_values(":v1", AttributeValue::S(blog_id))
                    .send()
                    .await
                    .map_err(|error| store_error("failed to query blog table", error))?;

                output.items().iter().map(post_from_item).collect()
            })
        })
    }

    fn scan_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let table_name = self.table_name.clone();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .scan()
                    .table_name(table_name)
                    .consistent_read(true)
                    .send()
                    .await
                    .map_err(|error| store_error("failed to scan blog table", error))?;

                output.items().iter().map(post_from_item).collect()
            })
        })
    }

    fn put_post(&self, post: &BlogPost) -> Result<(), StoreError> {
        let table_name = self.table_name.clone();
        let post = post.clone();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .item("BlogID", AttributeValue::S(post.blog_id))
                    .item("Author", AttributeValue::S(post.author))
                    .item("Title", AttributeValue::S(post.title))
                    .item("Content", AttributeValue::S(post.content))
                    .item("SavedDate", AttributeValue::S(post.saved_date))
                    .item("MetaDescription", AttributeValue::S(post.meta_description))
                    .item("MetaKeywords", AttributeValue::S(post.meta_keywords))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| store_error("failed to put blog row", error))
            })
        })
    }

    fn update_post(&self, post: &BlogPost) -> Result<(), StoreError> {
        let table_name = self.table_name.clone();
        let post = post.clone();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .update_item()
                    .table_name(table_name)
                    .key("BlogID", AttributeValue::S(post.blog_id))
                    .key("Author", AttributeValue::S(post.author))
                    .update_expression(
                        "SET Title = :t, Content = :c, SavedDate = :s, \
                         MetaDescription = :d, MetaKeywords = :k",
                    )
                    .condition_expression("attribute_exists(BlogID)")
                    .expression_attribute_values(":t", AttributeValue::S(post.title))
                    .expression_attribute_values(":c", AttributeValue::S(post.content))
                    .expression_attribute_values(":s", AttributeValue::S(post.saved_date))
                    .expression_attribute_values(":d", AttributeValue::S(post.meta_description))
                    .expression_attribute_values(":k", AttributeValue::S(post.meta_keywords))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| store_error("failed to update blog row", error))
            })
        })
    }

    fn delete_post(&self, blog_id: &str, author: &str) -> Result<(), StoreError> {
        let table_name = self.table_name.clone();
        let blog_id = blog_id.to_string();
        let author = author.to_string();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key("BlogID", AttributeValue::S(blog_id))
                    .key("Author", AttributeValue::S(author))
                    // Deleting an absent row must surface a store error
                    // instead of succeeding silently.
                    .condition_expression("attribute_exists(BlogID)")
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| store_error("failed to delete blog row", error))
            })
        })
    }
}

impl PageStore for S3PageStore {
    fn put_page(&self, key: &str, body: &str) -> Result<(), StoreError> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.as_bytes().to_vec();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .content_type("text/html")
                    .acl(ObjectCannedAcl::PublicRead)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| store_error("failed to publish page to s3", error))
            })
        })
    }

    fn delete_page(&self, key: &str) -> Result<(), StoreError> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_object()
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| store_error("failed to delete page from s3", error))
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<serde_json::Value>,
    config: &BlogHandlerConfig,
    table: &DynamoDbPostStore,
    pages: &S3PageStore,
) -> Result<Response, Error> {
    Ok(handle_blog_request(event.payload, config, table, pages))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let table_name =
        std::env::var("BLOG_TABLE").map_err(|_| Error::from("BLOG_TABLE must be configured"))?;
    let bucket =
        std::env::var("BLOG_BUCKET").map_err(|_| Error::from("BLOG_BUCKET must be configured"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table = DynamoDbPostStore {
        table_name,
        client: aws_sdk_dynamodb::Client::new(&aws_config),
    };
    let pages = S3PageStore {
        bucket: bucket.clone(),
        client: aws_sdk_s3::Client::new(&aws_config),
    };
    let config = BlogHandlerConfig { bucket };

    let config = &config;
    let table = &table;
    let pages = &pages;
    lambda_runtime::run(service_fn(move |event| {
        handle_request(event, config, table, pages)
    }))
    .await
}
