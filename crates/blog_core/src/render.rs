use crate::contract::BlogPost;
use crate::storage_keys::post_page_url;

/// Renders the published page for a single post. Content is assumed to be
/// pre-sanitized HTML; no escaping is applied.
pub fn render_post_page(post: &BlogPost) -> String {
    format!(
        concat!(
            "<html><head>",
            "<title>{title}</title>",
            "<meta name=\"description\" content=\"{description}\">",
            "<meta name=\"keywords\" content=\"{keywords}\">",
            "<meta http-equiv=\"content-type\" content=\"text/html;charset=UTF-8\">",
            "</head><body><p>{author}<br>{title}<br>{content}<br>{saved_date}</p></body></html>",
        ),
        title = post.title,
        description = post.meta_description,
        keywords = post.meta_keywords,
        author = post.author,
        content = post.content,
        saved_date = post.saved_date,
    )
}

/// Renders the index page listing every post, one link per post. Rebuilding
/// is a full re-render over the supplied rows, so it is safe to run after
/// any write, including against an empty table.
pub fn render_index_page(posts: &[BlogPost], bucket: &str) -> String {
    let mut page =
        String::from("<html><head><title>Blog Index</title></head><body><h1>Index</h1>");
    for post in posts {
        page.push_str(&format!(
            "<br><a href=\"{}\">{}</a>",
            post_page_url(bucket, &post.blog_id),
            post.title
        ));
    }
    page.push_str("</body></html>");
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        BlogPost {
            blog_id: "abc-123".to_string(),
            author: "a".to_string(),
            title: "Hello".to_string(),
            content: "World".to_string(),
            saved_date: "2016-06-23T00:00:00+00:00".to_string(),
            meta_description: "d".to_string(),
            meta_keywords: "k".to_string(),
        }
    }

    fn between<'a>(text: &'a str, open: &str, close: &str) -> &'a str {
        let start = text.find(open).expect("open marker should exist") + open.len();
        let end = text[start..].find(close).expect("close marker should exist") + start;
        &text[start..end]
    }

    #[test]
    fn post_page_round_trips_title_author_content() {
        let post = sample_post();
        let page = render_post_page(&post);

        assert_eq!(between(&page, "<title>", "</title>"), post.title);

        let body = between(&page, "<p>", "</p>");
        let parts: Vec<&str> = body.split("<br>").collect();
        assert_eq!(
            parts,
            vec![
                post.author.as_str(),
                post.title.as_str(),
                post.content.as_str(),
                post.saved_date.as_str(),
            ]
        );
    }

    #[test]
    fn post_page_carries_metadata_tags() {
        let page = render_post_page(&sample_post());

        assert!(page.contains("<meta name=\"description\" content=\"d\">"));
        assert!(page.contains("<meta name=\"keywords\" content=\"k\">"));
        assert!(page.contains("content=\"text/html;charset=UTF-8\""));
    }

    #[test]
    fn index_links_every_post_to_its_page() {
        let mut second = sample_post();
        second.blog_id = "def-456".to_string();
        second.title = "Second".to_string();

        let page = render_index_page(&[sample_post(), second], "blog-bucket");

        assert!(page.contains(
            "<a href=\"https://s3.amazonaws.com/blog-bucket/blogabc-123\">Hello</a>"
        ));
        assert!(page.contains(
            "<a href=\"https://s3.amazonaws.com/blog-bucket/blogdef-456\">Second</a>"
        ));
    }

    #[test]
    fn empty_index_is_a_valid_page_without_links() {
        let page = render_index_page(&[], "blog-bucket");

        assert!(page.contains("<h1>Index</h1>"));
        assert!(page.ends_with("</body></html>"));
        assert!(!page.contains("<a href"));
    }
}
