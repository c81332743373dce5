/// Minimal HTML rendering of post lists
///
/// The listing pages need nothing more than a heading and an escaped list of
/// posts, so rendering is a pair of small functions rather than a template
/// engine.

use blogsite_shared::models::account::Post;
use std::fmt::Write;

/// Escapes text for safe interpolation into HTML
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a page listing the given posts in order
pub fn posts_page(heading: &str, posts: &[Post]) -> String {
    let mut body = String::new();

    if posts.is_empty() {
        body.push_str("    <p>No blogs to show yet.</p>\n");
    } else {
        body.push_str("    <ul class=\"blogs\">\n");
        for post in posts {
            // Write into a String cannot fail
            let _ = write!(
                body,
                "      <li>\n        <h2>{}</h2>\n        <p>{}</p>\n        <p class=\"author\">by {}</p>\n      </li>\n",
                escape(&post.title),
                escape(&post.content),
                escape(&post.author),
            );
        }
        body.push_str("    </ul>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>{heading}</title>\n  </head>\n  <body>\n    <h1>{heading}</h1>\n{body}    <p><a href=\"/home\">Back to home</a></p>\n  </body>\n</html>\n",
        heading = escape(heading),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str, author: &str) -> Post {
        Post {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_escape_replaces_markup_characters() {
        assert_eq!(
            escape("<script>\"a\" & 'b'</script>"),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn test_posts_page_renders_each_post() {
        let page = posts_page("All Blogs", &[post("T1", "C1", "A"), post("T2", "C2", "B")]);

        assert!(page.contains("<h1>All Blogs</h1>"));
        assert!(page.contains("<h2>T1</h2>"));
        assert!(page.contains("<h2>T2</h2>"));
        assert_eq!(page.matches("<li>").count(), 2);
    }

    #[test]
    fn test_posts_page_escapes_post_content() {
        let page = posts_page("Your Blogs", &[post("<b>T</b>", "x & y", "A")]);

        assert!(!page.contains("<b>T</b>"));
        assert!(page.contains("&lt;b&gt;T&lt;/b&gt;"));
        assert!(page.contains("x &amp; y"));
    }

    #[test]
    fn test_posts_page_empty_state() {
        let page = posts_page("Your Blogs", &[]);
        assert!(page.contains("No blogs to show yet."));
        assert!(!page.contains("<li>"));
    }
}
