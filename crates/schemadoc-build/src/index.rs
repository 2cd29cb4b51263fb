//! Index page generation.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in a relative link: RFC 3986 unreserved.
const HREF_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One generated page, as listed on the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Display title (declared `title` or the schema stem).
    pub title: String,
    /// Generated page file name, relative to the index (e.g., "person.html").
    pub output_filename: String,
    /// Schema file name (e.g., "person.yaml").
    pub source_filename: String,
}

/// Render the index page listing `entries` in order.
///
/// The output depends only on the arguments, so unchanged inputs produce
/// byte-identical pages.
pub fn render_index(site_title: &str, entries: &[DocEntry]) -> String {
    let mut html = String::with_capacity(1024 + entries.len() * 128);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(site_title));
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; color: #1f2937; }\n");
    html.push_str("table { border-collapse: collapse; width: 100%; }\n");
    html.push_str("th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #e5e7eb; }\n");
    html.push_str("th { font-size: 0.875rem; text-transform: uppercase; color: #4b5563; }\n");
    html.push_str("a { color: #1d4ed8; text-decoration: none; }\n");
    html.push_str("a:hover { text-decoration: underline; }\n");
    html.push_str("code { font-size: 0.875rem; color: #4b5563; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(html, "<h1>{}</h1>", escape(site_title));

    html.push_str("<table>\n");
    html.push_str("<thead>\n<tr><th>Schema</th><th>Source</th></tr>\n</thead>\n");
    html.push_str("<tbody>\n");
    for entry in entries {
        render_row(&mut html, entry);
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn render_row(html: &mut String, entry: &DocEntry) {
    let _ = writeln!(
        html,
        "<tr><td><a href=\"{}\">{}</a></td><td><code>{}</code></td></tr>",
        escape(&href(&entry.output_filename)),
        escape(&entry.title),
        escape(&entry.source_filename),
    );
}

/// Percent-encode a file name for use as a relative link target.
fn href(file_name: &str) -> String {
    utf8_percent_encode(file_name, HREF_ENCODE_SET).to_string()
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(title: &str, stem: &str) -> DocEntry {
        DocEntry {
            title: title.to_owned(),
            output_filename: format!("{stem}.html"),
            source_filename: format!("{stem}.yaml"),
        }
    }

    fn rows(html: &str) -> Vec<&str> {
        html.lines().filter(|l| l.starts_with("<tr><td>")).collect()
    }

    #[test]
    fn test_render_index_rows_in_order() {
        let html = render_index(
            "Schemas",
            &[entry("address", "address"), entry("Person Record", "person")],
        );
        assert_eq!(
            rows(&html),
            vec![
                "<tr><td><a href=\"address.html\">address</a></td><td><code>address.yaml</code></td></tr>",
                "<tr><td><a href=\"person.html\">Person Record</a></td><td><code>person.yaml</code></td></tr>",
            ]
        );
    }

    #[test]
    fn test_render_index_empty_has_table_without_rows() {
        let html = render_index("Schemas", &[]);
        assert!(html.contains("<tr><th>Schema</th><th>Source</th></tr>"));
        assert!(html.contains("<tbody>\n</tbody>"));
        assert!(rows(&html).is_empty());
    }

    #[test]
    fn test_render_index_title_and_heading() {
        let html = render_index("Data Catalog", &[]);
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Data Catalog</title>"));
        assert!(html.contains("<h1>Data Catalog</h1>"));
    }

    #[test]
    fn test_render_index_escapes_fields() {
        let html = render_index(
            "Tom & Jerry's <schemas>",
            &[DocEntry {
                title: "A & B <script>\"x\"</script>".to_owned(),
                output_filename: "a&b.html".to_owned(),
                source_filename: "a&b.yaml".to_owned(),
            }],
        );
        assert!(html.contains("<title>Tom &amp; Jerry&#x27;s &lt;schemas&gt;</title>"));
        assert_eq!(
            rows(&html),
            vec![
                "<tr><td><a href=\"a%26b.html\">A &amp; B &lt;script&gt;&quot;x&quot;&lt;/script&gt;</a></td><td><code>a&amp;b.yaml</code></td></tr>",
            ]
        );
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_index_encodes_link_targets() {
        let html = render_index(
            "Schemas",
            &[
                entry("Fragment", "a#b"),
                entry("Query", "v1?"),
                entry("Spaced", "my schema"),
            ],
        );
        assert!(html.contains("<a href=\"a%23b.html\">Fragment</a>"));
        assert!(html.contains("<a href=\"v1%3F.html\">Query</a>"));
        assert!(html.contains("<a href=\"my%20schema.html\">Spaced</a>"));
        assert!(html.contains("<code>a#b.yaml</code>"));
    }

    #[test]
    fn href_keeps_unreserved_characters() {
        assert_eq!(href("person-v1_2.0~x.html"), "person-v1_2.0~x.html");
        assert_eq!(href("caf\u{e9}.html"), "caf%C3%A9.html");
        assert_eq!(href("a/b.html"), "a%2Fb.html");
    }

    #[test]
    fn test_render_index_is_deterministic() {
        let entries = [entry("One", "one"), entry("Two", "two")];
        assert_eq!(
            render_index("Schemas", &entries),
            render_index("Schemas", &entries)
        );
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a&b"), "a&amp;b");
        assert_eq!(escape("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape("it's"), "it&#x27;s");
        assert_eq!(escape("plain"), "plain");
    }
}
