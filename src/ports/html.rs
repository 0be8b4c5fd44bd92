// src/ports/html.rs
use crate::domain::Note;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }
        .note {
            background: white;
            border-radius: 8px;
            padding: 1rem 1.5rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .note form {
            display: inline;
        }
        .content {
            white-space: pre-wrap;
            word-wrap: break-word;
        }
        input, textarea {
            width: 100%;
            box-sizing: border-box;
            margin-bottom: 1rem;
            padding: 0.5rem;
        }
        textarea {
            min-height: 10rem;
        }
        a {
            color: #0366d6;
        }
"#;

/// Builds the HTML pages of the web interface.
///
/// Every note value is escaped before it is embedded in markup.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Wrap `body` in the shared page shell; `title` is used for `<title>` and `<h1>`.
    pub fn render_page(&self, title: &str, body: &str) -> String {
        let title = encode_text(title);
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{title}</h1>
{body}
</body>
</html>"#
        )
    }

    #[instrument(level = "trace", skip(self, notes), fields(count = notes.len()))]
    pub fn render_list(&self, notes: &[Note]) -> String {
        let mut html = String::from("    <p><a href=\"/notes/new\">New note</a></p>\n");
        for note in notes {
            html.push_str(&format!(
                r#"    <div class="note">
        <a href="/notes/{id}">{title}</a>
        <form method="POST" action="/notes/{id}/delete">
            <button type="submit">Delete</button>
        </form>
    </div>
"#,
                id = note.id,
                title = encode_text(note.display_title()),
            ));
        }
        html
    }

    pub fn render_detail(&self, note: &Note) -> String {
        format!(
            r#"    <div class="note">
        <h2>{title}</h2>
        <div class="content">{content}</div>
    </div>
    <p><a href="/notes/{id}/edit">Edit</a> | <a href="/">Back to notes</a></p>
"#,
            id = note.id,
            title = encode_text(note.display_title()),
            content = encode_text(note.content_or_empty()),
        )
    }

    /// Edit form for an existing note, or an empty creation form.
    pub fn render_form(&self, note: Option<&Note>) -> String {
        let (action, title, content) = match note {
            Some(note) => (
                format!("/notes/{}/edit", note.id),
                note.title_or_empty(),
                note.content_or_empty(),
            ),
            None => ("/notes/new".to_string(), "", ""),
        };

        format!(
            r#"    <form method="POST" action="{action}">
        <label for="title">Title</label>
        <input type="text" id="title" name="title" value="{title}" required>
        <label for="content">Content</label>
        <textarea id="content" name="content" required>{content}</textarea>
        <button type="submit">Save</button>
    </form>
    <p><a href="/">Back to notes</a></p>
"#,
            title = encode_double_quoted_attribute(title),
            content = encode_text(content),
        )
    }

    pub fn render_not_found(&self) -> String {
        self.render_page(
            "Not Found",
            "    <p>The page you requested does not exist.</p>\n    <p><a href=\"/\">Back to notes</a></p>\n",
        )
    }

    pub fn render_bad_request(&self, message: &str) -> String {
        self.render_page(
            "Bad Request",
            &format!(
                "    <p>{}</p>\n    <p><a href=\"/\">Back to notes</a></p>\n",
                encode_text(message)
            ),
        )
    }

    pub fn render_server_error(&self) -> String {
        self.render_page(
            "Server Error",
            "    <p>Something went wrong while handling your request.</p>\n",
        )
    }
}
