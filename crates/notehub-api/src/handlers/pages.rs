//! Human-facing HTML pages — index, note view, share view.
//!
//! Share pages are where the access state machine meets a browser: the
//! same URL renders note content, a password challenge, or an error
//! page depending on the share's state and the viewer's session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use notehub_core::error::ErrorKind;
use notehub_entity::note::Note;
use notehub_entity::share::Share;
use notehub_service::note::markdown;
use notehub_service::share::ViewOutcome;

use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    let notes = match state.note_service.list_notes(10).await {
        Ok(notes) => notes,
        Err(_) => return error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
    };

    let items: String = notes
        .iter()
        .map(|note| {
            format!(
                r#"<li><a href="/note/{}">{}</a> <span class="meta">{}</span></li>"#,
                note.id,
                escape(&note.title),
                note.updated_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();

    let body = if items.is_empty() {
        "<p class=\"meta\">No notes yet.</p>".to_string()
    } else {
        format!("<ul class=\"notes\">{items}</ul>")
    };

    Html(layout(
        "Notehub",
        &format!("<h1>Notehub</h1><p>Markdown notes, shareable by link.</p><h2>Recent notes</h2>{body}"),
    ))
    .into_response()
}

/// GET /note/{id}
pub async fn view_note(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.note_service.get_note(id).await {
        Ok(note) => {
            let html = markdown::render_html(&note.content);
            note_page(&note, &html, None)
        }
        Err(e) if e.kind == ErrorKind::NotFound => {
            error_page(StatusCode::NOT_FOUND, "Note not found")
        }
        Err(_) => error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
    }
}

/// GET /share/{code}
pub async fn view_share(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(code): Path<String>,
) -> Response {
    let (viewer, jar) = crate::extractors::resolve_viewer(&state, jar);

    let page = match state.access_service.view(viewer, &code).await {
        Ok(ViewOutcome::Render { share, note, html }) => note_page(&note, &html, Some(&share)),
        Ok(ViewOutcome::Challenge { share }) => challenge_page(&share),
        Err(e) => match e.kind {
            ErrorKind::NotFound => error_page(StatusCode::NOT_FOUND, "This link does not exist"),
            ErrorKind::Expired => error_page(StatusCode::GONE, "This link has expired"),
            _ => error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
        },
    };

    (jar, page).into_response()
}

/// Renders a note, optionally with the share footer.
fn note_page(note: &Note, content_html: &str, share: Option<&Share>) -> Response {
    let metadata: String = note
        .metadata
        .as_object()
        .map(|map| {
            map.iter()
                .map(|(k, v)| {
                    let value = match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    format!("<p>{}: {}</p>", escape(k), escape(&value))
                })
                .collect()
        })
        .unwrap_or_default();

    let footer = match share {
        Some(share) => format!(
            r#"<div class="footer"><p>Shared link · {} views</p></div>"#,
            share.views
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>{title}</h1>
<div class="meta">
  <p>Created: {created}</p>
  <p>Last updated: {updated}</p>
  {metadata}
</div>
<div class="markdown">{content_html}</div>
{footer}"#,
        title = escape(&note.title),
        created = note.created_at.format("%Y-%m-%d %H:%M"),
        updated = note.updated_at.format("%Y-%m-%d %H:%M"),
    );

    Html(layout(&note.title, &body)).into_response()
}

/// Renders the password challenge form. Note content is deliberately
/// absent from this page in any form.
fn challenge_page(share: &Share) -> Response {
    let body = format!(
        r#"<h1>Protected note</h1>
<p>This shared note is password protected.</p>
<form id="unlock-form">
  <input type="password" id="password" placeholder="Password" autofocus>
  <button type="submit">Unlock</button>
  <p id="error" class="error" hidden>Wrong password</p>
</form>
<script>
document.getElementById('unlock-form').addEventListener('submit', async (e) => {{
  e.preventDefault();
  const res = await fetch('/api/shares/{code}/unlock', {{
    method: 'POST',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{ password: document.getElementById('password').value }})
  }});
  if (res.ok) {{ location.reload(); }}
  else {{ document.getElementById('error').hidden = false; }}
}});
</script>"#,
        code = escape(&share.share_code),
    );

    Html(layout("Protected note", &body)).into_response()
}

/// Renders a minimal error page with the given status.
fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!("<h1>{}</h1><p>{}</p>", status.as_u16(), escape(message));
    (status, Html(layout("Notehub", &body))).into_response()
}

/// Wraps page content in the shared HTML shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - Notehub</title>
  <style>
    body {{ font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
           line-height: 1.6; color: #333; max-width: 800px;
           margin: 0 auto; padding: 20px; background: #f5f5f5; }}
    .container {{ background: white; padding: 40px; border-radius: 8px;
                 box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
    h1 {{ border-bottom: 2px solid #e0e0e0; padding-bottom: 10px; color: #2c3e50; }}
    .meta {{ font-size: 0.85em; color: #666; }}
    .markdown pre {{ background: #f0f4f8; padding: 15px; border-radius: 5px;
                    overflow-x: auto; }}
    .markdown code {{ background: #f0f4f8; padding: 2px 6px; border-radius: 3px; }}
    .markdown blockquote {{ border-left: 4px solid #3498db; padding-left: 15px;
                           color: #555; }}
    .footer {{ margin-top: 40px; border-top: 1px solid #e0e0e0;
              text-align: center; color: #888; font-size: 0.9em; }}
    .error {{ color: #c0392b; }}
    form input {{ padding: 8px; }}
    form button {{ padding: 8px 16px; }}
  </style>
</head>
<body>
  <div class="container">
{body}
  </div>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Minimal HTML escaping for text interpolated into pages.
fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>&\"x\"</b>"), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_challenge_page_contains_no_note_content() {
        let share = Share {
            id: 1,
            note_id: 2,
            share_code: "abc123def4".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
            expires_at: None,
            views: 0,
            created_at: chrono::Utc::now(),
        };
        // The challenge page references only the share code.
        let response = challenge_page(&share);
        assert_eq!(response.status(), StatusCode::OK);
    }
}
