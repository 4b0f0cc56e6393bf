use axum::response::Html;

use dbcheck_core::types::StatusView;
use dbcheck_core::DB_CHECK_PATH;

/// Serve the status page.
pub async fn status_page() -> Html<String> {
    Html(render_status_page())
}

/// Render the page in its pending state. The inline script fetches the
/// connectivity endpoint once and swaps in the resolved glyph and message.
pub fn render_status_page() -> String {
    let pending = StatusView::Pending;
    let connected = StatusView::Connected(String::new());
    let unreachable = StatusView::unreachable();

    // JSON string literals are valid JS string literals.
    let js = |s: &str| serde_json::Value::from(s).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Database Connection Status</title>
</head>
<body>
<main>
<h1>Database Connection Status</h1>
<p>Database Connection Status: <span id="status-glyph">{pending_glyph}</span> <span id="status-message">{pending_message}</span></p>
</main>
<script>
(function () {{
  var glyph = document.getElementById("status-glyph");
  var message = document.getElementById("status-message");
  function show(success, text) {{
    glyph.textContent = success ? {connected_glyph} : {disconnected_glyph};
    message.textContent = text;
  }}
  fetch({path})
    .then(function (res) {{ return res.json(); }})
    .then(function (data) {{ show(data.success === true, data.message); }})
    .catch(function () {{ show(false, {fallback}); }});
}})();
</script>
</body>
</html>
"#,
        pending_glyph = pending.glyph(),
        pending_message = pending.message(),
        connected_glyph = js(connected.glyph()),
        disconnected_glyph = js(unreachable.glyph()),
        path = js(DB_CHECK_PATH),
        fallback = js(unreachable.message()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_renders_only_the_pending_glyph_in_markup() {
        let page = render_status_page();
        assert!(page.contains(r#"<span id="status-glyph">⏳</span>"#));
        assert!(page.contains(r#"<span id="status-message">Checking...</span>"#));
        assert!(!page.contains(r#"<span id="status-glyph">🟢</span>"#));
        assert!(!page.contains(r#"<span id="status-glyph">🔴</span>"#));
    }

    #[test]
    fn script_targets_endpoint_and_fallback() {
        let page = render_status_page();
        assert!(page.contains(r#"fetch("/api/db-check")"#));
        assert!(page.contains(r#"show(false, "Failed to connect to database")"#));
    }
}
