//! Landing page renderer.
//!
//! Serves the HTML index listing the four failure-mode endpoints, with the
//! OS hostname embedded so it is obvious which instance answered.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;

/// Render the landing page and serve it. Infallible: a hostname lookup
/// failure falls back to an empty string rather than an error page.
pub fn handle(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let hostname = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let html = render_landing(&hostname);
    if ctx.access_log {
        logger::log_response(200, html.len());
    }
    http::build_html_response(html, ctx.is_head)
}

/// Build the landing HTML listing the four failure-mode endpoints.
pub fn render_landing(hostname: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>Havoc Server</title>
    <style>
        body {{
            background-color: #1a1a1a;
            color: #ffffff;
            font-family: sans-serif;
            padding: 40px;
            line-height: 1.5;
        }}
        h1, h2 {{ text-align: center; }}
        h2 {{ color: #cccccc; font-weight: normal; }}
        ul {{ max-width: 800px; margin: 0 auto; list-style: none; }}
        li {{ margin-bottom: 30px; }}
        a {{
            color: #fff;
            text-decoration: underline;
            font-size: 1.2em;
            font-weight: bold;
        }}
        a:hover {{ color: #aaa; }}
        p.desc {{ margin-top: 5px; color: #cccccc; }}
    </style>
</head>
<body>
    <h1>What do you want to break?</h1>
    <h2>The hostname is: {hostname}</h2>

    <ul>
        <li>
            <a href="/crash">Crash the server</a>
            <p class="desc">The process exits with a failure status about 100ms after confirming. Nothing is served afterwards.</p>
        </li>

        <li>
            <a href="/freeze">Freeze the server</a>
            <p class="desc">The process enters an infinite busy loop, pinning one core and hanging every request from now on.</p>
        </li>

        <li>
            <a href="/mute">Mute the server</a>
            <p class="desc">The process stops responding to every path except this one, without using any CPU.</p>
        </li>

        <li>
            <a href="/heavy">Calculate things on the server (~10s)</a>
            <p class="desc">Runs a heavy key derivation for about ten seconds while other requests keep being served.</p>
        </li>
    </ul>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_embeds_hostname() {
        let html = render_landing("web-7f9c4d");
        assert!(html.contains("The hostname is: web-7f9c4d"));
    }

    #[test]
    fn test_landing_links_all_actions() {
        let html = render_landing("host");
        assert!(html.contains(r#"href="/crash""#));
        assert!(html.contains(r#"href="/freeze""#));
        assert!(html.contains(r#"href="/mute""#));
        assert!(html.contains(r#"href="/heavy""#));
    }

    #[test]
    fn test_landing_tolerates_empty_hostname() {
        let html = render_landing("");
        assert!(html.contains("The hostname is: </h2>"));
    }
}
