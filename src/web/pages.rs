// HTML served to the operator's browser.

pub const INDEX_PAGE: &str = r#"<html>
  <head>
    <title>Dynalist to Google Slides Converter</title>
    <style>
      body { font-family: Arial, sans-serif; margin: 40px; }
      h1 { color: #333; }
      pre { background: #f4f4f4; padding: 10px; border-radius: 5px; }
      .endpoint { margin: 20px 0; }
      .method { font-weight: bold; color: #0066cc; }
    </style>
  </head>
  <body>
    <h1>Dynalist to Google Slides Converter API</h1>

    <div class="endpoint">
      <h2>Authentication</h2>
      <p><span class="method">GET</span> <code>/auth</code> - Start OAuth2 flow</p>
      <p><span class="method">GET</span> <code>/auth/callback</code> - OAuth2 callback (handled automatically)</p>
      <p><span class="method">POST</span> <code>/auth/refresh</code> - Refresh the saved access token</p>
    </div>

    <div class="endpoint">
      <h2>Create Slides</h2>
      <p><span class="method">POST</span> <code>/api/create-slides</code></p>
      <p>Request body:</p>
      <pre>{
  "bullets": ["Slide 1 content", "Slide 2 content", "..."],
  "presentationTitle": "Optional title"
}</pre>
      <p>Response:</p>
      <pre>{
  "success": true,
  "presentationId": "...",
  "presentationUrl": "https://docs.google.com/presentation/d/.../edit",
  "slidesCreated": 2
}</pre>
    </div>

    <div class="endpoint">
      <h2>Presentations</h2>
      <p><span class="method">GET</span> <code>/api/presentations/{id}</code> - Slide ids of a presentation</p>
      <p><span class="method">POST</span> <code>/api/presentations/{id}/slides/{slideId}/text</code> - Add a text box, body <code>{ "text": "..." }</code></p>
    </div>

    <h2>Setup Instructions</h2>
    <ol>
      <li>Create a Google Cloud project and enable the Google Slides API</li>
      <li>Create OAuth2 credentials (Web application type)</li>
      <li>Add <code>http://localhost:8000/auth/callback</code> to authorized redirect URIs</li>
      <li>Put <code>GOOGLE_CLIENT_ID</code> and <code>GOOGLE_CLIENT_SECRET</code> in <code>.env</code></li>
      <li>Visit <a href="/auth">/auth</a> to authenticate</li>
      <li>Send POST requests to <code>/api/create-slides</code> with your bullet points</li>
    </ol>
  </body>
</html>
"#;

pub const AUTH_SUCCESS_PAGE: &str = r#"<html>
  <body>
    <h1>Authentication Successful!</h1>
    <p>You can now close this window and start using the API.</p>
    <p>Access token has been saved.</p>
  </body>
</html>
"#;

pub fn auth_start_page(authorization_url: &str) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Google Slides Authorization</h1>
    <p>Click the link below to authorize this application:</p>
    <a href="{}">Authorize with Google</a>
  </body>
</html>
"#,
        escape_attr(authorization_url)
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_link_is_attribute_escaped() {
        let page = auth_start_page("https://accounts.google.com/x?a=1&b=\"2\"");
        assert!(page.contains(r#"href="https://accounts.google.com/x?a=1&amp;b=&quot;2&quot;""#));
    }
}
