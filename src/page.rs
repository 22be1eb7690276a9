use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::config::{GraphqlSource, VoyagerOptions};
use crate::introspection::IntrospectionError;

/// Failure while rendering the Voyager page.
#[derive(Debug, Error)]
pub enum VoyagerError {
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
    #[error("failed to serialize embedded value: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for VoyagerError {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render voyager page");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// HTTP service serving the GraphQL Voyager page.
///
/// The page itself is rendered fresh on every request from the immutable
/// configuration captured at construction time.
///
/// # Example
/// ```ignore
/// # use axum_graphql_voyager::{VoyagerOptions, VoyagerPage};
/// # use std::sync::Arc;
/// let page = Arc::new(VoyagerPage::new(VoyagerOptions::default()));
/// let app = axum::Router::new().merge(page.router());
/// ```
pub struct VoyagerPage {
    options: VoyagerOptions,
}

impl VoyagerPage {
    /// Create a page handler from the given configuration.
    pub fn new(options: VoyagerOptions) -> Self {
        Self { options }
    }

    /// Build a router exposing the page at the configured mount path.
    pub fn router(self: Arc<Self>) -> Router {
        let path = self.options.path.clone();
        Router::new().route(
            &path,
            get(move || {
                let page = self.clone();
                async move { page.render().await.map(Html) }
            }),
        )
    }

    /// Render the complete HTML document.
    pub async fn render(&self) -> Result<String, VoyagerError> {
        Ok(page_html(&self.script().await?))
    }

    async fn script(&self) -> Result<String, VoyagerError> {
        let ui = script_safe_json(&self.options.ui)?;
        match &self.options.graphql {
            GraphqlSource::Inline { schema } => {
                let introspection = script_safe_json(&schema.introspect().await?)?;
                Ok(format!(
                    "\
      GraphQLVoyager.init(document.getElementById('voyager'), {{
        ...{ui},
        introspection: {introspection},
      }});"
                ))
            }
            GraphqlSource::Remote {
                url,
                headers,
                credentials,
            } => {
                let url = script_safe_json(url)?;
                let extra = headers.as_ref().map(|h| h.to_map()).unwrap_or_default();
                let extra = script_safe_json(&extra)?;
                let credentials = match credentials {
                    Some(c) => format!(
                        "credentials: {},\n          ",
                        script_safe_json(&c.as_str())?
                    ),
                    None => String::new(),
                };
                Ok(format!(
                    "\
      async function introspectionProvider(query) {{
        const response = await fetch({url}, {{
          method: 'POST',
          {credentials}headers: {{
            'Content-Type': 'application/json',
            ...{extra}
          }},
          body: JSON.stringify({{ query }}),
        }});
        return response.json();
      }}

      GraphQLVoyager.init(document.getElementById('voyager'), {{
        ...{ui},
        introspection: introspectionProvider,
      }});"
                ))
            }
        }
    }
}

/// Serialize a value for direct embedding inside a `<script>` block.
///
/// `<` can only occur inside JSON string literals, so rewriting it to the
/// equivalent escape keeps the value intact while making `</script` and
/// `<!--` impossible to smuggle through adversarial configuration.
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn page_html(script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="user-scalable=no, initial-scale=1.0, minimum-scale=1.0, maximum-scale=1.0">
    <title>GraphQL Voyager</title>
    <style>
      body {{
        margin: 0;
        height: 100vh;
        overflow: hidden;
      }}

      #voyager {{
        height: 100%;
      }}
    </style>
    <script src="https://cdn.jsdelivr.net/npm/react@18/umd/react.production.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/react-dom@18/umd/react-dom.production.min.js"></script>
    <link
      rel="stylesheet"
      href="https://cdn.jsdelivr.net/npm/graphql-voyager/dist/voyager.css"
    />
    <script src="https://cdn.jsdelivr.net/npm/graphql-voyager/dist/voyager.min.js"></script>
  </head>
  <body>
    <div id="voyager">Loading...</div>
    <script>
{script}
    </script>
  </body>
</html>
"#
    )
}
