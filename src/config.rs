use std::collections::BTreeMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use serde::Serialize;
use tracing::warn;

use crate::introspection::SchemaIntrospector;

/// Configuration bundle for [`VoyagerPage`](crate::VoyagerPage).
///
/// Constructed once when the route is registered; never mutated afterwards.
pub struct VoyagerOptions {
    /// Mount path for the page route.
    pub path: String,
    /// Where the visualization gets its introspection data from.
    pub graphql: GraphqlSource,
    /// Options forwarded verbatim to the client-side `GraphQLVoyager.init` call.
    pub ui: UiOptions,
}

impl Default for VoyagerOptions {
    fn default() -> Self {
        Self {
            path: "/voyager".to_owned(),
            graphql: GraphqlSource::default(),
            ui: UiOptions::default(),
        }
    }
}

/// Introspection source for the rendered page.
///
/// Exactly one variant is active per handler instance, chosen at
/// construction time rather than per request.
pub enum GraphqlSource {
    /// A schema available in-process. Its introspection result is baked
    /// into the page as static data.
    Inline {
        /// Converter producing the full introspection result.
        schema: Arc<dyn SchemaIntrospector>,
    },
    /// A GraphQL endpoint the browser fetches introspection from at view
    /// time, so the browser's own cookies and credentials apply.
    Remote {
        /// Endpoint URL for the browser-side POST.
        url: String,
        /// Extra headers merged into the browser-side fetch.
        headers: Option<HttpHeaders>,
        /// Value for the fetch API `credentials` option.
        credentials: Option<Credentials>,
    },
}

impl Default for GraphqlSource {
    fn default() -> Self {
        GraphqlSource::remote("/graphql")
    }
}

impl GraphqlSource {
    /// Inline source backed by the given introspection converter.
    ///
    /// Any `async_graphql` schema works here directly.
    pub fn inline(schema: impl SchemaIntrospector + 'static) -> Self {
        Self::Inline {
            schema: Arc::new(schema),
        }
    }

    /// Remote source fetching introspection from `url`, with no extra
    /// headers and no credentials.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            headers: None,
            credentials: None,
        }
    }
}

/// Extra request headers in any of the shapes callers commonly hold them.
#[derive(Debug, Clone)]
pub enum HttpHeaders {
    /// Name-to-value mapping.
    Map(BTreeMap<String, String>),
    /// List of name/value pairs.
    Pairs(Vec<(String, String)>),
    /// A typed header collection from the `http` crate.
    Typed(HeaderMap),
}

impl HttpHeaders {
    /// Normalize to a canonical sorted mapping.
    ///
    /// Later entries win on duplicate names. Typed header values that are
    /// not valid UTF-8 cannot be embedded in the page script and are
    /// dropped with a warning.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        match self {
            Self::Map(map) => map.clone(),
            Self::Pairs(pairs) => pairs.iter().cloned().collect(),
            Self::Typed(map) => map
                .iter()
                .filter_map(|(name, value)| match value.to_str() {
                    Ok(v) => Some((name.as_str().to_owned(), v.to_owned())),
                    Err(_) => {
                        warn!(header = %name, "dropping non-UTF-8 header value");
                        None
                    }
                })
                .collect(),
        }
    }
}

/// Value for the browser fetch API's `credentials` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
    Include,
    Omit,
}

impl Credentials {
    /// The string the fetch API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameOrigin => "same-origin",
            Self::Include => "include",
            Self::Omit => "omit",
        }
    }
}

/// Voyager initialization options.
///
/// Serialized as-is into the `GraphQLVoyager.init` call; this crate does not
/// interpret any of these fields. See the Voyager README for their meaning.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_docs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_settings: Option<bool>,
}

/// Graph display flags nested under `displayOptions`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_relay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_leaf_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by_alphabet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_root: Option<bool>,
}
