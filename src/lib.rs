//! GraphQL Voyager page handler for axum.
//!
//! Exposes a single GET route serving a self-contained HTML page that loads
//! [GraphQL Voyager](https://github.com/graphql-kit/graphql-voyager) from a
//! CDN and points it at either an in-process schema snapshot or a remote
//! GraphQL endpoint fetched by the browser.
//!
//! # Example
//! ```ignore
//! # use axum_graphql_voyager::{GraphqlSource, VoyagerOptions, VoyagerPage};
//! # use std::sync::Arc;
//! let page = Arc::new(VoyagerPage::new(VoyagerOptions {
//!     graphql: GraphqlSource::remote("/graphql"),
//!     ..VoyagerOptions::default()
//! }));
//! let app = axum::Router::new().merge(page.router());
//! ```

mod config;
mod introspection;
mod page;

pub use config::{
    Credentials, DisplayOptions, GraphqlSource, HttpHeaders, UiOptions, VoyagerOptions,
};
pub use introspection::{INTROSPECTION_QUERY, IntrospectionError, SchemaIntrospector};
pub use page::{VoyagerError, VoyagerPage};
