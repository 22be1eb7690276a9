use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use axum_graphql_voyager::{
    GraphqlSource, HttpHeaders, UiOptions, VoyagerOptions, VoyagerPage,
};

struct Query;

#[Object]
impl Query {
    async fn hello(&self) -> &'static str {
        "world"
    }
}

fn router(options: VoyagerOptions) -> axum::Router {
    Arc::new(VoyagerPage::new(options)).router()
}

async fn get_page(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_html_on_the_default_mount_path() {
    let (status, content_type, body) = get_page(router(VoyagerOptions::default()), "/voyager").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("GraphQLVoyager.init"));
    assert!(body.contains(r#"<div id="voyager">"#));
}

#[tokio::test]
async fn serves_html_on_a_custom_mount_path() {
    let options = VoyagerOptions {
        path: "/schema/viz".to_owned(),
        ..VoyagerOptions::default()
    };
    let (status, _, _) = get_page(router(options), "/schema/viz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn other_paths_fall_through() {
    let (status, _, _) = get_page(router(VoyagerOptions::default()), "/graphiql").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inline_schema_renders_a_static_snapshot() {
    let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
    let options = VoyagerOptions {
        graphql: GraphqlSource::inline(schema),
        ..VoyagerOptions::default()
    };
    let (status, _, body) = get_page(router(options), "/voyager").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"introspection: {"data":{"__schema""#));
    assert!(body.contains("queryType"));
    assert!(!body.contains("introspectionProvider"));
}

#[tokio::test]
async fn remote_schema_renders_a_fetch_provider() {
    let options = VoyagerOptions {
        graphql: GraphqlSource::Remote {
            url: "https://api.example.com/graphql".to_owned(),
            headers: Some(HttpHeaders::Pairs(vec![(
                "X-Api-Key".to_owned(),
                "abc".to_owned(),
            )])),
            credentials: None,
        },
        ..VoyagerOptions::default()
    };
    let (status, _, body) = get_page(router(options), "/voyager").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"fetch("https://api.example.com/graphql""#));
    assert!(body.contains("'Content-Type': 'application/json'"));
    assert!(body.contains(r#"...{"X-Api-Key":"abc"}"#));
    assert!(body.contains("introspection: introspectionProvider"));
}

#[tokio::test]
async fn ui_options_reach_the_init_call() {
    let options = VoyagerOptions {
        ui: UiOptions {
            hide_docs: Some(true),
            ..UiOptions::default()
        },
        ..VoyagerOptions::default()
    };
    let (_, _, body) = get_page(router(options), "/voyager").await;
    assert!(body.contains(r#"...{"hideDocs":true}"#));
}

#[tokio::test]
async fn repeated_requests_yield_identical_documents() {
    let app = router(VoyagerOptions::default());
    let (_, _, first) = get_page(app.clone(), "/voyager").await;
    let (_, _, second) = get_page(app, "/voyager").await;
    assert_eq!(first, second);
}
