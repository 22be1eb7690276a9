use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

/// Introspection query sent against inline schemas.
///
/// Requests the full surface Voyager can display: descriptions, the
/// schema-level description, repeatable directives, input-value deprecation
/// and `specifiedByURL`.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      isRepeatable
      locations
      args(includeDeprecated: true) {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  specifiedByURL
  fields(includeDeprecated: true) {
    name
    description
    args(includeDeprecated: true) {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields(includeDeprecated: true) {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
  isDeprecated
  deprecationReason
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Failure while converting a schema into an introspection result.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// The schema rejected the introspection query.
    #[error("introspection query failed: {0}")]
    Execution(String),
    /// The result could not be represented as JSON.
    #[error("introspection result is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Converts an in-process schema into a full introspection result.
///
/// The returned value carries the standard response envelope, i.e. its
/// top-level shape is `{"data": {"__schema": {...}}}`.
#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    async fn introspect(&self) -> Result<Value, IntrospectionError>;
}

/// Every `async_graphql` schema is usable as an inline source directly.
#[async_trait]
impl<E> SchemaIntrospector for E
where
    E: async_graphql::Executor,
{
    async fn introspect(&self) -> Result<Value, IntrospectionError> {
        let response = self
            .execute(async_graphql::Request::new(INTROSPECTION_QUERY))
            .await;
        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IntrospectionError::Execution(message));
        }
        Ok(json!({ "data": serde_json::to_value(&response.data)? }))
    }
}
