//! Shared helpers for predictor-axum integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use predictor_axum::{AxumContext, create_router};
use predictor_core::{DemographicField, Demographics, DemographicsError, DemographicsPort};
use predictor_db::TestDb;
use tower::ServiceExt;

/// Name the fake demographics port has no answer for.
pub const UNKNOWN_NAME: &str = "Xqz";

/// Demographics port with fixed answers, so tests never leave the process.
pub struct StaticDemographics;

#[async_trait]
impl DemographicsPort for StaticDemographics {
    async fn guess(&self, name: &str) -> Result<Demographics, DemographicsError> {
        let (age, gender, nationality) = match name {
            UNKNOWN_NAME => {
                return Err(DemographicsError::NotFound {
                    name: name.to_string(),
                    field: DemographicField::Age,
                });
            }
            "Olga" | "Anna" => (35, "female", "UA"),
            _ => (30, "male", "RU"),
        };
        Ok(Demographics {
            age,
            gender: gender.to_string(),
            nationality: nationality.to_string(),
        })
    }
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = TestDb::new().await.unwrap();
    let ctx = AxumContext::new(&db.repos(), Arc::new(StaticDemographics));
    create_router(ctx, Duration::from_secs(5))
}

/// Send a request and return the status plus the parsed JSON body (or
/// `Null` for an empty body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
