//! `OpenAPI` document and the Swagger UI page that renders it.

use std::sync::Arc;

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::dto::{CreatePersonRequest, ListPeopleResponse, PersonResponse, UpdatePersonRequest};
use crate::error::ErrorBody;
use crate::handlers;

/// Path of the generated document.
pub const OPENAPI_JSON_PATH: &str = "/swagger/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "predictor",
        description = "Person records enriched with guessed age, gender and nationality"
    ),
    paths(
        handlers::people::create,
        handlers::people::list,
        handlers::people::get,
        handlers::people::update,
        handlers::people::remove,
    ),
    components(schemas(
        CreatePersonRequest,
        UpdatePersonRequest,
        PersonResponse,
        ListPeopleResponse,
        ErrorBody,
    )),
    tags((name = "people", description = "Person records"))
)]
pub struct ApiDoc;

// Swagger UI assets are pulled from the CDN; nothing is embedded.
const SWAGGER_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>predictor API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
    <script>
      window.onload = () => {
        window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
      };
    </script>
  </body>
</html>
"##;

async fn serve_docs() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// Routes serving the document and the UI under `/swagger`.
pub(crate) fn docs_routes() -> Router {
    // Build once, serve as static JSON
    let doc = Arc::new(ApiDoc::openapi());

    Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get(move || async move {
                ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref())).into_response()
            }),
        )
        .route("/swagger", get(serve_docs))
        .route("/swagger/index.html", get(serve_docs))
}
