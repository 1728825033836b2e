//! JSON REST API for the cadastro contact service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`cadastro_core::store::ContactStore`]. Transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, cadastro_api::api_router(store.clone())).await?;
//! ```

pub mod cadastros;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use cadastro_core::store::ContactStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CADASTRO_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/cadastros/",
      get(cadastros::list::<S>).post(cadastros::create::<S>),
    )
    .route(
      "/cadastros/{id}",
      get(cadastros::get_one::<S>)
        .patch(cadastros::edit_one::<S>)
        .delete(cadastros::delete_one::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use cadastro_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    api_router(Arc::new(store))
  }

  async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  // ── Create ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_record_and_get_round_trips() {
    let app = app().await;

    let (status, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();
    assert_eq!(id.len(), 26);
    assert_eq!(created["nome"], "Ana");
    assert_eq!(created["idade"], 30);
    assert!(created["data_criacao"].as_f64().unwrap() > 1_577_836_800.0);
    assert_eq!(created["data_criacao"], created["data_atualizacao"]);

    let (status, fetched) =
      request(&app, "GET", &format!("/cadastros/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
  }

  #[tokio::test]
  async fn create_json_shape_has_exactly_the_wire_fields() {
    let app = app().await;

    let (_, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;

    let mut keys: Vec<_> =
      created.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
      keys,
      ["data_atualizacao", "data_criacao", "id", "idade", "nome"]
    );
  }

  #[tokio::test]
  async fn create_validates_idade_range() {
    let app = app().await;

    for idade in [-1, 120] {
      let (status, body) = request(
        &app,
        "POST",
        "/cadastros/",
        Some(json!({"nome": "Ana", "idade": idade})),
      )
      .await;
      assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "idade {idade}");
      assert!(body["detail"].as_str().unwrap().contains("idade"));
    }

    for idade in [0, 119] {
      let (status, _) = request(
        &app,
        "POST",
        "/cadastros/",
        Some(json!({"nome": "Ana", "idade": idade})),
      )
      .await;
      assert_eq!(status, StatusCode::OK, "idade {idade}");
    }
  }

  #[tokio::test]
  async fn create_rejects_empty_nome() {
    let app = app().await;
    let (status, _) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "", "idade": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn create_honors_caller_supplied_id() {
    let app = app().await;
    let (status, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({
        "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "nome": "Bruno",
        "idade": 42,
      })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], "01ARZ3NDEKTSV4RRFFQ69G5FAV");
  }

  // ── Get ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_unknown_id_returns_404_with_detail() {
    let app = app().await;
    let (status, body) =
      request(&app, "GET", "/cadastros/nao-existe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "id = nao-existe não encontrado");
  }

  // ── List ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_exactly_the_created_records() {
    let app = app().await;

    let mut expected = std::collections::HashSet::new();
    for nome in ["Ana", "Bruno", "Carla"] {
      let (_, created) = request(
        &app,
        "POST",
        "/cadastros/",
        Some(json!({"nome": nome, "idade": 30})),
      )
      .await;
      expected.insert(created["id"].as_str().unwrap().to_owned());
    }

    let (status, listed) = request(&app, "GET", "/cadastros/", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 3);
    let ids: std::collections::HashSet<_> = listed
      .iter()
      .map(|c| c["id"].as_str().unwrap().to_owned())
      .collect();
    assert_eq!(ids, expected);
  }

  // ── Patch ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn patch_idade_keeps_nome() {
    let app = app().await;
    let (_, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = request(
      &app,
      "PATCH",
      &format!("/cadastros/{id}"),
      Some(json!({"idade": 31})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "Ana");
    assert_eq!(updated["idade"], 31);
  }

  #[tokio::test]
  async fn patch_empty_body_keeps_both_fields() {
    let app = app().await;
    let (_, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) =
      request(&app, "PATCH", &format!("/cadastros/{id}"), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "Ana");
    assert_eq!(updated["idade"], 30);
  }

  #[tokio::test]
  async fn patch_validates_idade_range() {
    let app = app().await;
    let (_, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = request(
      &app,
      "PATCH",
      &format!("/cadastros/{id}"),
      Some(json!({"idade": 120})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn patch_unknown_id_returns_404() {
    let app = app().await;
    let (status, body) = request(
      &app,
      "PATCH",
      "/cadastros/nao-existe",
      Some(json!({"idade": 31})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "id = nao-existe não encontrado");
  }

  // ── Delete ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_unknown_id_returns_404() {
    let app = app().await;
    let (status, body) =
      request(&app, "DELETE", "/cadastros/nao-existe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "id = nao-existe não encontrado");
  }

  // ── Full lifecycle ──────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_get_patch_delete_scenario() {
    let app = app().await;

    let (status, created) = request(
      &app,
      "POST",
      "/cadastros/",
      Some(json!({"nome": "Ana", "idade": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, fetched) =
      request(&app, "GET", &format!("/cadastros/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = request(
      &app,
      "PATCH",
      &format!("/cadastros/{id}"),
      Some(json!({"idade": 31})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "Ana");
    assert_eq!(updated["idade"], 31);

    let (status, _) =
      request(&app, "DELETE", &format!("/cadastros/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) =
      request(&app, "GET", &format!("/cadastros/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains(&id));
  }
}
