//! Handlers for `/cadastros` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST`   | `/cadastros/` | Body: [`NewContact`]; returns the stored record |
//! | `GET`    | `/cadastros/` | All records, unspecified order |
//! | `GET`    | `/cadastros/:id` | 404 if not found |
//! | `PATCH`  | `/cadastros/:id` | Body: [`ContactEdit`]; absent fields are kept |
//! | `DELETE` | `/cadastros/:id` | 204 on success, 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use cadastro_core::{
  contact::{Contact, ContactEdit, NewContact},
  store::ContactStore,
};

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /cadastros/` — validation runs before any persistence attempt;
/// `id` and the timestamps are generated server-side when absent.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewContact>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let contact = store
    .add_contact(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contact))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /cadastros/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contacts))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /cadastros/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .get_contact(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::id_not_found(&id))?;
  Ok(Json(contact))
}

// ─── Edit ────────────────────────────────────────────────────────────────────

/// `PATCH /cadastros/:id` — applies only the fields present in the body.
/// An empty body is a no-op write that still returns the record.
pub async fn edit_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<ContactEdit>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let contact = store
    .update_contact(&id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::id_not_found(&id))?;
  Ok(Json(contact))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /cadastros/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed = store
    .delete_contact(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::id_not_found(&id));
  }
  Ok(StatusCode::NO_CONTENT)
}
