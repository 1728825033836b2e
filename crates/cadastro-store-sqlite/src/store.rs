//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use cadastro_core::{
  contact::{Contact, ContactEdit, NewContact},
  id::IdGenerator,
  store::ContactStore,
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted and the id
/// generator is shared, so clones draw from one monotonic ULID sequence.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
  ids:  IdGenerator,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, ids: IdGenerator::new() };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, ids: IdGenerator::new() };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

/// Map a `cadastros` row to a [`Contact`]. Column order must match the
/// SELECT lists below.
fn contact_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
  Ok(Contact {
    id:               row.get(0)?,
    nome:             row.get(1)?,
    idade:            row.get(2)?,
    data_criacao:     row.get(3)?,
    data_atualizacao: row.get(4)?,
  })
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn add_contact(&self, new: NewContact) -> Result<Contact> {
    let contact = new.into_contact(&self.ids);

    let row = contact.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO cadastros (id, nome, idade, data_criacao, data_atualizacao)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            row.id,
            row.nome,
            row.idade,
            row.data_criacao,
            row.data_atualizacao,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact)
  }

  async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
    let id = id.to_owned();

    let contact = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, nome, idade, data_criacao, data_atualizacao
               FROM cadastros WHERE id = ?1",
              rusqlite::params![id],
              contact_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(contact)
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let contacts = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, nome, idade, data_criacao, data_atualizacao FROM cadastros",
        )?;
        let rows = stmt
          .query_map([], contact_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(contacts)
  }

  async fn update_contact(
    &self,
    id: &str,
    edit: ContactEdit,
  ) -> Result<Option<Contact>> {
    let id = id.to_owned();

    // Fetch, apply, re-persist inside one call so the read-modify-write runs
    // uninterrupted on the database thread.
    let updated = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, nome, idade, data_criacao, data_atualizacao
             FROM cadastros WHERE id = ?1",
            rusqlite::params![id],
            contact_from_row,
          )
          .optional()?;

        let Some(mut contact) = existing else {
          return Ok(None);
        };

        edit.apply(&mut contact);

        conn.execute(
          "UPDATE cadastros
           SET nome = ?2, idade = ?3, data_atualizacao = ?4
           WHERE id = ?1",
          rusqlite::params![
            contact.id,
            contact.nome,
            contact.idade,
            contact.data_atualizacao,
          ],
        )?;

        Ok(Some(contact))
      })
      .await?;

    Ok(updated)
  }

  async fn delete_contact(&self, id: &str) -> Result<bool> {
    let id = id.to_owned();

    let removed = self
      .conn
      .call(move |conn| {
        let n =
          conn.execute("DELETE FROM cadastros WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await?;

    Ok(removed)
  }
}
