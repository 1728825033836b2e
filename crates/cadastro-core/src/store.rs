//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `cadastro-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactEdit, NewContact};

/// Abstraction over a cadastro storage backend.
///
/// Every operation is a single scoped unit of work against the backing
/// store: acquire, execute, commit, release on all paths. All methods return
/// `Send` futures so the trait can be used in multi-threaded async runtimes
/// (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fill server-generated defaults, insert the row, and return the full
  /// stored record. Id generation belongs to this path alone.
  ///
  /// The caller is expected to have validated `new` already.
  fn add_contact(
    &self,
    new: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// List every stored contact, in no particular order.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Apply the present fields of `edit` to an existing row, stamp
  /// `data_atualizacao`, re-persist, and return the updated record. Returns
  /// `None` if the id does not exist. An empty edit is still a write.
  fn update_contact<'a>(
    &'a self,
    id: &'a str,
    edit: ContactEdit,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Remove a row permanently. Returns `false` if the id does not exist.
  fn delete_contact<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}
