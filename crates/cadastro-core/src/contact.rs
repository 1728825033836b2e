//! Contact — the persisted record and its request shapes.
//!
//! Field names are the wire names: the JSON representation of a [`Contact`]
//! is `{id, nome, idade, data_criacao, data_atualizacao}` with the
//! timestamps as fractional Unix seconds.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, clock, id::IdGenerator};

/// Inclusive lower bound on `idade`.
pub const IDADE_MIN: i64 = 0;
/// Exclusive upper bound on `idade`.
pub const IDADE_MAX: i64 = 120;

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A persisted contact record.
///
/// `id` is a ULID assigned at creation and immutable afterwards.
/// `data_criacao` is set once; `data_atualizacao` is stamped on every
/// mutating write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  pub id:               String,
  pub nome:             String,
  pub idade:            i64,
  pub data_criacao:     f64,
  pub data_atualizacao: f64,
}

// ─── Create payload ──────────────────────────────────────────────────────────

/// The create payload. `nome` and `idade` are required; `id` and the
/// timestamps are filled server-side when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContact {
  pub id:               Option<String>,
  pub nome:             String,
  pub idade:            i64,
  pub data_criacao:     Option<f64>,
  pub data_atualizacao: Option<f64>,
}

impl NewContact {
  /// Check the presence and range constraints. Runs before any persistence
  /// attempt.
  pub fn validate(&self) -> Result<()> {
    validate_nome(&self.nome)?;
    validate_idade(self.idade)?;
    Ok(())
  }

  /// Fill the server-generated fields the caller omitted and produce the
  /// full record. Caller-supplied values win over generated ones.
  pub fn into_contact(self, ids: &IdGenerator) -> Contact {
    let now = clock::now_unix();
    Contact {
      id:               self.id.unwrap_or_else(|| ids.next_id()),
      nome:             self.nome,
      idade:            self.idade,
      data_criacao:     self.data_criacao.unwrap_or(now),
      data_atualizacao: self.data_atualizacao.unwrap_or(now),
    }
  }
}

// ─── Partial edit ────────────────────────────────────────────────────────────

/// A partial edit of an existing [`Contact`]. Absent fields leave the stored
/// value unchanged; an edit can never null out a stored field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactEdit {
  pub nome:  Option<String>,
  pub idade: Option<i64>,
}

impl ContactEdit {
  /// Check the constraints on whichever fields are present.
  pub fn validate(&self) -> Result<()> {
    if let Some(nome) = &self.nome {
      validate_nome(nome)?;
    }
    if let Some(idade) = self.idade {
      validate_idade(idade)?;
    }
    Ok(())
  }

  /// Overwrite the fields present in the edit and stamp the update time.
  /// An empty edit only refreshes `data_atualizacao`.
  pub fn apply(&self, contact: &mut Contact) {
    if let Some(nome) = &self.nome {
      contact.nome = nome.clone();
    }
    if let Some(idade) = self.idade {
      contact.idade = idade;
    }
    contact.data_atualizacao = clock::now_unix();
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

fn validate_nome(nome: &str) -> Result<()> {
  if nome.is_empty() {
    return Err(Error::EmptyNome);
  }
  Ok(())
}

fn validate_idade(idade: i64) -> Result<()> {
  if !(IDADE_MIN..IDADE_MAX).contains(&idade) {
    return Err(Error::IdadeOutOfRange(idade));
  }
  Ok(())
}
