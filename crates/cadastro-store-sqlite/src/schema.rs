//! SQL schema for the cadastro SQLite store.
//!
//! Executed once at connection startup.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS cadastros (
    id               TEXT PRIMARY KEY,   -- ULID, lexicographically sortable
    nome             TEXT NOT NULL,
    idade            INTEGER NOT NULL CHECK (idade >= 0 AND idade < 120),
    data_criacao     REAL NOT NULL,      -- Unix seconds
    data_atualizacao REAL NOT NULL       -- Unix seconds; stamped on every write
);
";
