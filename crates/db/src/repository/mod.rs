//! Repository functions — one function per database operation.
//!
//! Every function takes a `&mut SqliteConnection` so it runs the same on a
//! pooled connection or inside a transaction, and returns a
//! `Result<T, DbError>`.  No business logic, no domain types — pure SQL.

pub mod blogs;
