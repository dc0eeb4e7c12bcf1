//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL issued by
//! [`ensure_schema`](super::ensure_schema) exactly.

diesel::table! {
    /// One row per area computation.
    ///
    /// `id` is a `BIGSERIAL`, so identifiers are never reused after deletion.
    calculations (id) {
        /// Primary key assigned by the sequence.
        id -> Int8,
        /// Shape name, currently always `square`.
        shape -> Varchar,
        /// Side length supplied by the caller.
        input_value -> Float8,
        /// Stored area; may be overwritten after creation.
        result -> Float8,
        /// Insert timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
