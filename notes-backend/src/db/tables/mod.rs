//! Table-level operations, one file per table, all as `impl Database` blocks

pub mod notes;
