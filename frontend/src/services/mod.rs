//! Browser implementations of the seams defined in `common`.

pub mod http_store;
pub mod local_storage;
