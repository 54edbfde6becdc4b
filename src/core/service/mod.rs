//! Application-domain helpers: the library code the `test` target covers.

pub mod envelope;
pub mod records;
pub mod users;
pub mod validate;
