//! Typed mirrors of the REST API schemas.

pub mod asset;
pub mod task;
pub mod template;
pub mod user;
pub mod value;
