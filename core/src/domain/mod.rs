pub mod common;
pub mod dept;
pub mod dict;
pub mod mapping;
pub mod query;
pub mod role;
pub mod user;
