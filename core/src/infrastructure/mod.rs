pub mod db;
pub mod dept;
pub mod dict;
pub mod role;
pub mod user;
