pub mod mappers;
pub mod query;
pub mod repository;

pub use repository::PostgresUserRepository;
