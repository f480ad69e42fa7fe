use crate::{
    domain::common::{RbacAdminConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        dict::PostgresDictRepository,
        user::PostgresUserRepository,
    },
};

pub type RbacAdminService = Service<PostgresUserRepository, PostgresDictRepository>;

pub async fn create_service(config: RbacAdminConfig) -> Result<RbacAdminService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresDictRepository::new(postgres.get_db()),
    ))
}
