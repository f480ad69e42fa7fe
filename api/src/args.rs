use clap::{Args as ClapArgs, Parser, ValueEnum};
use rbac_admin_core::domain::common::{DatabaseConfig, RbacAdminConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "rbac-admin-api", author, version, about = "RBAC admin HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "rbac_admin")]
    pub name: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        id = "server_host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server_port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api/v1`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

impl From<Args> for RbacAdminConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_flags() {
        let args = Args::parse_from([
            "rbac-admin-api",
            "--database-host",
            "db.internal",
            "--server-root-path",
            "/api/v1",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.root_path, "/api/v1");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(args.log.format, LogFormat::Text);

        let config = RbacAdminConfig::from(args);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_database_and_server_endpoints_are_independent() {
        let args = Args::parse_from([
            "rbac-admin-api",
            "--database-host",
            "db.internal",
            "--database-port",
            "6543",
            "--server-host",
            "127.0.0.1",
            "--server-port",
            "8080",
        ]);

        assert_eq!(args.db.host, "db.internal");
        assert_eq!(args.db.port, 6543);
        assert_eq!(args.server.host, "127.0.0.1");
        assert_eq!(args.server.port, 8080);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }
}
