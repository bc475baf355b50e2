//! HTTP server command
//!
//! Resolves flags/env into server and store configuration, builds the store,
//! and runs the server until shutdown.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use portfolio_server::config::DEFAULT_BODY_LIMIT;
use portfolio_server::db::{create_pool, MemoryStore, PgStore, ProjectStore};
use portfolio_server::{run_server, ServerConfig, StoreConfig};

/// Arguments for serving the API
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "PORTFOLIO_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Database URL (overrides the discrete --db-* settings)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "cadastro-p")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "PORTFOLIO_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds a request may wait for a pooled connection
    #[arg(long, env = "PORTFOLIO_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub acquire_timeout_secs: u64,

    /// Directory served for unmatched GET paths (ignored if missing)
    #[arg(long, env = "PORTFOLIO_STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Keep projects in memory instead of Postgres (front-end development)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            static_dir: Some(self.static_dir.clone()),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn ProjectStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - projects are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let store_config = args.store_config();
        tracing::info!(store = %store_config.describe(), "Configuring database pool");
        let pool = create_pool(&store_config).context("Failed to create database pool")?;
        Arc::new(PgStore::new(pool))
    };

    // Run server (blocks until shutdown)
    run_server(store, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        TestCli::try_parse_from(std::iter::once("portfolio").chain(args.iter().copied()))
            .expect("valid args")
            .serve
    }

    #[test]
    fn flags_build_configs() {
        let args = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-user",
            "app",
            "--db-password",
            "secret",
            "--db-name",
            "portfolio",
            "--max-connections",
            "4",
            "--acquire-timeout-secs",
            "5",
        ]);

        let server = args.server_config();
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.body_limit, 10 * 1024 * 1024);

        let store = args.store_config();
        assert_eq!(store.host, "db.internal");
        assert_eq!(store.port, 6543);
        assert_eq!(store.user, "app");
        assert_eq!(store.password.as_deref(), Some("secret"));
        assert_eq!(store.database, "portfolio");
        assert_eq!(store.max_connections, 4);
        assert_eq!(store.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn database_url_flag_is_carried() {
        let args = parse(&["--database-url", "postgres://app@db/portfolio", "--in-memory"]);
        assert!(args.in_memory);
        assert_eq!(
            args.store_config().url.as_deref(),
            Some("postgres://app@db/portfolio")
        );
    }

    #[test]
    fn rejects_bad_port() {
        let result = TestCli::try_parse_from(["portfolio", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unparsable_database_url_fails_before_serving() {
        let args = parse(&["--database-url", "not a url", "--port", "0"]);
        let err = run_serve(args).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create database pool");
    }
}
