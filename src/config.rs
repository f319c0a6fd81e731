use std::net::{IpAddr, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    /// Allowed CORS origin in production. Other environments allow any origin.
    pub frontend_url: Option<String>,
    pub admin_bootstrap: Option<AdminBootstrap>,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Credentials for an admin account ensured at startup.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT` / `PORT`, `ENVIRONMENT`, `LOG_LEVEL`
    /// Optional: `FRONTEND_URL`
    /// Optional: `ADMIN_USERNAME`, `ADMIN_EMAIL`, `ADMIN_PASSWORD` (all three or none)
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, if `SERVER_HOST` / `SERVER_PORT`
    /// contain invalid values, or if the admin bootstrap variables are only partially set.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = parse_environment(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        // Containers need to listen on all interfaces
        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url = std::env::var("FRONTEND_URL").ok();

        let admin_bootstrap = admin_bootstrap_from(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            admin_bootstrap,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_environment(value: &str) -> Environment {
    match value {
        "production" => Environment::Production,
        "staging" => Environment::Staging,
        _ => Environment::Development,
    }
}

fn admin_bootstrap_from(
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<Option<AdminBootstrap>> {
    match (username, email, password) {
        (Some(username), Some(email), Some(password)) => Ok(Some(AdminBootstrap {
            username,
            email,
            password,
        })),
        (None, None, None) => Ok(None),
        _ => Err(anyhow::anyhow!(
            "ADMIN_USERNAME, ADMIN_EMAIL and ADMIN_PASSWORD must be set together"
        )),
    }
}
