/// Port used when `DB_PORT` is unset or unusable.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Connection settings for the database being checked.
///
/// Fields left as `None` fall through to the driver's own defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: u16,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DbConfig {
    /// Read `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`
    /// from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            host: get("DB_HOST"),
            port: parse_port(get("DB_PORT").as_deref()),
            database: get("DB_NAME"),
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_DB_PORT,
            database: None,
            user: None,
            password: None,
        }
    }
}

// Password is never printed.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Parse a port number from its leading digits (`"5433abc"` is 5433),
/// falling back to [`DEFAULT_DB_PORT`].
pub fn parse_port(raw: Option<&str>) -> u16 {
    raw.map(leading_digits)
        .and_then(|digits| digits.parse::<u16>().ok())
        .filter(|&port| port != 0)
        .unwrap_or_else(|| {
            if let Some(value) = raw.filter(|s| !s.is_empty()) {
                tracing::warn!("Ignoring invalid DB_PORT {value:?}, using {DEFAULT_DB_PORT}");
            }
            DEFAULT_DB_PORT
        })
}

fn leading_digits(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}
