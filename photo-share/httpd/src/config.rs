use serde::{Deserialize, Serialize};

/// Process configuration, loaded once at startup by `config_parser` and
/// handed to the components that need it.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub httpd: HttpdConfig,
    pub database: DatabaseConfig,
    pub github: GithubConfig,
    pub random_user: RandomUserConfig,
    pub photos: PhotosConfig,
    pub development: DevelopmentConfig,
    pub sentry: SentryConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            httpd: HttpdConfig::default(),
            database: DatabaseConfig::default(),
            github: GithubConfig::default(),
            random_user: RandomUserConfig::default(),
            photos: PhotosConfig::default(),
            development: DevelopmentConfig::default(),
            sentry: SentryConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HttpdConfig {
    pub ip: String,
    pub port: u16,
    /// Comma separated list of origins. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Default for HttpdConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 4000,
            cors_allowed_origin: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GithubConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Endpoint exchanging an OAuth `code` for an access token.
    pub oauth_url: String,
    /// Base URL of the REST API serving the `/user` profile.
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            oauth_url: "https://github.com/login/oauth/access_token".to_string(),
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RandomUserConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            url: "https://randomuser.me/api/".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PhotosConfig {
    pub url_base: String,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            url_base: "http://yoursite.com/img".to_string(),
        }
    }
}

impl PhotosConfig {
    pub fn photo_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{id}.jpg", self.url_base.trim_end_matches('/'))
    }
}

/// Switches on `fakeUserAuth` and `addFakeUsers`. Never enable in production.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DevelopmentConfig {
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub environment: String,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}
