use {
    crate::config::GithubConfig,
    anyhow::bail,
    async_trait::async_trait,
    reqwest::header::{ACCEPT, AUTHORIZATION},
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

const USER_AGENT: &str = concat!("photo-share-api/", env!("CARGO_PKG_VERSION"));

/// What a successful login yields: the fresh access token and the profile
/// it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GithubAuthorization {
    pub access_token: String,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait OAuthProvider {
    /// Exchange an OAuth `code` for a token, then fetch the matching profile.
    async fn authorize(&self, code: &str) -> anyhow::Result<GithubAuthorization>;
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ProfileResponse {
    login: Option<String>,
    name: Option<String>,
    avatar_url: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    inner: reqwest::Client,
    client_id: String,
    client_secret: String,
    oauth_url: String,
    api_url: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            oauth_url: config.oauth_url.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn request_token(&self, code: &str) -> anyhow::Result<String> {
        let response: TokenResponse = self
            .inner
            .post(&self.oauth_url)
            .header(ACCEPT, "application/json")
            .json(&TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                code,
            })
            .send()
            .await?
            .json()
            .await?;

        if let Some(message) = response.message {
            bail!(message);
        }

        match response.access_token {
            Some(access_token) => Ok(access_token),
            None => bail!(response
                .error_description
                .or(response.error)
                .unwrap_or_else(|| "no access token in OAuth response".to_string())),
        }
    }

    async fn request_profile(&self, access_token: &str) -> anyhow::Result<ProfileResponse> {
        Ok(self
            .inner
            .get(format!("{}/user", self.api_url))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("token {access_token}"))
            .send()
            .await?
            .json()
            .await?)
    }
}

#[async_trait]
impl OAuthProvider for GithubClient {
    async fn authorize(&self, code: &str) -> anyhow::Result<GithubAuthorization> {
        let access_token = self.request_token(code).await.inspect_err(|error| {
            tracing::warn!(%error, "OAuth token exchange failed");
        })?;

        let profile = self.request_profile(&access_token).await?;

        if let Some(message) = profile.message {
            tracing::warn!(reason = %message, "OAuth profile request failed");
            bail!(message);
        }

        let Some(login) = profile.login else {
            bail!("no login in OAuth profile");
        };

        Ok(GithubAuthorization {
            access_token,
            login,
            name: profile.name,
            avatar_url: profile.avatar_url,
        })
    }
}
