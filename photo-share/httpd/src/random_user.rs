use {
    crate::config::RandomUserConfig,
    async_trait::async_trait,
    photo_share_sql::entity::users,
    serde::Deserialize,
    std::time::Duration,
};

/// Source of synthetic users for seeding a development database.
#[async_trait]
pub trait ProfileGenerator {
    async fn generate(&self, count: u32) -> anyhow::Result<Vec<users::Model>>;
}

#[derive(Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUser>,
}

#[derive(Deserialize)]
struct RandomUser {
    login: RandomUserLogin,
    name: RandomUserName,
    picture: RandomUserPicture,
}

#[derive(Deserialize)]
struct RandomUserLogin {
    username: String,
    sha1: String,
}

#[derive(Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Deserialize)]
struct RandomUserPicture {
    thumbnail: String,
}

impl From<RandomUser> for users::Model {
    fn from(item: RandomUser) -> Self {
        Self {
            github_login: item.login.username,
            name: Some(format!("{} {}", item.name.first, item.name.last)),
            avatar: Some(item.picture.thumbnail),
            github_token: item.login.sha1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    inner: reqwest::Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(config: &RandomUserConfig) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl ProfileGenerator for RandomUserClient {
    async fn generate(&self, count: u32) -> anyhow::Result<Vec<users::Model>> {
        let response: RandomUserResponse = self
            .inner
            .get(&self.url)
            .query(&[("results", count)])
            .send()
            .await?
            .json()
            .await?;

        Ok(response.results.into_iter().map(Into::into).collect())
    }
}
