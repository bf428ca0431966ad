use {
    anyhow::bail,
    async_trait::async_trait,
    photo_share_httpd::{
        oauth::{GithubAuthorization, OAuthProvider},
        random_user::ProfileGenerator,
    },
    photo_share_sql::entity::users,
    std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    },
};

/// OAuth provider answering from a fixed table of codes. Unknown codes are
/// rejected the way GitHub rejects them.
#[derive(Default)]
pub struct FakeOAuthProvider {
    authorizations: Mutex<HashMap<String, GithubAuthorization>>,
}

impl FakeOAuthProvider {
    pub fn register(&self, code: &str, authorization: GithubAuthorization) {
        self.authorizations
            .lock()
            .expect("poisoned authorizations")
            .insert(code.to_string(), authorization);
    }
}

#[async_trait]
impl OAuthProvider for FakeOAuthProvider {
    async fn authorize(&self, code: &str) -> anyhow::Result<GithubAuthorization> {
        let authorization = self
            .authorizations
            .lock()
            .expect("poisoned authorizations")
            .get(code)
            .cloned();

        match authorization {
            Some(authorization) => Ok(authorization),
            None => bail!("Bad credentials"),
        }
    }
}

/// Generates `fake-user-{n}` profiles, or replays the profiles handed to
/// [`FakeProfileGenerator::replay`], and counts how often it was asked to.
#[derive(Default)]
pub struct FakeProfileGenerator {
    calls: AtomicUsize,
    replay: Mutex<Option<Vec<users::Model>>>,
}

impl FakeProfileGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Answer every following call with `profiles`, whatever the count.
    pub fn replay(&self, profiles: Vec<users::Model>) {
        *self.replay.lock().expect("poisoned replay") = Some(profiles);
    }
}

#[async_trait]
impl ProfileGenerator for FakeProfileGenerator {
    async fn generate(&self, count: u32) -> anyhow::Result<Vec<users::Model>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(profiles) = self.replay.lock().expect("poisoned replay").clone() {
            return Ok(profiles);
        }

        Ok((0..count)
            .map(|n| users::Model {
                github_login: format!("fake-user-{n}"),
                name: Some(format!("Fake User {n}")),
                avatar: Some(format!("https://randomuser.me/api/portraits/thumb/men/{n}.jpg")),
                github_token: format!("fake-token-{n}"),
            })
            .collect())
    }
}
