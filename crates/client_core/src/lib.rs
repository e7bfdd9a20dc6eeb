use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::User, error::DirectoryError};
use tracing::{debug, error};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const USERS_PATH: &str = "users";

/// Read side of the remote user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches the full listing in the order the directory returns it.
    ///
    /// Failures are logged before they are returned; callers decide how to recover.
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError>;
}

/// `GET {base}/users` over plain HTTP(S). No retries, no timeout, no cache.
pub struct HttpUserDirectory {
    http: Client,
    users_url: Url,
}

impl HttpUserDirectory {
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            users_url: users_endpoint(base_url)?,
        })
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    async fn request_users(&self) -> Result<Vec<User>, DirectoryError> {
        let response = self
            .http
            .get(self.users_url.clone())
            .send()
            .await
            .map_err(DirectoryError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(DirectoryError::decode)?;
        serde_json::from_slice::<Vec<User>>(&body).map_err(DirectoryError::decode)
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        match self.request_users().await {
            Ok(users) => {
                debug!(count = users.len(), url = %self.users_url, "fetched users");
                Ok(users)
            }
            Err(err) => {
                error!(kind = err.kind(), url = %self.users_url, "error fetching users: {err}");
                Err(err)
            }
        }
    }
}

/// Resolves the listing endpoint under `base_url`, keeping any path prefix the base carries.
pub fn users_endpoint(base_url: &Url) -> Result<Url, url::ParseError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(USERS_PATH)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
