//! Replays one captured GET against the Taobao live check-info API and hands
//! back the raw JSONP body.

use async_trait::async_trait;
use std::error::Error as StdError;
use tracing::debug;

pub mod webapi;

type GeneralError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport failed: {0}")]
    Transport(#[from] GeneralError),

    #[error("reqwest failed")]
    Reqwest(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The one HTTP capability this crate needs: a GET that applies the given
/// headers as-is and returns the body text.
#[async_trait]
pub trait AsyncClient {
    type Error: Into<Error>;

    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<String, Self::Error>;
}

#[async_trait]
impl AsyncClient for reqwest::Client {
    type Error = reqwest::Error;

    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<String, Self::Error> {
        let mut request = self.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request.send().await?.text().await
    }
}

/// Issues the captured check-info request.
pub struct CheckInfo<T: AsyncClient> {
    client: T,
}

impl CheckInfo<reqwest::Client> {
    pub fn reqwest() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl<T: AsyncClient> CheckInfo<T> {
    pub fn custom(client: T) -> Self {
        Self { client }
    }

    /// One GET to the check-info endpoint with the captured header and cookie
    /// set. The body comes back exactly as the service sent it, JSONP wrapper
    /// included; any transport error propagates untouched.
    pub async fn fetch(&self) -> Result<String> {
        debug!(
            url = webapi::CHECK_INFO_URL,
            callback = webapi::JSONP_CALLBACK,
            "requesting live check info"
        );
        self.client
            .get(webapi::CHECK_INFO_URL, &webapi::request_headers())
            .await
            .map_err(Into::into)
    }
}
