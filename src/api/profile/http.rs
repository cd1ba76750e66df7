use crate::api::profile::error::ProfileError;
use crate::api::profile::interfaces::{Profile, ProfileUpdate};
use crate::api::profile::service::ProfileService;
use crate::config::ProfileApiConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

/// [`ProfileService`] backed by the remote profile API.
///
/// Endpoints, relative to the configured base URL:
/// `GET {base}/{username}`, `POST {base}/{username}/follow`,
/// `POST {base}/{username}/unfollow`, `PUT {base}`.
#[derive(Clone)]
pub struct HttpProfileService {
    http_client: Client,
    config: ProfileApiConfig,
    viewer: String,
}

impl HttpProfileService {
    #[must_use]
    pub fn new(http_client: Client, config: ProfileApiConfig, viewer: impl Into<String>) -> Self {
        Self {
            http_client,
            config,
            viewer: viewer.into(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProfileError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProfileError::InvalidBaseUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Turns a non-success response into a [`ProfileError::Remote`],
/// carrying whatever body text the server sent along.
async fn check(response: Response) -> Result<Response, ProfileError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ProfileError::Remote {
        status: status.as_u16(),
        message,
    })
}

/// Maps a profile-lookup response: 404 becomes [`ProfileError::NotFound`],
/// other failures go through [`check`], and a success body is parsed
/// with `is_own_profile` recomputed against the viewer.
async fn parse_profile_response(
    viewer: &str,
    username: &str,
    response: Response,
) -> Result<Profile, ProfileError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ProfileError::NotFound(username.to_owned()));
    }
    let mut profile: Profile = check(response).await?.json().await?;
    // The server does not know who is asking unless authenticated;
    // recompute the viewer-relative flag locally either way.
    profile.is_own_profile = profile.username == viewer;
    Ok(profile)
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn profile_by_username(&self, username: &str) -> Result<Profile, ProfileError> {
        let url = self.endpoint(&[username])?;
        debug!(username, %url, "fetching profile");
        let response = self.authorize(self.http_client.get(url)).send().await?;
        parse_profile_response(&self.viewer, username, response).await
    }

    async fn follow(&self, username: &str) -> Result<(), ProfileError> {
        if username == self.viewer {
            return Err(ProfileError::SelfFollow(username.to_owned()));
        }
        let url = self.endpoint(&[username, "follow"])?;
        let response = self.authorize(self.http_client.post(url)).send().await?;
        check(response).await?;
        info!(username, "followed user");
        Ok(())
    }

    async fn unfollow(&self, username: &str) -> Result<(), ProfileError> {
        let url = self.endpoint(&[username, "unfollow"])?;
        let response = self.authorize(self.http_client.post(url)).send().await?;
        check(response).await?;
        info!(username, "unfollowed user");
        Ok(())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ProfileError> {
        let url = self.config.base_url.clone();
        let response = self
            .authorize(self.http_client.put(url).json(&update))
            .send()
            .await?;
        let profile: Profile = check(response).await?.json().await?;
        info!(username = self.viewer, "updated profile");
        Ok(profile)
    }
}
