use crate::api::profile::error::ProfileError;
use crate::api::profile::interfaces::{
    AccentColor, MediaCreator, MediaItem, MediaType, Profile, ProfileUpdate,
};
use crate::api::profile::service::ProfileService;
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Deterministic in-memory [`ProfileService`] for development and
/// tests: canned profile data, configurable artificial latency, no
/// persistence beyond the lifetime of the instance.
///
/// Follow state and the viewer's own profile live behind a mutex so
/// that follow/unfollow round-trips and sparse updates are visible to
/// subsequent fetches.
pub struct MockProfileService {
    viewer: String,
    latency: Duration,
    state: Mutex<MockState>,
}

struct MockState {
    own_profile: Profile,
    followed: HashSet<String>,
}

impl MockProfileService {
    #[must_use]
    pub fn new(viewer: impl Into<String>) -> Self {
        let viewer = viewer.into();
        let mut own_profile = sample_profile(&viewer);
        own_profile.is_own_profile = true;
        Self {
            viewer,
            latency: Duration::from_millis(300),
            state: Mutex::new(MockState {
                own_profile,
                followed: HashSet::new(),
            }),
        }
    }

    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProfileService for MockProfileService {
    async fn profile_by_username(&self, username: &str) -> Result<Profile, ProfileError> {
        self.simulate_latency().await;
        if username.trim().is_empty() {
            return Err(ProfileError::NotFound(username.to_owned()));
        }

        let state = self.state.lock().await;
        if username == self.viewer {
            debug!(username, "returning own canned profile");
            return Ok(state.own_profile.clone());
        }

        let mut profile = sample_profile(username);
        profile.is_following = state.followed.contains(username);
        debug!(username, "returning canned profile");
        Ok(profile)
    }

    async fn follow(&self, username: &str) -> Result<(), ProfileError> {
        self.simulate_latency().await;
        if username == self.viewer {
            return Err(ProfileError::SelfFollow(username.to_owned()));
        }
        let mut state = self.state.lock().await;
        state.followed.insert(username.to_owned());
        info!(username, "following user");
        Ok(())
    }

    async fn unfollow(&self, username: &str) -> Result<(), ProfileError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.followed.remove(username);
        info!(username, "unfollowing user");
        Ok(())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ProfileError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        update.apply_to(&mut state.own_profile);
        info!(username = self.viewer, "updated own profile");
        Ok(state.own_profile.clone())
    }
}

/// Development fixture shared by every mock lookup. The username is the
/// caller's; everything else is stable so tests can rely on it.
fn sample_profile(username: &str) -> Profile {
    Profile {
        username: username.to_owned(),
        display_name: "Alex Rivera".to_owned(),
        bio: "Visual storyteller exploring the intersection of urban landscapes \
              and human emotion. Based in Portland."
            .to_owned(),
        profile_picture: "https://i.pravatar.cc/300".to_owned(),
        accent_color: AccentColor::Teal,
        followers: 1240,
        following: 350,
        is_following: false,
        is_own_profile: false,
        tags: vec![
            "photographer".to_owned(),
            "filmmaker".to_owned(),
            "urban".to_owned(),
            "documentary".to_owned(),
        ],
        media: sample_media(),
        created_at: None,
        updated_at: None,
    }
}

fn sample_media() -> Vec<MediaItem> {
    let creator = |id: &str| MediaCreator {
        id: id.to_owned(),
        username: "Alex Rivera".to_owned(),
        avatar_url: "https://i.pravatar.cc/150".to_owned(),
    };
    vec![
        MediaItem {
            id: "1".to_owned(),
            url: "/assets/sample1.jpg".to_owned(),
            thumbnail_url: "/assets/sample1-thumb.jpg".to_owned(),
            media_type: MediaType::Image,
            title: "Downtown Reflections".to_owned(),
            tags: vec!["urban".to_owned(), "photography".to_owned()],
            likes: 124,
            bookmarks: 38,
            creator: creator("1"),
            liked: false,
            bookmarked: false,
            created_at: None,
        },
        MediaItem {
            id: "2".to_owned(),
            url: "/assets/sample3.mp4".to_owned(),
            thumbnail_url: "/assets/sample3-thumb.jpg".to_owned(),
            media_type: MediaType::Video,
            title: "City in Motion".to_owned(),
            tags: vec!["timelapse".to_owned(), "urban".to_owned()],
            likes: 210,
            bookmarks: 52,
            creator: creator("2"),
            liked: false,
            bookmarked: false,
            created_at: None,
        },
        MediaItem {
            id: "3".to_owned(),
            url: "/assets/sample4.mp3".to_owned(),
            thumbnail_url: "/assets/sample4-thumb.jpg".to_owned(),
            media_type: MediaType::Audio,
            title: "Street Sounds".to_owned(),
            tags: vec!["audio".to_owned(), "urban".to_owned()],
            likes: 64,
            bookmarks: 12,
            creator: creator("3"),
            liked: false,
            bookmarked: false,
            created_at: None,
        },
    ]
}
