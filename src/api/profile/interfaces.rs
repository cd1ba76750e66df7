use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a published asset. Immutable once the asset exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    /// Top-level storage folder objects of this kind are grouped under.
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Video => "videos",
            Self::Audio => "audios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Coral,
    Teal,
    Mustard,
}

/// Weak reference to the account that published a media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCreator {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
}

/// A single published asset as seen by the viewing actor; `liked` and
/// `bookmarked` are viewer-relative, the counters are global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub bookmarks: u32,
    pub creator: MediaCreator,
    pub liked: bool,
    pub bookmarked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An account's public aggregate. `is_own_profile` and `is_following`
/// are computed relative to the viewing actor and are mutually
/// exclusive (an actor does not follow themself).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub profile_picture: String,
    #[serde(default)]
    pub accent_color: AccentColor,
    pub followers: u32,
    pub following: u32,
    pub is_following: bool,
    pub is_own_profile: bool,
    pub tags: Vec<String>,
    pub media: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Sparse profile update; unset fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// Applies the set fields on top of `profile`, leaving the rest
    /// untouched, and stamps `updated_at`.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(display_name) = &self.display_name {
            profile.display_name = display_name.clone();
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
        if let Some(profile_picture) = &self.profile_picture {
            profile.profile_picture = profile_picture.clone();
        }
        if let Some(accent_color) = self.accent_color {
            profile.accent_color = accent_color;
        }
        if let Some(tags) = &self.tags {
            profile.tags = tags.clone();
        }
        profile.updated_at = Some(Utc::now());
    }
}
