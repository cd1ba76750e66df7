use crate::api::profile::error::ProfileError;
use crate::api::profile::interfaces::{Profile, ProfileUpdate};
use async_trait::async_trait;

/// Profile and follow-state operations, always performed on behalf of a
/// viewing actor fixed at construction time.
///
/// Implementations never panic across this boundary; every failure is
/// returned as a [`ProfileError`] value. Callers branch on the result,
/// no exception-style handling is needed at call sites.
///
/// Two implementations satisfy this contract:
/// [`crate::api::profile::mock::MockProfileService`] (canned data,
/// artificial latency, no persistence) and
/// [`crate::api::profile::http::HttpProfileService`] (remote profile
/// API). Which one a consumer gets is decided by whoever constructs it.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetches the public aggregate for `username`. `is_own_profile`
    /// is true iff `username` is the viewing actor's own;
    /// `is_following` reflects the viewer's relationship.
    async fn profile_by_username(&self, username: &str) -> Result<Profile, ProfileError>;

    /// Follows `username`. Following an already-followed user is not an
    /// error.
    async fn follow(&self, username: &str) -> Result<(), ProfileError>;

    /// Unfollows `username`. Unfollowing a non-followed user is not an
    /// error.
    async fn unfollow(&self, username: &str) -> Result<(), ProfileError>;

    /// Applies a sparse update to the viewing actor's own profile and
    /// returns the full resulting profile.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ProfileError>;
}
