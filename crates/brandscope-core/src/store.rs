use std::future::Future;

use crate::error::StoreError;
use crate::profile::BrandProfile;

/// Persistence collaborator for finished profiles.
///
/// Implementations own their storage format. A failed `store` never affects
/// the profile the caller already holds.
pub trait ProfileStore {
    /// Persist `profile` for `project_id` and return the stored record id.
    fn store(
        &self,
        project_id: &str,
        profile: &BrandProfile,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Read back the profile stored for `project_id`.
    fn load(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<BrandProfile, StoreError>> + Send;
}
