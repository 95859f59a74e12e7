//! Services module
//!
//! This module contains the business logic services built on top of the
//! backend collaborators and the shared plan store.

pub mod directory;
pub mod invitation;
pub mod membership;
pub mod plans;
pub mod profile;

// Re-export commonly used services
pub use directory::DirectoryService;
pub use invitation::InvitationService;
pub use membership::MembershipService;
pub use plans::PlanService;
pub use profile::ProfileService;

use crate::api::{ApiClient, ImageApi, InvitationApi, PlanApi, ProfileApi, VerificationApi};
use crate::config::Settings;
use crate::store::{self, SharedPlanStore};
use crate::utils::errors::Result;

/// Service factory wiring all services around one shared plan store.
///
/// This is the explicit session context: construct exactly one per
/// running app session and pass it to callers instead of reaching for
/// global state. Dropping it tears down the session; responses from
/// requests still in flight have nowhere to land.
pub struct ServiceFactory {
    pub settings: Settings,
    pub plan_service: PlanService,
    pub membership_service: MembershipService,
    pub profile_service: ProfileService,
    pub invitation_service: InvitationService,
    pub directory_service: DirectoryService,
    store: SharedPlanStore,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let client = ApiClient::new(&settings.api)?;
        let plan_api = PlanApi::new(client.clone());
        let profile_api = ProfileApi::new(client.clone());
        let invitation_api = InvitationApi::new(client);
        let verification_api = VerificationApi::new(settings.clone())?;
        let image_api = ImageApi::new(settings.clone())?;

        let store = store::shared_store();

        let plan_service = PlanService::new(plan_api.clone(), store.clone());
        let membership_service = MembershipService::new(plan_api, store.clone());
        let profile_service =
            ProfileService::new(profile_api, verification_api, image_api, settings.clone());
        let invitation_service =
            InvitationService::new(invitation_api, membership_service.clone(), store.clone());
        let directory_service = DirectoryService::new(store.clone());

        Ok(Self {
            settings,
            plan_service,
            membership_service,
            profile_service,
            invitation_service,
            directory_service,
            store,
        })
    }

    /// Shared handle to the session's plan store
    pub fn store(&self) -> SharedPlanStore {
        self.store.clone()
    }
}
