//! Typed identifiers shared across services.
//!
//! Each identifier type is declared with [`define_resource_id!`](crate::define_resource_id)
//! and listed in [`templates`], the single startup list the global
//! [`Registry`](crate::Registry) is built from.
//!
//! # Example
//!
//! ```rust
//! use resource_ids::commonids::{KeyVaultId, ResourceGroupId};
//! use resource_ids::ResourceId;
//!
//! let vault = KeyVaultId::parse_insensitively(
//!     "/subscriptions/1234/resourcegroups/rg/providers/microsoft.keyvault/vaults/kv1",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     vault.to_string(),
//!     "/subscriptions/1234/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv1"
//! );
//! let group = ResourceGroupId::new(vault.subscription_id(), vault.resource_group_name());
//! assert_eq!(group.id(), "/subscriptions/1234/resourceGroups/rg");
//! ```

mod authorization;
mod cdn;
mod compute;
mod key_vault;
mod managed_identity;
mod network;
mod resource_manager;
mod storage;
mod web;

pub use authorization::ScopedRoleAssignmentScheduleInstanceId;
pub use cdn::CdnOriginGroupId;
pub use compute::VirtualMachineId;
pub use key_vault::KeyVaultId;
pub use managed_identity::UserAssignedIdentityId;
pub use network::SubnetId;
pub use resource_manager::{ResourceGroupId, ResourceProviderId, ScopeId, SubscriptionId};
pub use storage::{StorageAccountId, StorageAccountServiceId, STORAGE_SERVICE_TYPES};
pub use web::{AppServicePlanId, WebAppSlotId};

use crate::resource_id::ResourceId;
use crate::template::IdentifierTemplate;

const TEMPLATES: &[IdentifierTemplate] = &[
    SubscriptionId::TEMPLATE,
    ResourceGroupId::TEMPLATE,
    ResourceProviderId::TEMPLATE,
    ScopeId::TEMPLATE,
    CdnOriginGroupId::TEMPLATE,
    ScopedRoleAssignmentScheduleInstanceId::TEMPLATE,
    KeyVaultId::TEMPLATE,
    StorageAccountId::TEMPLATE,
    StorageAccountServiceId::TEMPLATE,
    SubnetId::TEMPLATE,
    AppServicePlanId::TEMPLATE,
    WebAppSlotId::TEMPLATE,
    UserAssignedIdentityId::TEMPLATE,
    VirtualMachineId::TEMPLATE,
];

/// Returns the templates of every identifier type in this module.
#[must_use]
pub const fn templates() -> &'static [IdentifierTemplate] {
    TEMPLATES
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SubscriptionId>();
    assert_send_sync::<ResourceGroupId>();
    assert_send_sync::<ScopeId>();
    assert_send_sync::<CdnOriginGroupId>();
    assert_send_sync::<ScopedRoleAssignmentScheduleInstanceId>();
};
