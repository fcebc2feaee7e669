//! Key Vault identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A Key Vault.
    pub struct KeyVaultId {
        type_name: "KeyVault",
        display_name: "Key Vault",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
            Segment::static_segment("staticVaults", "vaults"),
            Segment::user_specified("vaultName", "vaultValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            vault_name => "vaultName",
        },
    }
}
