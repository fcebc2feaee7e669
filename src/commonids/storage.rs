//! Storage identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

/// The sub-services of a storage account.
pub const STORAGE_SERVICE_TYPES: &[&str] = &[
    "blobServices",
    "fileServices",
    "queueServices",
    "tableServices",
];

define_resource_id! {
    /// A storage account.
    pub struct StorageAccountId {
        type_name: "StorageAccount",
        display_name: "Storage Account",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftStorage", "Microsoft.Storage"),
            Segment::static_segment("staticStorageAccounts", "storageAccounts"),
            Segment::user_specified("storageAccountName", "storageAccountValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            storage_account_name => "storageAccountName",
        },
    }
}

define_resource_id! {
    /// The default instance of one of a storage account's services.
    pub struct StorageAccountServiceId {
        type_name: "StorageAccountService",
        display_name: "Storage Account Service",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftStorage", "Microsoft.Storage"),
            Segment::static_segment("staticStorageAccounts", "storageAccounts"),
            Segment::user_specified("storageAccountName", "storageAccountValue"),
            Segment::constant("serviceType", STORAGE_SERVICE_TYPES),
            Segment::static_segment("staticDefault", "default"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            storage_account_name => "storageAccountName",
            service_type => "serviceType",
        },
    }
}

impl StorageAccountServiceId {
    /// Returns the storage account the service belongs to.
    #[must_use]
    pub fn storage_account(&self) -> StorageAccountId {
        StorageAccountId::new(
            self.subscription_id(),
            self.resource_group_name(),
            self.storage_account_name(),
        )
    }
}
