//! App Service identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// An App Service plan. The API calls these server farms.
    pub struct AppServicePlanId {
        type_name: "AppServicePlan",
        display_name: "App Service Plan",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftWeb", "Microsoft.Web"),
            Segment::static_segment("staticServerFarms", "serverFarms"),
            Segment::user_specified("serverFarmName", "serverFarmValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            server_farm_name => "serverFarmName",
        },
    }
}

define_resource_id! {
    /// A deployment slot of a web app.
    pub struct WebAppSlotId {
        type_name: "WebAppSlot",
        display_name: "Web App Slot",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftWeb", "Microsoft.Web"),
            Segment::static_segment("staticSites", "sites"),
            Segment::user_specified("siteName", "siteValue"),
            Segment::static_segment("staticSlots", "slots"),
            Segment::user_specified("slotName", "slotValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            site_name => "siteName",
            slot_name => "slotName",
        },
    }
}
