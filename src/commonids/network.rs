//! Networking identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A subnet of a virtual network.
    pub struct SubnetId {
        type_name: "Subnet",
        display_name: "Subnet",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftNetwork", "Microsoft.Network"),
            Segment::static_segment("staticVirtualNetworks", "virtualNetworks"),
            Segment::user_specified("virtualNetworkName", "virtualNetworkValue"),
            Segment::static_segment("staticSubnets", "subnets"),
            Segment::user_specified("subnetName", "subnetValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            virtual_network_name => "virtualNetworkName",
            subnet_name => "subnetName",
        },
    }
}
