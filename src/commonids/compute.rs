//! Compute identifiers.

use crate::define_resource_id;
use crate::segment::Segment;

define_resource_id! {
    /// A virtual machine.
    pub struct VirtualMachineId {
        type_name: "VirtualMachine",
        display_name: "Virtual Machine",
        segments: [
            Segment::static_segment("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_segment("staticResourceGroups", "resourceGroups"),
            Segment::resource_group_name("resourceGroupName"),
            Segment::static_segment("staticProviders", "providers"),
            Segment::static_segment("staticMicrosoftCompute", "Microsoft.Compute"),
            Segment::static_segment("staticVirtualMachines", "virtualMachines"),
            Segment::user_specified("virtualMachineName", "virtualMachineValue"),
        ],
        fields: {
            subscription_id => "subscriptionId",
            resource_group_name => "resourceGroupName",
            virtual_machine_name => "virtualMachineName",
        },
    }
}
