//! Integration tests for the global registry and case normalization.

use resource_ids::payload::{LinkedServiceReference, SecretReference};
use resource_ids::{
    normalize_case, normalize_case_with_hint, IdentifierTemplate, ParseError, RecaseConfig,
    Recaser, Registry, Segment,
};
use serde_json::{json, Map};

const DNS_ZONE: IdentifierTemplate = IdentifierTemplate::new(
    "DnsZone",
    "Dns Zone",
    &[
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group_name("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::static_segment("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_segment("staticDnsZones", "dnsZones"),
        Segment::user_specified("dnsZoneName", "dnsZoneValue"),
    ],
);

/// Every test initializes the global registry the same way, so whichever
/// runs first wins and the rest observe the same table.
fn registry() -> &'static Registry {
    Registry::init_global(|registry| {
        registry
            .register(DNS_ZONE)
            .expect("DnsZone template is well formed");
    })
}

// =============================================================================
// Global Registry
// =============================================================================

#[test]
fn test_global_registry_contains_startup_list_and_extensions() {
    let registry = registry();
    assert!(registry.contains("DnsZone"));
    assert!(registry.contains("ResourceGroup"));
    assert!(registry.contains("CdnOriginGroup"));
    assert!(std::ptr::eq(registry, Registry::global()));
}

#[test]
fn test_normalize_case_with_registered_extension() {
    registry();
    assert_eq!(
        normalize_case(
            "/subscriptions/sub/resourcegroups/rg/providers/MICROSOFT.NETWORK/DNSZONES/Example.COM"
        )
        .unwrap(),
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/dnsZones/Example.COM"
    );
}

#[test]
fn test_normalize_case_scoped_template() {
    registry();
    // The scope is normalized as an identifier of its own, so its keywords
    // are restored along with the literals after it.
    assert_eq!(
        normalize_case(
            "/subscriptions/SUB/resourcegroups/RG/providers/microsoft.authorization/roleassignmentscheduleinstances/NAME"
        )
        .unwrap(),
        "/subscriptions/SUB/resourceGroups/RG/providers/Microsoft.Authorization/roleAssignmentScheduleInstances/NAME"
    );
}

#[test]
fn test_normalize_case_no_match() {
    registry();
    assert_eq!(
        normalize_case("/tenants/t1"),
        Err(ParseError::NoMatchingTemplate {
            input: "/tenants/t1".to_string()
        })
    );
}

#[test]
fn test_normalize_case_with_hint_global() {
    registry();
    assert_eq!(
        normalize_case_with_hint("/SUBSCRIPTIONS/sub/RESOURCEGROUPS/rg", "ResourceGroup").unwrap(),
        "/subscriptions/sub/resourceGroups/rg"
    );
    assert!(matches!(
        normalize_case_with_hint("/subscriptions/sub", "NotAType"),
        Err(ParseError::UnknownIdType { .. })
    ));
}

#[test]
fn test_recaser_with_fallback_over_global_registry() {
    let config = RecaseConfig::builder().fallback_recasing(true).build();
    let recaser = Recaser::new(registry(), config);
    assert_eq!(
        recaser
            .normalize("/Subscriptions/sub/ResourceGroups/rg/Providers/Contoso.Widgets/gadgets/g1")
            .unwrap(),
        "/subscriptions/sub/resourceGroups/rg/providers/Contoso.Widgets/gadgets/g1"
    );
}

#[test]
fn test_concurrent_normalization() {
    registry();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                normalize_case(&format!("/subscriptions/sub{i}/resourcegroups/rg{i}")).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("/subscriptions/sub{i}/resourceGroups/rg{i}")
        );
    }
}

// =============================================================================
// Secret Payloads
// =============================================================================

#[test]
fn test_secret_reference_with_normalized_store_parameters() {
    registry();
    let vault_id = normalize_case(
        "/subscriptions/sub/resourcegroups/rg/providers/microsoft.keyvault/vaults/kv",
    )
    .unwrap();

    let mut store = LinkedServiceReference::new("vault-link");
    let mut parameters = Map::new();
    parameters.insert("vaultId".to_string(), json!(vault_id));
    store.parameters = Some(parameters);
    let secret = SecretReference::AzureKeyVaultSecret {
        store,
        secret_name: "db-password".to_string(),
        secret_version: Some("v1".to_string()),
    };

    let wire = serde_json::to_value(&secret).unwrap();
    assert_eq!(wire["type"], "AzureKeyVaultSecret");
    assert_eq!(
        wire["store"]["parameters"]["vaultId"],
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv"
    );

    let decoded: SecretReference = serde_json::from_value(wire).unwrap();
    assert_eq!(decoded, secret);
}
