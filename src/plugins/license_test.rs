use super::*;
use chrono::Datelike;

const LICENSE_JSON: &str = r#"{
  "links": {
    "self": "/jira/rest/plugins/1.0/com.example.timesheet-key/license",
    "alternate": "/jira/rest/plugins/1.0/com.example.timesheet-key/license",
    "license": "/jira/rest/plugins/1.0/com.example.timesheet-key/license",
    "update-license": "/jira/rest/plugins/1.0/com.example.timesheet-key/license",
    "validate-downgrade": "/jira/rest/plugins/1.0/com.example.timesheet-key/license-downgrade",
    "license-callback": "/jira/plugins/servlet/upm/license-callback"
  },
  "pluginKey": "com.example.timesheet",
  "valid": true,
  "evaluation": false,
  "nearlyExpired": false,
  "maximumNumberOfUsers": 250,
  "maintenanceExpiryDate": 1767225600000,
  "maintenanceExpired": false,
  "licenseType": "COMMERCIAL",
  "licenseTypeDescriptionKey": "upm.plugin.license.type.commercial",
  "creationDateString": "01/Jan/25",
  "rawLicense": "AAAB...",
  "renewable": true,
  "maintenanceExpiryDateString": "01/Jan/26",
  "organizationName": "Example Corp",
  "contactEmail": "admin@example.com",
  "enterprise": false,
  "dataCenter": true,
  "subscription": false,
  "active": true,
  "autoRenewal": false,
  "upgradable": true,
  "crossgradeable": false,
  "purchasePastServerCutoffDate": true,
  "typeI18nSingular": "user",
  "typeI18nPlural": "users",
  "supportEntitlementNumber": "SEN-1234567"
}"#;

#[test]
fn test_decode_license() {
    let license: PluginLicense = serde_json::from_str(LICENSE_JSON).unwrap();

    assert_eq!(license.plugin_key, "com.example.timesheet");
    assert!(license.valid);
    assert_eq!(license.maximum_number_of_users, 250);
    assert_eq!(license.maintenance_expiry_date, 1_767_225_600_000);
    assert_eq!(license.maintenance_expiry_date_string, "01/Jan/26");
    assert_eq!(license.license_type, "COMMERCIAL");
    assert!(license.data_center);
    assert!(license.purchase_past_server_cutoff_date);
    assert_eq!(license.type_i18n_singular, "user");
    assert_eq!(license.type_i18n_plural, "users");
    assert_eq!(license.support_entitlement_number, "SEN-1234567");
    assert_eq!(
        license.links.validate_downgrade,
        "/jira/rest/plugins/1.0/com.example.timesheet-key/license-downgrade"
    );
    assert_eq!(
        license.links.license_callback,
        "/jira/plugins/servlet/upm/license-callback"
    );
}

#[test]
fn test_maintenance_expiry() {
    let license: PluginLicense = serde_json::from_str(LICENSE_JSON).unwrap();
    let expiry = license.maintenance_expiry().unwrap();
    assert_eq!((expiry.year(), expiry.month(), expiry.day()), (2026, 1, 1));

    let unset = PluginLicense::default();
    assert!(unset.maintenance_expiry().is_none());
}

#[test]
fn test_user_limit() {
    let license: PluginLicense = serde_json::from_str(LICENSE_JSON).unwrap();
    assert_eq!(license.user_limit(), Some(250));

    let unlimited: PluginLicense =
        serde_json::from_str(r#"{"maximumNumberOfUsers": -1}"#).unwrap();
    assert_eq!(unlimited.user_limit(), None);
}

#[test]
fn test_roundtrip() {
    let license: PluginLicense = serde_json::from_str(LICENSE_JSON).unwrap();
    let value = serde_json::to_value(&license).unwrap();

    assert_eq!(value["typeI18nSingular"], "user");
    assert_eq!(value["links"]["update-license"], license.links.update_license);

    let decoded: PluginLicense = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, license);
}

#[test]
fn test_null_fields_decode_as_default() {
    let json = r#"{
      "pluginKey": "jira-core",
      "valid": true,
      "maintenanceExpiryDate": null,
      "maximumNumberOfUsers": null,
      "organizationName": null,
      "links": {"self": null, "license-callback": "/jira/plugins/servlet/upm/license-callback"}
    }"#;
    let license: PluginLicense = serde_json::from_str(json).unwrap();

    assert_eq!(license.plugin_key, "jira-core");
    assert!(license.valid);
    assert_eq!(license.maintenance_expiry_date, 0);
    assert!(license.maintenance_expiry().is_none());
    assert_eq!(license.maximum_number_of_users, 0);
    assert_eq!(license.organization_name, "");
    assert_eq!(license.links.self_link, "");
    assert_eq!(
        license.links.license_callback,
        "/jira/plugins/servlet/upm/license-callback"
    );
}
