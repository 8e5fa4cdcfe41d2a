//! Firmware key record types returned by the lookup pipeline.
//!
//! Serialized field names follow the wire format consumed by existing
//! clients of the service (`buildid`, `keys`, `date`, ...), so the structs
//! rename where the Rust names differ.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Encryption metadata for one firmware component image.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentKey {
    /// Component name as documented on the wiki page (e.g. `iBSS`,
    /// `RootFS`, `KernelCache`).
    pub image: String,

    /// Firmware archive filename of the component. Disk-image components
    /// carry a restored `.dmg` extension.
    pub filename: String,

    /// Wall-clock time the record was assembled; informational only.
    #[serde(rename = "date")]
    pub captured_at: DateTime<Utc>,

    /// AES initialization vector, when published and not a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,

    /// AES key, when published and not a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Key bag (combined IV and key blob), when published and not a
    /// placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kbag: Option<String>,
}

/// Decryption metadata for one device/build combination.
#[derive(Debug, Clone, Serialize)]
pub struct FirmwareKeyRecord {
    /// Device identifier, from the page's `Device` field when present.
    pub identifier: String,

    /// Build identifier, from the page's `Build` field.
    #[serde(rename = "buildid")]
    pub build_id: String,

    /// Internal firmware codename, from the page's `Codename` field.
    pub codename: String,

    /// Whether the page documents an update ramdisk at all.
    #[serde(rename = "updateramdiskexists")]
    pub update_ramdisk_exists: bool,

    /// Whether the page documents a restore ramdisk at all.
    #[serde(rename = "restoreramdiskexists")]
    pub restore_ramdisk_exists: bool,

    /// Per-component key material, in page order.
    #[serde(rename = "keys")]
    pub components: Vec<ComponentKey>,
}

impl FirmwareKeyRecord {
    /// An empty record echoing the requested identifier and build.
    ///
    /// The route layer returns this alongside an error message when a
    /// lookup fails, so clients always receive the full response shape.
    pub fn empty(identifier: &str, build_id: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            build_id: build_id.to_string(),
            codename: String::new(),
            update_ramdisk_exists: false,
            restore_ramdisk_exists: false,
            components: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_echoes_request() {
        let record = FirmwareKeyRecord::empty("iPhone10,6", "20G81");
        assert_eq!(record.identifier, "iPhone10,6");
        assert_eq!(record.build_id, "20G81");
        assert!(record.codename.is_empty());
        assert!(!record.update_ramdisk_exists);
        assert!(!record.restore_ramdisk_exists);
        assert!(record.components.is_empty());
    }

    #[test]
    fn test_record_wire_names() {
        let record = FirmwareKeyRecord::empty("iPhone10,6", "20G81");
        let json = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(json["buildid"], "20G81");
        assert_eq!(json["updateramdiskexists"], false);
        assert_eq!(json["restoreramdiskexists"], false);
        assert!(json["keys"].as_array().expect("keys array").is_empty());
    }

    #[test]
    fn test_component_omits_absent_key_material() {
        let component = ComponentKey {
            image: "iBSS".into(),
            filename: "iBSS.d22.RELEASE.im4p".into(),
            captured_at: Utc::now(),
            iv: None,
            key: None,
            kbag: Some("deadbeef".into()),
        };
        let json = serde_json::to_value(&component).expect("component serializes");
        assert_eq!(json["image"], "iBSS");
        assert_eq!(json["kbag"], "deadbeef");
        assert!(json.get("iv").is_none());
        assert!(json.get("key").is_none());
        assert!(json.get("date").is_some());
    }
}
