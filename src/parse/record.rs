//! Firmware key record derivation.
//!
//! Walks a normalized field table and assembles the typed record: page
//! metadata on top, one entry per component that actually carries usable
//! key material.

use chrono::Utc;

use crate::config::{
    DMG_COMPONENTS, KEY_MATERIAL_SUFFIXES, PAGE_METADATA_KEYS, PLACEHOLDER_VALUES,
};
use crate::models::{ComponentKey, FirmwareKeyRecord};
use crate::parse::fields::FieldTable;

/// Derives a [`FirmwareKeyRecord`] from a normalized field table.
///
/// Every field that is neither page metadata nor key material names a
/// component; its value is the component's filename. The sibling
/// `<image>IV`/`<image>Key`/`<image>KBAG` fields are attached when present
/// and not placeholders. Components without at least an IV and key pair,
/// or a KBAG, are dropped. Component order follows the field table.
///
/// `identifier` is the fallback when the page carries no `Device` field.
pub fn derive_record(fields: &FieldTable, identifier: &str) -> FirmwareKeyRecord {
    let mut record = FirmwareKeyRecord {
        identifier: fields
            .get("Device")
            .cloned()
            .unwrap_or_else(|| identifier.to_string()),
        build_id: fields.get("Build").cloned().unwrap_or_default(),
        codename: fields.get("Codename").cloned().unwrap_or_default(),
        update_ramdisk_exists: fields.contains_key("UpdateRamdisk"),
        restore_ramdisk_exists: fields.contains_key("RestoreRamdisk"),
        components: Vec::new(),
    };

    for (image, filename) in fields {
        if PAGE_METADATA_KEYS.contains(&image.as_str()) {
            continue;
        }
        if KEY_MATERIAL_SUFFIXES
            .iter()
            .any(|suffix| image.ends_with(suffix))
        {
            continue;
        }

        let mut filename = filename.clone();
        if DMG_COMPONENTS.contains(&image.as_str()) {
            // The wiki omits the disk-image container extension.
            filename.push_str(".dmg");
        }

        let component = ComponentKey {
            image: image.clone(),
            filename,
            captured_at: Utc::now(),
            iv: key_material(fields, image, "IV"),
            key: key_material(fields, image, "Key"),
            kbag: key_material(fields, image, "KBAG"),
        };

        // A component needs IV+key or a KBAG to be decryptable at all.
        if (component.iv.is_some() && component.key.is_some()) || component.kbag.is_some() {
            record.components.push(component);
        }
    }

    record
}

/// Looks up `<image><suffix>` in the table, filtering placeholder values.
fn key_material(fields: &FieldTable, image: &str, suffix: &str) -> Option<String> {
    let value = fields.get(&format!("{image}{suffix}"))?;
    if PLACEHOLDER_VALUES
        .iter()
        .any(|placeholder| value.contains(placeholder))
    {
        return None;
    }
    Some(value.clone())
}
