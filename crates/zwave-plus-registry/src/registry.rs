use crate::command_class::CommandClass;
use crate::error::{RegistryError, Result};
use crate::table::{DeviceTypeSpec, DEVICE_TYPES};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static BUILTIN: OnceLock<Result<DeviceTypeRegistry>> = OnceLock::new();
static BUILDS: AtomicUsize = AtomicUsize::new(0);

/// A Z-Wave Plus device type and its mandatory command classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceTypeEntry {
    code: u16,
    name: &'static str,
    mandatory: BTreeSet<CommandClass>,
}

impl DeviceTypeEntry {
    fn from_spec(spec: &DeviceTypeSpec) -> Self {
        Self {
            code: spec.code,
            name: spec.name,
            mandatory: spec.mandatory.iter().copied().collect(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mandatory_command_classes(&self) -> &BTreeSet<CommandClass> {
        &self.mandatory
    }

    pub fn requires(&self, cc: CommandClass) -> bool {
        self.mandatory.contains(&cc)
    }
}

/// Immutable map from device type code to entry.
#[derive(Debug, Default, Clone)]
pub struct DeviceTypeRegistry {
    entries: HashMap<u16, DeviceTypeEntry>,
}

impl DeviceTypeRegistry {
    /// Builds a registry, rejecting any code that appears twice.
    pub fn from_specs(specs: &[DeviceTypeSpec]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(specs.len());
        for spec in specs {
            match entries.entry(spec.code) {
                Entry::Occupied(prev) => {
                    let prev: &DeviceTypeEntry = prev.get();
                    return Err(RegistryError::DuplicateCode {
                        code: spec.code,
                        first: prev.name,
                        second: spec.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(DeviceTypeEntry::from_spec(spec));
                }
            }
        }
        Ok(Self { entries })
    }

    /// The registry built from the Z-Wave Plus table, constructed on first use.
    ///
    /// Concurrent first callers block until the single construction finishes.
    /// A defective table yields the same error on every call.
    pub fn builtin() -> Result<&'static DeviceTypeRegistry> {
        BUILTIN
            .get_or_init(|| {
                BUILDS.fetch_add(1, Ordering::SeqCst);
                let built = Self::from_specs(DEVICE_TYPES);
                match &built {
                    Ok(reg) => {
                        tracing::debug!(entries = reg.len(), "built device type registry")
                    }
                    Err(e) => tracing::error!("device type table rejected: {e}"),
                }
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Any integer type is accepted; values that do not fit a `u16` are absent.
    pub fn get(&self, code: impl TryInto<u16>) -> Option<&DeviceTypeEntry> {
        let code: u16 = code.try_into().ok()?;
        self.entries.get(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceTypeEntry> {
        let mut all: Vec<&DeviceTypeEntry> = self.entries.values().collect();
        all.sort_by_key(|e| e.code);
        all.into_iter()
    }
}

/// Looks up a device type code in the built-in registry.
///
/// Codes outside `0..=0xFFFF` and codes missing from the table are `None`.
pub fn lookup(code: impl TryInto<u16>) -> Option<&'static DeviceTypeEntry> {
    let Ok(code): core::result::Result<u16, _> = code.try_into() else {
        tracing::debug!("device type code outside 0..=0xFFFF");
        return None;
    };
    let reg = match DeviceTypeRegistry::builtin() {
        Ok(reg) => reg,
        Err(e) => {
            tracing::error!("device type lookup unavailable: {e}");
            return None;
        }
    };
    let found = reg.entries.get(&code);
    if found.is_none() {
        tracing::debug!("unknown Z-Wave Plus device type {code:#06x}");
    }
    found
}

pub fn capabilities_of(entry: &DeviceTypeEntry) -> &BTreeSet<CommandClass> {
    entry.mandatory_command_classes()
}

/// How many times the built-in registry has been constructed (0 or 1).
pub fn build_count() -> usize {
    BUILDS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::CommandClass::*;

    #[test]
    fn every_table_code_resolves_to_itself() {
        for spec in DEVICE_TYPES {
            let entry = lookup(spec.code).map(|e| (e.code(), e.name()));
            assert_eq!(entry, Some((spec.code, spec.name)));
        }
    }

    #[test]
    fn on_off_power_switch() {
        let entry = lookup(0x0700);
        assert_eq!(entry.map(|e| e.name()), Some("ON_OFF_POWER_SWITCH"));
        let expected: BTreeSet<_> = [
            DeviceResetLocally,
            ZwavePlusInfo,
            AssociationGroupInfo,
            ManufacturerSpecific,
            Powerlevel,
            Association,
            Version,
            SwitchBinary,
        ]
        .into_iter()
        .collect();
        assert_eq!(entry.map(capabilities_of), Some(&expected));
    }

    #[test]
    fn door_lock_keypad_requires_lock_classes() {
        let Some(entry) = lookup(0x0300) else {
            panic!("0x0300 missing");
        };
        assert!(entry.requires(DoorLock));
        assert!(entry.requires(UserCode));
        assert!(entry.requires(Battery));
        assert!(!entry.requires(SwitchBinary));
    }

    #[test]
    fn unknown_and_out_of_range_codes_are_absent() {
        assert!(lookup(0xFFFF).is_none());
        assert!(lookup(0x0C0C).is_none());
        assert!(lookup(-1).is_none());
        assert!(lookup(0x1_0700_i64).is_none());
        assert!(lookup(0x0700_u64).is_some());
        assert!(lookup(0x0700_usize).is_some());
        assert!(lookup(i128::MAX).is_none());
        assert!(lookup(u64::MAX).is_none());
    }

    #[test]
    fn only_table_codes_resolve_across_the_whole_key_space() {
        let table: std::collections::HashSet<u16> =
            DEVICE_TYPES.iter().map(|s| s.code).collect();
        let mut hits = 0;
        for code in 0..=u16::MAX {
            let found = lookup(code);
            assert_eq!(found.is_some(), table.contains(&code), "0x{code:04X}");
            if let Some(entry) = found {
                assert_eq!(entry.code(), code);
                hits += 1;
            }
        }
        assert_eq!(hits, 75);
    }

    #[test]
    fn unknown_type_has_no_mandatory_classes() {
        let entry = lookup(0x0000);
        assert_eq!(entry.map(|e| e.name()), Some("UNKNOWN_TYPE"));
        assert_eq!(entry.map(|e| e.mandatory_command_classes().len()), Some(0));
    }

    #[test]
    fn identical_class_sets_stay_distinct_entries() {
        let (Some(a), Some(b)) = (lookup(0x0c00), lookup(0x0c01)) else {
            panic!("sensor entries missing");
        };
        assert_eq!(a.mandatory_command_classes(), b.mandatory_command_classes());
        assert_ne!(a, b);
        assert_eq!(a.name(), "SENSOR_NOTIFICATION");
        assert_eq!(b.name(), "SMOKE_ALARM_SENSOR");
    }

    #[test]
    fn literal_sensor_codes_are_preserved() {
        assert_eq!(
            lookup(0x0b1d).map(|e| e.name()),
            Some("ELECTRICAL_CONDUCTIVITY_SENSOR")
        );
        assert_eq!(lookup(0x0bff).map(|e| e.name()), Some("MULTIDEVICE_SENSOR"));
        assert!(lookup(0x0d1d).is_none());
    }

    #[test]
    fn repeated_lookups_return_the_same_entry() {
        let first = lookup(0x1200).map(|e| e as *const DeviceTypeEntry);
        let second = lookup(0x1200).map(|e| e as *const DeviceTypeEntry);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(lookup(0x1200), lookup(0x1200));
    }

    #[test]
    fn builtin_builds_once() {
        let _ = lookup(0x0100);
        let _ = lookup(0x0200);
        assert_eq!(build_count(), 1);
        assert_eq!(
            DeviceTypeRegistry::builtin().map(|r| r.len()),
            Ok(DEVICE_TYPES.len())
        );
    }

    #[test]
    fn duplicate_codes_fail_fast() {
        let specs = [
            DeviceTypeSpec {
                code: 0x0b01,
                name: "KEY_FOB",
                mandatory: &[CentralScene],
            },
            DeviceTypeSpec {
                code: 0x0b01,
                name: "OTHER_FOB",
                mandatory: &[],
            },
        ];
        assert_eq!(
            DeviceTypeRegistry::from_specs(&specs).map(|r| r.len()),
            Err(RegistryError::DuplicateCode {
                code: 0x0b01,
                first: "KEY_FOB",
                second: "OTHER_FOB",
            })
        );
    }

    #[test]
    fn iter_is_sorted_by_code() {
        let Ok(reg) = DeviceTypeRegistry::builtin() else {
            panic!("builtin registry failed");
        };
        let codes: Vec<u16> = reg.iter().map(|e| e.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.first(), Some(&0x0000));
        assert_eq!(codes.last(), Some(&0x1A00));
    }
}
