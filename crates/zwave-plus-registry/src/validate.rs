use crate::command_class::CommandClass;
use crate::registry::lookup;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    Compliant,
    MissingMandatory,
    /// Code not in the table; no classes were checked.
    UnknownDeviceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<&'static str>,
    pub missing: Vec<CommandClass>,
    pub status: Compliance,
}

impl ComplianceReport {
    pub fn is_compliant(&self) -> bool {
        self.status == Compliance::Compliant
    }
}

/// Compares the classes a node advertises with those mandated for its device type.
///
/// `missing` is ordered by command class id.
pub fn check_mandatory(code: u16, advertised: &[CommandClass]) -> ComplianceReport {
    let Some(entry) = lookup(code) else {
        return ComplianceReport {
            code,
            device_type: None,
            missing: Vec::new(),
            status: Compliance::UnknownDeviceType,
        };
    };
    let missing: Vec<CommandClass> = entry
        .mandatory_command_classes()
        .iter()
        .copied()
        .filter(|cc| !advertised.contains(cc))
        .collect();
    let status = if missing.is_empty() {
        Compliance::Compliant
    } else {
        tracing::debug!(
            device_type = entry.name(),
            missing = missing.len(),
            "node lacks mandatory command classes"
        );
        Compliance::MissingMandatory
    };
    ComplianceReport {
        code,
        device_type: Some(entry.name()),
        missing,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::CommandClass::*;

    const PLUS_BASE: [CommandClass; 7] = [
        DeviceResetLocally,
        ZwavePlusInfo,
        AssociationGroupInfo,
        ManufacturerSpecific,
        Powerlevel,
        Association,
        Version,
    ];

    #[test]
    fn binary_switch_with_all_classes_is_compliant() {
        let mut adv = PLUS_BASE.to_vec();
        adv.push(SwitchBinary);
        adv.push(Meter);
        let report = check_mandatory(0x0700, &adv);
        assert!(report.is_compliant());
        assert_eq!(report.device_type, Some("ON_OFF_POWER_SWITCH"));
        assert!(report.missing.is_empty());
    }

    #[test]
    fn missing_classes_are_listed_in_id_order() {
        let report = check_mandatory(0x0300, &PLUS_BASE);
        assert_eq!(report.status, Compliance::MissingMandatory);
        assert_eq!(report.missing, vec![DoorLock, UserCode, Battery]);
    }

    #[test]
    fn unknown_code_skips_validation() {
        let report = check_mandatory(0xFFFF, &[]);
        assert_eq!(report.status, Compliance::UnknownDeviceType);
        assert_eq!(report.device_type, None);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn unknown_type_entry_requires_nothing() {
        assert!(check_mandatory(0x0000, &[]).is_compliant());
    }

    #[test]
    fn report_serializes_status_in_snake_case() {
        let report = check_mandatory(0x0400, &[]);
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["status"], "missing_mandatory");
        assert_eq!(json["device_type"], "FAN_SWITCH");
        assert_eq!(json["missing"].as_array().map(|a| a.len()), Some(8));
    }
}
