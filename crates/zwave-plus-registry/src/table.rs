//! Z-Wave Plus device types and the command classes each must support.

use crate::command_class::CommandClass::{self, *};

/// One row of the device type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceTypeSpec {
    pub code: u16,
    pub name: &'static str,
    pub mandatory: &'static [CommandClass],
}

#[rustfmt::skip]
pub static DEVICE_TYPES: &[DeviceTypeSpec] = &[
    DeviceTypeSpec { code: 0x0000, name: "UNKNOWN_TYPE", mandatory: &[] },
    DeviceTypeSpec { code: 0x0100, name: "CENTRAL_CONTROLLER", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, ApplicationStatus] },
    DeviceTypeSpec { code: 0x0200, name: "DISPLAY_SIMPLE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version] },
    DeviceTypeSpec { code: 0x0300, name: "DOOR_LOCK_KEYPAD", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, DoorLock, UserCode, Battery] },
    DeviceTypeSpec { code: 0x0400, name: "FAN_SWITCH", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel] },
    DeviceTypeSpec { code: 0x0500, name: "GATEWAY", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, MultiInstance, MultiInstanceAssociation, WakeUp, ApplicationStatus] },
    DeviceTypeSpec { code: 0x0600, name: "LIGHT_DIMMER_SWITCH", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel] },
    DeviceTypeSpec { code: 0x0700, name: "ON_OFF_POWER_SWITCH", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchBinary] },
    DeviceTypeSpec { code: 0x0800, name: "POWER_STRIP", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, MultiInstance, MultiInstanceAssociation, SwitchBinary] },
    DeviceTypeSpec { code: 0x0900, name: "REMOTE_CONTROL_AV", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version] },
    DeviceTypeSpec { code: 0x0A00, name: "REMOTE_CONTROL_MULTI_PURPOSE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, WakeUp] },
    DeviceTypeSpec { code: 0x0B00, name: "REMOTE_CONTROL_SIMPLE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, CentralScene] },
    DeviceTypeSpec { code: 0x0B01, name: "KEY_FOB", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, CentralScene] },
    DeviceTypeSpec { code: 0x0C00, name: "SENSOR_NOTIFICATION", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C01, name: "SMOKE_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C02, name: "CO_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C03, name: "CO2_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C04, name: "HEAT_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C05, name: "WATER_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C06, name: "ACCESS_CONTROL_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C07, name: "HOME_SECURITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C08, name: "POWER_MANAGEMENT_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C09, name: "SYSTEM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C0A, name: "EMERGENCY_ALARM_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0C0B, name: "CLOCK_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0CFF, name: "MULTIDEVICE_NOTIFICATION_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary] },
    DeviceTypeSpec { code: 0x0D00, name: "MULTILEVEL_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D01, name: "AIR_TEMPERATURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D02, name: "GENERAL_PURPOSE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D03, name: "LUMINANCE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D04, name: "POWER_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D05, name: "HUMIDITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D06, name: "VELOCITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D07, name: "DIRECTION_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D08, name: "ATMOSPHERIC_PRESSURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D09, name: "BAROMETRIC_PRESSURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0A, name: "SOLAR_RADIATION_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0B, name: "DEW_POINT_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0C, name: "RAIN_RATE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0D, name: "TIDE_LEVEL_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0E, name: "WEIGHT_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D0F, name: "VOLTAGE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D10, name: "CURRENT_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D11, name: "CO2_LEVEL_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D12, name: "AIR_FLOW_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D13, name: "TANK_CAPACITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D14, name: "DISTANCE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D15, name: "ANGLE_POSITION_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D16, name: "ROTATION_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D17, name: "WATER_TEMPERATURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D18, name: "SOIL_TEMPERATURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D19, name: "SEISMIC_INTENSITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D1A, name: "SEISMIC_MAGNITUDE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D1B, name: "ULTRAVIOLET_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0D1C, name: "ELECTRICAL_RESISTIVITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B1D, name: "ELECTRICAL_CONDUCTIVITY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B1E, name: "LOUDNESS_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B1F, name: "MOISTURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B20, name: "FREQUENCY_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B21, name: "TIME_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0B22, name: "TARGET_TEMPERATURE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0BFF, name: "MULTIDEVICE_SENSOR", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SensorBinary, SensorMultilevel] },
    DeviceTypeSpec { code: 0x0E00, name: "SET_TOP_BOX", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, MultiInstance, MultiInstanceAssociation, WakeUp, ApplicationStatus] },
    DeviceTypeSpec { code: 0x0F00, name: "SIREN", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version] },
    DeviceTypeSpec { code: 0x1000, name: "SUB_ENERGY_METER", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, Meter] },
    DeviceTypeSpec { code: 0x1100, name: "SUB_SYSTEM_CONTROLLER", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, MultiInstance, WakeUp, ApplicationStatus] },
    DeviceTypeSpec { code: 0x1200, name: "THERMOSTAT_HVAC", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, ThermostatSetpoint, ThermostatMode] },
    DeviceTypeSpec { code: 0x1300, name: "THERMOSTAT_SETBACK", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, ThermostatSetpoint] },
    DeviceTypeSpec { code: 0x1400, name: "TV", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, MultiInstance, MultiInstanceAssociation, WakeUp, ApplicationStatus] },
    DeviceTypeSpec { code: 0x1500, name: "VALVE_OPEN_CLOSE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel, SwitchBinary] },
    DeviceTypeSpec { code: 0x1600, name: "WALL_CONTROLLER", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, CentralScene] },
    DeviceTypeSpec { code: 0x1700, name: "WHOLE_HOME_METER_SIMPLE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, Crc16Encap, Meter] },
    DeviceTypeSpec { code: 0x1800, name: "WINDOW_COVERING_NO_POSITION_ENDPOINT", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel, SwitchBinary] },
    DeviceTypeSpec { code: 0x1900, name: "WINDOW_COVERING_ENDPOINT_AWARE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel, SwitchBinary] },
    DeviceTypeSpec { code: 0x1A00, name: "WINDOW_COVERING_POSITION_ENDPOINT_AWARE", mandatory: &[DeviceResetLocally, ZwavePlusInfo, AssociationGroupInfo, ManufacturerSpecific, Powerlevel, Association, Version, SwitchMultilevel, SwitchBinary] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut seen = HashSet::new();
        for spec in DEVICE_TYPES {
            assert!(seen.insert(spec.code), "duplicate 0x{:04X}", spec.code);
        }
        assert_eq!(seen.len(), 75);
    }

    #[test]
    fn rows_do_not_repeat_command_classes() {
        for spec in DEVICE_TYPES {
            let set: HashSet<_> = spec.mandatory.iter().collect();
            assert_eq!(set.len(), spec.mandatory.len(), "{}", spec.name);
        }
    }

    #[test]
    fn every_typed_row_carries_the_plus_baseline() {
        let baseline = [
            DeviceResetLocally,
            ZwavePlusInfo,
            AssociationGroupInfo,
            ManufacturerSpecific,
            Powerlevel,
            Association,
            Version,
        ];
        for spec in DEVICE_TYPES.iter().filter(|s| s.code != 0) {
            for cc in baseline {
                assert!(spec.mandatory.contains(&cc), "{} lacks {cc}", spec.name);
            }
        }
    }
}
