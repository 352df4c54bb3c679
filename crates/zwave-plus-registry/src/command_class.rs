use crate::error::RegistryError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Z-Wave command classes referenced by the Z-Wave Plus device type table.
///
/// The discriminant is the command class byte as it appears on air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CommandClass {
    ApplicationStatus = 0x22,
    SwitchBinary = 0x25,
    SwitchMultilevel = 0x26,
    SensorBinary = 0x30,
    SensorMultilevel = 0x31,
    Meter = 0x32,
    ThermostatMode = 0x40,
    ThermostatSetpoint = 0x43,
    #[serde(rename = "CRC_16_ENCAP")]
    Crc16Encap = 0x56,
    AssociationGroupInfo = 0x59,
    DeviceResetLocally = 0x5A,
    CentralScene = 0x5B,
    ZwavePlusInfo = 0x5E,
    MultiInstance = 0x60,
    DoorLock = 0x62,
    UserCode = 0x63,
    ManufacturerSpecific = 0x72,
    Powerlevel = 0x73,
    Battery = 0x80,
    WakeUp = 0x84,
    Association = 0x85,
    Version = 0x86,
    MultiInstanceAssociation = 0x8E,
}

impl CommandClass {
    /// Every variant, ordered by id.
    pub const ALL: [CommandClass; 23] = [
        CommandClass::ApplicationStatus,
        CommandClass::SwitchBinary,
        CommandClass::SwitchMultilevel,
        CommandClass::SensorBinary,
        CommandClass::SensorMultilevel,
        CommandClass::Meter,
        CommandClass::ThermostatMode,
        CommandClass::ThermostatSetpoint,
        CommandClass::Crc16Encap,
        CommandClass::AssociationGroupInfo,
        CommandClass::DeviceResetLocally,
        CommandClass::CentralScene,
        CommandClass::ZwavePlusInfo,
        CommandClass::MultiInstance,
        CommandClass::DoorLock,
        CommandClass::UserCode,
        CommandClass::ManufacturerSpecific,
        CommandClass::Powerlevel,
        CommandClass::Battery,
        CommandClass::WakeUp,
        CommandClass::Association,
        CommandClass::Version,
        CommandClass::MultiInstanceAssociation,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|cc| cc.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandClass::ApplicationStatus => "APPLICATION_STATUS",
            CommandClass::SwitchBinary => "SWITCH_BINARY",
            CommandClass::SwitchMultilevel => "SWITCH_MULTILEVEL",
            CommandClass::SensorBinary => "SENSOR_BINARY",
            CommandClass::SensorMultilevel => "SENSOR_MULTILEVEL",
            CommandClass::Meter => "METER",
            CommandClass::ThermostatMode => "THERMOSTAT_MODE",
            CommandClass::ThermostatSetpoint => "THERMOSTAT_SETPOINT",
            CommandClass::Crc16Encap => "CRC_16_ENCAP",
            CommandClass::AssociationGroupInfo => "ASSOCIATION_GROUP_INFO",
            CommandClass::DeviceResetLocally => "DEVICE_RESET_LOCALLY",
            CommandClass::CentralScene => "CENTRAL_SCENE",
            CommandClass::ZwavePlusInfo => "ZWAVE_PLUS_INFO",
            CommandClass::MultiInstance => "MULTI_INSTANCE",
            CommandClass::DoorLock => "DOOR_LOCK",
            CommandClass::UserCode => "USER_CODE",
            CommandClass::ManufacturerSpecific => "MANUFACTURER_SPECIFIC",
            CommandClass::Powerlevel => "POWERLEVEL",
            CommandClass::Battery => "BATTERY",
            CommandClass::WakeUp => "WAKE_UP",
            CommandClass::Association => "ASSOCIATION",
            CommandClass::Version => "VERSION",
            CommandClass::MultiInstanceAssociation => "MULTI_INSTANCE_ASSOCIATION",
        }
    }
}

impl fmt::Display for CommandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `SWITCH_BINARY`, `command_class_switch_binary`, `0x25` or `37`.
impl FromStr for CommandClass {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let upper = t.to_ascii_uppercase();
        let bare = upper.strip_prefix("COMMAND_CLASS_").unwrap_or(&upper);
        if let Some(cc) = Self::ALL.iter().copied().find(|cc| cc.name() == bare) {
            return Ok(cc);
        }
        let id = if let Some(hex) = bare.strip_prefix("0X") {
            u8::from_str_radix(hex, 16).ok()
        } else {
            bare.parse::<u8>().ok()
        };
        id.and_then(Self::from_id)
            .ok_or_else(|| RegistryError::UnknownCommandClass(t.to_string()))
    }
}
