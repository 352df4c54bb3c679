use thiserror::Error;

pub type Result<T, E = RegistryError> = core::result::Result<T, E>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate device type code 0x{code:04X}: {first} and {second}")]
    DuplicateCode {
        code: u16,
        first: &'static str,
        second: &'static str,
    },
    #[error("unknown command class: {0}")]
    UnknownCommandClass(String),
    #[error("invalid device type code: {0}")]
    InvalidCode(String),
}
