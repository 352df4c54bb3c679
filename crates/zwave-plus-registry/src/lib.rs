//! zwave-plus-registry: Z-Wave Plus device types and their mandatory command classes
//!
//! The table is built into an immutable map on first lookup and shared for the
//! lifetime of the process. Unknown codes are reported as `None`, never as errors.

mod error;
pub use error::{RegistryError, Result};

mod command_class;
pub use command_class::CommandClass;

mod table;
pub use table::{DeviceTypeSpec, DEVICE_TYPES};

mod registry;
pub use registry::{build_count, capabilities_of, lookup, DeviceTypeEntry, DeviceTypeRegistry};

mod validate;
pub use validate::{check_mandatory, Compliance, ComplianceReport};

mod loader;
pub use loader::{load_snapshot_file, load_snapshots_dir, parse_device_type_code, NodeSnapshot};

mod metrics;
pub use metrics::{MetricsHub, RegistryMetrics};
