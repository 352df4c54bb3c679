use crate::validate::{Compliance, ComplianceReport};
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

#[derive(Clone)]
pub struct RegistryMetrics {
    pub lookups: IntCounter,
    pub lookup_misses: IntCounter,
    pub noncompliant_nodes: IntCounter,
    pub device_types_loaded: IntGauge,
}

#[derive(Clone)]
pub struct MetricsHub {
    pub registry: Registry,
    pub reg: RegistryMetrics,
}

impl MetricsHub {
    pub fn new() -> Result<Self, String> {
        let registry = Registry::new();
        let lookups = IntCounter::new("zw_lookups_total", "Device type lookups")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let lookup_misses =
            IntCounter::new("zw_lookup_misses_total", "Lookups for unknown device types")
                .map_err(|e| format!("metrics init error: {e}"))?;
        let noncompliant_nodes = IntCounter::new(
            "zw_noncompliant_nodes_total",
            "Nodes missing mandatory command classes",
        )
        .map_err(|e| format!("metrics init error: {e}"))?;
        let device_types_loaded =
            IntGauge::new("zw_device_types_loaded", "Entries in the device type registry")
                .map_err(|e| format!("metrics init error: {e}"))?;
        let reg = RegistryMetrics {
            lookups,
            lookup_misses,
            noncompliant_nodes,
            device_types_loaded,
        };
        let _ = registry.register(Box::new(reg.lookups.clone()));
        let _ = registry.register(Box::new(reg.lookup_misses.clone()));
        let _ = registry.register(Box::new(reg.noncompliant_nodes.clone()));
        let _ = registry.register(Box::new(reg.device_types_loaded.clone()));
        Ok(Self { registry, reg })
    }

    pub fn observe_lookup(&self, found: bool) {
        self.reg.lookups.inc();
        if !found {
            self.reg.lookup_misses.inc();
        }
    }

    pub fn observe_report(&self, report: &ComplianceReport) {
        self.observe_lookup(report.status != Compliance::UnknownDeviceType);
        if report.status == Compliance::MissingMandatory {
            self.reg.noncompliant_nodes.inc();
        }
    }

    pub fn encode_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            return format!("error encoding metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::check_mandatory;

    #[test]
    fn reports_feed_counters() {
        let hub = MetricsHub::new().unwrap();
        hub.reg.device_types_loaded.set(75);
        hub.observe_report(&check_mandatory(0x0700, &[]));
        hub.observe_report(&check_mandatory(0xFFFF, &[]));
        hub.observe_report(&check_mandatory(0x0000, &[]));
        assert_eq!(hub.reg.lookups.get(), 3);
        assert_eq!(hub.reg.lookup_misses.get(), 1);
        assert_eq!(hub.reg.noncompliant_nodes.get(), 1);

        let text = hub.encode_text();
        assert!(text.contains("zw_lookups_total 3"));
        assert!(text.contains("zw_device_types_loaded 75"));
    }
}
