use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use zwave_plus_registry as zwp;

#[derive(Parser, Debug)]
#[command(
    name = "zw",
    version,
    about = "Z-Wave Plus device type tool",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the mandatory command classes for a device type code
    Lookup {
        /// Code as hex (0x0700, 0700h) or decimal
        code: String,
        /// Print JSON instead of text
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List every known Z-Wave Plus device type
    List {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List the command classes known to the registry
    Classes,
    /// Check node snapshots against their mandatory command classes
    Check {
        /// YAML snapshot file
        #[arg(long)]
        file: Option<String>,
        /// Directory of YAML snapshots
        #[arg(long)]
        dir: Option<String>,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
        /// Print Prometheus metrics after the reports
        #[arg(long, action = ArgAction::SetTrue)]
        metrics: bool,
    },
}

#[derive(Serialize)]
struct NodeReport<'a> {
    node_id: u8,
    #[serde(flatten)]
    report: &'a zwp::ComplianceReport,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup { code, json } => lookup(&code, json),
        Commands::List { json } => list(json),
        Commands::Classes => {
            for cc in zwp::CommandClass::ALL {
                println!("0x{:02X}\t{}", cc.id(), cc);
            }
            Ok(())
        }
        Commands::Check {
            file,
            dir,
            json,
            metrics,
        } => check(file.as_deref(), dir.as_deref(), json, metrics),
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn builtin() -> Result<&'static zwp::DeviceTypeRegistry> {
    zwp::DeviceTypeRegistry::builtin().map_err(|e| anyhow::anyhow!("device type table: {e}"))
}

fn lookup(code_str: &str, json: bool) -> Result<()> {
    let code = parse_lookup_code(code_str)?;
    builtin()?;
    match zwp::lookup(code) {
        Some(entry) if json => println!("{}", serde_json::to_string_pretty(entry)?),
        found => println!("{}", lookup_line(code, found)),
    }
    Ok(())
}

/// Any integer, hex (`0x0700`, `0700h`) or decimal, signed or not. Range is
/// not checked here: codes the registry cannot hold are reported as unknown.
fn parse_lookup_code(s: &str) -> Result<i64> {
    let t = s.trim();
    let (neg, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };
    let lower = body.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(hex) = lower.strip_suffix('h') {
        i64::from_str_radix(hex, 16)
    } else {
        lower.parse::<i64>()
    };
    let n = parsed.map_err(|_| anyhow::anyhow!("invalid device type code: {t}"))?;
    if !neg {
        return Ok(n);
    }
    n.checked_neg()
        .ok_or_else(|| anyhow::anyhow!("invalid device type code: {t}"))
}

fn lookup_line(code: i64, entry: Option<&zwp::DeviceTypeEntry>) -> String {
    match entry {
        Some(entry) => entry_line(entry),
        None if (0..=0xFFFF).contains(&code) => format!("0x{code:04X}\tunknown device type"),
        None => format!("{code}\tunknown device type"),
    }
}

fn list(json: bool) -> Result<()> {
    let reg = builtin()?;
    if json {
        let all: Vec<&zwp::DeviceTypeEntry> = reg.iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }
    for entry in reg.iter() {
        println!("{}", entry_line(entry));
    }
    Ok(())
}

fn entry_line(entry: &zwp::DeviceTypeEntry) -> String {
    let classes: Vec<&str> = zwp::capabilities_of(entry)
        .iter()
        .map(|cc| cc.name())
        .collect();
    format!(
        "0x{:04X}\t{}\t{}",
        entry.code(),
        entry.name(),
        classes.join(",")
    )
}

fn check(file: Option<&str>, dir: Option<&str>, json: bool, metrics: bool) -> Result<()> {
    let snaps = match (file, dir) {
        (Some(f), None) => vec![zwp::load_snapshot_file(f)?],
        (None, Some(d)) => zwp::load_snapshots_dir(d)?,
        _ => {
            return Err(anyhow::anyhow!("provide --file <path> or --dir <dir>"));
        }
    };
    let hub = zwp::MetricsHub::new().map_err(|e| anyhow::anyhow!(e))?;
    hub.reg.device_types_loaded.set(builtin()?.len() as i64);

    let mut failing = 0usize;
    for snap in &snaps {
        let report = zwp::check_mandatory(snap.device_type, &snap.command_classes);
        hub.observe_report(&report);
        if report.status == zwp::Compliance::MissingMandatory {
            failing += 1;
        }
        if json {
            let out = NodeReport {
                node_id: snap.node_id,
                report: &report,
            };
            println!("{}", serde_json::to_string(&out)?);
            continue;
        }
        match report.status {
            zwp::Compliance::Compliant => println!(
                "node {}\t0x{:04X}\t{}\tok",
                snap.node_id,
                report.code,
                report.device_type.unwrap_or("-")
            ),
            zwp::Compliance::MissingMandatory => {
                let missing: Vec<&str> = report.missing.iter().map(|cc| cc.name()).collect();
                println!(
                    "node {}\t0x{:04X}\t{}\tmissing {}",
                    snap.node_id,
                    report.code,
                    report.device_type.unwrap_or("-"),
                    missing.join(",")
                );
            }
            zwp::Compliance::UnknownDeviceType => {
                warn!(node = snap.node_id, "unknown device type 0x{:04X}", report.code);
                println!(
                    "node {}\t0x{:04X}\tunknown device type\tskipped",
                    snap.node_id, report.code
                );
            }
        }
    }
    info!(nodes = snaps.len(), failing, "check complete");

    if metrics {
        print!("{}", hub.encode_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_code_forms() {
        assert_eq!(parse_lookup_code("0x0700").unwrap(), 0x0700);
        assert_eq!(parse_lookup_code("0C01h").unwrap(), 0x0c01);
        assert_eq!(parse_lookup_code("768").unwrap(), 0x0300);
        assert_eq!(parse_lookup_code("70000").unwrap(), 70000);
        assert_eq!(parse_lookup_code("-1").unwrap(), -1);
        assert_eq!(parse_lookup_code("-0x10").unwrap(), -16);
        assert!(parse_lookup_code("switch").is_err());
        assert!(parse_lookup_code("").is_err());
        assert!(parse_lookup_code("-9223372036854775808").is_err());
    }

    #[test]
    fn out_of_range_codes_are_reported_unknown() {
        for code in [70000, -1, 0x1_0700, i64::MAX] {
            assert!(zwp::lookup(code).is_none());
            assert_eq!(
                lookup_line(code, zwp::lookup(code)),
                format!("{code}\tunknown device type")
            );
            assert!(lookup(&code.to_string(), false).is_ok());
        }
        assert!(lookup("switch", false).is_err());
    }

    #[test]
    fn known_and_unknown_lines() {
        assert_eq!(
            lookup_line(0xFFFF, zwp::lookup(0xFFFF)),
            "0xFFFF\tunknown device type"
        );
        let line = lookup_line(0x0700, zwp::lookup(0x0700));
        assert!(line.starts_with("0x0700\tON_OFF_POWER_SWITCH\t"));
        assert!(line.contains("SWITCH_BINARY"));
    }
}
