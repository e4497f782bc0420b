//! Output side of the bridge
//!
//! Decoded reports arrive over an mpsc channel from the session task and
//! are emitted either as structured log records or as JSON lines on stdout.

use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::inverter::protocol::{Field, PanelReading, RawWord};
use crate::inverter::TelemetryReport;

/// Consume reports until the channel closes; returns how many were emitted
pub async fn run_reporter(mut rx: mpsc::Receiver<TelemetryReport>, format: OutputFormat) -> usize {
    let mut emitted = 0;
    while let Some(report) = rx.recv().await {
        match format {
            OutputFormat::Log => log_report(&report),
            OutputFormat::Json => println!("{}", report_to_json(&report)),
        }
        emitted += 1;
    }
    emitted
}

fn log_report(report: &TelemetryReport) {
    let response = &report.response;
    info!(hex = %hex::encode(&response.opening), "Opening segment");

    for reading in &response.readings {
        info!(
            panel_id = %reading.identifier,
            firmware = %reading.firmware(),
            segment = %hex::encode(&reading.segment),
            temperature_c = %reading.temperature,
            ac_power_w = %reading.ac_power,
            dc_voltage_v = %reading.dc_voltage,
            unknown_16bit_1 = %reading.unknown1,
            unknown_16bit_2 = %reading.unknown2,
            "--- Panel {} ---",
            reading.position
        );
    }

    for warning in &response.warnings {
        warn!("{}", warning);
    }

    info!(hex = %hex::encode(&response.closing), "Closing segment");
}

fn scaled_json(field: &Field<f64>) -> Value {
    match field {
        Field::Decoded(v) => json!(v),
        Field::Unavailable => Value::Null,
    }
}

fn raw_json(field: &Field<RawWord>) -> Value {
    match field.as_option() {
        Some(word) => json!({ "value": word.value, "hex": word.hex }),
        None => Value::Null,
    }
}

fn reading_to_json(reading: &PanelReading) -> Value {
    json!({
        "position": reading.position,
        "panel_id": reading.identifier,
        "firmware": reading.firmware(),
        "segment": hex::encode(&reading.segment),
        "temperature_c": scaled_json(&reading.temperature),
        "ac_power_w": scaled_json(&reading.ac_power),
        "dc_voltage_v": scaled_json(&reading.dc_voltage),
        "unknown_16bit_1": raw_json(&reading.unknown1),
        "unknown_16bit_2": raw_json(&reading.unknown2),
    })
}

/// Render one report as a JSON object
pub fn report_to_json(report: &TelemetryReport) -> Value {
    let response = &report.response;
    json!({
        "received_at": report.received_at.to_rfc3339(),
        "bytes": report.byte_count,
        "opening": hex::encode(&response.opening),
        "panels": response.readings.iter().map(reading_to_json).collect::<Vec<_>>(),
        "closing": hex::encode(&response.closing),
        "warnings": response.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    })
}
