use ispdn::assessment::{DataCategory, NonEmployeeVolume, ThreatAnswer};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a flag value with the same spelling the JSON API accepts.
fn parse_wire_value<T: DeserializeOwned>(raw: &str, expected: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.trim().to_string()))
        .map_err(|_| format!("'{raw}' is not a valid {expected}"))
}

pub(crate) fn parse_category(raw: &str) -> Result<DataCategory, String> {
    parse_wire_value(raw, "data category (special, biometric, public, other)")
}

pub(crate) fn parse_threat(raw: &str) -> Result<ThreatAnswer, String> {
    parse_wire_value(raw, "threat type (1, 2, 3, unknown)")
}

pub(crate) fn parse_volume(raw: &str) -> Result<NonEmployeeVolume, String> {
    parse_wire_value(raw, "subject volume (under_100k, over_100k)")
}
