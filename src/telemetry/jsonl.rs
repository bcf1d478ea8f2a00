//! # JSON Lines Rendering
//!
//! One JSON object per decoded line. Values are converted to decimal form;
//! unknown values are `null`.

use serde::Serialize;

use crate::error::Result;
use crate::line::decoder::Decoded;

/// Serialized shape of one decoded line
#[derive(Debug, Serialize)]
struct RecordLine {
    uptime: String,
    time: String,
    date: String,
    timestamp: Option<String>,
    valid: bool,
    satellites: u8,
    latitude: Option<f64>,
    longitude: Option<f64>,
    speed_knots: Option<f64>,
    speed_kph: Option<f64>,
    course: Option<f64>,
    altitude: Option<f64>,
    temperature_board: Option<f64>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
    voltage: Option<f64>,
    state: i32,
    failures: usize,
    failed_fields: Vec<&'static str>,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Render a decoded line as a single JSON object (no trailing newline)
///
/// # Errors
///
/// Returns error if serialization fails
pub fn to_json_line(decoded: &Decoded) -> Result<String> {
    let r = &decoded.record;
    let line = RecordLine {
        uptime: r.uptime.to_string(),
        time: r.time.to_string(),
        date: r.date.to_string(),
        timestamp: r
            .timestamp()
            .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
        valid: r.valid,
        satellites: r.satellites,
        latitude: finite(r.latitude.to_decimal_degrees()),
        longitude: finite(r.longitude.to_decimal_degrees()),
        speed_knots: finite(r.speed_knots.to_f64()),
        speed_kph: finite(r.speed_kph.to_f64()),
        course: finite(r.course.to_f64()),
        altitude: finite(r.altitude.to_f64()),
        temperature_board: finite(r.temperature_board.to_f64()),
        temperature: finite(r.temperature.to_f64()),
        humidity: finite(r.humidity.to_f64()),
        pressure: finite(r.pressure.to_f64()),
        voltage: finite(r.voltage.to_f64()),
        state: r.state,
        failures: decoded.failures,
        failed_fields: decoded.failed.iter().map(|field| field.name()).collect(),
    };
    Ok(serde_json::to_string(&line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::decoder::parse_str;
    use serde_json::Value;

    const SAMPLE: &str = "$;00:05:13;19:36:26;13.09.2016;Y;04;40 40.68437 N;005 30.70415 E;0.432;0.800;;91.2;11.625;12.625;37.56;1009.809;8.6;66679";

    #[test]
    fn test_json_sample() {
        let decoded = parse_str(SAMPLE).unwrap();
        let json = to_json_line(&decoded).unwrap();
        assert!(!json.contains('\n'));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["uptime"], "00:05:13");
        assert_eq!(value["date"], "2016-09-13");
        assert_eq!(value["timestamp"], "2016-09-13T19:36:26");
        assert_eq!(value["valid"], true);
        assert_eq!(value["satellites"], 4);
        assert_eq!(value["course"], Value::Null);
        assert_eq!(value["voltage"], 8.6);
        assert_eq!(value["state"], 66679);
        assert_eq!(value["failures"], 0);
        assert_eq!(value["failed_fields"], serde_json::json!([]));

        let lat = value["latitude"].as_f64().unwrap();
        assert!((lat - 40.6780728).abs() < 1e-6);
    }

    #[test]
    fn test_json_failed_fields() {
        let line = SAMPLE.replace("005 30.70415 E", "005 30.70415");
        let decoded = parse_str(&line).unwrap();
        let value: Value = serde_json::from_str(&to_json_line(&decoded).unwrap()).unwrap();

        assert_eq!(value["failures"], 1);
        assert_eq!(value["failed_fields"], serde_json::json!(["longitude"]));
        assert_eq!(value["longitude"], Value::Null);
    }

    #[test]
    fn test_json_invalid_timestamp_is_null() {
        let line = SAMPLE.replace("13.09.2016", "31.02.2016");
        let decoded = parse_str(&line).unwrap();
        let value: Value = serde_json::from_str(&to_json_line(&decoded).unwrap()).unwrap();

        assert_eq!(value["date"], "2016-02-31");
        assert_eq!(value["timestamp"], Value::Null);
    }
}
