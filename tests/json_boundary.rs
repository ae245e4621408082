//! 호스트 계층과 주고받는 JSON 요청/응답 형태 검사.
use std::process::ExitCode;

use serde_json::{json, Value};
use unit_converter::app::{handle_convert, handle_request, AppError};
use unit_converter::config::{Config, OutputFormat, OutputConfig};
use unit_converter::ui_cli::ConvertArgs;
use unit_converter::{ConversionRequest, ConversionResponse};

fn request_output(body: &str) -> (ExitCode, Value) {
    let mut out = Vec::new();
    let code = handle_request(&mut out, body).expect("request handled");
    let value = serde_json::from_slice(&out).expect("json output");
    (code, value)
}

#[test]
fn success_response_has_all_fields() {
    let (code, v) = request_output(
        r#"{"category": "length", "value": 1, "from_unit": "mi", "to_unit": "km"}"#,
    );
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        v,
        json!({
            "success": true,
            "original_value": 1.0,
            "original_unit": "mi",
            "converted_value": 1.60934,
            "converted_unit": "km",
            "category": "length",
            "formula": "1 mi = 1.60934 km",
        })
    );
}

#[test]
fn failure_response_carries_error_and_category() {
    let (code, v) = request_output(
        r#"{"category": "length", "value": 1, "from_unit": "furlong", "to_unit": "m"}"#,
    );
    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(v["success"], json!(false));
    assert_eq!(v["category"], json!("length"));
    assert!(v["error"].as_str().unwrap().contains("furlong"));
    assert!(v.get("converted_value").is_none());
}

#[test]
fn unsupported_category_echoes_raw_input() {
    let (_, v) = request_output(
        r#"{"category": "bogus", "value": 1, "from_unit": "m", "to_unit": "km"}"#,
    );
    assert_eq!(v["success"], json!(false));
    assert_eq!(v["category"], json!("bogus"));
}

#[test]
fn malformed_request_is_a_json_error() {
    let mut out = Vec::new();
    let err = handle_request(&mut out, r#"{"category": "length"}"#).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(out.is_empty());
}

#[test]
fn request_respond_matches_from_outcome() {
    let req = ConversionRequest::new("temperature", 100.0, "C", "F");
    let response = req.respond();
    assert!(response.is_success());
    assert_eq!(
        response,
        ConversionResponse::from_outcome("temperature", req.convert())
    );
}

#[test]
fn convert_command_honours_configured_format() {
    let args = ConvertArgs {
        category: "speed".to_string(),
        value: 10.0,
        from: "m/s".to_string(),
        to: "m/s".to_string(),
        json: false,
    };

    let mut text = Vec::new();
    let code = handle_convert(&mut text, &args, &Config::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(String::from_utf8(text).unwrap(), "10 m/s = 10 m/s\n");

    let json_cfg = Config {
        output: OutputConfig {
            format: OutputFormat::Json,
        },
        ..Config::default()
    };
    let mut out = Vec::new();
    handle_convert(&mut out, &args, &json_cfg).unwrap();
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["converted_value"], json!(10.0));
}

#[test]
fn convert_command_reports_failure_through_exit_code() {
    let args = ConvertArgs {
        category: "volume".to_string(),
        value: 1.0,
        from: "barrel".to_string(),
        to: "l".to_string(),
        json: true,
    };
    let mut out = Vec::new();
    let code = handle_convert(&mut out, &args, &Config::default()).unwrap();
    assert_eq!(code, ExitCode::FAILURE);
    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["success"], json!(false));
}
