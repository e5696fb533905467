use std::io::Write;

use doorlock_widget::{ConfigError, WidgetConfig};
use tempfile::NamedTempFile;

#[test]
fn loads_yaml_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "scheme: com.example.app\napi_key: key\nsecret_key: secret\ndevice_id: front"
    )
    .unwrap();

    let config = WidgetConfig::from_path(file.path()).expect("config loads");
    assert_eq!(config.scheme(), "com.example.app");
    assert_eq!(config.credentials().api_key, "key");
    assert_eq!(config.credentials().secret_key, "secret");
    assert_eq!(config.device_id().as_str(), "front");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.yaml");
    let err = WidgetConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err:?}");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "api_key: [unterminated").unwrap();
    let err = WidgetConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}
