use doorlock_core::{BuildError, Command, Endpoint};
use doorlock_widget::{WidgetConfig, WidgetFamily, WidgetModel};
use serde_json::json;

fn configured() -> WidgetConfig {
    WidgetConfig {
        scheme: Some("com.example.app".into()),
        api_key: Some("AB+CD".into()),
        secret_key: Some("s3cr3t".into()),
        device_id: Some("dev 1".into()),
    }
}

#[test]
fn medium_widget_shows_labelled_lock_then_unlock() {
    let model = WidgetModel::new(&configured(), WidgetFamily::SystemMedium).unwrap();
    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(
        value,
        json!({
            "family": "system_medium",
            "glyph": "key-solid",
            "buttons": [
                {
                    "command": "lock",
                    "label": "Lock",
                    "system_image": "lock.fill",
                    "endpoint": "com.example.app:///lock?APIKey=AB%2BCD&secretKey=s3cr3t&deviceID=dev%201"
                },
                {
                    "command": "unlock",
                    "label": "Unlock",
                    "system_image": "lock.open.fill",
                    "endpoint": "com.example.app:///unlock?APIKey=AB%2BCD&secretKey=s3cr3t&deviceID=dev%201"
                }
            ]
        })
    );
}

#[test]
fn small_widget_drops_labels_but_keeps_links() {
    let model = WidgetModel::new(&configured(), WidgetFamily::SystemSmall).unwrap();
    for button in &model.buttons {
        assert!(button.label.is_empty());
    }
    let large = WidgetModel::new(&configured(), WidgetFamily::SystemLarge).unwrap();
    assert_eq!(
        model.button(Command::Unlock).map(|b| &b.endpoint),
        large.button(Command::Unlock).map(|b| &b.endpoint)
    );
}

#[test]
fn unconfigured_widget_targets_companion_app_with_empty_values() {
    let model = WidgetModel::new(&WidgetConfig::default(), WidgetFamily::SystemMedium).unwrap();
    let lock = model.button(Command::Lock).unwrap();
    assert_eq!(
        lock.endpoint.as_str(),
        "com.kishikawakatsumi.Doorlock:///lock?APIKey=&secretKey=&deviceID="
    );
}

#[test]
fn button_links_decode_back_to_configuration() {
    let config = configured();
    let model = WidgetModel::new(&config, WidgetFamily::SystemLarge).unwrap();
    for button in &model.buttons {
        let parsed = Endpoint::parse(button.endpoint.as_str()).unwrap();
        assert_eq!(parsed.command, button.command);
        assert_eq!(parsed.credentials, config.credentials());
        assert_eq!(parsed.device_id, config.device_id());
    }
}

#[test]
fn bad_configured_scheme_is_reported() {
    let config = WidgetConfig {
        scheme: Some("not a scheme".into()),
        ..Default::default()
    };
    assert_eq!(
        WidgetModel::new(&config, WidgetFamily::SystemMedium),
        Err(BuildError::InvalidScheme("not a scheme".into()))
    );
}
