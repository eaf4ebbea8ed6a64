//! Configuration loading.

use daqc_emu::{EmuError, EmulationConfig, Emulator, Interaction};
use std::collections::HashMap;

#[test]
fn yaml_overrides_defaults() {
    let config = EmulationConfig::from_yaml_str(
        "interaction: xy\nspacing: 5.0\nlogging:\n  level: debug\n  json: true\n",
    )
    .unwrap();
    assert_eq!(config.interaction, Interaction::XY);
    assert_eq!(config.spacing, 5.0);
    assert_eq!(config.c6, EmulationConfig::default().c6);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn empty_mapping_gives_defaults() {
    let config = EmulationConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, EmulationConfig::default());
}

#[test]
fn non_positive_values_rejected() {
    assert!(matches!(
        EmulationConfig::from_yaml_str("spacing: -2.0"),
        Err(EmuError::Config(_))
    ));
    assert!(matches!(
        EmulationConfig::from_yaml_str("c6: 0.0"),
        Err(EmuError::Config(_))
    ));
}

#[test]
fn malformed_yaml_rejected() {
    assert!(matches!(
        EmulationConfig::from_yaml_str("spacing: ["),
        Err(EmuError::Yaml(_))
    ));
}

#[test]
fn environment_overrides_apply() {
    let env = HashMap::from([
        ("DAQC_SPACING", "12.5"),
        ("DAQC_INTERACTION", "XY"),
        ("DAQC_LOG_LEVEL", "warn"),
    ]);
    let mut config = EmulationConfig::default();
    config
        .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();
    assert_eq!(config.spacing, 12.5);
    assert_eq!(config.interaction, Interaction::XY);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn bad_environment_values_rejected() {
    let mut config = EmulationConfig::default();
    assert!(
        config
            .apply_overrides(|key| (key == "DAQC_SPACING").then(|| "wide".to_string()))
            .is_err()
    );
    assert!(
        config
            .apply_overrides(|key| (key == "DAQC_INTERACTION").then(|| "zz".to_string()))
            .is_err()
    );
}

#[test]
fn failed_overrides_leave_config_unchanged() {
    let env = HashMap::from([("DAQC_SPACING", "4.0"), ("DAQC_INTERACTION", "zz")]);
    let mut config = EmulationConfig::default();
    assert!(matches!(
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string())),
        Err(EmuError::Config(_))
    ));
    assert_eq!(config, EmulationConfig::default());
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("daqc-emu-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "interaction: XY\nc3: 1000.0\n").unwrap();
    let config = EmulationConfig::load(Some(&path));
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.c3, 1000.0);
    let emulator = Emulator::from_config(&config);
    assert_eq!(emulator.model().c3, 1000.0);
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("daqc-emu-config-does-not-exist.yaml");
    assert!(matches!(
        EmulationConfig::load(Some(&path)),
        Err(EmuError::Io(_))
    ));
}
