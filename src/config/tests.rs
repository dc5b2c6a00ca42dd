use super::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_test_config(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_without_config_file() {
    let temp_dir = setup_test_dir();
    let file = FileConfig::discover(None, temp_dir.path()).unwrap();
    assert_eq!(file, FileConfig::default());

    let config = RunConfig::resolve(file, &Overrides::default());
    assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(config.policy, MalformedPolicy::Strict);
    assert_eq!(config.excluded_faces, vec![258, 256, 2, 1, -1]);
    assert_eq!(config.management_prefix, "/localhost/nfd/");
}

#[test]
fn test_discovers_default_config_file() {
    let temp_dir = setup_test_dir();
    write_test_config(
        &temp_dir,
        DEFAULT_CONFIG_FILE,
        r#"
log_path = "sim.log"
malformed = "lenient"
"#,
    );

    let file = FileConfig::discover(None, temp_dir.path()).unwrap();
    assert_eq!(file.log_path, Some(PathBuf::from("sim.log")));
    assert_eq!(file.malformed, Some(MalformedPolicy::Lenient));
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(
        &temp_dir,
        "custom.toml",
        r#"
output_path = "out/table.dat"
excluded_faces = [256, 300]
management_prefix = "/localhost/"
"#,
    );

    let file = FileConfig::discover(Some(&path), temp_dir.path()).unwrap();
    let config = RunConfig::resolve(file, &Overrides::default());
    assert_eq!(config.output_path, PathBuf::from("out/table.dat"));
    assert_eq!(config.excluded_faces, vec![256, 300]);
    assert_eq!(config.management_prefix, "/localhost/");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let temp_dir = setup_test_dir();
    let err = FileConfig::discover(Some(&temp_dir.path().join("nope.toml")), temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, LogstatError::Io { .. }));
}

#[test]
fn test_invalid_config_is_a_config_error() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(&temp_dir, "bad.toml", "malformed = \"sometimes\"\n");
    let err = FileConfig::load(&path).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(FileConfig::parse("log_file = \"x\"\n").is_err());
}

#[test]
fn test_cli_overrides_win() {
    let file = FileConfig {
        log_path: Some(PathBuf::from("from-file.log")),
        output_path: Some(PathBuf::from("from-file.dat")),
        malformed: Some(MalformedPolicy::Strict),
        ..FileConfig::default()
    };
    let overrides = Overrides {
        log_path: Some(PathBuf::from("cli.log")),
        output_path: None,
        lenient: true,
    };

    let config = RunConfig::resolve(file, &overrides);
    assert_eq!(config.log_path, PathBuf::from("cli.log"));
    assert_eq!(config.output_path, PathBuf::from("from-file.dat"));
    assert_eq!(config.policy, MalformedPolicy::Lenient);
}

#[test]
fn test_env_vars_override_file_values() {
    let env: HashMap<&str, &str> = [(ENV_LOG_PATH, "env.log"), (ENV_OUTPUT_PATH, "")]
        .into_iter()
        .collect();
    let mut file = FileConfig {
        log_path: Some(PathBuf::from("from-file.log")),
        output_path: Some(PathBuf::from("from-file.dat")),
        ..FileConfig::default()
    };

    file.merge_vars(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(file.log_path, Some(PathBuf::from("env.log")));
    // empty values are ignored
    assert_eq!(file.output_path, Some(PathBuf::from("from-file.dat")));
}

#[test]
fn test_aggregator_uses_configured_filter() {
    let config = RunConfig {
        excluded_faces: vec![],
        ..RunConfig::default()
    };
    let table = config
        .aggregator()
        .unwrap()
        .run(["+0.5s 0 nfd.Forwarder:onIncomingInterest(): [DEBUG] x in=(1,0) i=/a"])
        .unwrap();
    assert_eq!(table.totals().total(), 1);
}
