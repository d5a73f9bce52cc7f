use super::*;

#[test]
fn parses_required_input_with_defaults() {
    let cli = Cli::try_parse_from(["carvision", "--input", "inventory.json"])
        .expect("expected valid cli args");

    assert_eq!(cli.input, PathBuf::from("inventory.json"));
    assert_eq!(cli.out_dir, PathBuf::from("src/data"));
    assert!(!cli.clear);
    assert!(!cli.sort);
    assert!(!cli.dry_run);
    assert_eq!(cli.log_level, "warn");
}

#[test]
fn missing_input_is_rejected() {
    assert!(Cli::try_parse_from(["carvision"]).is_err());
    assert!(Cli::try_parse_from(["carvision", "--clear"]).is_err());
}

#[test]
fn parses_all_options() {
    let cli = Cli::try_parse_from([
        "carvision",
        "--input",
        "export.json",
        "--out-dir",
        "/srv/site/data",
        "--clear",
        "--sort",
        "--dry-run",
        "--log-level",
        "debug",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.out_dir, PathBuf::from("/srv/site/data"));
    assert!(cli.clear);
    assert!(cli.sort);
    assert!(cli.dry_run);
    assert_eq!(cli.log_level, "debug");
}

#[test]
fn import_config_carries_flags() {
    let cli = Cli::try_parse_from([
        "carvision",
        "--input",
        "export.json",
        "--out-dir",
        "out",
        "--clear",
    ])
    .unwrap();
    let config = cli.import_config();

    assert_eq!(config.input, PathBuf::from("export.json"));
    assert_eq!(config.list_path(), PathBuf::from("out/cars.json"));
    assert_eq!(config.detail_dir(), PathBuf::from("out/cars"));
    assert!(config.clear);
    assert!(!config.sort);
    assert!(!config.dry_run);
}

#[test]
fn unknown_flag_is_rejected() {
    let result = Cli::try_parse_from(["carvision", "--input", "a.json", "--force"]);
    assert!(result.is_err());
}
