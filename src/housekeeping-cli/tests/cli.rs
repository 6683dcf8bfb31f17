//! End-to-end checks of exit codes and filesystem effects of both binaries.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn move_cycle(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_move-cycle"))
        .args(args)
        .current_dir(dir)
        .env("HOUSEKEEPING_CONFIG", dir.join("no-config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn scale_damage(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scale-damage"))
        .args(args)
        .current_dir(dir)
        .env("HOUSEKEEPING_CONFIG", dir.join("no-config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn plans_with(dir: &Path, files: &[&str]) {
    let plans = dir.join("plans");
    fs::create_dir_all(&plans).unwrap();
    for file in files {
        fs::write(plans.join(file), format!("contents of {file}")).unwrap();
    }
}

#[test]
fn test_move_cycle_rejects_invalid_arguments() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    plans_with(dir, &["DevCycle_2025_0013.md"]);
    let before = listing(&dir.join("plans"));

    for args in [
        vec!["abc"],
        vec!["1.5"],
        vec!["0"],
        vec!["10000"],
        vec!["-3"],
        vec![],
        vec!["13", "14"],
    ] {
        let output = move_cycle(dir, &args);
        assert_eq!(output.status.code(), Some(1), "args {args:?}");
    }

    assert_eq!(listing(&dir.join("plans")), before);
    assert!(!dir.join("plans/completed").exists());
}

#[test]
fn test_move_cycle_distinct_error_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let not_int = move_cycle(dir, &["thirteen"]);
    assert!(stderr(&not_int).contains("valid integer"));

    let range = move_cycle(dir, &["10000"]);
    assert!(stderr(&range).contains("between 1 and 9999"));
}

#[test]
fn test_move_cycle_help_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = move_cycle(temp_dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Cycle number"));
}

#[test]
fn test_move_cycle_moves_matching_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    plans_with(
        dir,
        &[
            "DevCycle_2025_0013.md",
            "DevCycle_2025_0013_brainstorm.md",
            "DevCycle_2025_0013_bugs_01.md",
            "DevCycle_2025_0014.md",
        ],
    );

    let output = move_cycle(dir, &["13"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let completed = Path::new("plans").join("completed");
    assert!(out.contains(&format!(
        "Moving DevCycle 2025-0013 files to {}...",
        completed.display()
    )));
    assert!(out.contains("Found 3 files to move:"));
    assert!(out.contains("Completed: 3 files moved"));
    assert_eq!(listing(&dir.join("plans")), vec!["DevCycle_2025_0014.md", "completed"]);
    assert_eq!(
        listing(&dir.join("plans/completed")),
        vec![
            "DevCycle_2025_0013.md",
            "DevCycle_2025_0013_brainstorm.md",
            "DevCycle_2025_0013_bugs_01.md",
        ]
    );
}

#[test]
fn test_move_cycle_no_matches() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    plans_with(dir, &["DevCycle_2025_0001.md"]);

    let output = move_cycle(dir, &["2"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("No files found matching pattern: DevCycle_2025_0002*"));
    assert!(out.contains("Completed: 0 files moved"));
}

#[test]
fn test_move_cycle_missing_plans_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let output = move_cycle(dir, &["13"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Source directory plans not found"));
    assert!(out.contains("Completed: 0 files moved"));
    assert!(!dir.join("plans").exists());
}

#[test]
fn test_move_cycle_collision_is_skipped() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    plans_with(dir, &["DevCycle_2025_0005.md"]);
    fs::create_dir(dir.join("plans/completed")).unwrap();
    fs::write(dir.join("plans/completed/DevCycle_2025_0005.md"), "archived").unwrap();

    let output = move_cycle(dir, &["5"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.join("plans/DevCycle_2025_0005.md")).unwrap(),
        "contents of DevCycle_2025_0005.md"
    );
    assert_eq!(
        fs::read_to_string(dir.join("plans/completed/DevCycle_2025_0005.md")).unwrap(),
        "archived"
    );
}

fn write_theme_file(dir: &Path, theme: &str, file: &str, content: &str) {
    let theme_dir = dir.join("src/main/resources/data/themes").join(theme);
    fs::create_dir_all(&theme_dir).unwrap();
    fs::write(theme_dir.join(file), content).unwrap();
}

fn read_theme_json(dir: &Path, theme: &str, file: &str) -> serde_json::Value {
    let path = dir
        .join("src/main/resources/data/themes")
        .join(theme)
        .join(file);
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_scale_damage_default_layout() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    write_theme_file(
        dir,
        "test_theme",
        "ranged-weapons.json",
        r#"{"weapons": {"pistol": {"damage": 10}}}"#,
    );
    write_theme_file(
        dir,
        "civil_war",
        "melee-weapons.json",
        r#"{"meleeWeapons": {"bayonet": {"damage": 7}}}"#,
    );

    let output = scale_damage(dir, &[]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("pistol: 10 -> 50"));
    assert!(out.contains("Files updated: 2"));
    assert_eq!(
        read_theme_json(dir, "test_theme", "ranged-weapons.json"),
        serde_json::json!({"weapons": {"pistol": {"damage": 50}}})
    );
    assert_eq!(
        read_theme_json(dir, "civil_war", "melee-weapons.json"),
        serde_json::json!({"meleeWeapons": {"bayonet": {"damage": 35}}})
    );
}

#[test]
fn test_scale_damage_missing_themes_is_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = scale_damage(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Files updated: 0"));
}

#[test]
fn test_scale_damage_malformed_file_fails_but_continues() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    write_theme_file(dir, "test_theme", "ranged-weapons.json", "{ broken");
    write_theme_file(
        dir,
        "civil_war",
        "ranged-weapons.json",
        r#"{"weapons": {"musket": {"damage": 12}}}"#,
    );

    let output = scale_damage(dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Files updated: 1"));
    assert_eq!(
        read_theme_json(dir, "civil_war", "ranged-weapons.json")["weapons"]["musket"]["damage"],
        serde_json::json!(60)
    );
}

#[test]
fn test_scale_damage_dry_run_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    let original = r#"{"weapons": {"pistol": {"damage": 10}}}"#;
    write_theme_file(dir, "test_theme", "ranged-weapons.json", original);

    let output = scale_damage(dir, &["--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("pistol: 10 -> 50"));
    let path = dir.join("src/main/resources/data/themes/test_theme/ranged-weapons.json");
    assert_eq!(fs::read_to_string(path).unwrap(), original);
}
