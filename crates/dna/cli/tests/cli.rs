//! End-to-end tests for the `evol-dna` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DUMP: &str = r#"[
    {"id": 11, "gen": 3, "alive": true, "energy": 4.5,
     "dna": ["IS_CROWDED", "CJMP1", "FINAL_MOVE_NORTH", "APOPTOSIS"]},
    {"id": 12, "gen": 8, "alive": false, "energy": 0,
     "dna": ["FINAL_EAT"]}
]"#;

const BROKEN_DUMP: &str = r#"[
    {"id": 21, "gen": 1, "alive": true, "energy": 1.0, "dna": ["NOP", "BOGUS_OP"]},
    {"id": 22, "gen": 1, "alive": true, "energy": 1.0, "dna": ["FINAL_REST"]}
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// The binary with no user configuration and no RUST_LOG leaking in.
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("evol-dna").unwrap();
        cmd.env("EVOL_DNA_CONFIG", self.dir.path().join("absent.toml"))
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

#[test]
fn analyze_text_report() {
    let ws = Workspace::new();
    let dump = ws.file("dump.json", DUMP);

    let output = ws
        .command()
        .args(["--output", "text", "analyze"])
        .arg(&dump)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Loaded 2 lifeforms\n\nLifeform id 11, gen 3\n -> FINAL_MOVE_NORTH\nC -> APOPTOSIS\n"));
    assert!(stdout.contains("Lifeform id 12, gen 8\n -> FINAL_EAT\n"));
    assert!(stdout.contains("NSEWCG -> APOPTOSIS\n"));
}

#[test]
fn analyze_skip_dead() {
    let ws = Workspace::new();
    let dump = ws.file("dump.json", DUMP);

    ws.command()
        .args(["-o", "text", "analyze", "--skip-dead", "--sequential"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loaded 1 lifeforms"))
        .stdout(predicate::str::contains("Lifeform id 12").not());
}

#[test]
fn analyze_json_document() {
    let ws = Workspace::new();
    let dump = ws.file("dump.json", DUMP);

    let output = ws
        .command()
        .args(["--output", "json", "analyze", "--summary"])
        .arg(&dump)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["loaded"], 2);
    assert_eq!(value["lifeforms"][0]["id"], 11);
    assert_eq!(value["lifeforms"][1]["outcomes"].as_array().unwrap().len(), 34);
    assert_eq!(value["lifeforms"][1]["action_counts"]["FINAL_EAT"], 34);
}

#[test]
fn analyze_concatenates_files_in_order() {
    let ws = Workspace::new();
    let first = ws.file("a.json", DUMP);
    let second = ws.file("b.json", r#"[{"id": 5, "gen": 0, "alive": true, "energy": 1, "dna": []}]"#);

    let output = ws
        .command()
        .args(["-o", "text", "analyze"])
        .arg(&second)
        .arg(&first)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let five = stdout.find("Lifeform id 5,").unwrap();
    let eleven = stdout.find("Lifeform id 11,").unwrap();
    assert!(five < eleven);
    assert!(stdout.contains("Lifeform id 5, gen 0\n -> NOTHING\n"));
}

#[test]
fn analyze_fails_on_unknown_opcode() {
    let ws = Workspace::new();
    let dump = ws.file("broken.json", BROKEN_DUMP);

    ws.command()
        .args(["analyze"])
        .arg(&dump)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FATAL:"))
        .stderr(predicate::str::contains("BOGUS_OP"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn analyze_skip_invalid_keeps_going() {
    let ws = Workspace::new();
    let dump = ws.file("broken.json", BROKEN_DUMP);

    ws.command()
        .args(["-o", "text", "analyze", "--skip-invalid"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loaded 1 lifeforms"))
        .stdout(predicate::str::contains("Lifeform id 22, gen 1"));
}

#[test]
fn config_file_error_policy() {
    let ws = Workspace::new();
    let dump = ws.file("broken.json", BROKEN_DUMP);
    let config = ws.file("dna.toml", "on_error = \"skip\"\n");

    ws.command()
        .arg("--config")
        .arg(&config)
        .args(["-o", "text", "analyze"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lifeform id 22"));
}

#[test]
fn analyze_missing_file() {
    let ws = Workspace::new();

    ws.command()
        .args(["analyze", "/nonexistent/evol-dump.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/evol-dump.json"));
}

#[test]
fn analyze_requires_a_file() {
    let ws = Workspace::new();
    ws.command()
        .arg("analyze")
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FATAL: No file specified"))
        .stderr(predicate::str::contains("USAGE: evol-dna analyze"));
}

#[test]
fn analyze_defaults_to_text_layout() {
    let ws = Workspace::new();
    let dump = ws.file("dump.json", DUMP);

    ws.command()
        .arg("analyze")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loaded 2 lifeforms\n\nLifeform id 11, gen 3\n"));
}

#[test]
fn lenient_preset_skips_bad_and_dead_records() {
    let ws = Workspace::new();
    let broken = ws.file("broken.json", BROKEN_DUMP);
    let dump = ws.file("dump.json", DUMP);

    ws.command()
        .args(["--preset", "lenient", "analyze"])
        .arg(&broken)
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Loaded 2 lifeforms"))
        .stdout(predicate::str::contains("Lifeform id 22"))
        .stdout(predicate::str::contains("Lifeform id 11"))
        .stdout(predicate::str::contains("Lifeform id 12").not());
}

#[test]
fn conditions_lists_space() {
    let ws = Workspace::new();
    let output = ws
        .command()
        .args(["-o", "json", "conditions"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let forms: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(forms.len(), 34);
    assert_eq!(forms[0], "");
    assert_eq!(forms[2], "G");
    assert_eq!(forms[33], "NSEWCG");
}

#[test]
fn run_conditional_jump() {
    let ws = Workspace::new();

    ws.command()
        .args(["-o", "text", "run", "--condition", "C"])
        .args(["IS_CROWDED", "CJMP1", "FINAL_A", "FINAL_B"])
        .assert()
        .success()
        .stdout("C -> FINAL_B\n");

    // Skipping two from the jump lands past the end
    ws.command()
        .args(["-o", "text", "run", "--condition", "C"])
        .args(["IS_CROWDED", "CJMP2", "FINAL_A", "FINAL_B"])
        .assert()
        .success()
        .stdout("C -> NOTHING\n");

    ws.command()
        .args(["-o", "text", "run"])
        .args(["IS_CROWDED", "CJMP1", "FINAL_A", "FINAL_B"])
        .assert()
        .success()
        .stdout(" -> FINAL_A\n");
}

#[test]
fn run_rejects_unknown_opcode() {
    let ws = Workspace::new();

    ws.command()
        .args(["run", "NOP", "BOGUS_OP"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("BOGUS_OP"));
}

#[test]
fn run_rejects_bad_condition() {
    let ws = Workspace::new();

    ws.command()
        .args(["run", "--condition", "NX", "NOP"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid condition"));
}

#[test]
fn config_shows_effective_settings() {
    let ws = Workspace::new();
    let config = ws.file("dna.toml", "skip_dead = true\n");

    let output = ws
        .command()
        .arg("--config")
        .arg(&config)
        .args(["-o", "json", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["skip_dead"], true);
    assert_eq!(value["on_error"], "abort");
    assert_eq!(value["parallel"], true);
}
