use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn agile(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agile-calc").unwrap();
    cmd.current_dir(dir.path()).env_remove("AGILE_CALC_CONFIG");
    cmd
}

fn waterfall(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waterfall-calc").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// agile-calc: direct invocation
// ---------------------------------------------------------------------------

#[test]
fn agile_add() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["add", "5", "3"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn agile_negative_operands() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["add", "-5", "3"])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn agile_divide() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["divide", "10", "4"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn agile_divide_by_zero_prints_inf() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["divide", "10", "0"])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn agile_unknown_op_reports_not_available() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["modulo", "10", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not available yet:"));
}

#[test]
fn agile_run_json() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["--json", "add", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": 5.0"));
}

// ---------------------------------------------------------------------------
// agile-calc: usage paths (always exit 0)
// ---------------------------------------------------------------------------

#[test]
fn agile_no_args_prints_usage() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn agile_wrong_arity_prints_usage() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["add", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn agile_non_numeric_operand_prints_usage() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["add", "five", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// agile-calc: backlog / features
// ---------------------------------------------------------------------------

#[test]
fn agile_backlog() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .arg("backlog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Backlog:"))
        .stdout(predicate::str::contains(" - I1: Add basic addition"))
        .stdout(predicate::str::contains(" - I5:"));
}

#[test]
fn agile_features_defaults() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .arg("features")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature Toggles:"))
        .stdout(predicate::str::contains(" - add: ON"))
        .stdout(predicate::str::contains(" - history: OFF"));
}

#[test]
fn agile_features_json() {
    let dir = TempDir::new().unwrap();
    agile(&dir)
        .args(["--json", "features"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"add\": true"))
        .stdout(predicate::str::contains("\"history\": false"));
}

// ---------------------------------------------------------------------------
// agile-calc: feature toggle config file
// ---------------------------------------------------------------------------

#[test]
fn agile_config_file_disables_op() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("calc.yaml"), "multiply: false\n").unwrap();

    agile(&dir)
        .args(["multiply", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not available yet:"))
        .stdout(predicate::str::contains("multiply"));

    // Other ops stay enabled
    agile(&dir)
        .args(["add", "3", "4"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn agile_config_flag_overrides_default_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("other.yaml"), "divide: false\n").unwrap();

    agile(&dir)
        .args(["--config", "other.yaml", "divide", "10", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not available yet:"));
}

#[test]
fn agile_config_reflected_in_features() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("calc.yaml"), "subtract: false\nhistory: true\n").unwrap();

    agile(&dir)
        .arg("features")
        .assert()
        .success()
        .stdout(predicate::str::contains(" - subtract: OFF"))
        .stdout(predicate::str::contains(" - history: ON"));
}

#[test]
fn agile_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("calc.yaml"), "add: [broken\n").unwrap();

    agile(&dir)
        .args(["add", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load feature toggles"));
}

// ---------------------------------------------------------------------------
// waterfall-calc
// ---------------------------------------------------------------------------

#[test]
fn waterfall_add() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .args(["add", "5", "3"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn waterfall_subtract() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .args(["subtract", "10", "4"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn waterfall_negative_operands() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .args(["add", "5", "-3"])
        .assert()
        .success()
        .stdout("2\n");

    waterfall(&dir)
        .args(["subtract", "-5", "-3"])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn waterfall_out_of_scope_op_exits_2() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .args(["multiply", "2", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not allowed by scope"));
}

#[test]
fn waterfall_missing_args_exits_1() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .arg("add")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn waterfall_no_args_exits_1() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn waterfall_non_numeric_operand_exits_1() {
    let dir = TempDir::new().unwrap();
    waterfall(&dir)
        .args(["add", "five", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}
