use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn calculate_fee() -> Command {
    let mut cmd = Command::cargo_bin("calculate-fee").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ===========================================================================
// Single calculation
// ===========================================================================

#[test]
fn test_prints_fee_for_interpolated_amount() {
    calculate_fee()
        .args(["11,500.00", "24"])
        .assert()
        .success()
        .stdout("460.00\n");
}

#[test]
fn test_prints_rounded_fee() {
    calculate_fee()
        .args(["11500.01", "24"])
        .assert()
        .success()
        .stdout("464.99\n");
}

#[test]
fn test_out_of_range_amount_exits_one() {
    calculate_fee()
        .args(["999.00", "12"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            "Error: Loan amount is out of the defined range : Amount must be between 1000.00 and 20000.00\n",
        );
}

#[test]
fn test_unsupported_term_exits_one() {
    calculate_fee()
        .args(["1000.00", "18"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Term must be 12 or 24 months"));
}

#[test]
fn test_invalid_amount_exits_one() {
    calculate_fee()
        .args(["abc", "12"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Invalid amount format"));
}

#[test]
fn test_negative_amount_is_out_of_range() {
    calculate_fee()
        .args(["-50", "12"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of the defined range"));
}

#[test]
fn test_huge_amount_is_out_of_range() {
    for amount in ["1e17", "100000000000000000", "99999999999999999999999999"] {
        calculate_fee()
            .args([amount, "12"])
            .assert()
            .code(1)
            .stderr(
                "Error: Loan amount is out of the defined range : Amount must be between 1000.00 and 20000.00\n",
            );
    }
}

// ===========================================================================
// Argument handling
// ===========================================================================

#[test]
fn test_missing_arguments_print_usage() {
    calculate_fee()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid number of arguments."))
        .stderr(predicate::str::contains("Usage: calculate-fee <amount> <term>"));
}

#[test]
fn test_single_argument_is_rejected() {
    calculate_fee()
        .arg("1000")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number of arguments."));
}

#[test]
fn test_extra_argument_is_rejected() {
    calculate_fee()
        .args(["1000", "12", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number of arguments."));
}

#[test]
fn test_unknown_output_format_names_the_flag() {
    calculate_fee()
        .args(["--output", "xml", "1000", "12"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: Invalid arguments: invalid value 'xml'"))
        .stderr(predicate::str::contains("--output"))
        .stderr(predicate::str::contains("Usage: calculate-fee <amount> <term>"));
}

// ===========================================================================
// Output formats and batch input
// ===========================================================================

#[test]
fn test_json_output_contains_breakdown() {
    let output = calculate_fee()
        .args(["--output", "json", "11500.01", "24"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["fee"], "464.99");
    assert_eq!(value["result"]["rounded_total"], "11965");
    assert_eq!(value["result"]["term"], 24);
}

#[test]
fn test_schedule_subcommand() {
    calculate_fee()
        .args(["schedule", "12"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1000.00 50.00\n2000.00 90.00\n"))
        .stdout(predicate::str::ends_with("20000.00 400.00\n"));
}

#[test]
fn test_batch_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"amount": "5000.00", "term": 12}}, {{"amount": "19,250.00", "term": 12}}]"#
    )
    .unwrap();

    calculate_fee()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("5000.00 100.00\n19250.00 385.00\n");
}

#[test]
fn test_batch_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(file, "- amount: 10000\n  term: 24\n").unwrap();

    calculate_fee()
        .args(["--input", file.path().to_str().unwrap(), "--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10000.00"))
        .stdout(predicate::str::contains("400.00"));
}

#[test]
fn test_batch_from_stdin() {
    calculate_fee()
        .write_stdin(r#"{"amount": "11500.00", "term": 24}"#)
        .assert()
        .success()
        .stdout("11500.00 460.00\n");
}

#[test]
fn test_batch_stops_at_invalid_request() {
    calculate_fee()
        .write_stdin(r#"[{"amount": "5000", "term": 12}, {"amount": "5000", "term": 36}]"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported loan term '36'"));
}

#[test]
fn test_missing_input_file() {
    calculate_fee()
        .args(["--input", "/nonexistent/requests.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}
