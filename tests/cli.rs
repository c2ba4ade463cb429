use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("files")
        .join(name)
}

fn snakecheck() -> Command {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.arg("--no-color");
    command
}

#[test]
fn test_valid_script() {
    snakecheck()
        .arg(fixture_path("valid.py"))
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Lexemes and Tokens Table ---"))
        .stdout(predicate::str::contains("BOOLEAN_LITERAL"))
        .stdout(predicate::str::contains("--- Symbol Table ---"))
        .stdout(predicate::str::contains("final_value"))
        .stdout(predicate::str::contains(
            "Parsing completed successfully with no errors!",
        ));
}

#[test]
fn test_no_tokens_flag() {
    snakecheck()
        .arg("--no-tokens")
        .arg(fixture_path("valid.py"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexemes and Tokens").not())
        .stdout(predicate::str::contains("--- Symbol Table ---"));
}

#[test]
fn test_lexical_errors_stop_before_parsing() {
    snakecheck()
        .arg(fixture_path("lexical_error.py"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Lexical errors found. Cannot proceed parsing.",
        ))
        .stdout(predicate::str::contains("--- Symbol Table ---").not())
        .stderr(predicate::str::contains(
            "Lexical Error at Line 2, Column 9: Unterminated string literal",
        ));
}

#[test]
fn test_syntax_errors_still_print_symbol_table() {
    snakecheck()
        .arg("--no-tokens")
        .arg(fixture_path("syntax_error.py"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("second"))
        .stdout(predicate::str::contains("third").not())
        .stdout(predicate::str::contains("Parsing completed with errors."))
        .stderr(predicate::str::contains(
            "Syntax Error at Line 2, Column 18: Undeclared identifier: missing",
        ));
}

#[test]
fn test_for_loop_is_reported() {
    snakecheck()
        .arg(fixture_path("for_loop.py"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not fully implemented"));
}

#[test]
fn test_missing_file() {
    snakecheck()
        .arg(fixture_path("does_not_exist.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
