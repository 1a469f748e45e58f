//! End-to-end tests driving the `minish` binary over its stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn minish() -> Command {
    let mut cmd = Command::cargo_bin("minish").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn quit_exits_with_zero() {
    minish()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the interactive shell!\n> "));
}

#[test]
fn exit_stops_reading() {
    minish()
        .write_stdin("exit\nhelp\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Available commands").not());
}

#[test]
fn help_and_alias() {
    minish()
        .write_stdin("help\nh extra args\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "> Available commands: help, exit, echo\nExecuting command: help\n\
             > Available commands: help, exit, echo\nExecuting command: help\n",
        ));
}

#[test]
fn unknown_and_blank_lines() {
    minish()
        .write_stdin("foobar\n   \nHelp\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: 'foobar'"))
        .stdout(predicate::str::contains("No command entered"))
        .stdout(predicate::str::contains("Unknown command: 'Help'"));
}

#[test]
fn echo_is_registered() {
    minish()
        .write_stdin("say hi there\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there\nExecuting command: echo\n"));
}

#[test]
fn end_of_input_exits_cleanly() {
    minish().write_stdin("").assert().success();
}

#[test]
fn custom_prompt() {
    minish()
        .args(["--prompt", "$ "])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout("Welcome to the interactive shell!\n$ ");
}

#[test]
fn logs_stay_off_stdout() {
    minish()
        .arg("--verbose")
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("registering command").not());
}
