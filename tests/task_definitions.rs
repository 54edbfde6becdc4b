use std::fs;

use runbook::config;
use runbook::task::{TaskSource, TaskTable};

#[test]
fn the_five_targets_are_always_defined() {
    let table = TaskTable::builtin();
    for name in ["start", "spellcheck", "test", "build", "requirements"] {
        let task = table.resolve(name).unwrap();
        assert_eq!(task.source, TaskSource::Builtin);
        assert!(task.description.is_some());
    }
}

#[test]
fn each_target_dispatches_exactly_its_documented_command() {
    let table = TaskTable::builtin();

    let expected = [
        ("start", "uvicorn app.main:app --reload"),
        ("spellcheck", "codespell app tests"),
        ("test", "pytest --cov=app --cov-report=xml"),
        ("build", "docker build -t fastapi-azure-demo ."),
        (
            "requirements",
            "poetry export -f requirements.txt --output requirements.txt --without-hashes",
        ),
    ];

    for (name, command) in expected {
        assert_eq!(table.resolve(name).unwrap().command_line(), command);
    }
}

#[test]
fn resolution_is_pure_and_order_independent() {
    let table = TaskTable::builtin();

    let before: Vec<String> = table.names();
    // Resolving in any order leaves the table untouched
    table.resolve("requirements").unwrap();
    table.resolve("start").unwrap();
    table.resolve("build").unwrap();
    assert_eq!(table.names(), before);
}

#[test]
fn project_config_restates_and_extends_the_table() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        config::config_path(dir.path()),
        r#"
[[task]]
name = "test"
program = "pytest"
args = ["--cov=app", "--cov-report=xml", "-q"]

[[task]]
name = "lint"
program = "ruff"
args = ["check", "app"]
"#,
    )
    .unwrap();

    let table = config::load_table_from(dir.path()).unwrap();

    let test = table.resolve("test").unwrap();
    assert_eq!(test.source, TaskSource::Config);
    assert_eq!(
        test.command_line(),
        "pytest --cov=app --cov-report=xml -q"
    );

    // Untouched built-ins remain
    assert_eq!(
        table.resolve("start").unwrap().source,
        TaskSource::Builtin
    );

    // New task appended after the built-ins
    assert_eq!(table.names().last().map(String::as_str), Some("lint"));
}
