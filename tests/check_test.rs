//! Integration tests for `cmakestack check`
//!
//! Validates graph diagnostics: dangling references, cycles and missing
//! build manifests are reported without running any build.

mod common;

use common::{run_cmakestack, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_check_passes_on_valid_graph() {
    let workspace = TestWorkspace::new();
    let graph = workspace.write_graph(
        r#"
- name: a
  sub: src
- name: b
  sub: src
  dependencies: [a]
"#,
    );
    workspace.create_project("src", "a");
    workspace.create_project("src", "b");

    let output = run_cmakestack(
        &workspace,
        &[
            "check",
            graph.to_str().unwrap(),
            "--source-root",
            workspace.path().to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::contains("All dependencies are resolvable").eval(&stdout));
    assert!(predicate::str::contains("Check passed").eval(&stdout));
    assert!(predicate::str::contains("• a").eval(&stdout));
    assert!(predicate::str::contains("• b").eval(&stdout));
}

#[test]
fn test_check_warns_about_dangling_references() {
    let workspace = TestWorkspace::new();
    let graph = workspace.write_graph(
        r#"
- name: a
  sub: src
  dependencies: [ghost]
"#,
    );
    workspace.create_project("src", "a");

    let output = run_cmakestack(
        &workspace,
        &[
            "check",
            graph.to_str().unwrap(),
            "--source-root",
            workspace.path().to_str().unwrap(),
        ],
    );
    // Dangling references are tolerated: warn, do not fail
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::contains("Dangling dependency reference: ghost").eval(&stdout));
}

#[test]
fn test_check_fails_on_cycle() {
    let workspace = TestWorkspace::new();
    let graph = workspace.write_graph(
        r#"
- name: a
  sub: src
  dependencies: [b]
- name: b
  sub: src
  dependencies: [a]
"#,
    );

    let output = run_cmakestack(&workspace, &["check", graph.to_str().unwrap()]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::contains("Circular dependency").eval(&stdout));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Check failed").eval(&stderr));
}

#[test]
fn test_check_warns_about_missing_manifest() {
    let workspace = TestWorkspace::new();
    let graph = workspace.write_graph("- name: a\n  sub: src\n");

    let output = run_cmakestack(
        &workspace,
        &[
            "check",
            graph.to_str().unwrap(),
            "--source-root",
            workspace.path().to_str().unwrap(),
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::contains("project would be skipped").eval(&stdout));
}

#[test]
fn test_check_rejects_duplicate_identifiers() {
    let workspace = TestWorkspace::new();
    let graph = workspace.write_graph("- name: a\n  sub: x\n- name: a\n  sub: y\n");

    let output = run_cmakestack(&workspace, &["check", graph.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Duplicate project").eval(&stderr));
}
