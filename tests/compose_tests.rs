//! Integration tests for offline composition

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{enjour_cmd, write_note};

#[test]
fn test_compose_daily_to_stdout() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "template.enml",
        "<div># Goals</div>goalsX<div># Daily Goal Checklist</div>oldlist",
    );
    write_note(
        temp.path(),
        "previous.enml",
        "<div># Goals For Tomorrow</div>newlist<div># Other</div>y",
    );

    enjour_cmd()
        .current_dir(temp.path())
        .args([
            "compose",
            "daily",
            "--template",
            "template.enml",
            "--previous",
            "previous.enml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<en-note>\
             <div># Goals</div>goalsX<div># Daily Goal Checklist</div>newlist</en-note>",
        ));
}

#[test]
fn test_compose_weekly_to_file() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "template.enml",
        "<div># Daily Goal Checklist</div>a<div># Weekly Goal Checklist</div>carried",
    );
    write_note(
        temp.path(),
        "weekly.enml",
        "<div># Weekly Review</div>r<div># Weekly Goal Checklist</div>blank",
    );
    write_note(temp.path(), "previous.enml", "<div># Goals For Tomorrow</div>b");

    enjour_cmd()
        .current_dir(temp.path())
        .args([
            "compose",
            "weekly",
            "--template",
            "template.enml",
            "--weekly-template",
            "weekly.enml",
            "--previous",
            "previous.enml",
            "--output",
            "out.enml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let out = fs::read_to_string(temp.path().join("out.enml")).unwrap();
    assert!(out.ends_with(
        "<en-note><div># Daily Goal Checklist</div>b<div># Weekly Goal Checklist</div>carried\
         <div># Weekly Review</div>r<div># Weekly Goal Checklist</div>carried</en-note>"
    ));
}

#[test]
fn test_compose_malformed_template() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("template.enml"), "<div>no fence</div>").unwrap();
    write_note(temp.path(), "previous.enml", "");

    enjour_cmd()
        .current_dir(temp.path())
        .args([
            "compose",
            "daily",
            "--template",
            "template.enml",
            "--previous",
            "previous.enml",
        ])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Malformed daily template"));
}

#[test]
fn test_compose_uses_notebook_pattern() {
    let temp = TempDir::new().unwrap();
    enjour_cmd().arg("init").arg(temp.path()).assert().success();
    enjour_cmd()
        .current_dir(temp.path())
        .args(["config", "header_pattern", "<h2>(.+?)</h2>"])
        .assert()
        .success();

    write_note(
        temp.path(),
        "t.xml",
        "<h2>Daily Goal Checklist</h2>old",
    );
    write_note(temp.path(), "p.xml", "<h2>Goals For Tomorrow</h2>new");

    enjour_cmd()
        .current_dir(temp.path())
        .args(["compose", "daily", "--template", "t.xml", "--previous", "p.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Daily Goal Checklist</h2>new"));
}
