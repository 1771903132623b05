use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn extorg() -> Command {
    Command::cargo_bin("extorg").unwrap()
}

#[test]
fn organizes_mixed_tree() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    fs::write(source.path().join("a.txt"), "alpha").unwrap();
    fs::write(source.path().join("b.TXT"), "beta").unwrap();
    fs::write(source.path().join("c"), "gamma").unwrap();
    let sub = source.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("d.txt"), "delta").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .success();

    let txt = dest.path().join("txt");
    assert_eq!(fs::read_to_string(txt.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(txt.join("b.TXT")).unwrap(), "beta");
    assert_eq!(fs::read_to_string(txt.join("d.txt")).unwrap(), "delta");
    assert_eq!(
        fs::read_to_string(dest.path().join("c")).unwrap(),
        "gamma"
    );
}

#[test]
fn missing_source_fails_before_touching_destination() {
    let dest = TempDir::new().unwrap();
    let dest_root = dest.path().join("out");

    extorg()
        .arg("/no/such/source")
        .arg(&dest_root)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Source directory not found"));

    assert!(!dest_root.exists());
}

#[test]
fn missing_destination_prints_usage() {
    extorg()
        .arg("/some/source")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rerun_overwrites_with_latest_contents() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let file = source.path().join("notes.md");
    fs::write(&file, "first").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .success();

    fs::write(&file, "second").unwrap();

    // Second run must not fail on existing directories and must overwrite
    extorg()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dest.path().join("md").join("notes.md")).unwrap(),
        "second"
    );
}

#[test]
fn per_file_failure_keeps_exit_code_zero() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    fs::write(source.path().join("ok.txt"), "fine").unwrap();
    fs::write(source.path().join("blocked.pdf"), "doc").unwrap();

    // A regular file squatting on the extension directory name makes every
    // pdf copy fail while txt copies proceed
    fs::write(dest.path().join("pdf"), "not a directory").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("blocked.pdf"));

    assert_eq!(
        fs::read_to_string(dest.path().join("txt").join("ok.txt")).unwrap(),
        "fine"
    );
}

#[test]
fn basename_collision_keeps_exactly_one_file() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let dir_a = source.path().join("dirA");
    let dir_b = source.path().join("dirB");
    fs::create_dir(&dir_a).unwrap();
    fs::create_dir(&dir_b).unwrap();
    fs::write(dir_a.join("x.log"), "from dirA").unwrap();
    fs::write(dir_b.join("x.log"), "from dirB").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(dest.path().join("log"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("x.log")]);

    // Last writer wins; either source may have finished last
    let content = fs::read_to_string(dest.path().join("log").join("x.log")).unwrap();
    assert!(content == "from dirA" || content == "from dirB");
}

#[test]
fn dry_run_prints_plan_without_copying() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    fs::write(source.path().join("a.txt"), "alpha").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"));

    assert!(!dest.path().join("txt").exists());
}

#[test]
fn json_output_reports_summary() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    fs::write(source.path().join("a.txt"), "alpha").unwrap();

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .arg("--output-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"copied\": 1"));
}

#[test]
fn bounded_concurrency_copies_everything() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    for i in 0..25 {
        fs::write(source.path().join(format!("f{}.dat", i)), "data").unwrap();
    }

    extorg()
        .arg(source.path())
        .arg(dest.path())
        .arg("--concurrency")
        .arg("4")
        .assert()
        .success();

    let count = fs::read_dir(dest.path().join("dat")).unwrap().count();
    assert_eq!(count, 25);
}
