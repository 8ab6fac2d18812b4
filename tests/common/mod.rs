#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn serene_cmd() -> Command {
    let mut cmd = Command::cargo_bin("serene").unwrap();
    cmd.env_remove("SERENE_ROOT");
    cmd.env_remove("SERENE_SYSTEM_THEME");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `serene new` in `dir` and return the id it prints
pub fn create_entry(dir: &Path, args: &[&str]) -> String {
    let output = serene_cmd()
        .current_dir(dir)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "serene new failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Saved entry ")
        .expect("unexpected output from serene new")
        .to_string()
}
