use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn analyze_help_lists_defaults() {
    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args(["analyze", "--help"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("--temps"));
    assert!(text.contains("--reference-temp"));
}
