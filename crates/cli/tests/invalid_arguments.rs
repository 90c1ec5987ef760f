//! Argument errors are reported before the shared logger is created.

use cli::run;

#[test]
fn unknown_option_fails_without_creating_logger() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let code = run(["filelog", "--no-such-option"], &mut stdout, &mut stderr);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    let stderr = String::from_utf8(stderr).unwrap();
    assert!(stderr.contains("--no-such-option"));
    assert!(logging::try_shared().is_none());
}
