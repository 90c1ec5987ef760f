use std::fs;
use std::process::Output;

use assert_cmd::Command;

fn filelog(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filelog"))
        .current_dir(dir.path())
        .env_remove("FILELOG_LEVEL")
        .env_remove("FILELOG_SINK")
        .env_remove("FILELOG_FILE")
        .args(args)
        .output()
        .expect("run filelog")
}

#[test]
fn help_prints_usage_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = filelog(&dir, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Usage: filelog"));
    assert!(stdout.contains("--logfile"));
}

#[test]
fn no_arguments_exit_with_one_and_log_to_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = filelog(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].ends_with("_logfile.log"));

    let text = fs::read_to_string(dir.path().join(&logs[0])).unwrap();
    assert!(text.contains("\t[ERROR]: No arguments found!"));
}

#[test]
fn logfile_option_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = filelog(&dir, &["-l", "custom.log", "-c", "clients.txt"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let text = fs::read_to_string(dir.path().join("custom.log")).unwrap();
    assert!(text.starts_with("####### Program start #######\n"));
    assert!(text.contains("\t[TRACE]: Client list: clients.txt\n"));
    assert!(text.ends_with("####### Program exit #######\n"));
}

#[test]
fn debug_mirrors_lines_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = filelog(&dir, &["--logfile", "mirror.log", "--debug"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let file = fs::read_to_string(dir.path().join("mirror.log")).unwrap();
    assert_eq!(stdout, file);
}

#[test]
fn environment_selects_console_sink() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_filelog"))
        .current_dir(dir.path())
        .env("FILELOG_SINK", "console")
        .env("FILELOG_LEVEL", "enable-all")
        .env_remove("FILELOG_FILE")
        .args(["-l", "unused.log"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\t[DEBUG]: Message logged through the direct interface"));
    assert_eq!(fs::metadata(dir.path().join("unused.log")).unwrap().len(), 0);
}

#[test]
fn invalid_environment_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_filelog"))
        .current_dir(dir.path())
        .env("FILELOG_LEVEL", "loud")
        .args(["-d", "example.org"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("FILELOG_LEVEL"));
}
