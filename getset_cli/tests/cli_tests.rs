/* CLI Tests
 *
 * Runs the built `getset` binary against scratch directories and checks
 * its output streams, exit status and generated files.
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = "package config\n\ntype Config struct {\n\tDebug bool\n\tRedis Redis\n}\n\ntype Redis struct {\n\tAddr string\n}\n";

fn getset(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_getset"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GETSET_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getset")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generates_and_prints_done() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.go"), SOURCE).unwrap();

    let output = getset(&["-f", "config.go", "-s", "Config", "--setter"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("generating: "), "{}", out);
    assert!(out.contains("config.go for [Config]"), "{}", out);
    assert!(out.trim_end().ends_with("done"), "{}", out);

    let getter = fs::read_to_string(dir.path().join("config_getter.go")).unwrap();
    assert!(getter.contains("func (c *Config) GetRedisAddr() string {\n\treturn c.Redis.Addr\n}"));
    assert!(dir.path().join("config_setter.go").exists());
    assert!(dir.path().join("config_interface.go").exists());
    assert!(!dir.path().join("redis_getter.go").exists());
}

#[test]
fn test_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.go"), SOURCE).unwrap();

    let output = getset(&["-q", "-f", "config.go"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert!(dir.path().join("redis_interface.go").exists());
}

#[test]
fn test_missing_struct_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.go"), SOURCE).unwrap();

    let output = getset(&["-f", "config.go", "-s", "Nope"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: no valid records to process"), "{}", stderr(&output));
}

#[test]
fn test_invalid_perm_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.go"), SOURCE).unwrap();

    let output = getset(&["-f", "config.go", "--perm", "1777"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("exceeds valid range"), "{}", stderr(&output));
    assert!(!dir.path().join("config_getter.go").exists());
}

#[test]
fn test_missing_path_fails() {
    let dir = TempDir::new().unwrap();

    let output = getset(&["-f", "absent.go"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("absent.go"), "{}", stderr(&output));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.go"), SOURCE).unwrap();
    fs::write(
        dir.path().join("getset.yaml"),
        "file: config.go\nstructs: [Redis]\ninterface-name-suffix: Accessors\nquiet: true\n",
    )
    .unwrap();

    let output = getset(&["-c", "getset.yaml"], dir.path());
    assert!(output.status.success(), "{}", stderr(&output));

    let interface = fs::read_to_string(dir.path().join("redis_interface.go")).unwrap();
    assert_eq!(
        interface,
        "package config\n\ntype RedisAccessors interface {\n\tGetAddr() string\n}\n"
    );
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = getset(&["--version"], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("getset "), "{}", stdout(&output));
}
