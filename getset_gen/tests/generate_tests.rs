/* Generate Command Tests
 *
 * End-to-end runs against Go sources in scratch directories, checking the
 * exact text, names and modes of every written file.
 */

use getset_gen::{resolve_targets, run, GenerateError, GenerateOptions, RecordCatalog, Suffixes};
use getset_loader::parse_source;
use getset_loader::CollectError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SERVER_SOURCE: &str = r#"package app

// Server settings.
type Server struct {
	Host string
	Port int
	TLS  struct {
		Enabled bool
	}
	retries int
}

type Limits struct {
	MaxConns int
}
"#;

fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(path: &Path) -> GenerateOptions {
    GenerateOptions {
        path: path.to_path_buf(),
        quiet: true,
        ..Default::default()
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_server_files_with_setters() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    let report = run(&GenerateOptions {
        record_names: vec!["Server".to_string()],
        generate_setters: true,
        ..options(&source)
    })
    .unwrap();

    let root = source.parent().unwrap();
    assert_eq!(
        report.written,
        vec![
            root.join("server_getter.go"),
            root.join("server_setter.go"),
            root.join("server_interface.go"),
        ]
    );

    assert_eq!(
        read(&root.join("server_getter.go")),
        "package app

func (s *Server) GetHost() string {
\treturn s.Host
}

func (s *Server) GetPort() int {
\treturn s.Port
}

func (s *Server) GetTLSEnabled() bool {
\treturn s.TLS.Enabled
}
"
    );

    assert_eq!(
        read(&root.join("server_setter.go")),
        "package app

func (s *Server) SetHost(v string) {
\ts.Host = v
}

func (s *Server) SetPort(v int) {
\ts.Port = v
}

func (s *Server) SetTLSEnabled(v bool) {
\ts.TLS.Enabled = v
}
"
    );

    assert_eq!(
        read(&root.join("server_interface.go")),
        "package app

type ServerInterface interface {
\tGetHost() string
\tSetHost(v string)
\tGetPort() int
\tSetPort(v int)
\tGetTLSEnabled() bool
\tSetTLSEnabled(v bool)
}
"
    );

    assert!(!root.join("limits_getter.go").exists());
}

#[test]
fn test_without_setters_no_setter_file() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    let report = run(&options(&source)).unwrap();

    /* Every record when none are named */
    let names: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "server_getter.go",
            "server_interface.go",
            "limits_getter.go",
            "limits_interface.go",
        ]
    );
    assert!(!dir.path().join("server_setter.go").exists());
    assert_eq!(
        read(&dir.path().join("limits_interface.go")),
        "package app\n\ntype LimitsInterface interface {\n\tGetMaxConns() int\n}\n"
    );
}

#[test]
fn test_directory_is_walked_recursively() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("internal").join("db");
    fs::create_dir_all(&nested).unwrap();
    write_source(dir.path(), "server.go", SERVER_SOURCE);
    write_source(&nested, "pool.go", "package db\n\ntype PoolConfig struct {\n\tSize int\n}\n");
    write_source(dir.path(), "README.md", "not go");

    let report = run(&options(dir.path())).unwrap();

    assert_eq!(report.written.len(), 6);
    assert_eq!(
        read(&nested.join("pool_config_getter.go")),
        "package db\n\nfunc (p *PoolConfig) GetSize() int {\n\treturn p.Size\n}\n"
    );
}

#[test]
fn test_unknown_names_are_skipped() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    let report = run(&GenerateOptions {
        record_names: vec!["Missing".to_string(), "Limits".to_string()],
        ..options(&source)
    })
    .unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(dir.path().join("limits_getter.go").exists());
    assert!(!dir.path().join("server_getter.go").exists());
}

#[test]
fn test_no_matching_records_is_an_error() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    let err = run(&GenerateOptions {
        record_names: vec!["Missing".to_string()],
        ..options(&source)
    })
    .unwrap_err();

    assert!(matches!(err, GenerateError::NoRecords { .. }), "{:?}", err);
    assert!(err.to_string().contains("server.go"));
}

#[test]
fn test_file_without_records_is_an_error() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "main.go", "package main\n\nfunc main() {}\n");

    let err = run(&options(&source)).unwrap_err();
    assert!(matches!(err, GenerateError::NoRecords { .. }), "{:?}", err);
}

#[test]
fn test_non_go_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.txt", SERVER_SOURCE);

    let err = run(&options(&source)).unwrap_err();
    assert!(
        matches!(err, GenerateError::Collect(CollectError::NotGoFile { .. })),
        "{:?}",
        err
    );
}

#[test]
fn test_parse_failure_names_the_file() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "broken.go", "package app\n\ntype Broken struct {\n");

    let err = run(&options(&source)).unwrap_err();
    assert!(matches!(err, GenerateError::Load(_)), "{:?}", err);
    assert!(err.to_string().contains("broken.go"));
}

#[test]
fn test_duplicate_accessor_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        dir.path(),
        "dup.go",
        "package app\n\ntype Base struct {\n\tID int\n}\n\ntype Item struct {\n\tBase\n\tID int\n}\n",
    );

    let err = run(&GenerateOptions {
        record_names: vec!["Item".to_string()],
        ..options(&source)
    })
    .unwrap_err();
    assert!(matches!(err, GenerateError::Derive { .. }), "{:?}", err);
    assert!(!dir.path().join("item_getter.go").exists());

    run(&GenerateOptions {
        record_names: vec!["Item".to_string()],
        allow_duplicates: true,
        ..options(&source)
    })
    .unwrap();
    assert!(dir.path().join("item_getter.go").exists());
}

#[test]
fn test_custom_suffixes() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    let report = run(&GenerateOptions {
        record_names: vec!["Limits".to_string()],
        generate_setters: true,
        suffixes: Suffixes {
            getter_file: "_Reader".to_string(),
            setter_file: "_writer".to_string(),
            interface_file: "_contract".to_string(),
            interface_name: "Accessor".to_string(),
        },
        ..options(&source)
    })
    .unwrap();

    assert_eq!(
        report.written,
        vec![
            dir.path().join("limits__reader.go"),
            dir.path().join("limits_writer.go"),
            dir.path().join("limits_contract.go"),
        ]
    );
    assert!(read(&dir.path().join("limits_contract.go")).contains("type LimitsAccessor interface {"));
}

#[test]
fn test_any_type_in_generated_files() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        dir.path(),
        "doc.go",
        "package doc\n\ntype Doc struct {\n\tMeta map[string]interface{}\n}\n",
    );

    run(&options(&source)).unwrap();
    assert!(read(&dir.path().join("doc_getter.go")).contains("GetMeta() map[string]any {"));

    run(&GenerateOptions {
        use_any_type: false,
        ..options(&source)
    })
    .unwrap();
    assert!(read(&dir.path().join("doc_interface.go")).contains("\tGetMeta() map[string]interface{}\n"));
}

#[cfg(unix)]
#[test]
fn test_files_get_requested_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);

    run(&GenerateOptions {
        record_names: vec!["Limits".to_string()],
        file_perm: 0o640,
        ..options(&source)
    })
    .unwrap();

    let mode = fs::metadata(dir.path().join("limits_getter.go"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode & !0o640, 0);
}

#[test]
fn test_write_failure_stops_remaining_files() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "server.go", SERVER_SOURCE);
    let blocked = dir.path().join("limits_setter.go");
    fs::create_dir(&blocked).unwrap();

    let err = run(&GenerateOptions {
        record_names: vec!["Limits".to_string(), "Server".to_string()],
        generate_setters: true,
        ..options(&source)
    })
    .unwrap_err();

    match &err {
        GenerateError::Write { path, .. } => assert_eq!(path, &blocked),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("limits_setter.go"));
    assert!(dir.path().join("limits_getter.go").is_file());
    assert!(!dir.path().join("limits_interface.go").exists());
    assert!(!dir.path().join("server_getter.go").exists());
}

#[test]
fn test_resolve_targets_keeps_request_order() {
    let unit = parse_source(SERVER_SOURCE).unwrap();
    let catalog = RecordCatalog::from_unit(&unit);
    let path = Path::new("server.go");

    let all: Vec<&str> = resolve_targets(&catalog, &[], path)
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(all, vec!["Server", "Limits"]);

    let requested = vec!["Limits".to_string(), "Nope".to_string(), "Server".to_string()];
    let picked: Vec<&str> = resolve_targets(&catalog, &requested, path)
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(picked, vec!["Limits", "Server"]);

    let err = resolve_targets(&catalog, &["Nope".to_string()], path).unwrap_err();
    assert!(matches!(err, GenerateError::NoRecords { .. }));
}
