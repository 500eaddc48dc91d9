#![cfg(unix)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const FAKE_PROTOC: &str = r#"
out=""
inc=""
for a in "$@"; do
  case "$a" in
    -I*) inc="${a#-I}" ;;
    --python_out=*) out="${a#--python_out=}" ;;
    *)
      rel="${a#"$inc"/}"
      mkdir -p "$out/$(dirname "$rel")"
      : > "$out/${rel%.proto}_pb2.py"
      ;;
  esac
done
"#;

fn write_schema(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn protogen(schema_root: &Path, script: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_protogen"))
        .arg("generate")
        .arg("--schema-root")
        .arg(schema_root)
        .args(["--protoc", "sh"])
        .args(["--protoc-arg", "-c", "--protoc-arg", script])
        .args(["--protoc-arg", "fake-protoc"])
        .args(args)
        .env_remove("PROTOGEN_OUT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn verbose_generate_prints_command_and_succeeds() {
    let dir = TempDir::new().unwrap();
    let file = write_schema(dir.path(), "a/b/c.proto", "package a.b;\nmessage M {}\n");

    let output = protogen(dir.path(), FAKE_PROTOC, &["-v", "a.b.M"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("  sh \\\n"), "{stdout}");
    assert!(stdout.contains(&format!("-I{}", dir.path().display())));
    assert!(stdout.contains(&format!("--python_out={}", dir.path().display())));
    assert!(stdout.contains(&file.display().to_string()));

    assert!(dir.path().join("a/b/c_pb2.py").exists());
    assert!(dir.path().join("a/b/__init__.py").exists());
    assert!(dir.path().join("a/__init__.py").exists());
    assert!(!dir.path().join("__init__.py").exists());
}

#[test]
fn quiet_generate_prints_nothing_on_stdout() {
    let dir = TempDir::new().unwrap();
    write_schema(dir.path(), "foo.proto", "package foo;\nmessage Bar {}\n");

    let output = protogen(dir.path(), FAKE_PROTOC, &["foo.Bar"]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[test]
fn unresolved_name_exits_non_zero_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    write_schema(dir.path(), "foo.proto", "package foo;\nmessage Bar {}\n");

    let output = protogen(dir.path(), FAKE_PROTOC, &["-v", "Bar"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("`Bar`"), "{stderr}");
    assert!(stderr.contains("full package-qualified name"), "{stderr}");
    assert!(!dir.path().join("foo_pb2.py").exists());
}

#[test]
fn compiler_failure_exits_non_zero_without_markers() {
    let dir = TempDir::new().unwrap();
    write_schema(dir.path(), "a/m.proto", "package a;\nmessage M {}\n");

    let output = protogen(dir.path(), "exit 3", &["a.M"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("schema compiler `sh` failed"), "{stderr}");
    assert!(!dir.path().join("a/__init__.py").exists());
}
