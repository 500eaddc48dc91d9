use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use protogen::{CompilerCommand, GenerateError, Language};

#[test]
fn args_follow_include_output_inputs_order() {
    let cmd = CompilerCommand::new("protoc", "/src", Language::Python, "/out")
        .with_inputs(["/src/a/b.proto", "/src/c.proto"]);
    assert_eq!(
        cmd.args(),
        vec![
            OsString::from("-I/src"),
            OsString::from("--python_out=/out"),
            OsString::from("/src/a/b.proto"),
            OsString::from("/src/c.proto"),
        ]
    );
    assert_eq!(cmd.inputs(), &[PathBuf::from("/src/a/b.proto"), PathBuf::from("/src/c.proto")]);
}

#[test]
fn prefix_args_precede_include_flag() {
    let cmd = CompilerCommand::new("python3", "/src", Language::Python, "/out")
        .with_prefix_args(["-m", "grpc_tools.protoc"]);
    let args = cmd.args();
    assert_eq!(args[0], "-m");
    assert_eq!(args[1], "grpc_tools.protoc");
    assert_eq!(args[2], "-I/src");
}

#[test]
fn language_selects_output_flag() {
    let cmd = CompilerCommand::new("protoc", "/src", Language::Cpp, "/gen");
    assert_eq!(cmd.args()[1], "--cpp_out=/gen");
    assert_eq!(cmd.output(), Path::new("/gen"));
    assert_eq!(Language::Kotlin.to_string(), "kotlin");
    assert_eq!(Language::CSharp.out_flag(), "--csharp_out");
    assert_eq!(Language::Python.package_marker(), Some("__init__.py"));
    assert_eq!(Language::Java.package_marker(), None);
}

#[test]
fn display_is_shell_continued() {
    let cmd = CompilerCommand::new("protoc", "/src", Language::Python, "/src")
        .with_inputs(["/src/foo.proto"]);
    assert_eq!(
        cmd.to_string(),
        "  protoc \\\n    -I/src \\\n    --python_out=/src \\\n    /src/foo.proto"
    );
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_reported_with_status() {
    let err = CompilerCommand::new("false", "/src", Language::Python, "/out")
        .run()
        .unwrap_err();
    match err {
        GenerateError::CompilerFailed { program, status } => {
            assert_eq!(program, "false");
            assert!(!status.success());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_compiler_is_a_spawn_error() {
    let err = CompilerCommand::new("protogen-no-such-compiler", "/src", Language::Python, "/out")
        .run()
        .unwrap_err();
    assert!(matches!(err, GenerateError::CompilerSpawn { .. }));
}
