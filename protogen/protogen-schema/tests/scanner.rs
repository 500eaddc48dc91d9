use protogen_schema::{ScanError, qualify, scan_schema};

#[test]
fn scan_package_and_messages() {
    let schema = r#"
syntax = "proto3";

package avs.calibration;

import "geometry/pose.proto";

message SensorProto {
  string id = 1;
}

message VehicleCalibrationProto {
  repeated SensorProto cameras = 1;
}
"#;
    let scanned = scan_schema(schema).unwrap();
    assert_eq!(scanned.package.as_deref(), Some("avs.calibration"));
    assert_eq!(
        scanned.messages,
        vec!["SensorProto", "VehicleCalibrationProto"]
    );
    assert_eq!(
        scanned.qualified_messages().collect::<Vec<_>>(),
        vec![
            "avs.calibration.SensorProto",
            "avs.calibration.VehicleCalibrationProto"
        ]
    );
}

#[test]
fn scan_without_package_yields_bare_names() {
    let scanned = scan_schema("message Bare {}\nmessage Other{ }").unwrap();
    assert_eq!(scanned.package, None);
    assert_eq!(
        scanned.qualified_messages().collect::<Vec<_>>(),
        vec!["Bare", "Other"]
    );
}

#[test]
fn nested_messages_are_captured_flat() {
    let schema = r#"
package geo;
message Outer {
  message Inner {
    double x = 1;
  }
  Inner inner = 1;
}
"#;
    let scanned = scan_schema(schema).unwrap();
    assert_eq!(scanned.messages, vec!["Outer", "Inner"]);
    assert!(
        scanned
            .qualified_messages()
            .any(|name| name == "geo.Inner")
    );
}

#[test]
fn multiple_packages_are_rejected() {
    let err = scan_schema("package a;\npackage b;\nmessage M {}").unwrap_err();
    assert_eq!(
        err,
        ScanError::MultiplePackages {
            packages: vec!["a".into(), "b".into()]
        }
    );
}

#[test]
fn commented_declarations_are_ignored() {
    let schema = r#"
// package legacy;
package current;
/* message Removed {
   } */
message Kept { // message Trailing {
}
"#;
    let scanned = scan_schema(schema).unwrap();
    assert_eq!(scanned.package.as_deref(), Some("current"));
    assert_eq!(scanned.messages, vec!["Kept"]);
}

#[test]
fn whitespace_between_tokens_is_tolerated() {
    let scanned = scan_schema("package\tfoo.bar\n;\nmessage\n\tBaz\n{\n}").unwrap();
    assert_eq!(scanned.package.as_deref(), Some("foo.bar"));
    assert_eq!(scanned.messages, vec!["Baz"]);
}

#[test]
fn field_types_named_message_are_not_declarations() {
    let scanned = scan_schema("package p;\nmessage A { message_id x = 1; }").unwrap();
    assert_eq!(scanned.messages, vec!["A"]);
}

#[test]
fn qualify_joins_package_and_name() {
    assert_eq!(qualify(Some("a.b"), "M"), "a.b.M");
    assert_eq!(qualify(None, "M"), "M");
}
