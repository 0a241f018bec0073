use jsonfetch::error::ReportError;
use jsonfetch::matcher::{report_known_fields, KnownFieldMatcher};
use jsonfetch::scanner::{scan, Descend, NodeKind};
use serde_json::json;

#[test]
fn scan_visits_every_node_once_in_preorder() {
    let doc = json!({
        "name": "camera1",
        "format": { "width": 640, "height": 480 },
        "tags": ["a", "b"]
    });

    let mut paths = Vec::new();
    scan(&doc, &mut |path, _kind, _node| {
        paths.push(path.to_string());
        Descend::Continue
    });

    assert_eq!(
        paths,
        vec![
            "/(root)",
            "/(root)/name",
            "/(root)/format",
            "/(root)/format/width",
            "/(root)/format/height",
            "/(root)/tags",
            "/(root)/tags/0",
            "/(root)/tags/1",
        ]
    );
}

#[test]
fn scan_reports_node_kinds() {
    let doc = json!({ "n": 1, "s": "x", "b": true, "z": null, "a": [], "o": {} });

    let mut kinds = Vec::new();
    scan(&doc, &mut |path, kind, _node| {
        kinds.push((path.to_string(), kind));
        Descend::Continue
    });

    assert_eq!(kinds[0], ("/(root)".to_string(), NodeKind::Object));
    assert!(kinds.contains(&("/(root)/n".to_string(), NodeKind::Number)));
    assert!(kinds.contains(&("/(root)/s".to_string(), NodeKind::Text)));
    assert!(kinds.contains(&("/(root)/b".to_string(), NodeKind::Bool)));
    assert!(kinds.contains(&("/(root)/z".to_string(), NodeKind::Null)));
    assert!(kinds.contains(&("/(root)/a".to_string(), NodeKind::Array)));
    assert!(kinds.contains(&("/(root)/o".to_string(), NodeKind::Object)));
}

#[test]
fn stop_prunes_children_but_not_siblings() {
    let doc = json!({
        "skip": { "inner": 1 },
        "keep": { "inner": 2 }
    });

    let mut paths = Vec::new();
    scan(&doc, &mut |path, _kind, _node| {
        paths.push(path.to_string());
        if path == "/(root)/skip" {
            Descend::Stop
        } else {
            Descend::Continue
        }
    });

    assert!(paths.contains(&"/(root)/skip".to_string()));
    assert!(!paths.contains(&"/(root)/skip/inner".to_string()));
    assert!(paths.contains(&"/(root)/keep".to_string()));
    assert!(paths.contains(&"/(root)/keep/inner".to_string()));
}

#[test]
fn matcher_reports_camera_document() {
    let doc = json!({
        "name": "camera1",
        "format": { "width": 640, "height": 480 }
    });

    let mut matcher = KnownFieldMatcher::new();
    scan(&doc, &mut |path, kind, node| matcher.visit(path, kind, node));

    assert!(matcher.recognized());
    let lines = matcher.into_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("name:") && lines[0].ends_with("camera1"));
    assert!(lines[1].starts_with("format/width:") && lines[1].ends_with("640"));
    assert!(lines[2].starts_with("format/height:") && lines[2].ends_with("480"));
}

#[test]
fn matcher_reports_all_known_fields() {
    let doc = json!({
        "name": "camera1",
        "format": {
            "type": "mjpeg",
            "width": 640,
            "height": 480,
            "interlace": false,
            "frame rate": 30
        }
    });

    let mut matcher = KnownFieldMatcher::new();
    scan(&doc, &mut |path, kind, node| matcher.visit(path, kind, node));

    let lines = matcher.into_lines();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("format/type:") && lines[1].ends_with("mjpeg"));
    assert!(lines[4].starts_with("format/interlace:") && lines[4].ends_with("false"));
    assert!(lines[5].starts_with("format/frame rate:") && lines[5].ends_with("30"));
}

#[test]
fn known_field_with_wrong_kind_is_skipped() {
    let doc = json!({ "name": 42, "format": { "width": "wide" } });

    let mut matcher = KnownFieldMatcher::new();
    scan(&doc, &mut |path, kind, node| matcher.visit(path, kind, node));

    assert!(matcher.recognized());
    assert!(matcher.lines().is_empty());
}

#[test]
fn report_known_fields_end_to_end() {
    let body = br#"{"name":"camera1","format":{"width":640,"height":480}}"#;
    let lines = report_known_fields(body).expect("report should succeed");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("camera1"));
}

#[test]
fn malformed_json_is_a_parse_error_not_a_crash() {
    let result = report_known_fields(br#"{"name":"#);
    assert!(matches!(result, Err(ReportError::Parse(_))));
}

#[test]
fn scalar_root_is_not_recognized() {
    let result = report_known_fields(b"42");
    assert!(matches!(result, Err(ReportError::NothingRecognized)));
}

#[test]
fn empty_object_is_not_recognized() {
    let result = report_known_fields(b"{}");
    assert!(matches!(result, Err(ReportError::NothingRecognized)));
}

#[test]
fn unknown_fields_still_count_as_recognized_document() {
    let lines = report_known_fields(br#"{"other":1}"#).expect("document shape is recognized");
    assert!(lines.is_empty());
}
