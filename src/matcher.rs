use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ReportError;
use crate::scanner::{scan, Descend, NodeKind, ROOT_SEGMENT};

/// Expected value kind of a known field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Integer,
    Flag,
}

/// The fixed set of field paths this tool reports, relative to the
/// document root, with the semantic kind used to format each value.
const KNOWN_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::Text),
    ("format/type", FieldKind::Text),
    ("format/width", FieldKind::Integer),
    ("format/height", FieldKind::Integer),
    ("format/interlace", FieldKind::Flag),
    ("format/frame rate", FieldKind::Integer),
];

/// Visitor that matches scanned paths against [`KNOWN_FIELDS`] and collects
/// one formatted line per match.
///
/// Paths arrive rooted at the `(root)` placeholder; a successful strip of
/// that marker sets the recognized flag, which distinguishes "parsed but
/// recognized nothing" from "parsed and found the expected shape".
#[derive(Debug, Default)]
pub struct KnownFieldMatcher {
    recognized: bool,
    lines: Vec<String>,
}

impl KnownFieldMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match one node. Always continues into children; the `Descend`
    /// return keeps pruning available to future matchers.
    pub fn visit(&mut self, path: &str, kind: NodeKind, node: &Value) -> Descend {
        let stripped = path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(ROOT_SEGMENT))
            .and_then(|p| p.strip_prefix('/'));

        let name = match stripped {
            Some(rest) => {
                self.recognized = true;
                rest
            }
            None => path,
        };

        if let Some((_, field_kind)) = KNOWN_FIELDS.iter().find(|(known, _)| *known == name) {
            match format_value(*field_kind, node) {
                Some(rendered) => {
                    self.lines.push(format!("{:<24}{}", format!("{}:", name), rendered));
                }
                None => {
                    debug!(
                        target = "jsonfetch::matcher",
                        path = %name,
                        kind = ?kind,
                        "known field has unexpected value kind, skipping"
                    );
                }
            }
        }

        Descend::Continue
    }

    /// True once at least one path under the document root was seen.
    pub fn recognized(&self) -> bool {
        self.recognized
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

fn format_value(kind: FieldKind, node: &Value) -> Option<String> {
    match kind {
        FieldKind::Text => node.as_str().map(str::to_string),
        FieldKind::Integer => node.as_i64().map(|n| n.to_string()),
        FieldKind::Flag => node
            .as_bool()
            .or_else(|| node.as_i64().map(|n| n != 0))
            .map(|b| if b { "true" } else { "false" }.to_string()),
    }
}

/// Parse an accumulated body and report its known fields.
///
/// Returns the formatted report lines in document order. Fails when
/// serde_json rejects the text, or when it parses but no path under the
/// document root was recognized; callers treat both the same way.
#[instrument(target = "jsonfetch::matcher", skip(body), fields(body_len = body.len()))]
pub fn report_known_fields(body: &[u8]) -> Result<Vec<String>, ReportError> {
    let doc: Value = serde_json::from_slice(body).map_err(ReportError::Parse)?;

    let mut matcher = KnownFieldMatcher::new();
    scan(&doc, &mut |path, kind, node| matcher.visit(path, kind, node));

    if !matcher.recognized() {
        debug!(target = "jsonfetch::matcher", "document parsed but no known shape found");
        return Err(ReportError::NothingRecognized);
    }

    debug!(
        target = "jsonfetch::matcher",
        lines = matcher.lines().len(),
        "report complete"
    );
    Ok(matcher.into_lines())
}
