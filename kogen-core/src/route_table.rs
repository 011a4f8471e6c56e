//! Structural, format-preserving edits of the project's route table.
//!
//! The route table is a JavaScript file whose top-level
//! `module.exports = { ... }` assignment maps route strings to view names.
//! The file is parsed with `oxc` to locate that object literal; edits are
//! spliced into the original text at offsets taken from the syntax tree, so
//! every byte outside the inserted text is preserved.

use std::ops::Range;

use oxc_allocator::Allocator;
use oxc_ast::ast::{AssignmentTarget, Expression, ObjectPropertyKind, PropertyKey, Statement};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

/// Error type for parsing and patching a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The file is not valid JavaScript.
    Syntax(Vec<String>),
    /// No top-level `module.exports = ...` assignment exists.
    ExportNotFound,
    /// More than one top-level `module.exports = ...` assignment exists.
    AmbiguousExport { count: usize },
    /// The exported value is not an object literal.
    NotAnObject,
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchError::Syntax(messages) => {
                write!(f, "syntax errors:")?;
                for message in messages {
                    write!(f, "\n  - {message}")?;
                }
                Ok(())
            }
            PatchError::ExportNotFound => {
                write!(f, "no top-level `{EXPORT_TARGET} = {{ ... }}` assignment found")
            }
            PatchError::AmbiguousExport { count } => write!(
                f,
                "found {count} top-level `{EXPORT_TARGET}` assignments, expected exactly one"
            ),
            PatchError::NotAnObject => {
                write!(f, "`{EXPORT_TARGET}` is not assigned an object literal")
            }
        }
    }
}

impl std::error::Error for PatchError {}

const EXPORT_TARGET: &str = "module.exports";

/// One `route: view` property of the exported object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Key of the property; string keys are unquoted.
    pub route: String,
    /// String values are unquoted, any other expression is its source text.
    pub view: String,
    /// Byte range of the whole property in the file.
    pub span: Range<usize>,
}

/// Offsets of the exported object literal inside the source.
#[derive(Debug, Clone)]
struct ObjectLayout {
    /// Byte offset of `{`.
    open: usize,
    /// Byte offset of `}`.
    close: usize,
    /// Spans of every property, spreads included, in source order.
    properties: Vec<Range<usize>>,
    entries: Vec<RouteEntry>,
    /// Quote character of the last string-literal key.
    quote: char,
}

/// A parsed route table that can be edited and reprinted.
#[derive(Debug, Clone)]
pub struct RouteTable {
    source: String,
    layout: ObjectLayout,
}

impl RouteTable {
    /// Parse `source` and locate the exported object literal.
    pub fn parse(source: impl Into<String>) -> Result<Self, PatchError> {
        let source = source.into();
        let layout = scan(&source)?;
        Ok(Self { source, layout })
    }

    /// Entries of the exported object in source order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.layout.entries
    }

    /// Number of `key: value` properties, spreads excluded.
    pub fn len(&self) -> usize {
        self.layout.entries.len()
    }

    /// Whether the exported object has no `key: value` properties.
    pub fn is_empty(&self) -> bool {
        self.layout.entries.is_empty()
    }

    /// Whether some property already has `route` as its key.
    pub fn contains_route(&self, route: &str) -> bool {
        self.layout.entries.iter().any(|e| e.route == route)
    }

    /// Append `'route': 'view'` after the last property of the exported
    /// object.
    ///
    /// Existing keys are not checked: inserting a route that is already
    /// present yields two properties with the same key.
    pub fn insert(&mut self, route: &str, view: &str) -> Result<(), PatchError> {
        if self.contains_route(route) {
            tracing::warn!(route, "route already present in route table, adding a duplicate key");
        }

        let q = self.layout.quote;
        let entry = format!(
            "{q}{}{q}: {q}{}{q}",
            escape_string(route, q),
            escape_string(view, q)
        );

        let mut edits = self.insertion_edits(&entry);
        edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));

        let mut updated = self.source.clone();
        for (range, text) in edits {
            updated.replace_range(range, &text);
        }

        tracing::debug!(route, view, "inserted route table entry");
        self.layout = scan(&updated)?;
        self.source = updated;
        Ok(())
    }

    /// The current text of the file.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consume the table and return the current text of the file.
    pub fn into_source(self) -> String {
        self.source
    }

    /// Text replacements that add `entry` while following the object's
    /// existing layout (single-line or one property per line, trailing comma
    /// or not, `\n` or `\r\n` line breaks).
    ///
    /// Only whitespace between the braces of an empty object is ever
    /// replaced; every other edit is a pure insertion.
    fn insertion_edits(&self, entry: &str) -> Vec<(Range<usize>, String)> {
        let src = self.source.as_str();
        let ObjectLayout {
            open,
            close,
            ref properties,
            ..
        } = self.layout;

        let (first, last) = match (properties.first(), properties.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                let inner = open + 1..close;
                if let Some(newline) = find_code_byte(src, inner.clone(), b'\n') {
                    let indent = format!("{}  ", line_indent(src, open));
                    let (at, nl) = break_before(src, newline);
                    return vec![(at..at, format!("{nl}{indent}{entry}"))];
                }
                return if src[inner.clone()].trim().is_empty() {
                    vec![(inner, format!(" {entry} "))]
                } else if src[..close].ends_with(char::is_whitespace) {
                    vec![(close..close, format!("{entry} "))]
                } else {
                    vec![(close..close, format!(" {entry} "))]
                };
            }
        };

        let trailing_comma = find_code_byte(src, last.end..close, b',');
        let multiline = src[open + 1..first.start].contains('\n');

        if !multiline {
            return match trailing_comma {
                Some(comma) => vec![(comma + 1..comma + 1, format!(" {entry},"))],
                None => vec![(last.end..last.end, format!(", {entry}"))],
            };
        }

        let indent = line_indent(src, last.start);
        let anchor = trailing_comma.map_or(last.end, |comma| comma + 1);
        let suffix = if trailing_comma.is_some() { "," } else { "" };

        match find_code_byte(src, anchor..close, b'\n') {
            Some(line_end) => {
                let (at, nl) = break_before(src, line_end);
                let mut edits = vec![(at..at, format!("{nl}{indent}{entry}{suffix}"))];
                if trailing_comma.is_none() {
                    edits.push((last.end..last.end, ",".to_string()));
                }
                edits
            }
            // `}` sits on the same line as the last property
            None => {
                let comma = if trailing_comma.is_none() { "," } else { "" };
                let nl = if src.contains("\r\n") { "\r\n" } else { "\n" };
                vec![(
                    anchor..anchor,
                    format!("{comma}{nl}{indent}{entry}{suffix}"),
                )]
            }
        }
    }
}

/// Parse `source`, insert one entry, and return the reprinted text.
pub fn patch(source: &str, route: &str, view: &str) -> Result<String, PatchError> {
    let mut table = RouteTable::parse(source)?;
    table.insert(route, view)?;
    Ok(table.into_source())
}

fn scan(source: &str) -> Result<ObjectLayout, PatchError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if ret.panicked || !ret.errors.is_empty() {
        return Err(PatchError::Syntax(
            ret.errors.iter().map(|e| e.to_string()).collect(),
        ));
    }

    let assigned: Vec<&Expression> = ret
        .program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ExpressionStatement(stmt) => match &stmt.expression {
                Expression::AssignmentExpression(assign) if is_module_exports(&assign.left) => {
                    Some(&assign.right)
                }
                _ => None,
            },
            _ => None,
        })
        .collect();

    let value = match assigned.as_slice() {
        [] => return Err(PatchError::ExportNotFound),
        [value] => *value,
        many => return Err(PatchError::AmbiguousExport { count: many.len() }),
    };

    let mut value = value;
    while let Expression::ParenthesizedExpression(paren) = value {
        value = &paren.expression;
    }
    let Expression::ObjectExpression(object) = value else {
        return Err(PatchError::NotAnObject);
    };

    let mut properties = Vec::with_capacity(object.properties.len());
    let mut entries = Vec::with_capacity(object.properties.len());
    let mut quote = '\'';

    for kind in &object.properties {
        let span = to_range(kind.span());
        properties.push(span.clone());

        let ObjectPropertyKind::ObjectProperty(prop) = kind else {
            continue;
        };

        let route = match &prop.key {
            PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
            PropertyKey::StringLiteral(lit) => {
                if let Some(c) = source[to_range(lit.span)].chars().next() {
                    quote = c;
                }
                lit.value.to_string()
            }
            other => source[to_range(other.span())].to_string(),
        };
        let view = match &prop.value {
            Expression::StringLiteral(lit) => lit.value.to_string(),
            other => source[to_range(other.span())].to_string(),
        };

        entries.push(RouteEntry { route, view, span });
    }

    let object_span = to_range(object.span);
    Ok(ObjectLayout {
        open: object_span.start,
        close: object_span.end - 1,
        properties,
        entries,
        quote,
    })
}

fn is_module_exports(target: &AssignmentTarget) -> bool {
    let AssignmentTarget::StaticMemberExpression(member) = target else {
        return false;
    };
    member.property.name.as_str() == "exports"
        && matches!(&member.object, Expression::Identifier(ident) if ident.name.as_str() == "module")
}

fn to_range(span: Span) -> Range<usize> {
    span.start as usize..span.end as usize
}

/// Leading whitespace of the line containing `pos`.
fn line_indent(src: &str, pos: usize) -> &str {
    let line_start = src[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &src[line_start..pos];
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Insertion point and line break for a new line placed before the line
/// break whose `\n` is at `newline`. A preceding `\r` is kept together with
/// its `\n`.
fn break_before(src: &str, newline: usize) -> (usize, &'static str) {
    if newline > 0 && src.as_bytes()[newline - 1] == b'\r' {
        (newline - 1, "\r\n")
    } else {
        (newline, "\n")
    }
}

/// First occurrence of `target` in `range` that is not inside a comment.
///
/// The newline ending a line comment counts as code.
fn find_code_byte(src: &str, range: Range<usize>, target: u8) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut i = range.start;
    while i < range.end {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < range.end && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < range.end && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 2;
            }
            b if b == target => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn escape_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
