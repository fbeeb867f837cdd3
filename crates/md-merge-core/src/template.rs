//! Header and separator text for the merged document.
//!
//! Output must match these templates byte for byte.

/// Rendered once at the top of the document.
pub const HEADER_TEMPLATE: &str =
    "# {final_document_title}\n\n> Generated on {timestamp} from {file_count} file(s).\n\n---\n\n";

/// Rendered before the content of every file except the first input.
pub const SEPARATOR_TEMPLATE: &str = "\n\n---\n\n**Source file name**: `{source_path}`\n\n";

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Merged Document";

/// `strftime` format of the header timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

pub fn render_header(title: &str, timestamp: &str, file_count: usize) -> String {
    let count = file_count.to_string();
    substitute(
        HEADER_TEMPLATE,
        &[
            ("final_document_title", title),
            ("timestamp", timestamp),
            ("file_count", &count),
        ],
    )
}

pub fn render_separator(source_path: &str) -> String {
    substitute(SEPARATOR_TEMPLATE, &[("source_path", source_path)])
}

/// Single pass over `template`; substituted values are never rescanned and
/// unknown `{names}` are left as-is.
fn substitute(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let field = tail
            .find('}')
            .and_then(|close| fields.iter().find(|(name, _)| *name == &tail[..close]));
        match field {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
