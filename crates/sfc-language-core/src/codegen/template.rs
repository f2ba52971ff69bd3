//! Template-section generation.
//!
//! The template section compiles into an embedded script document holding
//! its `{{ … }}` interpolation expressions, each emitted as a parenthesized
//! expression statement so the type checker sees them in scope. Inline
//! event-handler expressions (`@event="…"`) become their own embedded
//! codes nested inside the template's, one level deeper.
//!
//! This is deliberately not a template compiler: no element or directive
//! semantics, only the expression positions that editor features care
//! about.

use crate::document::Section;
use crate::options::GenerateOptions;
use crate::virtual_code::{Language, VirtualCode};
use sfc_source_map::{CodeInformation, CodeWriter, FileId};

/// Build the template virtual code and its nested handler codes
pub(super) fn generate(section: &Section, options: &GenerateOptions) -> VirtualCode {
    let handlers = scan_event_handlers(&section.text);
    let mut writer = CodeWriter::new();

    if options.interpolation_enabled {
        emit_interpolations(&mut writer, section);
    }

    // Each handler expression also appears here with narrowing-only
    // capabilities, so it type-checks in template scope without doubling
    // the diagnostics reported from its own embedded code below.
    for handler in &handlers {
        let value = &section.text[handler.value_start..handler.value_end];
        let expr = value.trim();
        if !expr.is_empty() {
            let leading = value.len() - value.trim_start().len();
            writer.wrap(
                "void (",
                expr,
                FileId::ROOT,
                section.start_offset + handler.value_start + leading,
                CodeInformation::narrowing(),
                ");\n",
            );
        }
    }

    let (text, mappings) = writer.finish();
    let mut code = VirtualCode::new("template", Language::Script, text, mappings);

    for (index, handler) in handlers.into_iter().enumerate() {
        code.insert_embedded(generate_handler(index, section, handler));
    }

    code
}

/// Emit every `{{ … }}` expression as a statement
fn emit_interpolations(writer: &mut CodeWriter, section: &Section) {
    let text = &section.text;
    let mut pos = 0;

    while let Some(found) = text.get(pos..).and_then(|t| t.find("{{")) {
        let open = pos + found;
        let Some(close) = text.get(open + 2..).and_then(|t| t.find("}}")) else {
            // Unterminated interpolation: the stretch stays unmapped so the
            // rest of the document keeps working.
            tracing::debug!(
                offset = section.start_offset + open,
                "unterminated interpolation"
            );
            writer.push_text("/* unterminated interpolation */\n");
            return;
        };

        let inner = &text[open + 2..open + 2 + close];
        let expr = inner.trim();
        if !expr.is_empty() {
            let leading = inner.len() - inner.trim_start().len();
            let expr_start = open + 2 + leading;
            writer.wrap(
                "(",
                expr,
                FileId::ROOT,
                section.start_offset + expr_start,
                CodeInformation::all(),
                ");\n",
            );
        }
        pos = open + 2 + close + 2;
    }
}

/// An event-handler attribute value located in the template text
#[derive(Debug, Clone, Copy)]
struct Handler {
    /// Section-relative offset of the first value character
    value_start: usize,
    /// Section-relative offset one past the last value character
    value_end: usize,
}

/// Build one nested handler code
fn generate_handler(index: usize, section: &Section, handler: Handler) -> VirtualCode {
    let value = &section.text[handler.value_start..handler.value_end];
    let expr = value.trim();
    let leading = value.len() - value.trim_start().len();

    let mut writer = CodeWriter::new();
    if !expr.is_empty() {
        writer.wrap(
            "(",
            expr,
            FileId::ROOT,
            section.start_offset + handler.value_start + leading,
            CodeInformation::all(),
            ");\n",
        );
    }
    let (text, mappings) = writer.finish();
    VirtualCode::new(
        format!("template_event_{index}"),
        Language::Script,
        text,
        mappings,
    )
}

/// Locate `@event="…"` attribute values
fn scan_event_handlers(text: &str) -> Vec<Handler> {
    let bytes = text.as_bytes();
    let mut handlers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'@' {
            let mut j = i + 1;
            while j < bytes.len()
                && (bytes[j].is_ascii_alphanumeric()
                    || matches!(bytes[j], b'-' | b'.' | b':' | b'_'))
            {
                j += 1;
            }
            if j > i + 1 && j + 1 < bytes.len() && bytes[j] == b'=' && bytes[j + 1] == b'"' {
                let value_start = j + 2;
                if let Some(len) = text.get(value_start..).and_then(|t| t.find('"')) {
                    handlers.push(Handler {
                        value_start,
                        value_end: value_start + len,
                    });
                    i = value_start + len + 1;
                    continue;
                }
                // Unterminated attribute value: ignore it, keep scanning
                // is pointless past the broken quote.
                break;
            }
        }
        i += 1;
    }
    handlers
}
