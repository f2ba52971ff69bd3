//! Root script generation.
//!
//! The root generated document merges the plain script region (copied
//! verbatim) and the alternate script region (wrapped in a setup scope).
//! Calls to the configured props/emits macros are rewritten: the original
//! call is replaced by a generated helper whose key list appears twice,
//! once in a type-check branch and once in a runtime-registration branch,
//! each with the capability set matching its role.
//!
//! Macro calls are located by a lexical scan of the section text. The real
//! syntax belongs to the external parser and type checker; the scan only
//! needs to be right for well-formed calls and to degrade to a verbatim
//! copy for anything else.

use crate::document::{Section, SourceDocument};
use crate::options::GenerateOptions;
use crate::virtual_code::{Language, VirtualCode};
use sfc_source_map::{CodeInformation, CodeWriter, FileId, KeyOrigin, RenameTransform};

/// Build the root script virtual code
pub(super) fn generate(document: &SourceDocument, options: &GenerateOptions) -> VirtualCode {
    let mut writer = CodeWriter::new();
    writer.push_text("export {};\n");

    if let Some(section) = document.script() {
        writer.push_source(
            &section.text,
            FileId::ROOT,
            section.start_offset,
            CodeInformation::all(),
        );
        writer.push_text("\n");
    }

    if let Some(section) = document.script_setup() {
        let (open, close) = options.setup_wrapper();
        writer.push_text(open);
        generate_setup_body(&mut writer, section, options);
        writer.push_text(close);
    }

    let (text, mappings) = writer.finish();
    VirtualCode::new("script", Language::Script, text, mappings)
}

/// Emit the alternate script region, rewriting macro calls
fn generate_setup_body(writer: &mut CodeWriter, section: &Section, options: &GenerateOptions) {
    let text = &section.text;
    let base = section.start_offset;
    let mut cursor = 0;

    while let Some(scan) = next_macro_call(text, cursor, options) {
        let call = match scan {
            Scan::Call(call) => call,
            Scan::Unterminated(at) => {
                // Parser-level breakage: keep the rest verbatim so the
                // document stays serviceable.
                tracing::debug!(offset = base + at, "unterminated macro call, copying verbatim");
                break;
            }
        };

        if call.keys.is_empty() {
            // Nothing to rewrite (non-literal arguments); keep the call as
            // the user wrote it.
            writer.push_source(
                &text[cursor..call.call_end],
                FileId::ROOT,
                base + cursor,
                CodeInformation::all(),
            );
            cursor = call.call_end;
            continue;
        }

        writer.push_source(
            &text[cursor..call.name_start],
            FileId::ROOT,
            base + cursor,
            CodeInformation::all(),
        );

        // Double-underscore prefix keeps the helper out of the user's
        // namespace; the macro name itself still maps for hover and
        // highlighting.
        writer.push_text("__");
        writer.push_source(
            &text[call.name_start..call.name_end],
            FileId::ROOT,
            base + call.name_start,
            CodeInformation::semantic(),
        );

        if call.is_props {
            // Type-check branch: errors against these keys are the user's.
            writer.push_text("<{ ");
            for key in &call.keys {
                writer.push_string_literal_key(
                    &key.text,
                    Some(KeyOrigin::root(
                        base + key.offset,
                        CodeInformation::verification(),
                    )),
                );
                writer.push_text(": unknown; ");
            }
            writer.push_text("}>");
        }

        // Runtime-registration branch: navigation only, and a rename
        // replacement must be re-quoted before it lands here.
        writer.push_text("([");
        for key in &call.keys {
            writer.push_string_literal_key(
                &key.text,
                Some(KeyOrigin::root(
                    base + key.offset,
                    CodeInformation::navigation()
                        .with_rename_transform(RenameTransform::QuoteSingle),
                )),
            );
            writer.push_text(", ");
        }
        writer.push_text("])");

        cursor = call.call_end;
    }

    writer.push_source(
        &text[cursor..],
        FileId::ROOT,
        base + cursor,
        CodeInformation::all(),
    );
}

/// A string-literal argument of a macro call
struct MacroKey {
    /// Literal content without its quotes
    text: String,
    /// Section-relative offset of the first content character
    offset: usize,
}

/// One located macro call
struct MacroCall {
    name_start: usize,
    name_end: usize,
    /// Offset one past the closing parenthesis
    call_end: usize,
    keys: Vec<MacroKey>,
    is_props: bool,
}

enum Scan {
    Call(MacroCall),
    /// The opening parenthesis is never closed; offset of the macro name
    Unterminated(usize),
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// Find the next configured macro call at or after `from`
fn next_macro_call(text: &str, from: usize, options: &GenerateOptions) -> Option<Scan> {
    let bytes = text.as_bytes();

    // Earliest occurrence wins across both macro sets.
    let mut best: Option<(usize, usize, usize, bool)> = None; // (name_start, name_end, paren, is_props)
    for (names, is_props) in [(&options.props_macros, true), (&options.emits_macros, false)] {
        for name in names {
            let mut search = from;
            while let Some(found) = text.get(search..).and_then(|t| t.find(name.as_str())) {
                let name_start = search + found;
                let name_end = name_start + name.len();
                let bounded = name_start == 0 || !is_ident_byte(bytes[name_start - 1]);
                if bounded {
                    let mut paren = name_end;
                    while paren < bytes.len() && bytes[paren].is_ascii_whitespace() {
                        paren += 1;
                    }
                    if paren < bytes.len() && bytes[paren] == b'(' {
                        if best.is_none_or(|(start, ..)| name_start < start) {
                            best = Some((name_start, name_end, paren, is_props));
                        }
                        break;
                    }
                }
                search = name_start + 1;
            }
        }
    }
    let (name_start, name_end, paren, is_props) = best?;

    // Scan the argument list, collecting string literals at any depth.
    let mut depth = 0usize;
    let mut keys = Vec::new();
    let mut i = paren;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Scan::Call(MacroCall {
                        name_start,
                        name_end,
                        call_end: i + 1,
                        keys,
                        is_props,
                    }));
                }
            }
            quote @ (b'\'' | b'"') => {
                let content_start = i + 1;
                let mut j = content_start;
                while j < bytes.len() && bytes[j] != quote {
                    if bytes[j] == b'\\' {
                        j += 1;
                    }
                    j += 1;
                }
                if j >= bytes.len() {
                    return Some(Scan::Unterminated(name_start));
                }
                keys.push(MacroKey {
                    text: text[content_start..j].to_string(),
                    offset: content_start,
                });
                i = j;
            }
            _ => {}
        }
        i += 1;
    }
    Some(Scan::Unterminated(name_start))
}
