//! End-to-end tests: parse-shaped input through generation and translation.

use sfc_language_core::{
    generate, Capability, FileId, GeneratedLocation, GenerateOptions, PositionTranslator, Section,
    SnapshotStore, SourceDocument,
};

/// Assemble an original document text and the section view a parser would
/// produce for it, with real absolute offsets.
fn document() -> (String, SourceDocument) {
    let mut original = String::new();
    let mut doc = SourceDocument::new("widget.sfc").with_version(1);

    original.push_str("<script>");
    let text = "\nexport const shared = 1;\n";
    doc = doc.with_script(Section::new(text, original.len()));
    original.push_str(text);
    original.push_str("</script>\n");

    original.push_str("<script setup>");
    let text = "\nconst props = defineProps(['count']);\n";
    doc = doc.with_script_setup(Section::new(text, original.len()));
    original.push_str(text);
    original.push_str("</script>\n");

    original.push_str("<template>");
    let text = "\n<button @click=\"press()\">{{ count }}</button>\n";
    doc = doc.with_template(Section::new(text, original.len()));
    original.push_str(text);
    original.push_str("</template>\n");

    original.push_str("<style>");
    let text = "\n.button { color: red; }\n";
    doc = doc.with_style(Section::new(text, original.len()));
    original.push_str(text);
    original.push_str("</style>\n");

    (original, doc)
}

#[test]
fn generation_is_deterministic() {
    let (_, doc) = document();
    let options = GenerateOptions::default();
    let first = generate(&doc, &options);
    let second = generate(&doc, &options);

    assert_eq!(first, second);
    for ((_, a), (_, b)) in first.walk().zip(second.walk()) {
        assert_eq!(a.text, b.text);
        assert_eq!(a.mappings.segments(), b.mappings.segments());
    }
}

#[test]
fn tree_shape_and_ids() {
    let (_, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let ids: Vec<&str> = tree.walk().map(|(id, _)| id.as_str()).collect();
    insta::assert_snapshot!(
        ids.join(" "),
        @"script template template_event_0 style_0"
    );
}

#[test]
fn every_mapping_table_is_non_overlapping() {
    let (_, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    for (_, code) in tree.walk() {
        assert!(code.mappings.validate().is_ok(), "{}", code.id);
    }
}

#[test]
fn every_mapped_offset_round_trips() {
    let (_, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    for (id, code) in tree.walk() {
        for segment in code.mappings.segments() {
            let span = segment.source.expect("generator records mapped segments only");
            for k in 0..segment.generated.len() {
                let generated = segment.generated.start + k;
                let source = translator
                    .to_source_location(id.as_str(), generated)
                    .expect("mapped offset must translate back");
                assert_eq!(source.file_id, span.file_id);
                assert_eq!(source.offset, span.range.start + k);
                assert!(
                    translator
                        .to_generated_locations_in(span.file_id, source.offset, None)
                        .any(|l| l.code == *id && l.offset == generated),
                    "source offset {} must map back into {id}",
                    source.offset
                );
            }
        }
    }
}

#[test]
fn mapped_copies_reproduce_source_text() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());

    for (_, code) in tree.walk() {
        for segment in code.mappings.segments() {
            let span = segment.source.unwrap();
            assert_eq!(
                &code.text[segment.generated.start..segment.generated.end],
                &original[span.range.start..span.range.end],
                "mapped segments are verbatim copies"
            );
        }
    }
}

#[test]
fn duplicated_prop_key_keeps_multiplicity_and_filters() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    // Inside `count` in the macro argument list.
    let source_offset = original.find("'count'").unwrap() + 1;

    let all: Vec<GeneratedLocation> = translator.to_generated_locations(source_offset, None).collect();
    assert_eq!(all.len(), 2, "type-check and runtime branches");

    let rename: Vec<GeneratedLocation> = translator
        .to_generated_locations(source_offset, Some(Capability::Rename))
        .collect();
    let diagnostics: Vec<GeneratedLocation> = translator
        .to_generated_locations(source_offset, Some(Capability::Diagnostics))
        .collect();
    assert_eq!(rename.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_ne!(rename[0], diagnostics[0]);

    // Results come in generation order: diagnostics branch first.
    assert_eq!(all[0], diagnostics[0]);
    assert_eq!(all[1], rename[0]);
}

#[test]
fn handler_expression_spans_two_codes_with_distinct_roles() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    // Inside `press()` in the template.
    let source_offset = original.find("press()").unwrap() + 1;

    let all: Vec<GeneratedLocation> = translator.to_generated_locations(source_offset, None).collect();
    let codes: Vec<&str> = all.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["template", "template_event_0"]);

    // Only the embedded handler copy surfaces diagnostics or rename.
    let diagnostics: Vec<GeneratedLocation> = translator
        .to_generated_locations(source_offset, Some(Capability::Diagnostics))
        .collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_str(), "template_event_0");
}

#[test]
fn interpolation_supports_completion() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    // Inside `count` in the interpolation.
    let source_offset = original.find("{{ count }}").unwrap() + 3;
    let completions: Vec<GeneratedLocation> = translator
        .to_generated_locations(source_offset, Some(Capability::Completion))
        .collect();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].code.as_str(), "template");
}

#[test]
fn tag_text_has_no_live_mapping() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    // Offsets inside `<template>` markup never map anywhere.
    let tag_offset = original.find("<template>").unwrap() + 2;
    assert_eq!(translator.to_generated_locations(tag_offset, None).count(), 0);
}

#[test]
fn style_diagnostics_map_back_to_the_style_section() {
    let (original, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let translator = PositionTranslator::new(&tree);

    let style = tree.get("style_0").unwrap();
    let color = style.text.find("color").unwrap();
    let source = translator.to_source_location("style_0", color).unwrap();
    assert_eq!(source.file_id, FileId::ROOT);
    assert_eq!(&original[source.offset..source.offset + 5], "color");
}

#[test]
fn regeneration_swaps_snapshots_atomically() {
    let (_, doc) = document();
    let options = GenerateOptions::default();
    let mut store = SnapshotStore::new();

    store.publish(doc.uri(), generate(&doc, &options));
    let before = store.current(doc.uri()).unwrap();

    // A later parse produces a new snapshot; the old one stays usable.
    let (_, next) = document();
    let next = next.with_version(2);
    store.publish(next.uri(), generate(&next, &options));
    let after = store.current(doc.uri()).unwrap();

    assert_eq!(before.root().text, after.root().text);
    assert!(PositionTranslator::new(&before)
        .to_generated_locations(0, None)
        .count() == 0);
}

#[test]
fn virtual_code_tree_serializes() {
    let (_, doc) = document();
    let tree = generate(&doc, &GenerateOptions::default());
    let json = serde_json::to_string(&tree).unwrap();
    let deserialized: sfc_language_core::VirtualCodeTree = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, deserialized);
}
