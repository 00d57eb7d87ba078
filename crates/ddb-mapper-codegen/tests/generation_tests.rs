//! End-to-end generation from Rust source.

#![allow(non_snake_case)]

use ddb_mapper_codegen::{
    CodegenOptions, DiagnosticKind, GenerateBuilderClasses, Generator, SchemaValidationError,
    source,
};

const MODEL: &str = r#"
use ddb_mapper::DynamoDbItem;
use std::collections::HashMap;

/// A tagged record.
#[derive(Debug, Clone, PartialEq, DynamoDbItem)]
pub struct Tagged {
    #[ddb(partition_key)]
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, DynamoDbItem)]
pub struct Profile {
    #[ddb(partition_key)]
    pub user_id: u64,
    #[ddb(sort_key)]
    pub version: u32,
    #[ddb(name = "attrs")]
    pub attributes: HashMap<String, Option<String>>,
}

#[derive(DynamoDbItem)]
pub struct Broken {
    #[ddb(partition_key)]
    pub id: String,
    #[ddb(partition_key)]
    pub other: String,
}

pub struct NotAnItem {
    pub id: String,
}
"#;

fn generate(options: CodegenOptions) -> ddb_mapper_codegen::Generation {
    let declarations = source::parse_source(MODEL, "src/model.rs", "crate::model").unwrap();
    Generator::new(options).generate(&declarations)
}

fn contents<'a>(generation: &'a ddb_mapper_codegen::Generation, file_name: &str) -> &'a str {
    &generation
        .file("crate::model::mapper::schemas", file_name)
        .unwrap_or_else(|| panic!("missing {file_name}"))
        .contents
}

#[test]
fn generate___id_name_tags___converter_covers_every_attribute() {
    let generation = generate(CodegenOptions::default());

    let schema = contents(&generation, "tagged_schema.rs");
    for key in ["\"id\"", "\"name\"", "\"tags\""] {
        assert!(schema.contains(&format!("item.insert({key}, ")), "{key}");
        assert!(schema.contains(&format!(".required({key})")), "{key}");
    }
    assert!(schema.contains(
        "item.insert(\"tags\", ::ddb_mapper::AttributeValue::L(from.tags.iter().map(|v0| ::ddb_mapper::AttributeValue::S(v0.clone())).collect()));"
    ));
    assert!(schema.contains("::ddb_mapper::KeySpec::new(\"id\", ::ddb_mapper::KeyKind::S)"));
    assert!(schema.contains("fn get_tagged_table(&self"));
}

#[test]
fn generate___record_without_default___builder_emitted() {
    let generation = generate(CodegenOptions::default());

    let builder = contents(&generation, "tagged_builder.rs");
    assert!(builder.contains("pub struct TaggedBuilder {"));
    assert!(builder.contains("::ddb_mapper::ValidationError::missing_attribute(\"name\")"));
    assert!(contents(&generation, "tagged_schema.rs").contains("super::TaggedBuilder::new()"));
}

#[test]
fn generate___record_with_default___builder_only_when_forced() {
    let default = generate(CodegenOptions::default());
    let always = generate(CodegenOptions {
        generate_builder_classes: GenerateBuilderClasses::Always,
        ..CodegenOptions::default()
    });

    assert!(default.file("crate::model::mapper::schemas", "profile_builder.rs").is_none());
    assert!(contents(&default, "profile_schema.rs").contains("::std::default::Default::default()"));
    assert!(always.file("crate::model::mapper::schemas", "profile_builder.rs").is_some());
}

#[test]
fn generate___sort_key_and_renamed_map___planned() {
    let generation = generate(CodegenOptions::default());

    let schema = contents(&generation, "profile_schema.rs");
    assert!(schema.contains("::ddb_mapper::KeySpec::new(\"user_id\", ::ddb_mapper::KeyKind::N)"));
    assert!(schema.contains("::ddb_mapper::KeySpec::new(\"version\", ::ddb_mapper::KeyKind::N)"));
    assert!(schema.contains("item.insert(\"attrs\", ::ddb_mapper::AttributeValue::M("));
}

#[test]
fn generate___invalid_item___reported_and_skipped() {
    let generation = generate(CodegenOptions::default());

    let diagnostics: Vec<_> = generation.diagnostics.iter().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].declaration, "crate::model::Broken");
    assert_eq!(diagnostics[0].location.to_string(), "src/model.rs:25");
    assert!(matches!(
        &diagnostics[0].kind,
        DiagnosticKind::SchemaValidation(SchemaValidationError::MultiplePartitionKeys { attributes, .. })
            if attributes == &["id".to_string(), "other".to_string()]
    ));
    assert!(generation.files.iter().all(|f| !f.file_name.starts_with("broken")));
    assert!(generation.files.iter().all(|f| !f.file_name.starts_with("not_an_item")));
}

#[test]
fn generate___same_input___byte_identical_output() {
    let first = generate(CodegenOptions::default());
    let second = generate(CodegenOptions::default());

    assert_eq!(first.files, second.files);
}

#[test]
fn generate___write_twice___second_write_changes_nothing() {
    let temp = tempfile::tempdir().unwrap();

    let written = generate(CodegenOptions::default()).write_to(temp.path()).unwrap();
    let rewritten = generate(CodegenOptions::default()).write_to(temp.path()).unwrap();

    assert_eq!(written.len(), 4);
    assert!(rewritten.is_empty());
    let module = std::fs::read_to_string(temp.path().join("model/mapper/schemas/mod.rs")).unwrap();
    assert!(module.contains("mod profile_schema;\nmod tagged_builder;\nmod tagged_schema;\n"));
}

/// Root of the checked-in file-mode output compiled by the runtime crate's tests.
fn file_mode_fixture() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../ddb-mapper/tests/file_mode")
}

#[test]
fn generate___file_mode_fixture___matches_checked_in_files() {
    let root = file_mode_fixture();
    let declarations = source::parse_file(&root.join("model/mod.rs"), "crate::model").unwrap();

    let generation = Generator::default().generate(&declarations);

    assert!(generation.diagnostics.is_empty(), "{:?}", generation.diagnostics);
    let mut names: Vec<_> = generation.files.iter().map(|f| f.file_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        ["mod.rs", "reading_schema.rs", "session_builder.rs", "session_schema.rs"]
    );
    for file in &generation.files {
        let path = root.join(file.relative_path());
        let checked_in = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            checked_in,
            file.contents,
            "{} is stale, rerun `ddb-mapper generate` for the fixture",
            path.display()
        );
    }
}

#[test]
fn generate___file_mode_fixture___no_stray_files() {
    let schemas = file_mode_fixture().join("model/mapper/schemas");

    let mut entries: Vec<String> = std::fs::read_dir(schemas)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort_unstable();

    assert_eq!(
        entries,
        ["mod.rs", "reading_schema.rs", "session_builder.rs", "session_schema.rs"]
    );
}
