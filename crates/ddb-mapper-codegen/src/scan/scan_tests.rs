#![allow(non_snake_case)]

use super::*;
use crate::declaration::{DeclaredProperty, SourceLocation, SourceVisibility};
use crate::diagnostics::DiagnosticKind;
use crate::types::{TypeRef, Types};

fn user() -> Declaration {
    Declaration::new("crate::model", "User")
        .annotated(Annotation::Item)
        .with_property(DeclaredProperty::new("id", Types::primitive("i32")).annotated(Annotation::PartitionKey))
        .with_property(
            DeclaredProperty::new("first_name", Types::string())
                .annotated(Annotation::Attribute { name: "fName".into() }),
        )
        .with_property(DeclaredProperty::new("age", Types::primitive("i32").nullable()))
}

fn discovery_error(outcome: &ScanOutcome) -> &DiscoveryError {
    match &outcome.invalid[0].kind {
        DiagnosticKind::Discovery(err) => err,
        other => panic!("expected discovery error, got {other:?}"),
    }
}

#[test]
fn scan___item_declaration___produces_descriptor() {
    let outcome = scan(ScanToken::new(), &[user()]);

    assert!(outcome.invalid.is_empty());
    assert_eq!(outcome.descriptors.len(), 1);

    let descriptor = &outcome.descriptors[0];
    assert_eq!(descriptor.qualified_name(), "crate::model::User");
    assert_eq!(descriptor.attributes.len(), 3);
    assert_eq!(descriptor.attributes[0].key_role, KeyRole::Partition);
    assert_eq!(descriptor.attributes[1].item_key(), "fName");
    assert_eq!(descriptor.attributes[2].ty, Types::primitive("i32").nullable());
}

#[test]
fn scan___unannotated_declarations___are_ignored() {
    let plain = Declaration::new("crate::model", "Address");
    let enumeration = Declaration {
        kind: DeclarationKind::Enum,
        ..Declaration::new("crate::model", "Status")
    };

    let outcome = scan(ScanToken::new(), &[plain, enumeration]);

    assert!(outcome.is_empty());
}

#[test]
fn scan___preserves_input_order() {
    let first = Declaration::new("crate", "B").annotated(Annotation::Item);
    let second = Declaration::new("crate", "A").annotated(Annotation::Item);

    let outcome = scan(ScanToken::new(), &[first, second]);

    let names: Vec<_> = outcome.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
}

#[test]
fn scan___invalid_declaration___reported_without_dropping_valid_ones() {
    let generic = Declaration {
        type_params: vec!["T".into()],
        location: SourceLocation::new("src/page.rs", 7),
        ..Declaration::new("crate", "Page").annotated(Annotation::Item)
    };

    let outcome = scan(ScanToken::new(), &[generic, user()]);

    assert_eq!(outcome.descriptors.len(), 1);
    assert_eq!(outcome.invalid.len(), 1);
    assert_eq!(outcome.invalid[0].declaration, "crate::Page");
    assert_eq!(outcome.invalid[0].location.to_string(), "src/page.rs:7");
    assert!(matches!(
        discovery_error(&outcome),
        DiscoveryError::GenericDeclaration { params, .. } if params == &["T".to_string()]
    ));
}

#[test]
fn scan___enum_item___not_concrete() {
    let declaration = Declaration {
        kind: DeclarationKind::Enum,
        ..Declaration::new("crate", "Status").annotated(Annotation::Item)
    };

    let outcome = scan(ScanToken::new(), &[declaration]);

    assert_eq!(
        discovery_error(&outcome),
        &DiscoveryError::NotConcrete {
            declaration: "Status".into(),
            kind: "enum".into()
        }
    );
}

#[test]
fn scan___tuple_struct_item___unnamed_fields() {
    let declaration = Declaration {
        kind: DeclarationKind::TupleStruct,
        ..Declaration::new("crate", "Pair").annotated(Annotation::Item)
    };

    let outcome = scan(ScanToken::new(), &[declaration]);

    assert!(matches!(
        discovery_error(&outcome),
        DiscoveryError::UnnamedFields { .. }
    ));
}

#[test]
fn scan___unresolved_property___unresolved_type() {
    let declaration = user().with_property(DeclaredProperty {
        ty: DeclaredType::Unresolved("&'static str".into()),
        ..DeclaredProperty::new("label", Types::string())
    });

    let outcome = scan(ScanToken::new(), &[declaration]);

    assert_eq!(
        discovery_error(&outcome),
        &DiscoveryError::UnresolvedType {
            declaration: "User".into(),
            attribute: "label".into(),
            ty: "&'static str".into(),
        }
    );
}

#[test]
fn scan___partition_and_sort_on_one_property___conflicting_key_roles() {
    let declaration = Declaration::new("crate", "Event").annotated(Annotation::Item).with_property(
        DeclaredProperty::new("id", Types::string())
            .annotated(Annotation::PartitionKey)
            .annotated(Annotation::SortKey),
    );

    let outcome = scan(ScanToken::new(), &[declaration]);

    assert!(matches!(
        discovery_error(&outcome),
        DiscoveryError::ConflictingKeyRoles { attribute, .. } if attribute == "id"
    ));
}

#[test]
fn scan___two_name_overrides___duplicate_attribute_override() {
    let declaration = Declaration::new("crate", "Event").annotated(Annotation::Item).with_property(
        DeclaredProperty::new("id", Types::string())
            .annotated(Annotation::Attribute { name: "a".into() })
            .annotated(Annotation::Attribute { name: "b".into() }),
    );

    let outcome = scan(ScanToken::new(), &[declaration]);

    assert!(matches!(
        discovery_error(&outcome),
        DiscoveryError::DuplicateAttributeOverride { .. }
    ));
}

#[test]
fn describe___default_with_settable_fields___has_mutable_default() {
    let declaration = Declaration {
        default_constructible: true,
        ..user()
    };

    let descriptor = describe(&declaration).unwrap();

    assert!(descriptor.has_mutable_default);
}

#[test]
fn describe___private_field___no_mutable_default() {
    let mut declaration = Declaration {
        default_constructible: true,
        ..user()
    };
    declaration.properties[1].settable = false;

    let descriptor = describe(&declaration).unwrap();

    assert!(!descriptor.has_mutable_default);
}

#[test]
fn describe___without_default___no_mutable_default() {
    let descriptor = describe(&user()).unwrap();

    assert!(!descriptor.has_mutable_default);
}

#[test]
fn describe___keeps_visibility_and_location() {
    let declaration = Declaration {
        visibility: SourceVisibility::Crate,
        location: SourceLocation::new("src/model.rs", 12),
        ..user()
    };

    let descriptor = describe(&declaration).unwrap();

    assert_eq!(descriptor.visibility, SourceVisibility::Crate);
    assert_eq!(descriptor.location.line, 12);
    assert_eq!(descriptor.record_type(), TypeRef::new("crate::model", "User"));
}
