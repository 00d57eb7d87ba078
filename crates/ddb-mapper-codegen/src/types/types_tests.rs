#![allow(non_snake_case)]

use super::*;

#[test]
fn TypeRef___render___primitive_is_bare() {
    assert_eq!(Types::primitive("i32").render(), "i32");
}

#[test]
fn TypeRef___render___std_types_are_absolute() {
    assert_eq!(Types::string().render(), "::std::string::String");
    assert_eq!(
        Types::list(Types::string()).render(),
        "::std::vec::Vec<::std::string::String>"
    );
}

#[test]
fn TypeRef___render___crate_paths_stay_relative() {
    let user = TypeRef::new("crate::model", "User");

    assert_eq!(user.render(), "crate::model::User");
}

#[test]
fn TypeRef___render___nullable_wraps_in_option() {
    let ty = Types::string_map(Types::primitive("i64")).nullable();

    assert_eq!(
        ty.render(),
        "::std::option::Option<::std::collections::HashMap<::std::string::String, i64>>"
    );
}

#[test]
fn TypeRef___display___uses_short_names() {
    let ty = Types::list(Types::primitive("u32").nullable()).nullable();

    assert_eq!(ty.to_string(), "Option<Vec<Option<u32>>>");
}

#[test]
fn TypeRef___equality___is_recursive() {
    let a = Types::list(Types::string_map(Types::string()));
    let b = Types::list(Types::string_map(Types::string()));
    let c = Types::list(Types::string_map(Types::string().nullable()));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn TypeRef___nullable_and_non_null___toggle_flag_only() {
    let ty = Types::bytes();

    let nullable = ty.nullable();

    assert!(nullable.nullable);
    assert_eq!(nullable.non_null(), ty);
}

#[test]
fn Types___is_bytes___only_for_vec_of_u8() {
    assert!(Types::is_bytes(&Types::bytes()));
    assert!(!Types::is_bytes(&Types::list(Types::primitive("i8"))));
    assert!(!Types::is_bytes(&Types::list(Types::primitive("u8").nullable())));
}

#[test]
fn Types___is_number___covers_all_primitives() {
    for name in Types::NUMBERS {
        assert!(Types::is_number(&Types::primitive(name)), "{name}");
    }
    assert!(!Types::is_number(&Types::bool()));
    assert!(!Types::is_number(&TypeRef::new("crate", "i32")));
}

#[test]
fn Types___is_map___accepts_hash_and_btree_maps() {
    assert!(Types::is_map(&Types::string_map(Types::bool())));
    assert!(Types::is_map(&Types::btree_map(Types::string(), Types::bool())));
    assert!(!Types::is_map(&Types::list(Types::bool())));
}
