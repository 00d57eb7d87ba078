//! Naming convention utilities for generated items.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `UserProfile` | [`to_snake_case`] | `user_profile` |
//! | `user_profile` | [`to_pascal_case`] | `UserProfile` |
//! | `UserProfile` | [`table_accessor`] | `get_user_profile_table` |
//! | `crate::model::schemas` | [`module_dir`] | `model/schemas` |

/// Convert PascalCase or camelCase to snake_case.
///
/// Runs of capitals are treated as one word, so acronyms stay together.
///
/// ```
/// use ddb_mapper_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                Some(_) => false,
            };
            if starts_word {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert snake_case or kebab-case to PascalCase.
///
/// ```
/// use ddb_mapper_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Name of the mapper extension method that opens a table for a record.
pub fn table_accessor(record: &str) -> String {
    format!("get_{}_table", to_snake_case(record))
}

/// Directory, relative to the crate source root, holding a module path.
///
/// The leading `crate` segment is dropped; other segments become directories.
pub fn module_dir(module: &str) -> String {
    module
        .split("::")
        .filter(|segment| !segment.is_empty() && *segment != "crate")
        .collect::<Vec<_>>()
        .join("/")
}
