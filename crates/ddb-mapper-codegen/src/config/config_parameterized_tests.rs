#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// GenerateBuilderClasses
// ============================================================================

#[test_case("always", GenerateBuilderClasses::Always ; "lowercase always")]
#[test_case("ALWAYS", GenerateBuilderClasses::Always ; "uppercase always")]
#[test_case("Always", GenerateBuilderClasses::Always ; "mixed case always")]
#[test_case("when_required", GenerateBuilderClasses::WhenRequired ; "snake case")]
#[test_case("WHEN_REQUIRED", GenerateBuilderClasses::WhenRequired ; "screaming snake case")]
#[test_case("whenRequired", GenerateBuilderClasses::WhenRequired ; "camel case")]
fn GenerateBuilderClasses___from_str___case_insensitive(input: &str, expected: GenerateBuilderClasses) {
    assert_eq!(input.parse::<GenerateBuilderClasses>().unwrap(), expected);
}

// ============================================================================
// Visibility
// ============================================================================

#[test_case("implicit", Visibility::Implicit)]
#[test_case("PUBLIC", Visibility::Public)]
#[test_case("pub", Visibility::Public)]
#[test_case("Internal", Visibility::Internal)]
#[test_case("crate", Visibility::Internal)]
fn Visibility___from_str___accepts_aliases(input: &str, expected: Visibility) {
    assert_eq!(input.parse::<Visibility>().unwrap(), expected);
}

#[test_case("" ; "empty")]
#[test_case("private" ; "private")]
#[test_case("pub(super)" ; "restricted")]
fn Visibility___from_str___rejects_unknown(input: &str) {
    assert!(input.parse::<Visibility>().is_err());
}

// ============================================================================
// DestinationPackage
// ============================================================================

#[test_case("relative", DestinationPackage::Relative("mapper::schemas".into()) ; "bare relative")]
#[test_case("RELATIVE:gen", DestinationPackage::Relative("gen".into()) ; "relative with suffix")]
#[test_case("relative:a::b", DestinationPackage::Relative("a::b".into()) ; "relative with path suffix")]
#[test_case("absolute:crate::out", DestinationPackage::Absolute("crate::out".into()) ; "absolute")]
#[test_case("crate::out", DestinationPackage::Absolute("crate::out".into()) ; "bare crate path")]
fn DestinationPackage___from_str___parses(input: &str, expected: DestinationPackage) {
    assert_eq!(input.parse::<DestinationPackage>().unwrap(), expected);
}

#[test_case("absolute" ; "absolute without path")]
#[test_case("absolute:" ; "absolute with empty path")]
#[test_case("elsewhere:x" ; "unknown kind")]
fn DestinationPackage___from_str___rejects_invalid(input: &str) {
    assert!(input.parse::<DestinationPackage>().is_err());
}

#[test_case(DestinationPackage::default())]
#[test_case(DestinationPackage::Absolute("crate::generated".into()))]
fn DestinationPackage___display___parses_back(destination: DestinationPackage) {
    assert_eq!(destination.to_string().parse::<DestinationPackage>().unwrap(), destination);
}
