// Unit tests focus on the pure name rules; the HTTP surface is covered
// by the router tests in integration_tests.rs

use showcase_backend::validation::name::validate_name;

#[test]
fn check_order_is_empty_then_length_then_charset() {
    assert_eq!(validate_name("").message, "Name cannot be empty");
    assert_eq!(
        validate_name("A").message,
        "Name must be at least 2 characters long"
    );
    assert_eq!(
        validate_name(&"a".repeat(101)).message,
        "Name cannot exceed 100 characters"
    );
    assert_eq!(
        validate_name("John123").message,
        "Name can only contain letters and spaces"
    );
    assert_eq!(validate_name("John Doe").message, "Name is valid");
}

#[test]
fn accepts_names_across_scripts() {
    for name in ["Björn Andersson", "François Dupont", "José María", "Αλέξανδρος"] {
        assert!(validate_name(name).is_valid, "{} should be valid", name);
    }
}

#[test]
fn repeated_calls_return_the_same_result() {
    let first = validate_name("  John Doe  ");
    let second = validate_name("  John Doe  ");
    assert_eq!(first, second);
    assert!(first.is_valid);
}
