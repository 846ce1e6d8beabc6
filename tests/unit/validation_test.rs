// Property-based tests for the explicit field validators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use barbearia::core::Violations;

proptest! {
    #[test]
    fn validators_never_panic(value in "\\PC*") {
        let mut violations = Violations::new();
        violations.require_not_blank("field", &value);
        violations.require_email("field", &value);
        violations.require_exact_len("field", &value, 11);
        let _ = violations.into_result();
    }

    #[test]
    fn blank_is_exactly_whitespace_only(value in "[ \\t]*") {
        let mut violations = Violations::new();
        violations.require_not_blank("field", &value);
        prop_assert!(!violations.is_empty());
    }

    #[test]
    fn non_blank_passes(value in "[a-zA-Z][a-zA-Z ]*") {
        let mut violations = Violations::new();
        violations.require_not_blank("field", &value);
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn exact_len_counts_characters(len in 0usize..30) {
        let value = "x".repeat(len);
        let mut violations = Violations::new();
        violations.require_exact_len("cpf", &value, 11);
        prop_assert_eq!(violations.is_empty(), len == 11);
    }

    #[test]
    fn non_negative_accepts_zero_and_up(value in 0i64..1_000_000) {
        let mut violations = Violations::new();
        violations.require_non_negative("salary", Decimal::from(value));
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn negative_amounts_rejected(value in 1i64..1_000_000) {
        let mut violations = Violations::new();
        violations.require_non_negative("salary", Decimal::from(-value));
        prop_assert!(!violations.is_empty());
    }

    #[test]
    fn range_check_is_inclusive(value in 0i64..=100) {
        let mut violations = Violations::new();
        violations.require_in_range("discount", Decimal::from(value), dec!(0), dec!(100));
        prop_assert!(violations.is_empty());
    }
}

#[test]
fn violations_accumulate_instead_of_short_circuiting() {
    let mut violations = Violations::new();
    violations.require_not_blank("name", "");
    violations.require_email("email", "nope");
    violations.require_exact_len("cpf", "12", 11);
    assert_eq!(violations.messages().len(), 3);

    let message = violations.into_result().unwrap_err().to_string();
    assert!(message.contains("name"));
    assert!(message.contains("email"));
    assert!(message.contains("cpf"));
}

#[test]
fn email_requires_local_part_and_dotted_domain() {
    let cases = [
        ("carlos@unicortes.org", true),
        ("a@b.c", true),
        ("@unicortes.org", false),
        ("carlos@", false),
        ("carlos@org", false),
        ("carlos@.org", false),
        ("carlos@org.", false),
        ("carlos", false),
    ];

    for (value, expected_ok) in cases {
        let mut violations = Violations::new();
        violations.require_email("email", value);
        assert_eq!(violations.is_empty(), expected_ok, "case: {}", value);
    }
}
