//! Property-based tests for the calculator engine

use proptest::prelude::*;
use rechenwerk::prelude::*;

// ===== Strategy definitions =====

/// Any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// A digit that does not divide to zero or collapse a leading zero
fn nonzero_digit_strategy() -> impl Strategy<Value = u8> {
    1u8..=9u8
}

/// Any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// A single press, in engine terms
#[derive(Debug, Clone, Copy)]
enum Press {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
}

fn press_strategy() -> impl Strategy<Value = Press> {
    prop_oneof![
        digit_strategy().prop_map(Press::Digit),
        Just(Press::Decimal),
        operator_strategy().prop_map(Press::Operator),
        Just(Press::Equals),
        Just(Press::Clear),
    ]
}

fn feed(calc: &mut Calculator, press: Press) {
    match press {
        Press::Digit(d) => calc.input_digit(d),
        Press::Decimal => calc.input_decimal(),
        Press::Operator(op) => calc.press_operator(op),
        Press::Equals => calc.evaluate(),
        Press::Clear => calc.clear(),
    }
}

// ===== Digit entry properties =====

proptest! {
    /// Digit sequences concatenate, with leading zeros collapsed
    #[test]
    fn prop_digit_sequences_concatenate(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let mut calc = Calculator::new();
        let mut expected = "0".to_string();
        for d in &digits {
            calc.input_digit(*d);
            if expected == "0" {
                expected.clear();
            }
            if expected.len() < MAX_ENTRY_CHARS {
                expected.push(char::from_digit(u32::from(*d), 10).unwrap());
            }
        }
        prop_assert_eq!(calc.display_text(), expected);
    }

    /// Entries never grow past the cap
    #[test]
    fn prop_entry_length_capped(digits in prop::collection::vec(digit_strategy(), 1..64)) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(d);
        }
        prop_assert!(calc.display_text().len() <= MAX_ENTRY_CHARS);
    }

    /// A second decimal press changes nothing
    #[test]
    fn prop_decimal_idempotent(digits in prop::collection::vec(digit_strategy(), 0..6)) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(d);
        }
        calc.input_decimal();
        let after_first = calc.display_text();
        prop_assert_eq!(after_first.matches('.').count(), 1);
        calc.input_decimal();
        prop_assert_eq!(calc.display_text(), after_first);
    }
}

// ===== Whole-machine properties =====

proptest! {
    /// Clear always restores the fresh state, whatever came before
    #[test]
    fn prop_clear_resets(presses in prop::collection::vec(press_strategy(), 0..24)) {
        let mut calc = Calculator::new();
        for press in presses {
            feed(&mut calc, press);
        }
        calc.clear();
        prop_assert_eq!(calc.display_text(), "0");
        prop_assert!(!calc.is_awaiting_operand());
        prop_assert_eq!(calc, Calculator::new());
    }

    /// The display always shows a parseable numeral or the error marker,
    /// and is never empty
    #[test]
    fn prop_display_always_valid(presses in prop::collection::vec(press_strategy(), 0..32)) {
        let mut calc = Calculator::new();
        for press in presses {
            feed(&mut calc, press);
            let text = calc.display_text();
            prop_assert!(!text.is_empty());
            prop_assert!(
                text == ERROR_MARKER || text.parse::<f64>().is_ok(),
                "invalid display text: {}",
                text
            );
        }
    }

    /// Equals with nothing pending leaves the display alone
    #[test]
    fn prop_equals_without_chain_is_noop(digits in prop::collection::vec(digit_strategy(), 1..8)) {
        let mut calc = Calculator::new();
        for d in digits {
            calc.input_digit(d);
        }
        let before = calc.display_text();
        calc.evaluate();
        prop_assert_eq!(calc.display_text(), before);
    }

    /// Chains fold left to right with no precedence
    #[test]
    fn prop_chain_folds_left_to_right(
        a in nonzero_digit_strategy(),
        b in nonzero_digit_strategy(),
        c in nonzero_digit_strategy(),
        op1 in operator_strategy(),
        op2 in operator_strategy(),
    ) {
        let mut calc = Calculator::new();
        calc.input_digit(a);
        calc.press_operator(op1);
        calc.input_digit(b);
        calc.press_operator(op2);
        calc.input_digit(c);
        calc.evaluate();

        let first = op1.apply(f64::from(a), f64::from(b)).unwrap();
        let expected = op2.apply(first, f64::from(c)).unwrap();
        prop_assert_eq!(calc.display_text(), expected.to_string());
    }

    /// An operator pressed before the second operand replaces the pending one
    #[test]
    fn prop_operator_replacement(
        a in nonzero_digit_strategy(),
        b in nonzero_digit_strategy(),
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let mut calc = Calculator::new();
        calc.input_digit(a);
        calc.press_operator(first);
        calc.press_operator(second);
        calc.input_digit(b);
        calc.evaluate();

        let expected = second.apply(f64::from(a), f64::from(b)).unwrap();
        prop_assert_eq!(calc.display_text(), expected.to_string());
    }

    /// Division by zero always lands on the error marker, from which a
    /// digit press recovers
    #[test]
    fn prop_divide_by_zero_recovers(
        a in nonzero_digit_strategy(),
        d in nonzero_digit_strategy(),
    ) {
        let mut calc = Calculator::new();
        calc.input_digit(a);
        calc.press_operator(Operator::Divide);
        calc.input_digit(0);
        calc.evaluate();
        prop_assert_eq!(calc.display_text(), ERROR_MARKER);

        calc.input_digit(d);
        prop_assert_eq!(calc.display_text(), d.to_string());
    }
}
