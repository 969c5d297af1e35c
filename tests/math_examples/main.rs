//! Arithmetic on `Number`
//!
//! Plain assertions, an expected-error assertion and a parametrized
//! multiplication table.
//!
//! ```bash
//! cargo test --test math_examples
//! ```

use accum::{Error, Number};
use rstest::rstest;

#[test]
fn test_one_plus_one() {
    assert_eq!(Number::Int(1) + Number::Int(1), Number::Int(2));
}

#[test]
fn test_one_plus_two() {
    let a = Number::Int(1);
    let b = Number::Int(2);
    let c = Number::Int(3);
    assert_eq!(a + b, c);
}

#[test]
fn test_divide_by_zero() {
    let err = Number::Int(1).checked_div(Number::Int(0)).unwrap_err();

    assert_eq!(err, Error::DivisionByZero);
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn test_divide_float_by_zero() {
    let result = Number::Float(1.0).checked_div(Number::Float(0.0));
    assert!(matches!(result, Err(Error::DivisionByZero)));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_divide_by_zero_surfaces_message() {
    if let Err(e) = Number::Int(1).checked_div(Number::Int(0)) {
        panic!("{e}");
    }
}

#[rstest]
#[case::positive_integers(Number::Int(2), Number::Int(3), Number::Int(6))]
#[case::identity(Number::Int(1), Number::Int(99), Number::Int(99))]
#[case::zero(Number::Int(0), Number::Int(99), Number::Int(0))]
#[case::positive_by_negative(Number::Int(3), Number::Int(-4), Number::Int(-12))]
#[case::negative_by_negative(Number::Int(-5), Number::Int(-5), Number::Int(25))]
#[case::floats(Number::Float(2.5), Number::Float(6.7), Number::Float(16.75))]
fn test_multiplication(#[case] a: Number, #[case] b: Number, #[case] product: Number) {
    assert_eq!(a * b, product);
}

#[rstest]
#[case::exact(Number::Int(6), Number::Int(3), Number::Float(2.0))]
#[case::fractional(Number::Int(3), Number::Int(2), Number::Float(1.5))]
#[case::negative(Number::Float(-7.5), Number::Int(3), Number::Float(-2.5))]
fn test_true_division(#[case] a: Number, #[case] b: Number, #[case] quotient: Number) {
    let result = a.checked_div(b).unwrap();
    assert!(result.is_float());
    assert_eq!(result, quotient);
}
