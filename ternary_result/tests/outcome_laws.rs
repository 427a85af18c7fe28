//! Law-style checks for `Outcome` construction and interrogation.
//!
//! Each law is written once as a generic helper and exercised over several
//! payload types, including their default values.

use std::fmt::Debug;

use anyhow::{Result, ensure};
use rstest::rstest;
use ternary_result::{IntoOutcome, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fault(&'static str);

fn check_wrap_success<T>(value: &T) -> Result<()>
where
    T: Clone + Default + PartialEq + Debug,
{
    let outcome: Outcome<T, Fault> = Outcome::wrap(value.clone(), None);
    ensure!(outcome.is_valid(), "wrap without error must be valid");
    ensure!(outcome.error().is_none(), "valid outcome reported an error");
    ensure!(
        outcome.value() == *value,
        "expected {value:?}, got {:?}",
        outcome.value()
    );
    ensure!(
        outcome.into_pair() == (value.clone(), None),
        "round trip lost the value {value:?}"
    );
    Ok(())
}

fn check_wrap_failure<T>(value: T) -> Result<()>
where
    T: Clone + Default + PartialEq + Debug,
{
    let fault = Fault("refused");
    let outcome: Outcome<T, Fault> = Outcome::wrap(value, Some(fault.clone()));
    ensure!(!outcome.is_valid(), "wrap with error must be invalid");
    ensure!(
        outcome.error() == Some(&fault),
        "expected the supplied error, got {:?}",
        outcome.error()
    );
    ensure!(
        outcome.value() == T::default(),
        "failed outcome leaked {:?}",
        outcome.value()
    );
    ensure!(
        outcome.into_pair() == (T::default(), Some(fault)),
        "round trip did not yield the default value and the error"
    );
    Ok(())
}

#[rstest]
#[case(0_i32)]
#[case(-17_i32)]
#[case(i32::MAX)]
fn wrap_laws_hold_for_integers(#[case] value: i32) -> Result<()> {
    check_wrap_success(&value)?;
    check_wrap_failure(value)
}

#[rstest]
#[case("")]
#[case("Óðinn")]
fn wrap_laws_hold_for_strings(#[case] value: &str) -> Result<()> {
    check_wrap_success(&value.to_owned())?;
    check_wrap_failure(value.to_owned())
}

#[rstest]
#[case(None)]
#[case(Some(vec![1_u8, 2, 3]))]
fn wrap_laws_hold_for_optional_payloads(#[case] value: Option<Vec<u8>>) -> Result<()> {
    check_wrap_success(&value)?;
    check_wrap_failure(value)
}

#[rstest]
#[case::success(Outcome::success(4))]
#[case::failure(Outcome::failure(Fault("lost")))]
fn valid_iff_no_error(#[case] outcome: Outcome<u64, Fault>) -> Result<()> {
    ensure!(
        outcome.is_valid() == outcome.error().is_none(),
        "discriminator disagrees with the error slot for {outcome:?}"
    );
    ensure!(
        outcome.is_valid() == outcome.value_ref().is_some(),
        "discriminator disagrees with the value slot for {outcome:?}"
    );
    let valid = outcome.is_valid();
    ensure!(
        outcome.into_error().is_none() == valid,
        "consuming the outcome changed its discriminator"
    );
    Ok(())
}

#[test]
fn pairs_and_results_lift_into_outcomes() -> Result<()> {
    let from_pair = (12_u16, Some(Fault("stale"))).into_outcome();
    ensure!(from_pair == Outcome::Failure(Fault("stale")), "pair lost its error");

    let from_result = Ok::<u16, Fault>(12).into_outcome();
    ensure!(from_result == Outcome::Success(12), "result lost its value");

    let back: std::result::Result<u16, Fault> = from_pair.into();
    ensure!(back == Err(Fault("stale")), "outcome lost its error");
    Ok(())
}
