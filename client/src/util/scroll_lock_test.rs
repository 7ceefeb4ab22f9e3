#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn overflow_value_hides_when_locked() {
    assert_eq!(overflow_value(true), "hidden");
    assert_eq!(overflow_value(false), "unset");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}
