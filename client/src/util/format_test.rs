use super::*;

#[test]
fn small_numbers_unchanged() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn groups_by_three() {
    assert_eq!(group_thousands(1_247), "1,247");
    assert_eq!(group_thousands(45_892), "45,892");
    assert_eq!(group_thousands(1_000_000), "1,000,000");
}
