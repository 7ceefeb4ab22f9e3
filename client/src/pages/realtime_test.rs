use super::*;

#[test]
fn refreshed_score_covers_88_through_97() {
    assert_eq!(refreshed_score(0.0), 88);
    assert_eq!(refreshed_score(0.55), 93);
    assert_eq!(refreshed_score(0.999_999), 97);
}

#[test]
fn refreshed_score_never_exceeds_97() {
    assert_eq!(refreshed_score(1.0), 97);
    assert_eq!(refreshed_score(7.0), 97);
    assert_eq!(refreshed_score(-1.0), 88);
}

#[test]
fn refresh_notice_text() {
    let notice = refreshed_notice();
    assert_eq!(notice.title, "Data Refreshed");
    assert_eq!(notice.description, "Real-time compliance data updated successfully");
}
