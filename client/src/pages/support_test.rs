use super::*;

#[test]
fn starts_collapsed() {
    let faq = Accordion::default();
    assert!((0..FAQS.len()).all(|i| !faq.is_open(i)));
}

#[test]
fn opening_one_closes_the_other() {
    let mut faq = Accordion::default();
    faq.toggle(1);
    faq.toggle(3);
    assert!(!faq.is_open(1));
    assert!(faq.is_open(3));
}

#[test]
fn clicking_open_item_collapses_it() {
    let mut faq = Accordion::default();
    faq.toggle(2);
    faq.toggle(2);
    assert_eq!(faq, Accordion::default());
}
