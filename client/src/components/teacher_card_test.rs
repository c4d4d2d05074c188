use super::*;

#[test]
fn experience_label_pluralizes() {
    assert_eq!(experience_label(Some(1)).as_deref(), Some("1 year"));
    assert_eq!(experience_label(Some(0)).as_deref(), Some("0 years"));
    assert_eq!(experience_label(Some(12)).as_deref(), Some("12 years"));
    assert_eq!(experience_label(None), None);
}

#[test]
fn rate_label_uses_two_decimals() {
    assert_eq!(rate_label(Some(35.0)).as_deref(), Some("35.00/hr"));
    assert_eq!(rate_label(None), None);
}
