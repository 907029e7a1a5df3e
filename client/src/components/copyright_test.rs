use super::*;

#[test]
fn year_suffix_includes_year_when_known() {
    assert_eq!(year_suffix(Some(2026)), " 2026.");
}

#[test]
fn year_suffix_is_bare_period_before_hydration() {
    assert_eq!(year_suffix(None), ".");
}
