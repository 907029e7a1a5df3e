use super::*;

fn with_owner(f: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(f);
}

fn email_input() -> FormInput {
    use_form_input(
        "",
        vec![
            ValidationRule::required("Username is required"),
            ValidationRule::email("Invalid email"),
        ],
    )
}

#[test]
fn new_input_starts_valid_with_initial_value() {
    with_owner(|| {
        let input = use_form_input("value", vec![ValidationRule::required("M")]);
        assert_eq!(input.value_untracked(), "value");
        assert!(!input.has_error_untracked());
    });
}

#[test]
fn on_change_updates_value_and_error() {
    with_owner(|| {
        let input = email_input();
        input.on_change("test".to_owned());
        assert_eq!(input.value_untracked(), "test");
        assert!(input.has_error_untracked());
        assert_eq!(input.state.with_untracked(|s| s.helper_text().to_owned()), "Invalid email");

        input.on_change("test@sd.com".to_owned());
        assert!(!input.has_error_untracked());
    });
}

#[test]
fn on_blur_reports_first_failing_rule() {
    with_owner(|| {
        let input = email_input();
        input.on_blur(String::new());
        assert_eq!(
            input.state.with_untracked(|s| s.error_message().map(str::to_owned)),
            Some("Username is required".to_owned())
        );
    });
}

#[test]
fn copies_share_the_same_field() {
    with_owner(|| {
        let input = email_input();
        let copy = input;
        copy.on_change("a@b.com".to_owned());
        assert_eq!(input.value_untracked(), "a@b.com");
    });
}
