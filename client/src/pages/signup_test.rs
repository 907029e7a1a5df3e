use super::*;

#[test]
fn display_name_joins_trimmed_parts() {
    assert_eq!(display_name(" Ada ", "Lovelace"), Some("Ada Lovelace".to_owned()));
}

#[test]
fn display_name_uses_single_part_when_other_blank() {
    assert_eq!(display_name("Ada", ""), Some("Ada".to_owned()));
    assert_eq!(display_name("  ", "Lovelace"), Some("Lovelace".to_owned()));
}

#[test]
fn display_name_none_when_both_blank() {
    assert_eq!(display_name("", "  "), None);
}

#[test]
fn register_request_omits_confirmation() {
    let owner = Owner::new();
    owner.with(|| {
        let form = SignupFields::new();
        form.first_name.on_change("Ada".to_owned());
        form.last_name.on_change("Lovelace".to_owned());
        form.username.on_change("ada@engine.org".to_owned());
        form.password.on_change("pw1".to_owned());
        form.confirm_password.on_change("different".to_owned());

        assert_eq!(
            form.register_request(),
            RegisterRequest {
                username: "ada@engine.org".to_owned(),
                password: "pw1".to_owned(),
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
            }
        );
    });
}

#[test]
fn signup_fields_start_valid() {
    let owner = Owner::new();
    owner.with(|| {
        let form = SignupFields::new();
        for input in [form.first_name, form.last_name, form.username, form.password, form.confirm_password] {
            assert!(!input.has_error_untracked());
            assert_eq!(input.value_untracked(), "");
        }
    });
}
