use super::*;

fn response(token: Option<&str>, role: Option<Role>) -> RegisterResponse {
    RegisterResponse { token: token.map(str::to_owned), email: None, name: None, role }
}

#[test]
fn registration_with_token_lands_on_chosen_dashboard() {
    assert_eq!(after_register_path(&response(Some("t"), None), Role::School), "/school");
}

#[test]
fn backend_role_overrides_chosen_role() {
    assert_eq!(after_register_path(&response(Some("t"), Some(Role::Teacher)), Role::School), "/teacher");
}

#[test]
fn registration_without_token_goes_to_sign_in() {
    assert_eq!(after_register_path(&response(None, Some(Role::Teacher)), Role::Teacher), "/login");
}
