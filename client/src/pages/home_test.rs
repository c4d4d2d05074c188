use market::Role;

use super::*;

#[test]
fn home_waits_while_resolving() {
    assert_eq!(home_target(&GuardState::Resolving), None);
}

#[test]
fn home_routes_each_role_to_its_dashboard() {
    assert_eq!(home_target(&GuardState::Allowed(Role::Teacher)), Some("/teacher"));
    assert_eq!(home_target(&GuardState::Allowed(Role::School)), Some("/school"));
    assert_eq!(home_target(&GuardState::Allowed(Role::Recruiter)), Some("/recruiter"));
}

#[test]
fn home_sends_denials_to_their_redirects() {
    assert_eq!(home_target(&GuardState::DeniedNoSession), Some("/login"));
    assert_eq!(home_target(&GuardState::DeniedWrongRole), Some("/unauthorized"));
}
