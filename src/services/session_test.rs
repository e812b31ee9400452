use super::*;

fn profile(name: &str) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        ..UserProfile::default()
    }
}

#[test]
fn login_keeps_cached_profile_when_server_sends_none() {
    let before = Session { token: None, profile: profile("Rani") };
    let after = before.apply(SessionAction::LoggedIn { token: "t1".into(), profile: None });
    assert_eq!(after.token.as_deref(), Some("t1"));
    assert_eq!(after.profile.name, "Rani");
    assert!(after.is_logged_in());
}

#[test]
fn login_replaces_profile_when_provided() {
    let before = Session { token: None, profile: profile("Old") };
    let after = before.apply(SessionAction::LoggedIn {
        token: "t2".into(),
        profile: Some(profile("New")),
    });
    assert_eq!(after.display_name(), "New");
}

#[test]
fn rejected_token_keeps_profile() {
    let before = Session { token: Some("t".into()), profile: profile("Rani") };
    let after = before.apply(SessionAction::TokenRejected);
    assert!(!after.is_logged_in());
    assert_eq!(after.profile.name, "Rani");
}

#[test]
fn profile_update_keeps_token() {
    let before = Session { token: Some("t".into()), profile: profile("Rani") };
    let after = before.apply(SessionAction::ProfileUpdated(profile("Asha")));
    assert_eq!(after.token.as_deref(), Some("t"));
    assert_eq!(after.display_email(), "asha@example.com");
}

#[test]
fn logout_clears_everything() {
    let before = Session { token: Some("t".into()), profile: profile("Rani") };
    let after = before.apply(SessionAction::LoggedOut);
    assert_eq!(after, Session::default());
    assert_eq!(after.display_name(), "User");
    assert_eq!(after.display_email(), "user@example.com");
}
