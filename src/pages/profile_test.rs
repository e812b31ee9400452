use super::*;

fn start() -> ProfileDraft {
    ProfileDraft::from_profile(&UserProfile {
        name: "Rani".into(),
        age: Some(30),
        ..UserProfile::default()
    })
}

#[test]
fn image_load_keeps_fields_typed_meanwhile() {
    // typed after the file was picked, before the reader finished
    let typed = start()
        .apply(DraftEdit::Field(|p| &mut p.name, "Rani Devi".into()))
        .apply(DraftEdit::Age("31".into()));
    let loaded = typed.apply(DraftEdit::Field(|p| &mut p.image, "data:image/png;base64,AA".into()));
    assert_eq!(loaded.profile.name, "Rani Devi");
    assert_eq!(loaded.age, "31");
    assert_eq!(loaded.profile.image, "data:image/png;base64,AA");
}

#[test]
fn reset_reloads_age_text() {
    let edited = start().apply(DraftEdit::Age("abc".into()));
    let profile = UserProfile { age: None, ..UserProfile::default() };
    let reset = edited.apply(DraftEdit::Reset(profile));
    assert_eq!(reset.age, "");
    assert_eq!(start().age, "30");
}
