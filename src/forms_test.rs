use super::*;

#[test]
fn email_shapes() {
    assert!(is_valid_email("rani@example.com"));
    assert!(is_valid_email("a.b@mail.co.in"));
    assert!(!is_valid_email("rani@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("rani@@example.com"));
    assert!(!is_valid_email("ra ni@example.com"));
    assert!(!is_valid_email("rani@.com"));
    assert!(is_valid_email("a@b.c."));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn strong_password_needs_every_class() {
    assert!(is_strong_password("Curry#2024"));
    assert!(!is_strong_password("curry#2024"));
    assert!(!is_strong_password("CURRY#2024"));
    assert!(!is_strong_password("Curry#Leaf"));
    assert!(!is_strong_password("Curry2024"));
    assert!(!is_strong_password("Cu#2"));
    // underscore counts as a word character, not a symbol
    assert!(!is_strong_password("Curry_2024"));
    // letter classes are ASCII only; accented letters count as symbols
    assert!(is_strong_password("Passwordé1"));
    assert!(!is_strong_password("ÉÉÉÉÉÉé1!"));
}

#[test]
fn login_requires_eight_chars() {
    assert_eq!(validate_login("a@b.co", "short"), Err("Password must be at least 8 characters long."));
    assert_eq!(validate_login(" ", "longenough"), Err("Please enter your email address."));
    assert_eq!(validate_login("a@b.co", "longenough"), Ok(()));
}

#[test]
fn registration_checks_in_order() {
    assert_eq!(validate_registration("", "a@b.co", "x"), Err("Please enter your name."));
    assert_eq!(
        validate_registration("Rani", "nope", "Curry#2024"),
        Err("Please enter a valid email address.")
    );
    assert!(validate_registration("Rani", "rani@example.com", "weak").is_err());
    assert_eq!(validate_registration("Rani", " rani@example.com ", "Curry#2024"), Ok(()));
}

#[test]
fn reset_steps_cycle() {
    let step = ResetStep::default();
    assert_eq!(step, ResetStep::SendOtp);
    assert_eq!(step.advance(), ResetStep::VerifyOtp);
    assert_eq!(step.advance().advance(), ResetStep::ResetPassword);
    assert_eq!(step.advance().advance().advance(), ResetStep::SendOtp);
}

#[test]
fn reset_step_validation() {
    assert!(ResetStep::SendOtp.validate("", "", "").is_err());
    assert_eq!(ResetStep::SendOtp.validate("rani@example.com", "", ""), Ok(()));
    assert!(ResetStep::VerifyOtp.validate("rani@example.com", " ", "").is_err());
    assert!(ResetStep::ResetPassword.validate("rani@example.com", "1234", "short").is_err());
    assert_eq!(ResetStep::ResetPassword.validate("9876543210", "1234", "longenough"), Ok(()));
}

#[test]
fn tags_are_normalized_and_deduplicated() {
    let mut tags = vec!["tomato".to_string()];
    assert!(add_tags(&mut tags, " Onion, TOMATO ,, garlic "));
    assert_eq!(tags, vec!["tomato", "onion", "garlic"]);
    assert!(!add_tags(&mut tags, "onion"));
    assert_eq!(normalize_tag(" , "), None);
}

#[test]
fn suggestions_filter_by_prefix_and_skip_taken() {
    let taken = vec!["chicken".to_string()];
    assert_eq!(suggest_tags(&INGREDIENT_SUGGESTIONS, "CH", &taken, 5), vec!["cheese", "chili"]);
    assert!(suggest_tags(&INGREDIENT_SUGGESTIONS, "  ", &taken, 5).is_empty());
    assert_eq!(suggest_tags(&INGREDIENT_SUGGESTIONS, "c", &[], 2).len(), 2);
}

#[test]
fn upload_steps_walk_forward_and_back() {
    assert_eq!(UploadStep::Basics.next(), Some(UploadStep::Ingredients));
    assert_eq!(UploadStep::Review.next(), None);
    assert_eq!(UploadStep::Basics.prev(), None);
    assert_eq!(UploadStep::Review.prev(), Some(UploadStep::Instructions));
}

#[test]
fn upload_form_blocks_incomplete_steps() {
    let mut form = UploadForm::default();
    assert_eq!(form.validate_step(UploadStep::Basics), Err("Recipe title is required."));
    form.title = "Masala Dosa".into();
    form.prep_time = "about an hour".into();
    assert!(form.validate_step(UploadStep::Basics).is_err());
    form.prep_time = "45 mins".into();
    assert_eq!(form.validate_step(UploadStep::Basics), Ok(()));

    assert_eq!(form.validate_step(UploadStep::Ingredients), Err("Add at least one ingredient."));
    form.ingredients = vec!["rice".into(), "urad dal".into()];

    form.instructions = "Soak. Grind. Ferment.".into();
    form.image_url = "ftp://img".into();
    assert!(form.validate_step(UploadStep::Instructions).is_err());
    form.image_url = String::new();
    assert_eq!(form.validate_step(UploadStep::Review), Ok(()));

    let draft = form.to_draft();
    assert_eq!(draft.ingredients, "rice, urad dal");
    assert_eq!(draft.title, "Masala Dosa");
}

#[test]
fn edit_form_starts_from_uploaded_recipe() {
    let recipe: UploadedRecipe = serde_json::from_value(serde_json::json!({
        "id": 12,
        "title": "Poha",
        "ingredients": "flattened rice, onion , peanuts",
        "instructions": "1. Rinse. 2. Temper.",
    }))
    .unwrap();
    let form = UploadForm::from(&recipe);
    assert_eq!(form.ingredients, vec!["flattened rice", "onion", "peanuts"]);
    assert_eq!(form.validate_step(UploadStep::Review), Ok(()));
    assert_eq!(form.to_draft().ingredients, "flattened rice, onion, peanuts");
}

#[test]
fn age_parsing() {
    assert_eq!(parse_age(""), Ok(None));
    assert_eq!(parse_age(" 22 "), Ok(Some(22)));
    assert!(parse_age("-1").is_err());
    assert!(parse_age("151").is_err());
    assert!(parse_age("twenty").is_err());
}

#[test]
fn profile_needs_name_and_valid_email() {
    let mut profile = UserProfile::default();
    assert!(validate_profile(&profile).is_err());
    profile.name = "Rani".into();
    assert_eq!(validate_profile(&profile), Ok(()));
    profile.email = "not-an-email".into();
    assert!(validate_profile(&profile).is_err());
}

#[test]
fn questionnaire_blocks_blank_answers() {
    let mut answers = AiAnswers::default();
    assert_eq!(next_question(&answers, 0), None);
    *answer_mut(&mut answers, 0).unwrap() = "Dinner".into();
    assert_eq!(next_question(&answers, 0), Some(1));
    assert!(answer_mut(&mut answers, 5).is_none());
    assert!(!answers_complete(&answers));

    for (i, value) in ["Dinner", "Paneer", "Mild", "Indian", "30"].iter().enumerate() {
        *answer_mut(&mut answers, i).unwrap() = (*value).to_string();
    }
    assert!(answers_complete(&answers));
    assert!(is_last_question(4));
    assert_eq!(next_question(&answers, 4), None);
}

#[test]
fn query_is_trimmed() {
    assert_eq!(validate_query("  butter chicken "), Ok("butter chicken".to_string()));
    assert!(validate_query("   ").is_err());
}
