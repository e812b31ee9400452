use super::*;

#[test]
fn split_ingredients_trims_and_drops_blanks() {
    assert_eq!(
        split_ingredients(" tomato, onion ,, paneer ,"),
        vec!["tomato", "onion", "paneer"]
    );
    assert!(split_ingredients("   ").is_empty());
}

#[test]
fn join_ingredients_uses_comma_space() {
    let items = vec!["tomato".to_string(), " ".to_string(), " onion ".to_string()];
    assert_eq!(join_ingredients(&items), "tomato, onion");
}

#[test]
fn numbered_steps_split_on_lines_and_markers() {
    let text = "1. Boil water.\n2. Add pasta.\r\n3. Drain";
    assert_eq!(split_numbered_steps(text), vec!["Boil water.", "Add pasta.", "Drain"]);
}

#[test]
fn numbered_steps_split_inline_markers() {
    let text = "1. Chop onions 2. Fry them 10. Serve";
    assert_eq!(split_numbered_steps(text), vec!["Chop onions", "Fry them", "Serve"]);
}

#[test]
fn numbered_steps_keep_quantities() {
    assert_eq!(
        split_numbered_steps("Bake for 20 minutes at 180.5 degrees"),
        vec!["Bake for 20 minutes at 180.5 degrees"]
    );
}

#[test]
fn sentence_steps_break_before_capitals() {
    let text = "Heat oil in a pan. Add cumin seeds. let them splutter. Serve hot.";
    assert_eq!(
        split_sentence_steps(text),
        vec!["Heat oil in a pan.", "Add cumin seeds. let them splutter.", "Serve hot."]
    );
}

#[test]
fn sentence_steps_ignore_decimals() {
    assert_eq!(split_sentence_steps("Add 1.5 cups. Stir"), vec!["Add 1.5 cups.", "Stir"]);
    assert!(split_sentence_steps("  ").is_empty());
}

#[test]
fn match_percent_rounds_and_clamps() {
    assert_eq!(format_match_percent(0.666), "67%");
    assert_eq!(format_match_percent(1.7), "100%");
    assert_eq!(format_match_percent(f64::NAN), "0%");
    assert_eq!(format_match_percent(0.125), "13%");
    assert_eq!(format_match_percent(0.625), "63%");
}

#[test]
fn prep_time_formatting() {
    assert_eq!(format_prep_time("30"), "30 mins");
    assert_eq!(format_prep_time("1 hour"), "1 hour");
    assert_eq!(format_prep_time(" "), "Not specified");
    assert_eq!(or_not_specified(""), "Not specified");
    assert_eq!(or_not_specified("Indian"), "Indian");
}

#[test]
fn profile_image_resolution() {
    assert_eq!(resolve_profile_image("http://api/", "null"), None);
    assert_eq!(
        resolve_profile_image("http://api/", "data:image/png;base64,AAA"),
        Some("data:image/png;base64,AAA".to_string())
    );
    assert_eq!(
        resolve_profile_image("http://api/", "/uploads/me.png"),
        Some("http://api/uploads/me.png".to_string())
    );
}

#[test]
fn filter_items_is_case_insensitive() {
    let items = vec!["North Indian".to_string(), "Italian".to_string(), "Thai".to_string()];
    assert_eq!(filter_items(&items, "ITAL"), vec!["Italian"]);
    assert_eq!(filter_items(&items, "").len(), 3);
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("diets"), "Diets");
    assert_eq!(capitalize(""), "");
}

#[test]
fn markdown_escapes_raw_html() {
    let out = markdown_to_html("**Dal**\n<script>x</script>");
    assert!(out.contains("<strong>Dal</strong>"));
    assert!(!out.contains("<script>"));
}

#[test]
fn only_the_newest_request_is_current() {
    let mut seq = RequestSeq::default();
    let cuisines = seq.next();
    let courses = seq.next();
    assert!(!seq.is_current(cuisines));
    assert!(seq.is_current(courses));
    seq.next();
    assert!(!seq.is_current(courses));
}
