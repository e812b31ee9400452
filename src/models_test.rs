use super::*;

#[test]
fn recipe_accepts_ingredient_string_or_array() {
    let from_string: Recipe = serde_json::from_str(
        r#"{"name": "Dal", "ingredients": "lentils, salt , water", "prep_time": 25}"#,
    )
    .unwrap();
    assert_eq!(from_string.ingredients, vec!["lentils", "salt", "water"]);
    assert_eq!(from_string.prep_time, "25");

    let from_array: Recipe =
        serde_json::from_str(r#"{"name": "Dal", "ingredients": ["lentils", " ", null, 2]}"#).unwrap();
    assert_eq!(from_array.ingredients, vec!["lentils", "2"]);
    assert_eq!(from_array.description, "");
}

#[test]
fn recipe_tolerates_nulls() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"name": "Poha", "cuisine": null, "ingredients": null, "instructions": null}"#,
    )
    .unwrap();
    assert_eq!(recipe.cuisine, "");
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn page_reads_results_or_recipes_key() {
    let search: Page<RecipeSummary> = serde_json::from_str(
        r#"{"total": 41, "page": 2, "limit": 20, "results": [{"name": "Aloo Gobi"}]}"#,
    )
    .unwrap();
    assert_eq!(search.items.len(), 1);
    assert_eq!(search.total_pages(), 3);
    assert!(search.has_next());
    assert!(search.has_prev());

    let browse: Page<RecipeSummary> =
        serde_json::from_str(r#"{"total": 0, "recipes": []}"#).unwrap();
    assert_eq!(browse.page, 1);
    assert_eq!(browse.total_pages(), 1);
    assert!(!browse.has_next());
    assert!(!browse.has_prev());
}

#[test]
fn ingredient_match_keeps_ratio() {
    let m: IngredientMatch = serde_json::from_str(
        r#"{"name": "Paneer Tikka", "ingredients": "paneer, curd", "match_percent": 0.5}"#,
    )
    .unwrap();
    assert_eq!(m.ingredients.len(), 2);
    assert!((m.match_percent - 0.5).abs() < f64::EPSILON);
}

#[test]
fn uploaded_recipe_id_and_title_alias() {
    let r: UploadedRecipe =
        serde_json::from_str(r#"{"id": 7, "name": "Upma", "ingredients": "rava, ghee"}"#).unwrap();
    assert_eq!(r.id, "7");
    assert_eq!(r.title, "Upma");

    let draft = RecipeDraft::from(&r);
    assert_eq!(draft.ingredients, "rava, ghee");
}

#[test]
fn ai_answers_serialize_camel_case() {
    let answers = AiAnswers {
        meal_type: "Dinner".into(),
        main_ingredient: "Paneer".into(),
        spice_level: "Mild".into(),
        cuisine: "Indian".into(),
        time_available: "30".into(),
    };
    let json = serde_json::to_value(&answers).unwrap();
    assert_eq!(json["mealType"], "Dinner");
    assert_eq!(json["mainIngredient"], "Paneer");
    assert_eq!(json["timeAvailable"], "30");
}

#[test]
fn ai_envelope_flattens_body() {
    let env: AiEnvelope<AnswerBody> = serde_json::from_str(
        r#"{"status": true, "answer": {"name": "Chilli Paneer", "prep_time": 30, "ingredients": ["paneer"], "steps": ["Fry"]}}"#,
    )
    .unwrap();
    assert!(env.status);
    let recipe = env.body.answer.unwrap();
    assert_eq!(recipe.prep_time, "30");
    assert_eq!(recipe.steps, vec!["Fry"]);

    let list: AiEnvelope<SavedListBody> =
        serde_json::from_str(r#"{"status": true, "recipes": [{"id": 3}]}"#).unwrap();
    assert_eq!(list.body.recipes[0].name, "Unnamed Recipe");
}

#[test]
fn profile_age_is_lenient() {
    let p: UserProfile = serde_json::from_str(r#"{"name": "Rani", "age": "22"}"#).unwrap();
    assert_eq!(p.age, Some(22));
    let p: UserProfile = serde_json::from_str(r#"{"age": -4}"#).unwrap();
    assert_eq!(p.age, None);
}

#[test]
fn settings_back_compat_defaults_page_size() {
    let s: AppSettings = serde_json::from_str(r#"{"api_base_url": "http://x"}"#).unwrap();
    assert_eq!(s.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn search_filters_by_category() {
    let filters = SearchFilters::single(Category::Diets, "Vegetarian");
    assert_eq!(filters.values(Category::Diets), ["Vegetarian".to_string()]);
    assert!(filters.values(Category::Cuisines).is_empty());
    assert!(SearchFilters::default().values(Category::Diets).is_empty());
}
