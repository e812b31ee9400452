use super::*;

#[test]
fn page_query_clamps_bounds() {
    assert_eq!(page_query(0, 0), vec![("page", "1".to_string()), ("limit", "1".to_string())]);
    assert_eq!(page_query(3, 500), vec![("page", "3".to_string()), ("limit", "100".to_string())]);
}

#[test]
fn filter_query_repeats_params_and_skips_blanks() {
    let filters = SearchFilters {
        cuisine: vec!["Indian".into(), " ".into()],
        course: vec![],
        diet: vec!["Vegetarian".into(), "Vegan".into()],
    };
    assert_eq!(
        filter_query(&filters),
        vec![
            ("cuisine", "Indian".to_string()),
            ("diet", "Vegetarian".to_string()),
            ("diet", "Vegan".to_string()),
        ]
    );
}

#[test]
fn search_query_orders_query_paging_filters() {
    let filters = SearchFilters::single(Category::Courses, "Dinner");
    let params = search_query("  paneer ", &filters, 2, 20);
    assert_eq!(
        params,
        vec![
            ("query", "paneer".to_string()),
            ("page", "2".to_string()),
            ("limit", "20".to_string()),
            ("course", "Dinner".to_string()),
        ]
    );
}

#[test]
fn category_list_reads_matching_key() {
    let body = serde_json::json!({ "diets": ["Vegetarian", "", "  Vegan ", 3] });
    assert_eq!(parse_category_list(Category::Diets, &body), vec!["Vegetarian", "Vegan"]);
    assert!(parse_category_list(Category::Courses, &body).is_empty());
}

#[test]
fn filter_options_lookup() {
    let options = FilterOptions {
        cuisines: vec!["Thai".into()],
        courses: vec![],
        diets: vec!["Vegan".into()],
    };
    assert_eq!(options.get(Category::Cuisines), ["Thai".to_string()]);
    assert!(options.get(Category::Courses).is_empty());
}

#[test]
fn created_statuses() {
    assert!(ensure_created(200).is_ok());
    assert!(ensure_created(201).is_ok());
    let err = ensure_created(204).unwrap_err();
    assert_eq!(ApiError::status(&err), Some(204));
}
