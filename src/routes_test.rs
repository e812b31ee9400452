use super::*;

#[test]
fn paths_carry_params() {
    assert_eq!(Route::UploadedDetails { id: "7".into() }.to_path(), "/uploaded-recipes/7");
    assert_eq!(Route::EditRecipe { id: "7".into() }.to_path(), "/edit-recipe/7");
    assert_eq!(Route::IngredientSearch.to_path(), "/search-by-ingredients");
}

#[test]
fn detail_path_is_recognized() {
    assert_eq!(
        Route::recognize("/uploaded-recipes/7"),
        Some(Route::UploadedDetails { id: "7".into() })
    );
}

#[test]
fn only_account_pages_need_login() {
    assert!(Route::SavedRecipes.requires_login());
    assert!(Route::Profile.requires_login());
    assert!(!Route::Search.requires_login());
    assert!(!Route::RecipeView { name: "Dal".into() }.requires_login());
}
