use super::*;

fn summary(id: i64, name: &str) -> SavedRecipeSummary {
    SavedRecipeSummary { id, name: name.to_string() }
}

fn loaded() -> SavedList {
    SavedList::default().apply(SavedAction::Loaded(vec![
        summary(1, "Dal"),
        summary(2, "Kheer"),
        summary(3, "Upma"),
    ]))
}

fn names(list: &SavedList) -> Vec<&str> {
    list.items.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn back_to_back_deletes_both_stick() {
    let after = loaded().apply(SavedAction::Removed(1)).apply(SavedAction::Removed(2));
    assert_eq!(names(&after), ["Upma"]);

    // completions may arrive in either order
    let after = loaded().apply(SavedAction::Removed(2)).apply(SavedAction::Removed(1));
    assert_eq!(names(&after), ["Upma"]);
}

#[test]
fn deleting_the_open_row_collapses_it() {
    let list = loaded().apply(SavedAction::Expand(2)).apply(SavedAction::Removed(2));
    assert_eq!(list.open, None);

    let list = loaded().apply(SavedAction::Expand(3)).apply(SavedAction::Removed(1));
    assert!(list.is_open(3));
}

#[test]
fn late_detail_for_another_row_is_dropped() {
    let recipe = AiRecipe { name: "Dal".into(), ..AiRecipe::default() };
    let list = loaded()
        .apply(SavedAction::Expand(1))
        .apply(SavedAction::Expand(2))
        .apply(SavedAction::Detail(1, recipe.clone()));
    assert_eq!(list.open, Some((2, None)));

    let list = list.apply(SavedAction::Detail(2, recipe.clone()));
    assert_eq!(list.open, Some((2, Some(recipe))));
}

#[test]
fn failed_detail_only_collapses_its_own_row() {
    let list = loaded().apply(SavedAction::Expand(1)).apply(SavedAction::Expand(2));
    assert!(list.apply(SavedAction::DetailFailed(1)).is_open(2));
    assert_eq!(list.apply(SavedAction::DetailFailed(2)).open, None);
}
