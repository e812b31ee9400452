use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Loading, Status, StatusBanner};
use crate::models::{AiRecipe, SavedRecipeSummary};
use crate::pages::ai_recipe::AiRecipeView;
use crate::services::ai::AiService;
use crate::services::http::{ApiClient, ApiError};
use crate::services::session::{use_session, use_settings, SessionAction};
use crate::utils::confirm;

#[cfg(test)]
#[path = "saved_recipes_test.rs"]
mod saved_recipes_test;

/// The saved list plus the expanded row and its full recipe once loaded.
#[derive(Clone, PartialEq, Debug, Default)]
pub(crate) struct SavedList {
    items: Vec<SavedRecipeSummary>,
    open: Option<(i64, Option<AiRecipe>)>,
}

pub(crate) enum SavedAction {
    Loaded(Vec<SavedRecipeSummary>),
    Expand(i64),
    Collapse,
    /// Ignored unless `id` is still the expanded row.
    Detail(i64, AiRecipe),
    DetailFailed(i64),
    Removed(i64),
}

impl SavedList {
    pub(crate) fn is_open(&self, id: i64) -> bool {
        matches!(self.open, Some((current, _)) if current == id)
    }

    pub(crate) fn apply(&self, action: SavedAction) -> SavedList {
        let mut next = self.clone();
        match action {
            SavedAction::Loaded(items) => next.items = items,
            SavedAction::Expand(id) => next.open = Some((id, None)),
            SavedAction::Collapse => next.open = None,
            SavedAction::Detail(id, recipe) => {
                if self.is_open(id) {
                    next.open = Some((id, Some(recipe)));
                }
            }
            SavedAction::DetailFailed(id) => {
                if self.is_open(id) {
                    next.open = None;
                }
            }
            SavedAction::Removed(id) => {
                next.items.retain(|r| r.id != id);
                if self.is_open(id) {
                    next.open = None;
                }
            }
        }
        next
    }
}

impl Reducible for SavedList {
    type Action = SavedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(SavedRecipesPage)]
pub fn saved_recipes_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let saved = use_reducer(SavedList::default);
    let status = use_state(Status::default);
    let loading = use_state(|| true);

    let api = ApiClient::from_context(&settings, &session);

    {
        let (saved, status, loading, api) = (saved.clone(), status.clone(), loading.clone(), api.clone());
        let session = session.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match AiService::list_saved(&api).await {
                    Ok(list) => {
                        if list.is_empty() {
                            status.set(Status::info("You haven't saved any AI recipes yet."));
                        }
                        saved.dispatch(SavedAction::Loaded(list));
                    }
                    Err(err) => {
                        log::error!("loading saved recipes failed: {err:#}");
                        if ApiError::status(&err) == Some(401) {
                            session.dispatch(SessionAction::TokenRejected);
                            status.set(Status::error("Your session expired. Please login again."));
                        } else {
                            status.set(Status::error("Could not load saved recipes."));
                        }
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_toggle = |id: i64| {
        let (saved, status, api) = (saved.clone(), status.clone(), api.clone());
        Callback::from(move |_: MouseEvent| {
            if saved.is_open(id) {
                saved.dispatch(SavedAction::Collapse);
                return;
            }
            saved.dispatch(SavedAction::Expand(id));
            let (saved, status, api) = (saved.clone(), status.clone(), api.clone());
            spawn_local(async move {
                match AiService::view_saved(&api, id).await {
                    Ok(recipe) => saved.dispatch(SavedAction::Detail(id, recipe)),
                    Err(err) => {
                        log::error!("loading saved recipe {id} failed: {err:#}");
                        saved.dispatch(SavedAction::DetailFailed(id));
                        status.set(Status::error("Could not load that recipe."));
                    }
                }
            });
        })
    };

    let on_delete = |id: i64| {
        let (saved, status, api) = (saved.clone(), status.clone(), api.clone());
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !confirm("Delete this saved recipe?") {
                return;
            }
            let (saved, status, api) = (saved.clone(), status.clone(), api.clone());
            spawn_local(async move {
                match AiService::delete_saved(&api, id).await {
                    Ok(()) => {
                        saved.dispatch(SavedAction::Removed(id));
                        status.set(Status::success("Recipe deleted."));
                    }
                    Err(err) => {
                        log::error!("deleting saved recipe {id} failed: {err:#}");
                        status.set(Status::error("Failed to delete recipe."));
                    }
                }
            });
        })
    };

    html! {
        <div class="page narrow">
            <h1>{ "Saved AI recipes" }</h1>
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading />
            }
            <ul class="saved-list">
                { for saved.items.iter().map(|r| {
                    let expanded = match &saved.open {
                        Some((id, detail)) if *id == r.id => Some(detail.clone()),
                        _ => None,
                    };
                    html! {
                        <li key={r.id} class="card">
                            <div class="saved-row" onclick={on_toggle(r.id)}>
                                <strong>{ &r.name }</strong>
                                <button class="btn btn-danger" onclick={on_delete(r.id)}>{ "Delete" }</button>
                            </div>
                            if let Some(detail) = expanded {
                                if let Some(recipe) = detail {
                                    <AiRecipeView {recipe} />
                                } else {
                                    <Loading />
                                }
                            }
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
