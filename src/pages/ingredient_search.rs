use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::pagination::Pagination;
use crate::components::recipe_card::RecipeCard;
use crate::components::status::{Loading, Status, StatusBanner};
use crate::components::tag_input::TagInput;
use crate::models::{IngredientMatch, Page};
use crate::routes::Route;
use crate::services::http::ApiClient;
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::format_match_percent;

#[function_component(IngredientSearchPage)]
pub fn ingredient_search_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let tags = use_state(Vec::<String>::new);
    let searched = use_state(Vec::<String>::new);
    let results = use_state(|| None::<Page<IngredientMatch>>);
    let status = use_state(Status::default);
    let loading = use_state(|| false);

    let run = {
        let (results, status, loading) = (results.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        let limit = settings.page_size;
        Rc::new(move |ingredients: Vec<String>, page: u32| {
            let (results, status, loading, api) = (results.clone(), status.clone(), loading.clone(), api.clone());
            loading.set(true);
            status.set(Status::default());
            spawn_local(async move {
                match RecipeService::search_by_ingredients(&api, &ingredients, page, limit).await {
                    Ok(found) => {
                        if found.items.is_empty() {
                            status.set(Status::info("No recipes use those ingredients yet."));
                        }
                        results.set(Some(found));
                    }
                    Err(err) => {
                        log::error!("ingredient search failed: {err:#}");
                        results.set(None);
                        status.set(Status::error("Search failed. Please try again."));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_tags = {
        let tags = tags.clone();
        Callback::from(move |next: Vec<String>| tags.set(next))
    };

    let on_search = {
        let (tags, searched, status, run) = (tags.clone(), searched.clone(), status.clone(), run.clone());
        Callback::from(move |_: MouseEvent| {
            if tags.is_empty() {
                status.set(Status::error("Add at least one ingredient."));
                return;
            }
            searched.set((*tags).clone());
            run((*tags).clone(), 1);
        })
    };

    let on_page = {
        let (searched, run) = (searched.clone(), run.clone());
        Callback::from(move |page: u32| run((*searched).clone(), page))
    };

    html! {
        <div class="page">
            <h1>{ "What's in your kitchen?" }</h1>
            <p class="muted">{ "Type an ingredient and press Enter or comma. Backspace removes the last one." }</p>
            <TagInput tags={(*tags).clone()} on_change={on_tags} placeholder="e.g. tomato, onion" />
            <button class="btn btn-primary" onclick={on_search} disabled={*loading}>{ "Find recipes" }</button>
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading text="Matching recipes..." />
            }
            if let Some(found) = &*results {
                <div class="grid">
                    { for found.items.iter().map(|r| html! {
                        <RecipeCard
                            title={r.name.clone()}
                            route={Route::RecipeView { name: r.name.clone() }}
                            image_url={r.image_url.clone()}
                            prep_time={r.prep_time.clone()}
                            tags={vec![r.cuisine.clone(), r.diet.clone()]}
                        >
                            <p class="match">{ format!("Match: {}", format_match_percent(r.match_percent)) }</p>
                        </RecipeCard>
                    }) }
                </div>
                <Pagination page={found.page} total_pages={found.total_pages()} total={found.total} has_prev={found.has_prev()} has_next={found.has_next()} disabled={*loading} on_change={on_page} />
            }
        </div>
    }
}
