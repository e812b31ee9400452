use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::recipe_card::RecipeCard;
use crate::components::status::{Loading, Status, StatusBanner};
use crate::models::{Recipe, RecipeSummary};
use crate::routes::Route;
use crate::services::http::{ApiClient, ApiError};
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::{format_prep_time, or_not_specified, split_sentence_steps};

#[derive(Properties, PartialEq)]
pub struct RecipeViewProps {
    pub name: String,
}

#[function_component(RecipeViewPage)]
pub fn recipe_view_page(props: &RecipeViewProps) -> Html {
    let session = use_session();
    let settings = use_settings();

    let recipe = use_state(|| None::<Recipe>);
    let similar = use_state(Vec::<RecipeSummary>::new);
    let status = use_state(Status::default);
    let loading = use_state(|| true);

    {
        let (recipe, similar, status, loading) = (recipe.clone(), similar.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        use_effect_with(props.name.clone(), move |name| {
            let cancelled = Arc::new(AtomicBool::new(false));
            let flag = cancelled.clone();
            let name = name.clone();
            recipe.set(None);
            similar.set(Vec::new());
            status.set(Status::default());
            loading.set(true);

            spawn_local(async move {
                let fetched = RecipeService::by_name(&api, &name).await;
                if flag.load(Ordering::Relaxed) {
                    log::debug!("discarding stale recipe response for {name}");
                    return;
                }
                match fetched {
                    Ok(found) => recipe.set(Some(found)),
                    Err(err) => {
                        log::error!("loading recipe {name} failed: {err:#}");
                        let msg = match ApiError::status(&err) {
                            Some(404) => "Recipe not found.",
                            _ => "Could not load this recipe.",
                        };
                        status.set(Status::error(msg));
                        loading.set(false);
                        return;
                    }
                }
                loading.set(false);

                // Similar recipes are a nice-to-have; failures only get logged.
                let related = RecipeService::similar(&api, &name).await;
                if flag.load(Ordering::Relaxed) {
                    return;
                }
                match related {
                    Ok(found) => similar.set(found.similar_recipes),
                    Err(err) => log::warn!("similar recipes for {name} failed: {err:#}"),
                }
            });

            move || cancelled.store(true, Ordering::Relaxed)
        });
    }

    html! {
        <div class="page">
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading text="Loading recipe..." />
            }
            if let Some(r) = &*recipe {
                <article class="recipe">
                    <h1>{ &r.name }</h1>
                    if !r.image_url.is_empty() {
                        <img class="recipe-image" src={r.image_url.clone()} alt={r.name.clone()} />
                    }
                    if !r.description.is_empty() {
                        <p class="lead">{ &r.description }</p>
                    }
                    <dl class="meta">
                        <dt>{ "Cuisine" }</dt><dd>{ or_not_specified(&r.cuisine) }</dd>
                        <dt>{ "Course" }</dt><dd>{ or_not_specified(&r.course) }</dd>
                        <dt>{ "Diet" }</dt><dd>{ or_not_specified(&r.diet) }</dd>
                        <dt>{ "Prep time" }</dt><dd>{ prep_label(&r.prep_time) }</dd>
                    </dl>
                    <h2>{ "Ingredients" }</h2>
                    <ul>
                        { for r.ingredients.iter().map(|i| html! { <li>{ i }</li> }) }
                    </ul>
                    <h2>{ "Instructions" }</h2>
                    <ol>
                        { for split_sentence_steps(&r.instructions).into_iter().map(|s| html! { <li>{ s }</li> }) }
                    </ol>
                </article>
            }
            if !similar.is_empty() {
                <h2>{ "You might also like" }</h2>
                <div class="grid">
                    { for similar.iter().map(|s| html! {
                        <RecipeCard
                            title={s.name.clone()}
                            route={Route::RecipeView { name: s.name.clone() }}
                            image_url={s.image_url.clone()}
                            prep_time={s.prep_time.clone()}
                            tags={vec![s.cuisine.clone(), s.course.clone()]}
                        />
                    }) }
                </div>
            }
            <Link<Route> to={Route::Search} classes="btn">{ "Back to search" }</Link<Route>>
        </div>
    }
}

fn prep_label(prep_time: &str) -> String {
    if prep_time.trim().is_empty() {
        or_not_specified(prep_time).to_string()
    } else {
        format_prep_time(prep_time)
    }
}
