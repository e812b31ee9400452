use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Loading, Status, StatusBanner};
use crate::models::UploadedRecipe;
use crate::routes::Route;
use crate::services::http::{ApiClient, ApiError};
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::{confirm, format_prep_time, or_not_specified, split_numbered_steps};

#[derive(Properties, PartialEq)]
pub struct UploadedDetailsProps {
    pub id: String,
}

#[function_component(UploadedDetailsPage)]
pub fn uploaded_details_page(props: &UploadedDetailsProps) -> Html {
    let session = use_session();
    let settings = use_settings();
    let navigator = use_navigator();

    let recipe = use_state(|| None::<UploadedRecipe>);
    let status = use_state(Status::default);
    let loading = use_state(|| true);
    let deleting = use_state(|| false);

    {
        let (recipe, status, loading) = (recipe.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match RecipeService::get_uploaded(&api, &id).await {
                    Ok(found) => recipe.set(Some(found)),
                    Err(err) => {
                        log::error!("loading uploaded recipe {id} failed: {err:#}");
                        let msg = match ApiError::status(&err) {
                            Some(404) => "Recipe not found.",
                            _ => "Could not load this recipe.",
                        };
                        status.set(Status::error(msg));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_delete = {
        let id = props.id.clone();
        let (status, deleting) = (status.clone(), deleting.clone());
        Callback::from(move |_: MouseEvent| {
            if *deleting || !confirm("Delete this recipe? This cannot be undone.") {
                return;
            }
            let api = ApiClient::from_context(&settings, &session);
            let (id, status, deleting, navigator) = (id.clone(), status.clone(), deleting.clone(), navigator.clone());
            deleting.set(true);
            spawn_local(async move {
                match RecipeService::delete(&api, &id).await {
                    Ok(()) => {
                        log::info!("deleted uploaded recipe {id}");
                        if let Some(nav) = navigator {
                            nav.push(&Route::UploadedList);
                        }
                    }
                    Err(err) => {
                        log::error!("deleting {id} failed: {err:#}");
                        let msg = ApiError::server_message(&err)
                            .map(str::to_string)
                            .unwrap_or_else(|| "Failed to delete recipe.".to_string());
                        status.set(Status::error(msg));
                        deleting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="page narrow">
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading />
            }
            if let Some(r) = &*recipe {
                <article class="recipe">
                    <h1>{ &r.title }</h1>
                    if !r.image_url.is_empty() {
                        <img class="recipe-image" src={r.image_url.clone()} alt={r.title.clone()} />
                    }
                    <dl class="meta">
                        <dt>{ "Cuisine" }</dt><dd>{ or_not_specified(&r.cuisine) }</dd>
                        <dt>{ "Course" }</dt><dd>{ or_not_specified(&r.course) }</dd>
                        <dt>{ "Diet" }</dt><dd>{ or_not_specified(&r.diet) }</dd>
                        <dt>{ "Prep time" }</dt>
                        <dd>
                            if r.prep_time.trim().is_empty() { { "Not specified" } } else { { format_prep_time(&r.prep_time) } }
                        </dd>
                    </dl>
                    <h2>{ "Ingredients" }</h2>
                    <ul>
                        { for r.ingredients.iter().map(|i| html! { <li>{ i }</li> }) }
                    </ul>
                    <h2>{ "Instructions" }</h2>
                    <ol>
                        { for split_numbered_steps(&r.instructions).into_iter().map(|s| html! { <li>{ s }</li> }) }
                    </ol>
                    <div class="wizard-actions">
                        <Link<Route> to={Route::EditRecipe { id: props.id.clone() }} classes="btn">{ "Edit" }</Link<Route>>
                        <button class="btn btn-danger" onclick={on_delete} disabled={*deleting}>
                            { if *deleting { "Deleting..." } else { "Delete" } }
                        </button>
                    </div>
                </article>
            }
            <Link<Route> to={Route::UploadedList}>{ "Back to community recipes" }</Link<Route>>
        </div>
    }
}
