use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Loading, Status, StatusBanner};
use crate::components::tag_input::TagInput;
use crate::forms::{UploadForm, UploadStep};
use crate::pages::upload::{bind_ingredients, bind_instructions, bind_text};
use crate::routes::Route;
use crate::services::http::{ApiClient, ApiError};
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::set_timeout;

const REDIRECT_DELAY_MS: i32 = 1500;

#[derive(Properties, PartialEq)]
pub struct EditRecipeProps {
    pub id: String,
}

#[function_component(EditRecipePage)]
pub fn edit_recipe_page(props: &EditRecipeProps) -> Html {
    let session = use_session();
    let settings = use_settings();
    let navigator = use_navigator();

    let form = use_state(UploadForm::default);
    let loaded = use_state(|| false);
    let status = use_state(Status::default);
    let saving = use_state(|| false);

    {
        let (form, loaded, status) = (form.clone(), loaded.clone(), status.clone());
        let api = ApiClient::from_context(&settings, &session);
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match RecipeService::get_uploaded(&api, &id).await {
                    Ok(recipe) => {
                        form.set(UploadForm::from(&recipe));
                        loaded.set(true);
                    }
                    Err(err) => {
                        log::error!("loading {id} for edit failed: {err:#}");
                        status.set(Status::error(network_or(&err, "Could not load this recipe.")));
                    }
                }
            });
        });
    }

    let on_save = {
        let id = props.id.clone();
        let (form, status, saving) = (form.clone(), status.clone(), saving.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            if let Err(msg) = form.validate_step(UploadStep::Review) {
                status.set(Status::error(msg));
                return;
            }
            let api = ApiClient::from_context(&settings, &session);
            let draft = form.to_draft();
            let (id, status, saving, navigator) = (id.clone(), status.clone(), saving.clone(), navigator.clone());
            saving.set(true);
            spawn_local(async move {
                match RecipeService::update(&api, &id, &draft).await {
                    Ok(()) => {
                        log::info!("updated uploaded recipe {id}");
                        status.set(Status::success("Recipe updated!"));
                        set_timeout(REDIRECT_DELAY_MS, move || {
                            if let Some(nav) = navigator {
                                nav.push(&Route::UploadedDetails { id });
                            }
                        });
                    }
                    Err(err) => {
                        log::error!("updating {id} failed: {err:#}");
                        status.set(Status::error(network_or(&err, "Failed to update recipe.")));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="page narrow">
            <h1>{ "Edit recipe" }</h1>
            <StatusBanner status={(*status).clone()} />
            if !*loaded {
                <Loading />
            } else {
                <form onsubmit={on_save}>
                    <label class="form-label">{ "Title *" }</label>
                    <input class="form-input" type="text" value={form.title.clone()} oninput={bind_text(&form, |f| &mut f.title)} />
                    <label class="form-label">{ "Cuisine" }</label>
                    <input class="form-input" type="text" value={form.cuisine.clone()} oninput={bind_text(&form, |f| &mut f.cuisine)} />
                    <label class="form-label">{ "Course" }</label>
                    <input class="form-input" type="text" value={form.course.clone()} oninput={bind_text(&form, |f| &mut f.course)} />
                    <label class="form-label">{ "Diet" }</label>
                    <input class="form-input" type="text" value={form.diet.clone()} oninput={bind_text(&form, |f| &mut f.diet)} />
                    <label class="form-label">{ "Prep time" }</label>
                    <input class="form-input" type="text" value={form.prep_time.clone()} oninput={bind_text(&form, |f| &mut f.prep_time)} />
                    <label class="form-label">{ "Ingredients *" }</label>
                    <TagInput tags={form.ingredients.clone()} on_change={bind_ingredients(&form)} show_suggestions={false} />
                    <label class="form-label">{ "Instructions *" }</label>
                    <textarea class="form-textarea" rows="8" value={form.instructions.clone()} oninput={bind_instructions(&form)} />
                    <label class="form-label">{ "Image URL" }</label>
                    <input class="form-input" type="url" value={form.image_url.clone()} oninput={bind_text(&form, |f| &mut f.image_url)} />
                    <div class="wizard-actions">
                        <Link<Route> to={Route::UploadedDetails { id: props.id.clone() }} classes="btn">{ "Cancel" }</Link<Route>>
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save changes" } }
                        </button>
                    </div>
                </form>
            }
        </div>
    }
}

fn network_or(err: &anyhow::Error, fallback: &str) -> String {
    if ApiError::is_network(err) {
        "Network error: check that the API is reachable.".to_string()
    } else {
        ApiError::server_message(err).unwrap_or(fallback).to_string()
    }
}
