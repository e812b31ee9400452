use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Status, StatusBanner};
use crate::components::tag_input::TagInput;
use crate::forms::{UploadForm, UploadStep};
use crate::routes::Route;
use crate::services::http::{ApiClient, ApiError};
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::{format_prep_time, or_not_specified};

/// Callback that writes an `<input>`'s value into one field of the form.
pub(crate) fn bind_text(
    form: &UseStateHandle<UploadForm>,
    pick: fn(&mut UploadForm) -> &mut String,
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        *pick(&mut next) = input.value();
        form.set(next);
    })
}

pub(crate) fn bind_instructions(form: &UseStateHandle<UploadForm>) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        next.instructions = input.value();
        form.set(next);
    })
}

pub(crate) fn bind_ingredients(form: &UseStateHandle<UploadForm>) -> Callback<Vec<String>> {
    let form = form.clone();
    Callback::from(move |tags: Vec<String>| {
        let mut next = (*form).clone();
        next.ingredients = tags;
        form.set(next);
    })
}

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let form = use_state(UploadForm::default);
    let step = use_state(UploadStep::default);
    let status = use_state(Status::default);
    let busy = use_state(|| false);

    let on_next = {
        let (form, step, status) = (form.clone(), step.clone(), status.clone());
        Callback::from(move |_: MouseEvent| match form.validate_step(*step) {
            Ok(()) => {
                if let Some(next) = step.next() {
                    step.set(next);
                }
                status.set(Status::default());
            }
            Err(msg) => status.set(Status::error(msg)),
        })
    };

    let on_back = {
        let (step, status) = (step.clone(), status.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = step.prev() {
                step.set(prev);
            }
            status.set(Status::default());
        })
    };

    let on_submit = {
        let (form, step, status, busy) = (form.clone(), step.clone(), status.clone(), busy.clone());
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            if let Err(msg) = form.validate_step(UploadStep::Review) {
                status.set(Status::error(msg));
                return;
            }
            let api = ApiClient::from_context(&settings, &session);
            let draft = form.to_draft();
            let (form, step, status, busy) = (form.clone(), step.clone(), status.clone(), busy.clone());
            busy.set(true);
            spawn_local(async move {
                match RecipeService::upload(&api, &draft).await {
                    Ok(()) => {
                        log::info!("uploaded recipe {}", draft.title);
                        form.set(UploadForm::default());
                        step.set(UploadStep::default());
                        status.set(Status::success("Recipe uploaded successfully!"));
                    }
                    Err(err) => {
                        log::error!("upload failed: {err:#}");
                        let msg = if ApiError::is_network(&err) {
                            "Network error: check that the API is reachable.".to_string()
                        } else {
                            ApiError::server_message(&err)
                                .map(str::to_string)
                                .unwrap_or_else(|| "Failed to upload recipe.".to_string())
                        };
                        status.set(Status::error(msg));
                    }
                }
                busy.set(false);
            });
        })
    };

    let body = match *step {
        UploadStep::Basics => html! {
            <>
                <label class="form-label">{ "Title *" }</label>
                <input class="form-input" type="text" value={form.title.clone()} oninput={bind_text(&form, |f| &mut f.title)} />
                <label class="form-label">{ "Cuisine" }</label>
                <input class="form-input" type="text" value={form.cuisine.clone()} oninput={bind_text(&form, |f| &mut f.cuisine)} />
                <label class="form-label">{ "Course" }</label>
                <input class="form-input" type="text" value={form.course.clone()} oninput={bind_text(&form, |f| &mut f.course)} />
                <label class="form-label">{ "Diet" }</label>
                <input class="form-input" type="text" value={form.diet.clone()} oninput={bind_text(&form, |f| &mut f.diet)} />
                <label class="form-label">{ "Prep time (minutes)" }</label>
                <input class="form-input" type="text" placeholder="30" value={form.prep_time.clone()} oninput={bind_text(&form, |f| &mut f.prep_time)} />
            </>
        },
        UploadStep::Ingredients => html! {
            <>
                <label class="form-label">{ "Ingredients *" }</label>
                <TagInput tags={form.ingredients.clone()} on_change={bind_ingredients(&form)} placeholder="Type an ingredient and press Enter" />
            </>
        },
        UploadStep::Instructions => html! {
            <>
                <label class="form-label">{ "Instructions *" }</label>
                <textarea class="form-textarea" rows="8" value={form.instructions.clone()} oninput={bind_instructions(&form)} />
                <label class="form-label">{ "Image URL" }</label>
                <input class="form-input" type="url" placeholder="https://..." value={form.image_url.clone()} oninput={bind_text(&form, |f| &mut f.image_url)} />
            </>
        },
        UploadStep::Review => html! {
            <dl class="meta">
                <dt>{ "Title" }</dt><dd>{ &form.title }</dd>
                <dt>{ "Cuisine" }</dt><dd>{ or_not_specified(&form.cuisine) }</dd>
                <dt>{ "Course" }</dt><dd>{ or_not_specified(&form.course) }</dd>
                <dt>{ "Diet" }</dt><dd>{ or_not_specified(&form.diet) }</dd>
                <dt>{ "Prep time" }</dt><dd>{ format_prep_time(&form.prep_time) }</dd>
                <dt>{ "Ingredients" }</dt><dd>{ form.ingredients.join(", ") }</dd>
                <dt>{ "Instructions" }</dt><dd class="pre">{ &form.instructions }</dd>
                <dt>{ "Image" }</dt><dd>{ or_not_specified(&form.image_url) }</dd>
            </dl>
        },
    };

    html! {
        <div class="page narrow">
            <h1>{ "Upload a recipe" }</h1>
            <ol class="stepper">
                { for UploadStep::ALL.into_iter().map(|s| html! {
                    <li class={classes!((s == *step).then_some("active"), (s.index() < step.index()).then_some("done"))}>
                        { s.title() }
                    </li>
                }) }
            </ol>
            <div class="wizard-body">{ body }</div>
            <StatusBanner status={(*status).clone()} />
            <div class="wizard-actions">
                if step.prev().is_some() {
                    <button class="btn" onclick={on_back} disabled={*busy}>{ "Back" }</button>
                }
                if *step == UploadStep::Review {
                    <button class="btn btn-primary" onclick={on_submit} disabled={*busy}>
                        { if *busy { "Uploading..." } else { "Submit recipe" } }
                    </button>
                } else {
                    <button class="btn btn-primary" onclick={on_next}>{ "Next" }</button>
                }
            </div>
            <Link<Route> to={Route::UploadedList}>{ "See community recipes" }</Link<Route>>
        </div>
    }
}
