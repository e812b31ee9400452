use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Loading, Status, StatusBanner};
use crate::forms::{answer, answer_mut, answers_complete, is_last_question, next_question, QUESTIONS};
use crate::models::{AiAnswers, AiRecipe};
use crate::routes::Route;
use crate::services::ai::AiService;
use crate::services::http::{ApiClient, ApiError};
use crate::services::session::{use_session, use_settings};
use crate::utils::format_prep_time;

#[derive(Properties, PartialEq)]
pub struct AiRecipeViewProps {
    pub recipe: AiRecipe,
}

/// Ingredient list and numbered steps of a generated recipe.
#[function_component(AiRecipeView)]
pub fn ai_recipe_view(props: &AiRecipeViewProps) -> Html {
    let r = &props.recipe;
    html! {
        <div class="ai-recipe">
            if !r.prep_time.is_empty() {
                <p class="muted">{ format!("Prep time: {}", format_prep_time(&r.prep_time)) }</p>
            }
            <h3>{ "Ingredients" }</h3>
            <ul>
                { for r.ingredients.iter().map(|i| html! { <li>{ i }</li> }) }
            </ul>
            <h3>{ "Steps" }</h3>
            <ol>
                { for r.steps.iter().map(|s| html! { <li>{ s }</li> }) }
            </ol>
        </div>
    }
}

#[function_component(AiRecipePage)]
pub fn ai_recipe_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let answers = use_state(AiAnswers::default);
    let step = use_state(|| 0usize);
    let recipe = use_state(|| None::<AiRecipe>);
    let saved = use_state(|| false);
    let status = use_state(Status::default);
    let loading = use_state(|| false);

    let on_answer = {
        let (answers, step) = (answers.clone(), step.clone());
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*answers).clone();
            if let Some(slot) = answer_mut(&mut next, *step) {
                *slot = input.value();
            }
            answers.set(next);
        })
    };

    let on_next = {
        let (answers, step, status) = (answers.clone(), step.clone(), status.clone());
        Callback::from(move |_: MouseEvent| match next_question(&answers, *step) {
            Some(n) => {
                step.set(n);
                status.set(Status::default());
            }
            None => status.set(Status::error("Please answer before moving on.")),
        })
    };

    let on_back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(step.saturating_sub(1)))
    };

    let on_generate = {
        let (answers, recipe, saved, status, loading) =
            (answers.clone(), recipe.clone(), saved.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        Callback::from(move |_: MouseEvent| {
            if !answers_complete(&answers) {
                status.set(Status::error("Please answer every question."));
                return;
            }
            let body = (*answers).clone();
            let (api, recipe, saved, status, loading) =
                (api.clone(), recipe.clone(), saved.clone(), status.clone(), loading.clone());
            loading.set(true);
            status.set(Status::default());
            spawn_local(async move {
                match AiService::generate(&api, &body).await {
                    Ok(made) => {
                        log::info!("generated recipe {}", made.name);
                        recipe.set(Some(made));
                        saved.set(false);
                    }
                    Err(err) => {
                        log::error!("recipe generation failed: {err:#}");
                        status.set(Status::error("Could not generate a recipe. Try again."));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_save = {
        let (recipe, saved, status) = (recipe.clone(), saved.clone(), status.clone());
        let api = ApiClient::from_context(&settings, &session);
        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*recipe).clone() else {
                return;
            };
            if *saved {
                return;
            }
            let (api, saved, status) = (api.clone(), saved.clone(), status.clone());
            spawn_local(async move {
                match AiService::save(&api, &current).await {
                    Ok(()) => {
                        saved.set(true);
                        status.set(Status::success("Recipe saved to your favourites."));
                    }
                    Err(err) => {
                        log::warn!("saving AI recipe failed: {err:#}");
                        let msg = match ApiError::of(&err) {
                            Some(ApiError::MissingToken) => "Please login to save recipes.",
                            Some(ApiError::Status { status: 401 | 403, .. }) => "Your session expired. Please login again.",
                            _ => "Could not save the recipe.",
                        };
                        status.set(Status::error(msg));
                    }
                }
            });
        })
    };

    let on_restart = {
        let (answers, step, recipe, saved, status) =
            (answers.clone(), step.clone(), recipe.clone(), saved.clone(), status.clone());
        Callback::from(move |_: MouseEvent| {
            answers.set(AiAnswers::default());
            step.set(0);
            recipe.set(None);
            saved.set(false);
            status.set(Status::default());
        })
    };

    let question = &QUESTIONS[(*step).min(QUESTIONS.len() - 1)];

    html! {
        <div class="page narrow">
            <div class="page-header">
                <h1>{ "AI recipe builder" }</h1>
                if session.is_logged_in() {
                    <Link<Route> to={Route::SavedRecipes}>{ "Saved recipes" }</Link<Route>>
                }
            </div>
            if let Some(made) = &*recipe {
                <div class="card">
                    <h2>{ &made.name }</h2>
                    <AiRecipeView recipe={made.clone()} />
                    <div class="wizard-actions">
                        <button class="btn" onclick={on_restart}>{ "Start over" }</button>
                        <button class="btn btn-primary" onclick={on_save} disabled={*saved}>
                            { if *saved { "Saved" } else { "Save Recipe" } }
                        </button>
                    </div>
                </div>
            } else {
                <div class="card">
                    <p class="muted">{ format!("Question {} of {}", *step + 1, QUESTIONS.len()) }</p>
                    <label class="form-label">{ question.label }</label>
                    <input
                        class="form-input"
                        type="text"
                        placeholder={question.placeholder}
                        value={answer(&answers, *step).to_string()}
                        oninput={on_answer}
                    />
                    <div class="wizard-actions">
                        if *step > 0 {
                            <button class="btn" onclick={on_back} disabled={*loading}>{ "Back" }</button>
                        }
                        if is_last_question(*step) {
                            <button class="btn btn-primary" onclick={on_generate} disabled={*loading}>{ "Generate Recipe" }</button>
                        } else {
                            <button class="btn btn-primary" onclick={on_next}>{ "Next" }</button>
                        }
                    </div>
                </div>
            }
            if *loading {
                <Loading text="Cooking up your recipe..." />
            }
            <StatusBanner status={(*status).clone()} />
        </div>
    }
}
