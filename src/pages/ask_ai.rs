use yew::prelude::*;
use web_sys::HtmlTextAreaElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Loading, Status, StatusBanner};
use crate::services::ai::AiService;
use crate::services::http::ApiClient;
use crate::services::session::{use_session, use_settings};
use crate::utils::render_markdown;

#[function_component(AskAiPage)]
pub fn ask_ai_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let prompt = use_state(String::new);
    let answer = use_state(|| None::<String>);
    let status = use_state(Status::default);
    let loading = use_state(|| false);

    let on_input = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            prompt.set(input.value());
        })
    };

    let on_ask = {
        let (prompt, answer, status, loading) = (prompt.clone(), answer.clone(), status.clone(), loading.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = prompt.trim().to_string();
            if text.is_empty() {
                status.set(Status::error("Tell the AI what you'd like to cook."));
                return;
            }
            if *loading {
                return;
            }
            let api = ApiClient::from_context(&settings, &session);
            let (answer, status, loading) = (answer.clone(), status.clone(), loading.clone());
            loading.set(true);
            status.set(Status::default());
            spawn_local(async move {
                match AiService::ask(&api, &text).await {
                    Ok(reply) => answer.set(Some(reply)),
                    Err(err) => {
                        log::error!("ask failed: {err:#}");
                        answer.set(None);
                        status.set(Status::error("The AI could not answer right now. Try again."));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page narrow">
            <h1>{ "Ask AI" }</h1>
            <form onsubmit={on_ask}>
                <textarea
                    class="form-textarea"
                    rows="4"
                    placeholder="Something warm and vegetarian with spinach, under 30 minutes..."
                    value={(*prompt).clone()}
                    oninput={on_input}
                />
                <button class="btn btn-primary" type="submit" disabled={*loading}>{ "Ask" }</button>
            </form>
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading text="Thinking..." />
            }
            if let Some(text) = &*answer {
                <div class="card markdown-body">{ render_markdown(text) }</div>
            }
        </div>
    }
}
