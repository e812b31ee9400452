use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::models::{AppSettings, Category};
use crate::services::http::ApiClient;
use crate::services::recipes::RecipeService;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsProps {
    pub settings: AppSettings,
    pub on_save: Callback<AppSettings>,
    pub on_close: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsProps) -> Html {
    let draft = use_state(|| props.settings.clone());
    let connection = use_state(String::new);
    let error_msg = use_state(String::new);

    {
        // Reset from the parent replaces the settings under us.
        let draft = draft.clone();
        use_effect_with(props.settings.clone(), move |settings| {
            draft.set(settings.clone());
        });
    }

    let on_url_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.api_base_url = input.value();
            draft.set(next);
        })
    };

    let on_page_size_input = {
        let draft = draft.clone();
        let err = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().trim().parse::<u32>() {
                Ok(size) if (1..=100).contains(&size) => {
                    let mut next = (*draft).clone();
                    next.page_size = size;
                    draft.set(next);
                    err.set(String::new());
                }
                _ => err.set("Page size must be between 1 and 100.".to_string()),
            }
        })
    };

    // Cheapest call that proves the base URL points at the recipe API.
    let on_check_connection = {
        let draft = draft.clone();
        let connection = connection.clone();
        let err = error_msg.clone();
        Callback::from(move |_| {
            let api = ApiClient::new(&draft.api_base_url);
            let connection = connection.clone();
            let err = err.clone();
            connection.set("Checking...".to_string());
            spawn_local(async move {
                match RecipeService::category(&api, Category::Cuisines).await {
                    Ok(items) => {
                        connection.set(format!("Connected ({} cuisines)", items.len()));
                        err.set(String::new());
                    }
                    Err(e) => {
                        connection.set(String::new());
                        err.set(e.to_string());
                    }
                }
            });
        })
    };

    let on_save_click = {
        let draft = draft.clone();
        let cb = props.on_save.clone();
        let close = props.on_close.clone();
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.api_base_url = next.api_base_url.trim().trim_end_matches('/').to_string();
            cb.emit(next);
            close.emit(());
        })
    };

    let on_reset_click = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let css = r#"
        .settings-backdrop { position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(255,255,255,0.6); backdrop-filter: blur(2px); z-index: 99; cursor: pointer; }
        .settings-panel { position: fixed; top: 70px; right: 20px; width: 340px; background: white; border: 1px solid var(--border-color); border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); padding: 20px; z-index: 100; display: flex; flex-direction: column; gap: 15px; }
        .settings-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid var(--border-color); padding-bottom: 10px; margin-bottom: 5px; }
        .settings-header h3 { margin: 0; font-size: 1.1rem; }
        .close-btn { background: none; border: none; font-size: 1.5rem; line-height: 1; cursor: pointer; color: var(--text-secondary); padding: 0 5px; }
        .close-btn:hover { color: var(--text-primary); }
        .fetch-group { display: flex; gap: 8px; }
        .actions { margin-top: 10px; display: flex; flex-direction: column; gap: 8px; }
    "#;

    html! {
        <>
            <style>{ css }</style>
            <div class="settings-backdrop" onclick={props.on_close.reform(|_| ())}></div>

            <div class="settings-panel">
                <div class="settings-header">
                    <h3>{ "Configuration" }</h3>
                    <button class="close-btn" onclick={props.on_close.reform(|_| ())} title="Close">{"×"}</button>
                </div>

                <div>
                    <label class="form-label">{ "Recipe API URL" }</label>
                    <div class="fetch-group">
                        <input class="form-input" type="text" value={draft.api_base_url.clone()} oninput={on_url_input} style="margin-bottom:0;" />
                        <button class="btn" onclick={on_check_connection} title="Test connection">{ "⟳" }</button>
                    </div>
                    if !connection.is_empty() { <small class="muted">{ &*connection }</small> }
                </div>

                <div>
                    <label class="form-label">{ "Results per page" }</label>
                    <input class="form-input" type="number" min="1" max="100" value={draft.page_size.to_string()} oninput={on_page_size_input} />
                </div>

                <div class="actions">
                    <button class="btn btn-primary" onclick={on_save_click}>{ "Save" }</button>
                    <hr style="width: 100%; border: 0; border-top: 1px solid var(--border-color);" />
                    <button class="btn" onclick={on_reset_click}>{ "Reset Settings" }</button>
                </div>
                if !error_msg.is_empty() { <div style="color: red; font-size: 0.8rem;">{ &*error_msg }</div> }
            </div>
        </>
    }
}
