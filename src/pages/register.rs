use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Status, StatusBanner};
use crate::forms::validate_registration;
use crate::routes::Route;
use crate::services::auth::AuthService;
use crate::services::http::{ApiClient, ApiError};
use crate::services::session::use_settings;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let settings = use_settings();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(Status::default);
    let busy = use_state(|| false);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_submit = {
        let (name, email, password) = (name.clone(), email.clone(), password.clone());
        let (status, busy, settings) = (status.clone(), busy.clone(), settings.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            if let Err(msg) = validate_registration(&name, &email, &password) {
                status.set(Status::error(msg));
                return;
            }

            let api = ApiClient::new(&settings.api_base_url);
            let (who, address, secret) = (name.trim().to_string(), email.trim().to_string(), (*password).clone());
            let (name, email, password) = (name.clone(), email.clone(), password.clone());
            let (status, busy) = (status.clone(), busy.clone());
            busy.set(true);
            spawn_local(async move {
                match AuthService::register(&api, &who, &address, &secret).await {
                    Ok(()) => {
                        log::info!("registered {address}");
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        status.set(Status::success("Registration successful! Please login."));
                    }
                    Err(err) => {
                        log::warn!("registration failed: {err:#}");
                        let msg = ApiError::server_message(&err)
                            .map(str::to_string)
                            .unwrap_or_else(|| "Registration failed. Try again later.".to_string());
                        status.set(Status::error(msg));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_google = {
        let status = status.clone();
        Callback::from(move |_| {
            let api = ApiClient::new(&settings.api_base_url);
            let target = AuthService::google_signup_url(&api);
            let navigated = target.ok().and_then(|url| {
                web_sys::window().and_then(|w| w.location().set_href(&url).ok())
            });
            if navigated.is_none() {
                status.set(Status::error("Could not open Google sign up."));
            }
        })
    };

    html! {
        <div class="page narrow">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{ "Create account" }</h1>
                <label class="form-label">{ "Name" }</label>
                <input class="form-input" type="text" value={(*name).clone()} oninput={bind(&name)} autocomplete="name" />
                <label class="form-label">{ "Email" }</label>
                <input class="form-input" type="email" value={(*email).clone()} oninput={bind(&email)} autocomplete="email" />
                <label class="form-label">{ "Password" }</label>
                <input class="form-input" type="password" value={(*password).clone()} oninput={bind(&password)} autocomplete="new-password" />
                <small class="muted">{ "At least 8 characters with upper and lower case letters, a number and a symbol." }</small>
                <button class="btn btn-primary" type="submit" disabled={*busy}>
                    { if *busy { "Creating account..." } else { "Sign up" } }
                </button>
                <button class="btn" type="button" onclick={on_google}>{ "Sign up with Google" }</button>
                <StatusBanner status={(*status).clone()} />
                <div class="auth-links">
                    <Link<Route> to={Route::Login}>{ "Already have an account? Login" }</Link<Route>>
                </div>
            </form>
        </div>
    }
}
