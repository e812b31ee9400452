use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Status, StatusBanner};
use crate::forms::validate_login;
use crate::routes::Route;
use crate::services::auth::AuthService;
use crate::services::http::{ApiClient, ApiError};
use crate::services::session::{use_session, use_settings, SessionAction};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let settings = use_settings();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(Status::default);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let (email, password, status, busy) = (email.clone(), password.clone(), status.clone(), busy.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let address = email.trim().to_string();
            if let Err(msg) = validate_login(&address, &password) {
                status.set(Status::error(msg));
                return;
            }

            let api = ApiClient::new(&settings.api_base_url);
            let secret = (*password).clone();
            let (session, navigator, status, busy) = (session.clone(), navigator.clone(), status.clone(), busy.clone());
            busy.set(true);
            status.set(Status::default());
            spawn_local(async move {
                match AuthService::login(&api, &address, &secret).await {
                    Ok(done) => {
                        log::info!("logged in as {address}");
                        session.dispatch(SessionAction::LoggedIn { token: done.token, profile: done.profile });
                        status.set(Status::success("Login successful!"));
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err:#}");
                        let msg = match ApiError::of(&err) {
                            Some(ApiError::Rejected(_)) => "Invalid credentials",
                            Some(ApiError::Status { status: 400 | 401 | 403 | 404, .. }) => "Invalid credentials",
                            _ => "Login failed. Try again later.",
                        };
                        status.set(Status::error(msg));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="page narrow">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{ "Login" }</h1>
                <label class="form-label">{ "Email" }</label>
                <input class="form-input" type="email" value={(*email).clone()} oninput={on_email} autocomplete="email" />
                <label class="form-label">{ "Password" }</label>
                <input class="form-input" type="password" value={(*password).clone()} oninput={on_password} autocomplete="current-password" />
                <button class="btn btn-primary" type="submit" disabled={*busy}>
                    { if *busy { "Logging in..." } else { "Login" } }
                </button>
                <StatusBanner status={(*status).clone()} />
                <div class="auth-links">
                    <Link<Route> to={Route::ForgotPassword}>{ "Forgot password?" }</Link<Route>>
                    <Link<Route> to={Route::Register}>{ "Create an account" }</Link<Route>>
                </div>
            </form>
        </div>
    }
}
