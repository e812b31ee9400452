use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::routes::Route;
use crate::services::auth::AuthService;
use crate::services::http::ApiClient;
use crate::services::session::{use_session, use_settings, SessionAction};
use crate::utils::alert;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let session = use_session();
    let settings = use_settings();
    let navigator = use_navigator();

    // A cached token is only trusted after the server confirms it.
    {
        let session = session.clone();
        let token = session.token.clone();
        use_effect_with(token, move |token| {
            if token.is_some() {
                let api = ApiClient::from_context(&settings, &session);
                spawn_local(async move {
                    match AuthService::check_auth(&api).await {
                        Ok(true) => {
                            if let Some(nav) = navigator {
                                nav.push(&Route::Home);
                            }
                        }
                        Ok(false) => {
                            log::info!("cached token no longer authorized");
                            session.dispatch(SessionAction::TokenRejected);
                        }
                        Err(err) => {
                            log::warn!("check-auth failed: {err:#}");
                            alert("Session expired, please login again");
                            session.dispatch(SessionAction::TokenRejected);
                        }
                    }
                });
            }
        });
    }

    html! {
        <div class="page landing">
            <section class="hero">
                <h1>{ "Find My Recipe" }</h1>
                <p class="lead">{ "Search thousands of recipes by name or by what's already in your kitchen, share your own, and let AI cook up something new." }</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Login" }</Link<Route>>
                    <Link<Route> to={Route::Register} classes="btn">{ "Create account" }</Link<Route>>
                    <Link<Route> to={Route::Home} classes="btn">{ "Browse as guest" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}
