use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::status::{Status, StatusBanner};
use crate::forms::ResetStep;
use crate::routes::Route;
use crate::services::auth::AuthService;
use crate::services::http::{ApiClient, ApiError};
use crate::services::session::use_settings;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let settings = use_settings();

    let step = use_state(ResetStep::default);
    let identifier = use_state(String::new);
    let otp = use_state(String::new);
    let new_password = use_state(String::new);
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
        let (step, identifier, otp, new_password) = (step.clone(), identifier.clone(), otp.clone(), new_password.clone());
        let (status, busy) = (status.clone(), busy.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let current = *step;
            if let Err(msg) = current.validate(&identifier, &otp, &new_password) {
                status.set(Status::error(msg));
                return;
            }

            let api = ApiClient::new(&settings.api_base_url);
            let id = identifier.trim().to_string();
            let code = otp.trim().to_string();
            let secret = (*new_password).clone();
            let (step, identifier, otp, new_password) = (step.clone(), identifier.clone(), otp.clone(), new_password.clone());
            let (status, busy) = (status.clone(), busy.clone());
            busy.set(true);
            spawn_local(async move {
                let (result, done_msg) = match current {
                    ResetStep::SendOtp => (AuthService::send_otp(&api, &id).await, "OTP sent. Check your inbox or phone."),
                    ResetStep::VerifyOtp => (AuthService::verify_otp(&api, &id, &code).await, "OTP verified. Choose a new password."),
                    ResetStep::ResetPassword => (
                        AuthService::reset_password(&api, &id, &secret).await,
                        "Password reset successful. You can now login.",
                    ),
                };
                match result {
                    Ok(()) => {
                        let next = current.advance();
                        if next == ResetStep::SendOtp {
                            identifier.set(String::new());
                            otp.set(String::new());
                            new_password.set(String::new());
                        }
                        step.set(next);
                        status.set(Status::success(done_msg));
                    }
                    Err(err) => {
                        log::warn!("password reset step {current:?} failed: {err:#}");
                        let msg = ApiError::server_message(&err)
                            .map(str::to_string)
                            .unwrap_or_else(|| "Something went wrong. Try again.".to_string());
                        status.set(Status::error(msg));
                    }
                }
                busy.set(false);
            });
        })
    };

    let (heading, action) = match *step {
        ResetStep::SendOtp => ("Forgot password", "Send OTP"),
        ResetStep::VerifyOtp => ("Verify OTP", "Verify"),
        ResetStep::ResetPassword => ("Set a new password", "Reset password"),
    };

    html! {
        <div class="page narrow">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{ heading }</h1>
                <label class="form-label">{ "Email or mobile number" }</label>
                <input
                    class="form-input"
                    type="text"
                    value={(*identifier).clone()}
                    oninput={bind(&identifier)}
                    disabled={*step != ResetStep::SendOtp}
                />
                if *step == ResetStep::VerifyOtp {
                    <label class="form-label">{ "OTP" }</label>
                    <input class="form-input" type="text" inputmode="numeric" value={(*otp).clone()} oninput={bind(&otp)} />
                }
                if *step == ResetStep::ResetPassword {
                    <label class="form-label">{ "New password" }</label>
                    <input class="form-input" type="password" value={(*new_password).clone()} oninput={bind(&new_password)} autocomplete="new-password" />
                }
                <button class="btn btn-primary" type="submit" disabled={*busy}>{ action }</button>
                <StatusBanner status={(*status).clone()} />
                <div class="auth-links">
                    <Link<Route> to={Route::Login}>{ "Back to login" }</Link<Route>>
                </div>
            </form>
        </div>
    }
}
