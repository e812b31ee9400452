use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::session::{use_session, use_settings, SessionAction};
use crate::utils::resolve_profile_image;

const DEFAULT_AVATAR: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><circle cx='12' cy='8' r='4' fill='%23f97316'/><path d='M4 21c0-4 4-6 8-6s8 2 8 6' fill='%23fdba74'/></svg>";

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_open_settings: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_session();
    let settings = use_settings();
    let navigator = use_navigator();
    let show_dropdown = use_state(|| false);

    let avatar = resolve_profile_image(&settings.api_base_url, &session.profile.image)
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    let css = r#"
        .navbar { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: var(--bg-nav); color: white; position: sticky; top: 0; z-index: 50; }
        .navbar .brand { font-size: 1.3rem; font-weight: 700; color: white; text-decoration: none; }
        .navbar nav { display: flex; gap: 18px; align-items: center; }
        .navbar nav a { color: #fde68a; text-decoration: none; font-size: 0.95rem; }
        .navbar nav a:hover { color: white; }
        .avatar { width: 36px; height: 36px; border-radius: 50%; object-fit: cover; cursor: pointer; border: 2px solid #fde68a; background: white; }
        .profile-menu { position: relative; }
        .profile-menu > .avatar { position: relative; z-index: 2; }
        .menu-backdrop { position: fixed; inset: 0; z-index: 1; }
        .dropdown { position: absolute; z-index: 2; right: 0; top: 46px; width: 240px; background: white; color: var(--text-primary); border: 1px solid var(--border-color); border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1); padding: 12px; display: flex; flex-direction: column; gap: 8px; }
        .dropdown .who { display: flex; gap: 10px; align-items: center; border-bottom: 1px solid var(--border-color); padding-bottom: 8px; }
        .dropdown .who small { color: var(--text-secondary); display: block; }
        .dropdown button { text-align: left; }
    "#;

    let toggle = {
        let show = show_dropdown.clone();
        Callback::from(move |_| show.set(!*show))
    };

    // Any mousedown outside the menu lands on the backdrop.
    let dismiss = {
        let show = show_dropdown.clone();
        Callback::from(move |_: MouseEvent| show.set(false))
    };

    let on_profile = {
        let show = show_dropdown.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            show.set(false);
            if let Some(nav) = &navigator {
                nav.push(&Route::Profile);
            }
        })
    };

    let on_settings = {
        let show = show_dropdown.clone();
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| {
            show.set(false);
            cb.emit(());
        })
    };

    let on_logout = {
        let show = show_dropdown.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            show.set(false);
            session.dispatch(SessionAction::LoggedOut);
            log::info!("logged out");
            if let Some(nav) = &navigator {
                nav.push(&Route::Landing);
            }
        })
    };

    html! {
        <>
            <style>{ css }</style>
            <header class="navbar">
                <Link<Route> to={Route::Home} classes="brand">{ "FindMyRecipe" }</Link<Route>>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Browse}>{ "Browse" }</Link<Route>>
                    <Link<Route> to={Route::AiRecipe}>{ "AI Recipe" }</Link<Route>>
                    <Link<Route> to={Route::About}>{ "About Us" }</Link<Route>>
                    if session.is_logged_in() {
                        <div class="profile-menu">
                            <img class="avatar" src={avatar.clone()} alt="Profile" onclick={toggle} />
                            if *show_dropdown {
                                <div class="menu-backdrop" onmousedown={dismiss}></div>
                                <div class="dropdown">
                                    <div class="who">
                                        <img class="avatar" src={avatar} alt="Profile" />
                                        <div>
                                            <strong>{ session.display_name() }</strong>
                                            <small>{ session.display_email() }</small>
                                        </div>
                                    </div>
                                    <button class="btn" onclick={on_profile}>{ "View Profile" }</button>
                                    <button class="btn" onclick={on_settings}>{ "Settings" }</button>
                                    <button class="btn btn-danger" onclick={on_logout}>{ "Logout" }</button>
                                </div>
                            }
                        </div>
                    } else {
                        <button class="btn-icon" onclick={props.on_open_settings.reform(|_| ())} title="Settings">{ "⚙" }</button>
                        <Link<Route> to={Route::Login} classes="btn btn-primary">{ "Login" }</Link<Route>>
                    }
                </nav>
            </header>
        </>
    }
}
