use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{navbar::Navbar, settings::SettingsModal};
use crate::models::AppSettings;
use crate::routes::{switch, Route};
use crate::services::session::{Session, SessionContext, SettingsContext, KEY_SETTINGS};
use crate::services::storage::LocalStorage;

const GLOBAL_STYLES: &str = r#"
    :root {
        --bg-app: #fffaf3;
        --bg-nav: #9a3412;
        --bg-card: #ffffff;
        --border-color: #f1e4d3;
        --text-primary: #3b2f2a;
        --text-secondary: #7c6a5e;
        --accent-color: #ea580c;
        --accent-hover: #c2410c;
        --danger-color: #ef4444;
        --success-color: #15803d;
    }

    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: var(--text-primary); background: var(--bg-app); }

    .page { max-width: 1100px; margin: 0 auto; padding: 24px; }
    .page.narrow { max-width: 640px; }
    .page-header { display: flex; justify-content: space-between; align-items: center; }
    .muted { color: var(--text-secondary); }
    .lead { font-size: 1.1rem; color: var(--text-secondary); }
    .pre { white-space: pre-wrap; }

    .btn { cursor: pointer; border: 1px solid var(--border-color); background: white; padding: 8px 12px; border-radius: 6px; font-size: 0.9rem; transition: all 0.2s; color: var(--text-primary); text-decoration: none; display: inline-block; }
    .btn:hover { background: #fff3e6; }
    .btn:disabled { opacity: 0.6; cursor: default; }
    .btn-primary { background: var(--accent-color); color: white; border-color: transparent; }
    .btn-primary:hover { background: var(--accent-hover); }
    .btn-danger { color: var(--danger-color); border-color: var(--danger-color); }
    .btn-danger:hover { background: #fef2f2; }
    .btn-icon { border: none; background: transparent; font-size: 1.2rem; padding: 5px; color: #fde68a; cursor: pointer; }
    .btn-icon:hover { color: white; }

    .form-label { display: block; font-size: 0.85rem; font-weight: 600; margin-bottom: 5px; color: var(--text-secondary); }
    .form-input, .form-select, .form-textarea { width: 100%; padding: 8px; border: 1px solid var(--border-color); border-radius: 6px; font-family: inherit; margin-bottom: 10px; background: white; }
    .form-input:focus, .form-textarea:focus { outline: 2px solid var(--accent-color); border-color: transparent; }

    .status { padding: 8px 12px; border-radius: 6px; }
    .status-info { background: #eff6ff; color: #1d4ed8; }
    .status-success { background: #f0fdf4; color: var(--success-color); }
    .status-error { background: #fef2f2; color: var(--danger-color); }
    .loading { display: flex; gap: 10px; align-items: center; padding: 16px 0; color: var(--text-secondary); }
    .spinner { width: 18px; height: 18px; border: 3px solid var(--border-color); border-top-color: var(--accent-color); border-radius: 50%; animation: spin 0.8s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }

    .hero { text-align: center; padding: 60px 0; }
    .hero-actions { display: flex; gap: 12px; justify-content: center; }
    .auth-form { display: flex; flex-direction: column; gap: 8px; }
    .auth-links { display: flex; justify-content: space-between; font-size: 0.9rem; }

    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(230px, 1fr)); gap: 18px; margin: 18px 0; }
    .card { background: var(--bg-card); border: 1px solid var(--border-color); border-radius: 10px; overflow: hidden; padding: 0; color: inherit; text-decoration: none; }
    .feature-card { padding: 16px; }
    .feature-card:hover { border-color: var(--accent-color); }
    .card-image { width: 100%; height: 150px; object-fit: cover; display: block; }
    .card-image-empty { display: flex; align-items: center; justify-content: center; background: #fdf2e6; color: var(--text-secondary); }
    .card-body { padding: 12px; display: flex; flex-direction: column; gap: 6px; }
    .card-title { margin: 0; font-size: 1.05rem; }
    .card-link { color: var(--accent-color); font-weight: 600; text-decoration: none; }
    .match { font-weight: 600; color: var(--success-color); margin: 0; }

    .tags { display: flex; flex-wrap: wrap; gap: 4px; }
    .tag { display: inline-flex; align-items: center; gap: 4px; background: #ffedd5; color: #9a3412; border-radius: 999px; padding: 2px 10px; font-size: 0.8rem; }
    .tag-static { background: #f5f5f4; color: var(--text-secondary); }
    .tag-input { position: relative; margin-bottom: 10px; }
    .tag-list { display: flex; flex-wrap: wrap; gap: 6px; border: 1px solid var(--border-color); border-radius: 6px; padding: 6px; background: white; }
    .tag-entry { flex: 1; min-width: 120px; border: none; outline: none; font-family: inherit; }
    .tag-remove { border: none; background: none; cursor: pointer; color: inherit; padding: 0; }
    .suggestions { list-style: none; margin: 4px 0 0; padding: 0; border: 1px solid var(--border-color); border-radius: 6px; background: white; }
    .suggestions li { padding: 6px 10px; cursor: pointer; }
    .suggestions li:hover { background: #fff3e6; }

    .search-bar { display: flex; gap: 8px; }
    .search-bar .form-input { margin-bottom: 0; }
    .filters { display: flex; gap: 8px; margin: 10px 0; }
    .category-buttons, .chip-list { display: flex; flex-wrap: wrap; gap: 8px; margin: 12px 0; }
    .chip { border: 1px solid var(--border-color); background: white; border-radius: 999px; padding: 4px 12px; cursor: pointer; }
    .chip-active { background: var(--accent-color); color: white; }
    .recipe-rows li { padding: 4px 0; }
    .pagination { display: flex; gap: 12px; align-items: center; justify-content: center; margin: 16px 0; }

    .recipe-image { width: 100%; max-height: 360px; object-fit: cover; border-radius: 10px; }
    .meta { display: grid; grid-template-columns: max-content 1fr; gap: 6px 16px; }
    .meta dt { font-weight: 600; color: var(--text-secondary); }
    .meta dd { margin: 0; }

    .stepper { display: flex; gap: 12px; list-style: none; padding: 0; }
    .stepper li { color: var(--text-secondary); }
    .stepper li.active { color: var(--accent-color); font-weight: 700; }
    .stepper li.done { color: var(--success-color); }
    .wizard-body { display: flex; flex-direction: column; }
    .wizard-actions { display: flex; gap: 8px; justify-content: flex-end; margin: 12px 0; }

    .saved-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 10px; }
    .saved-list .card, .ai-recipe { padding: 12px; }
    .saved-row { display: flex; justify-content: space-between; align-items: center; cursor: pointer; }

    .profile-head { display: flex; justify-content: center; margin-bottom: 16px; }
    .profile-avatar { width: 110px; height: 110px; border-radius: 50%; object-fit: cover; }
    .profile-avatar-empty { display: flex; align-items: center; justify-content: center; background: #ffedd5; font-size: 2.5rem; color: #9a3412; }

    .markdown-body { line-height: 1.6; font-size: 1rem; padding: 16px; }
    .markdown-body pre { background: #2d2d2d; color: #fff; padding: 15px; border-radius: 6px; overflow-x: auto; }
    .markdown-body code { background: #f4f4f4; padding: 2px 4px; border-radius: 4px; font-family: monospace; font-size: 0.9em; }
    .markdown-body pre code { background: transparent; color: inherit; }
    .markdown-body p { margin-top: 0; margin-bottom: 1em; }
"#;

#[function_component(App)]
pub fn app() -> Html {
    let session: SessionContext = use_reducer(Session::load);
    let settings: SettingsContext =
        use_state(|| LocalStorage::get::<AppSettings>(KEY_SETTINGS).unwrap_or_default());
    let show_settings = use_state(|| false);

    {
        let s = settings.clone();
        use_effect_with(s, |s| LocalStorage::set(KEY_SETTINGS, &**s));
    }

    let on_open_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(true))
    };
    let on_close_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(false))
    };
    let on_save_settings = {
        let settings = settings.clone();
        Callback::from(move |next: AppSettings| {
            log::info!("api base url set to {}", next.api_base_url);
            settings.set(next);
        })
    };
    let on_reset_settings = {
        let settings = settings.clone();
        Callback::from(move |_| settings.set(AppSettings::default()))
    };

    let logged_in = session.is_logged_in();
    let render = move |route: Route| {
        if route.requires_login() && !logged_in {
            html! { <Redirect<Route> to={Route::Login} /> }
        } else {
            switch(route)
        }
    };

    html! {
        <ContextProvider<SessionContext> context={session.clone()}>
            <ContextProvider<SettingsContext> context={settings.clone()}>
                <style>{ GLOBAL_STYLES }</style>
                <BrowserRouter>
                    <Navbar on_open_settings={on_open_settings} />
                    if *show_settings {
                        <SettingsModal
                            settings={(*settings).clone()}
                            on_save={on_save_settings}
                            on_close={on_close_settings}
                            on_reset={on_reset_settings}
                        />
                    }
                    <main>
                        <Switch<Route> render={render} />
                    </main>
                </BrowserRouter>
            </ContextProvider<SettingsContext>>
        </ContextProvider<SessionContext>>
    }
}
