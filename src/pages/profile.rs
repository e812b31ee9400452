use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FileReader, HtmlInputElement, HtmlTextAreaElement};

use crate::components::status::{Status, StatusBanner};
use crate::forms::{parse_age, validate_profile};
use crate::models::UserProfile;
use crate::services::session::{use_session, use_settings, SessionAction};
use crate::utils::resolve_profile_image;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Editable copy of the profile; age stays text until save.
#[derive(Clone, PartialEq, Debug, Default)]
struct ProfileDraft {
    profile: UserProfile,
    age: String,
}

impl ProfileDraft {
    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            profile: profile.clone(),
            age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    fn apply(&self, edit: DraftEdit) -> ProfileDraft {
        match edit {
            DraftEdit::Field(pick, value) => {
                let mut next = self.clone();
                *pick(&mut next.profile) = value;
                next
            }
            DraftEdit::Age(age) => ProfileDraft { age, ..self.clone() },
            DraftEdit::Reset(profile) => ProfileDraft::from_profile(&profile),
        }
    }
}

enum DraftEdit {
    Field(fn(&mut UserProfile) -> &mut String, String),
    Age(String),
    Reset(UserProfile),
}

impl Reducible for ProfileDraft {
    type Action = DraftEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn read_image(file: web_sys::File, draft: UseReducerHandle<ProfileDraft>, status: UseStateHandle<Status>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            log::error!("FileReader unavailable: {err:?}");
            status.set(Status::error("Could not read that image."));
            return;
        }
    };

    let source = reader.clone();
    let onload = Closure::<dyn Fn(JsValue)>::new(move |_event: JsValue| {
        match source.result().ok().and_then(|v| v.as_string()) {
            Some(data_url) => draft.dispatch(DraftEdit::Field(|p| &mut p.image, data_url)),
            None => status.set(Status::error("Could not read that image.")),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(err) = reader.read_as_data_url(&file) {
        log::error!("read_as_data_url failed: {err:?}");
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let editing = use_state(|| false);
    let draft = use_reducer(|| ProfileDraft::from_profile(&session.profile));
    let status = use_state(Status::default);

    let bind = |pick: fn(&mut UserProfile) -> &mut String| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Field(pick, input.value()));
        })
    };

    let on_age = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Age(input.value()));
        })
    };

    let on_bio = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Field(|p| &mut p.bio, input.value()));
        })
    };

    let on_file = {
        let (draft, status) = (draft.clone(), status.clone());
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                read_image(file, draft.clone(), status.clone());
            }
        })
    };

    let on_edit = {
        let (editing, draft, status, session) = (editing.clone(), draft.clone(), status.clone(), session.clone());
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(DraftEdit::Reset(session.profile.clone()));
            status.set(Status::default());
            editing.set(true);
        })
    };

    let on_cancel = {
        let (editing, status) = (editing.clone(), status.clone());
        Callback::from(move |_: MouseEvent| {
            status.set(Status::default());
            editing.set(false);
        })
    };

    let on_save = {
        let (editing, draft, status, session) = (editing.clone(), draft.clone(), status.clone(), session.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let age = match parse_age(&draft.age) {
                Ok(age) => age,
                Err(msg) => {
                    status.set(Status::error(msg));
                    return;
                }
            };
            let mut profile = draft.profile.clone();
            profile.age = age;
            profile.name = profile.name.trim().to_string();
            profile.email = profile.email.trim().to_string();
            if let Err(msg) = validate_profile(&profile) {
                status.set(Status::error(msg));
                return;
            }
            session.dispatch(SessionAction::ProfileUpdated(profile));
            status.set(Status::success("Profile updated."));
            editing.set(false);
        })
    };

    let shown = if *editing { &draft.profile } else { &session.profile };
    let avatar = resolve_profile_image(&settings.api_base_url, &shown.image);

    html! {
        <div class="page narrow">
            <h1>{ "My profile" }</h1>
            <div class="profile-head">
                if let Some(src) = avatar {
                    <img class="profile-avatar" src={src} alt="Profile" />
                } else {
                    <div class="profile-avatar profile-avatar-empty">{ session.display_name().chars().next().unwrap_or('U').to_string() }</div>
                }
            </div>
            <StatusBanner status={(*status).clone()} />
            if *editing {
                <form onsubmit={on_save}>
                    <label class="form-label">{ "Name" }</label>
                    <input class="form-input" type="text" value={draft.profile.name.clone()} oninput={bind(|p| &mut p.name)} />
                    <label class="form-label">{ "Email" }</label>
                    <input class="form-input" type="email" value={draft.profile.email.clone()} oninput={bind(|p| &mut p.email)} />
                    <label class="form-label">{ "Phone" }</label>
                    <input class="form-input" type="tel" value={draft.profile.phone.clone()} oninput={bind(|p| &mut p.phone)} />
                    <label class="form-label">{ "Age" }</label>
                    <input class="form-input" type="number" min="0" max="150" value={draft.age.clone()} oninput={on_age} />
                    <label class="form-label">{ "Bio" }</label>
                    <textarea class="form-textarea" rows="3" value={draft.profile.bio.clone()} oninput={on_bio} />
                    <label class="form-label">{ "Profile picture" }</label>
                    <input class="form-input" type="file" accept="image/*" onchange={on_file} />
                    <div class="wizard-actions">
                        <button class="btn" type="button" onclick={on_cancel}>{ "Cancel" }</button>
                        <button class="btn btn-primary" type="submit">{ "Save" }</button>
                    </div>
                </form>
            } else {
                <dl class="meta">
                    <dt>{ "Name" }</dt><dd>{ session.display_name() }</dd>
                    <dt>{ "Email" }</dt><dd>{ session.display_email() }</dd>
                    <dt>{ "Phone" }</dt><dd>{ blank_dash(&session.profile.phone) }</dd>
                    <dt>{ "Age" }</dt><dd>{ session.profile.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()) }</dd>
                    <dt>{ "Bio" }</dt><dd>{ blank_dash(&session.profile.bio) }</dd>
                </dl>
                <button class="btn btn-primary" onclick={on_edit}>{ "Edit profile" }</button>
            }
        </div>
    }
}

fn blank_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
