use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A user-facing line of feedback. `Status::None` renders nothing.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Status {
    #[default]
    None,
    Message(StatusKind, String),
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Status::Message(StatusKind::Info, text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Status::Message(StatusKind::Success, text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Status::Message(StatusKind::Error, text.into())
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Status,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Status::None => html! {},
        Status::Message(kind, text) => {
            let class = match kind {
                StatusKind::Info => "status status-info",
                StatusKind::Success => "status status-success",
                StatusKind::Error => "status status-error",
            };
            html! { <p class={class} role="status">{ text }</p> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub text: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{ &props.text }</span>
        </div>
    }
}
