use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::{add_tags, suggest_tags, INGREDIENT_SUGGESTIONS};

const MAX_SUGGESTIONS: usize = 6;

#[derive(Properties, PartialEq)]
pub struct TagInputProps {
    pub tags: Vec<String>,
    pub on_change: Callback<Vec<String>>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(true)]
    pub show_suggestions: bool,
}

#[function_component(TagInput)]
pub fn tag_input(props: &TagInputProps) -> Html {
    let draft = use_state(String::new);

    let commit = {
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        let draft = draft.clone();
        move |raw: &str| {
            let mut next = tags.clone();
            if add_tags(&mut next, raw) {
                on_change.emit(next);
            }
            draft.set(String::new());
        }
    };

    let on_input = {
        let draft = draft.clone();
        let commit = commit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // Pasting "a, b, c" commits everything before the last comma.
            match value.rfind(',') {
                Some(pos) => {
                    commit(&value[..pos]);
                    draft.set(value[pos + 1..].trim_start().to_string());
                }
                None => draft.set(value),
            }
        })
    };

    let on_keydown = {
        let draft = draft.clone();
        let commit = commit.clone();
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                // Keep Enter from submitting the surrounding form.
                e.prevent_default();
                commit(&draft);
            }
            "Backspace" if draft.is_empty() && !tags.is_empty() => {
                let mut next = tags.clone();
                next.pop();
                on_change.emit(next);
            }
            _ => {}
        })
    };

    let on_blur = {
        let draft = draft.clone();
        let commit = commit.clone();
        Callback::from(move |_: FocusEvent| {
            if !draft.trim().is_empty() {
                commit(&draft);
            }
        })
    };

    let remove = |index: usize| {
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = tags.clone();
            if index < next.len() {
                next.remove(index);
            }
            on_change.emit(next);
        })
    };

    let suggestions = if props.show_suggestions {
        suggest_tags(&INGREDIENT_SUGGESTIONS, &draft, &props.tags, MAX_SUGGESTIONS)
    } else {
        Vec::new()
    };

    html! {
        <div class="tag-input">
            <div class="tag-list">
                { for props.tags.iter().enumerate().map(|(i, tag)| html! {
                    <span class="tag" key={tag.clone()}>
                        { tag }
                        <button type="button" class="tag-remove" onclick={remove(i)} title="Remove">{ "×" }</button>
                    </span>
                }) }
                <input
                    class="tag-entry"
                    type="text"
                    value={(*draft).clone()}
                    placeholder={props.placeholder.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={on_blur}
                />
            </div>
            if !suggestions.is_empty() {
                <ul class="suggestions">
                    { for suggestions.into_iter().map(|s| {
                        let commit = commit.clone();
                        // mousedown fires before the input's blur
                        let pick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            commit(s);
                        });
                        html! { <li onmousedown={pick}>{ s }</li> }
                    }) }
                </ul>
            }
        </div>
    }
}
