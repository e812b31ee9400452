use pulldown_cmark::{html, Event as MdEvent, Options, Parser};
use yew::{AttrValue, Html};
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(level);
}

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        MdEvent::SoftBreak => MdEvent::HardBreak,
        // Raw HTML from the model is shown as text, never injected.
        MdEvent::Html(raw) => MdEvent::Text(raw),
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    format!(r#"<div class="markdown-body">{}</div>"#, html_output)
}

pub fn render_markdown(text: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_to_html(text)))
}

/// Splits a comma-joined ingredient column into trimmed, non-empty items.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_ingredients(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Step list for user-uploaded instructions: one step per line, and an
/// inline `1. ` / `23. ` numbering also starts a new step.
pub fn split_numbered_steps(text: &str) -> Vec<String> {
    let mut steps = Vec::new();
    for line in text.split(['\n', '\r']) {
        let mut current = String::new();
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i].is_ascii_digit() {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let is_marker = i < chars.len()
                    && chars[i] == '.'
                    && chars.get(i + 1).is_some_and(|c| c.is_whitespace());
                if is_marker {
                    push_step(&mut steps, &current);
                    current.clear();
                    i += 1;
                    while i < chars.len() && chars[i].is_whitespace() {
                        i += 1;
                    }
                } else {
                    current.extend(&chars[start..i]);
                }
                continue;
            }
            current.push(chars[i]);
            i += 1;
        }
        push_step(&mut steps, &current);
    }
    steps
}

/// Step list for catalogue instructions, which arrive as one paragraph:
/// break after a period that is followed by whitespace and a capital letter.
pub fn split_sentence_steps(text: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if c != '.' {
            continue;
        }
        let mut gap = String::new();
        while let Some(&ws) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            gap.push(ws);
            chars.next();
        }
        match chars.peek() {
            Some(next) if !gap.is_empty() && next.is_uppercase() => {
                push_step(&mut steps, &current);
                current.clear();
            }
            _ => current.push_str(&gap),
        }
    }
    push_step(&mut steps, &current);
    steps
}

fn push_step(steps: &mut Vec<String>, raw: &str) {
    let step = raw.trim();
    if !step.is_empty() {
        steps.push(step.to_string());
    }
}

/// Numbers outgoing requests so a late response can tell it was superseded.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

pub fn format_match_percent(ratio: f64) -> String {
    let clamped = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    // half up, so 0.125 shows as 13%
    format!("{:.0}%", (clamped * 100.0).round())
}

pub fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not specified"
    } else {
        value
    }
}

/// Prep time for display; bare numbers get a "mins" suffix.
pub fn format_prep_time(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "Not specified".to_string();
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("{} mins", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Cached profile images are either inline data URLs or paths on the API host.
pub fn resolve_profile_image(api_base_url: &str, image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() || image == "null" || image == "undefined" {
        return None;
    }
    if image.starts_with("data:image") || image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    Some(format!(
        "{}/{}",
        api_base_url.trim_end_matches('/'),
        image.trim_start_matches('/')
    ))
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Case-insensitive substring filter over a category list.
pub fn filter_items(items: &[String], needle: &str) -> Vec<String> {
    let needle = needle.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Runs `f` once after `millis` on the browser event loop.
pub fn set_timeout(millis: i32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let scheduled = web_sys::window().and_then(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
            .ok()
    });
    if scheduled.is_none() {
        log::warn!("could not schedule timer");
    }
}
