use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub total: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub disabled: bool,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let page = props.page;
    let prev = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(page.saturating_sub(1).max(1)))
    };
    let next = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <button class="btn" onclick={prev} disabled={props.disabled || !props.has_prev}>{ "Previous" }</button>
            <span class="muted">{ format!("Page {} of {} ({} recipes)", page, props.total_pages, props.total) }</span>
            <button class="btn" onclick={next} disabled={props.disabled || !props.has_next}>{ "Next" }</button>
        </div>
    }
}
