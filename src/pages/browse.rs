use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::pagination::Pagination;
use crate::components::status::{Loading, Status, StatusBanner};
use crate::models::{Category, Page, RecipeSummary, SearchFilters};
use crate::routes::Route;
use crate::services::http::ApiClient;
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};
use crate::utils::{capitalize, filter_items, format_prep_time, RequestSeq};

#[function_component(BrowsePage)]
pub fn browse_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let category = use_state(|| None::<Category>);
    let items = use_state(Vec::<String>::new);
    let needle = use_state(String::new);
    let selected = use_state(|| None::<String>);
    let recipes = use_state(|| None::<Page<RecipeSummary>>);
    let status = use_state(Status::default);
    let loading = use_state(|| false);
    // A category pick and a recipe page load each supersede the previous one.
    let list_seq = use_mut_ref(RequestSeq::default);
    let page_seq = use_mut_ref(RequestSeq::default);

    let api = ApiClient::from_context(&settings, &session);

    let pick_category = |picked: Category| {
        let (category, items, needle, selected, recipes, status, loading) = (
            category.clone(),
            items.clone(),
            needle.clone(),
            selected.clone(),
            recipes.clone(),
            status.clone(),
            loading.clone(),
        );
        let (api, list_seq, page_seq) = (api.clone(), list_seq.clone(), page_seq.clone());
        Callback::from(move |_: MouseEvent| {
            let ticket = list_seq.borrow_mut().next();
            // drop any recipe page still loading for the old category
            page_seq.borrow_mut().next();
            category.set(Some(picked));
            items.set(Vec::new());
            needle.set(String::new());
            selected.set(None);
            recipes.set(None);
            status.set(Status::default());
            loading.set(true);
            let (items, status, loading, api) = (items.clone(), status.clone(), loading.clone(), api.clone());
            let list_seq = list_seq.clone();
            spawn_local(async move {
                let result = RecipeService::category(&api, picked).await;
                if !list_seq.borrow().is_current(ticket) {
                    log::debug!("dropping stale {} list", picked.key());
                    return;
                }
                match result {
                    Ok(list) => items.set(list),
                    Err(err) => {
                        log::error!("loading {} failed: {err:#}", picked.key());
                        items.set(Vec::new());
                        status.set(Status::error(format!("Could not load {}.", picked.key())));
                    }
                }
                loading.set(false);
            });
        })
    };

    let run = {
        let (recipes, status, loading) = (recipes.clone(), status.clone(), loading.clone());
        let (api, page_seq) = (api.clone(), page_seq.clone());
        let limit = settings.page_size;
        Rc::new(move |filters: SearchFilters, page: u32| {
            let (recipes, status, loading, api) = (recipes.clone(), status.clone(), loading.clone(), api.clone());
            let page_seq = page_seq.clone();
            let ticket = page_seq.borrow_mut().next();
            loading.set(true);
            spawn_local(async move {
                let result = RecipeService::browse(&api, &filters, page, limit).await;
                if !page_seq.borrow().is_current(ticket) {
                    return;
                }
                match result {
                    Ok(found) => {
                        if found.items.is_empty() {
                            status.set(Status::info("No recipes in this category yet."));
                        } else {
                            status.set(Status::default());
                        }
                        recipes.set(Some(found));
                    }
                    Err(err) => {
                        log::error!("browse failed: {err:#}");
                        status.set(Status::error("Could not load recipes."));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_needle = {
        let needle = needle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            needle.set(input.value());
        })
    };

    let pick_item = |item: String| {
        let (category, selected, run) = (category.clone(), selected.clone(), run.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(cat) = *category {
                selected.set(Some(item.clone()));
                run(SearchFilters::single(cat, &item), 1);
            }
        })
    };

    let on_page = {
        let (category, selected, run) = (category.clone(), selected.clone(), run.clone());
        Callback::from(move |page: u32| {
            if let (Some(cat), Some(item)) = (*category, (*selected).clone()) {
                run(SearchFilters::single(cat, &item), page);
            }
        })
    };

    let visible = filter_items(&items, &needle);

    html! {
        <div class="page">
            <h1>{ "Browse by category" }</h1>
            <div class="category-buttons">
                { for Category::ALL.into_iter().map(|c| html! {
                    <button
                        class={classes!("btn", (*category == Some(c)).then_some("btn-primary"))}
                        onclick={pick_category(c)}
                        disabled={*loading}
                    >{ c.label() }</button>
                }) }
            </div>
            <StatusBanner status={(*status).clone()} />
            if let Some(cat) = *category {
                <input
                    class="form-input"
                    type="search"
                    placeholder={format!("Filter {}...", cat.key())}
                    value={(*needle).clone()}
                    oninput={on_needle}
                />
                <div class="chip-list">
                    { for visible.into_iter().map(|item| html! {
                        <button
                            class={classes!("chip", (selected.as_deref() == Some(item.as_str())).then_some("chip-active"))}
                            onclick={pick_item(item.clone())}
                        >{ capitalize(&item) }</button>
                    }) }
                </div>
            }
            if *loading {
                <Loading />
            }
            if let (Some(found), Some(item)) = (&*recipes, &*selected) {
                <h2>{ format!("{} recipes", capitalize(item)) }</h2>
                <ul class="recipe-rows">
                    { for found.items.iter().map(|r| html! {
                        <li>
                            <Link<Route> to={Route::RecipeView { name: r.name.clone() }}>{ &r.name }</Link<Route>>
                            if !r.prep_time.is_empty() {
                                <span class="muted">{ format!(" · {}", format_prep_time(&r.prep_time)) }</span>
                            }
                        </li>
                    }) }
                </ul>
                <Pagination page={found.page} total_pages={found.total_pages()} total={found.total} has_prev={found.has_prev()} has_next={found.has_next()} disabled={*loading} on_change={on_page} />
            }
        </div>
    }
}
