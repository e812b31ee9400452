use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;

use crate::components::pagination::Pagination;
use crate::components::recipe_card::RecipeCard;
use crate::components::status::{Loading, Status, StatusBanner};
use crate::forms::validate_query;
use crate::models::{Category, Page, RecipeSummary, SearchFilters};
use crate::routes::Route;
use crate::services::http::ApiClient;
use crate::services::recipes::{FilterOptions, RecipeService};
use crate::services::session::{use_session, use_settings};

#[function_component(RecipeSearchPage)]
pub fn recipe_search_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let query = use_state(String::new);
    let filters = use_state(SearchFilters::default);
    let options = use_state(FilterOptions::default);
    let results = use_state(|| None::<Page<RecipeSummary>>);
    // Query and filters of the last search, reused when paging.
    let submitted = use_state(|| None::<(String, SearchFilters)>);
    let status = use_state(Status::default);
    let loading = use_state(|| false);

    {
        let options = options.clone();
        let api = ApiClient::from_context(&settings, &session);
        use_effect_with((), move |_| {
            spawn_local(async move {
                options.set(RecipeService::filter_options(&api).await);
            });
        });
    }

    let run = {
        let (results, status, loading) = (results.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        let limit = settings.page_size;
        Rc::new(move |text: String, active: SearchFilters, page: u32| {
            let (results, status, loading, api) = (results.clone(), status.clone(), loading.clone(), api.clone());
            loading.set(true);
            status.set(Status::default());
            spawn_local(async move {
                match RecipeService::search_by_name(&api, &text, &active, page, limit).await {
                    Ok(found) => {
                        if found.items.is_empty() {
                            status.set(Status::info(format!("No recipes found for \"{text}\".")));
                        }
                        results.set(Some(found));
                    }
                    Err(err) => {
                        log::error!("name search failed: {err:#}");
                        results.set(None);
                        status.set(Status::error("Search failed. Please try again."));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_filter = |category: Category| {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let mut next = (*filters).clone();
            let slot = next.values_mut(category);
            slot.clear();
            if !value.is_empty() {
                slot.push(value);
            }
            filters.set(next);
        })
    };

    let on_submit = {
        let (query, filters, submitted, status, run) =
            (query.clone(), filters.clone(), submitted.clone(), status.clone(), run.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_query(&query) {
                Ok(text) => {
                    submitted.set(Some((text.clone(), (*filters).clone())));
                    run(text, (*filters).clone(), 1);
                }
                Err(msg) => status.set(Status::error(msg)),
            }
        })
    };

    let on_page = {
        let (submitted, run) = (submitted.clone(), run.clone());
        Callback::from(move |page: u32| {
            if let Some((text, active)) = (*submitted).clone() {
                run(text, active, page);
            }
        })
    };

    let filter_select = |category: Category| {
        let current = filters.values(category).first().cloned().unwrap_or_default();
        html! {
            <select class="form-select" onchange={on_filter(category)}>
                <option value="" selected={current.is_empty()}>{ format!("Any {}", category.label().to_lowercase()) }</option>
                { for options.get(category).iter().map(|item| html! {
                    <option value={item.clone()} selected={*item == current}>{ item }</option>
                }) }
            </select>
        }
    };

    html! {
        <div class="page">
            <h1>{ "Search recipes" }</h1>
            <form class="search-bar" onsubmit={on_submit}>
                <input class="form-input" type="search" placeholder="e.g. Paneer Butter Masala" value={(*query).clone()} oninput={on_query} />
                <button class="btn btn-primary" type="submit" disabled={*loading}>{ "Search" }</button>
            </form>
            <div class="filters">
                { for Category::ALL.into_iter().map(filter_select) }
            </div>
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading text="Searching..." />
            }
            if let Some(found) = &*results {
                <div class="grid">
                    { for found.items.iter().map(|r| html! {
                        <RecipeCard
                            title={r.name.clone()}
                            route={Route::RecipeView { name: r.name.clone() }}
                            image_url={r.image_url.clone()}
                            prep_time={r.prep_time.clone()}
                            tags={vec![r.cuisine.clone(), r.course.clone(), r.diet.clone()]}
                        />
                    }) }
                </div>
                <Pagination page={found.page} total_pages={found.total_pages()} total={found.total} has_prev={found.has_prev()} has_next={found.has_next()} disabled={*loading} on_change={on_page} />
            }
        </div>
    }
}
