use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::recipe_card::RecipeCard;
use crate::components::status::{Loading, Status, StatusBanner};
use crate::models::UploadedRecipe;
use crate::routes::Route;
use crate::services::http::ApiClient;
use crate::services::recipes::RecipeService;
use crate::services::session::{use_session, use_settings};

#[function_component(UploadedListPage)]
pub fn uploaded_list_page() -> Html {
    let session = use_session();
    let settings = use_settings();

    let recipes = use_state(Vec::<UploadedRecipe>::new);
    let status = use_state(Status::default);
    let loading = use_state(|| true);

    {
        let (recipes, status, loading) = (recipes.clone(), status.clone(), loading.clone());
        let api = ApiClient::from_context(&settings, &session);
        use_effect_with((), move |_| {
            spawn_local(async move {
                match RecipeService::list_uploaded(&api).await {
                    Ok(list) => {
                        if list.is_empty() {
                            status.set(Status::info("No recipes uploaded yet. Be the first!"));
                        }
                        recipes.set(list);
                    }
                    Err(err) => {
                        log::error!("loading uploaded recipes failed: {err:#}");
                        status.set(Status::error("Could not load uploaded recipes."));
                    }
                }
                loading.set(false);
            });
        });
    }

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ "Community recipes" }</h1>
                <Link<Route> to={Route::Upload} classes="btn btn-primary">{ "Upload yours" }</Link<Route>>
            </div>
            <StatusBanner status={(*status).clone()} />
            if *loading {
                <Loading />
            }
            <div class="grid">
                { for recipes.iter().map(|r| html! {
                    <RecipeCard
                        key={r.id.clone()}
                        title={r.title.clone()}
                        route={Route::UploadedDetails { id: r.id.clone() }}
                        image_url={r.image_url.clone()}
                        prep_time={r.prep_time.clone()}
                        tags={vec![r.cuisine.clone(), r.course.clone(), r.diet.clone()]}
                    />
                }) }
            </div>
        </div>
    }
}
