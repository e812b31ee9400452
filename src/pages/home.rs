use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::session::use_session;

struct Feature {
    title: &'static str,
    blurb: &'static str,
    route: Route,
}

fn features() -> [Feature; 7] {
    [
        Feature { title: "Search by name", blurb: "Look up a dish and narrow it by cuisine, course or diet.", route: Route::Search },
        Feature { title: "Search by ingredients", blurb: "Tell us what you have and see how well each recipe matches.", route: Route::IngredientSearch },
        Feature { title: "Browse categories", blurb: "Explore every cuisine, course and diet in the catalogue.", route: Route::Browse },
        Feature { title: "Ask AI", blurb: "Describe what you feel like eating in plain words.", route: Route::AskAi },
        Feature { title: "AI recipe builder", blurb: "Answer five quick questions and get a recipe made for you.", route: Route::AiRecipe },
        Feature { title: "Upload a recipe", blurb: "Share your own recipe with the community.", route: Route::Upload },
        Feature { title: "Community recipes", blurb: "See what other cooks have uploaded.", route: Route::UploadedList },
    ]
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();

    html! {
        <div class="page">
            <h1>{ format!("Welcome, {}!", session.display_name()) }</h1>
            <p class="muted">{ "What are we cooking today?" }</p>
            <div class="grid">
                { for features().into_iter().map(|f| html! {
                    <Link<Route> to={f.route} classes="card feature-card">
                        <h3>{ f.title }</h3>
                        <p class="muted">{ f.blurb }</p>
                    </Link<Route>>
                }) }
                if session.is_logged_in() {
                    <Link<Route> to={Route::SavedRecipes} classes="card feature-card">
                        <h3>{ "Saved AI recipes" }</h3>
                        <p class="muted">{ "Your favourites from the recipe builder." }</p>
                    </Link<Route>>
                }
            </div>
        </div>
    }
}
