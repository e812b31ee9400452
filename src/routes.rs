use yew::prelude::*;
use yew_router::prelude::*;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::pages::{
    about::AboutPage, ai_recipe::AiRecipePage, ask_ai::AskAiPage, browse::BrowsePage, edit_recipe::EditRecipePage,
    forgot_password::ForgotPasswordPage, home::HomePage, ingredient_search::IngredientSearchPage,
    landing::LandingPage, login::LoginPage, profile::ProfilePage, recipe_search::RecipeSearchPage,
    recipe_view::RecipeViewPage, register::RegisterPage, saved_recipes::SavedRecipesPage, upload::UploadPage,
    uploaded_details::UploadedDetailsPage, uploaded_list::UploadedListPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/home")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot")]
    ForgotPassword,
    #[at("/search")]
    Search,
    #[at("/search-by-ingredients")]
    IngredientSearch,
    #[at("/browse")]
    Browse,
    #[at("/recipe/:name")]
    RecipeView { name: String },
    #[at("/ask")]
    AskAi,
    #[at("/upload")]
    Upload,
    #[at("/uploaded-recipes")]
    UploadedList,
    #[at("/uploaded-recipes/:id")]
    UploadedDetails { id: String },
    #[at("/edit-recipe/:id")]
    EditRecipe { id: String },
    #[at("/ai-recipe")]
    AiRecipe,
    #[at("/saved-recipes")]
    SavedRecipes,
    #[at("/profile")]
    Profile,
    #[at("/about-us")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages that need a session token to do anything useful.
    pub fn requires_login(&self) -> bool {
        matches!(self, Route::SavedRecipes | Route::Profile)
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::Search => html! { <RecipeSearchPage /> },
        Route::IngredientSearch => html! { <IngredientSearchPage /> },
        Route::Browse => html! { <BrowsePage /> },
        Route::RecipeView { name } => html! { <RecipeViewPage {name} /> },
        Route::AskAi => html! { <AskAiPage /> },
        Route::Upload => html! { <UploadPage /> },
        Route::UploadedList => html! { <UploadedListPage /> },
        Route::UploadedDetails { id } => html! { <UploadedDetailsPage {id} /> },
        Route::EditRecipe { id } => html! { <EditRecipePage {id} /> },
        Route::AiRecipe => html! { <AiRecipePage /> },
        Route::SavedRecipes => html! { <SavedRecipesPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::About => html! { <AboutPage /> },
        Route::NotFound => html! {
            <div class="page narrow">
                <h1>{ "Page not found" }</h1>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to home" }</Link<Route>>
            </div>
        },
    }
}
