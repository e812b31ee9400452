use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page narrow">
            <h1>{ "About Find My Recipe" }</h1>
            <p>
                { "Find My Recipe helps home cooks decide what to make. Search a large catalogue of Indian and world recipes by name, \
                   filter by cuisine, course or diet, or list the ingredients you already have and see which dishes match best." }
            </p>
            <h2>{ "What you can do" }</h2>
            <ul>
                <li>{ "Search recipes by name or by ingredients." }</li>
                <li>{ "Browse every cuisine, course and diet." }</li>
                <li>{ "Upload your own recipes and edit them later." }</li>
                <li>{ "Ask the AI for ideas, or build a recipe from five quick questions and save your favourites." }</li>
            </ul>
            <h2>{ "Contact" }</h2>
            <p class="muted">{ "Found a bug or have a recipe suggestion? Reach out through the project page." }</p>
        </div>
    }
}
