use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::utils::format_prep_time;

#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub title: AttrValue,
    pub route: Route,
    #[prop_or_default]
    pub image_url: AttrValue,
    #[prop_or_default]
    pub prep_time: AttrValue,
    /// Small grey tags under the title (cuisine, course, diet).
    #[prop_or_default]
    pub tags: Vec<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let tags = props.tags.iter().filter(|t| !t.trim().is_empty());

    html! {
        <div class="card">
            if !props.image_url.is_empty() {
                <img class="card-image" src={props.image_url.clone()} alt={props.title.clone()} loading="lazy" />
            } else {
                <div class="card-image card-image-empty">{ "No image" }</div>
            }
            <div class="card-body">
                <h3 class="card-title">{ &props.title }</h3>
                if !props.prep_time.is_empty() {
                    <p class="muted">{ format!("Prep: {}", format_prep_time(&props.prep_time)) }</p>
                }
                <div class="tags">
                    { for tags.map(|t| html! { <span class="tag tag-static">{ t }</span> }) }
                </div>
                { props.children.clone() }
                <Link<Route> to={props.route.clone()} classes="card-link">{ "View Recipe" }</Link<Route>>
            </div>
        </div>
    }
}
