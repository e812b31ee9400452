use anyhow::Result;
use futures_util::future::join3;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::models::{
    Category, IngredientMatch, Page, Recipe, RecipeDraft, RecipeSummary, SearchFilters, SimilarRecipes,
    UploadedRecipe,
};
use crate::services::http::{ApiClient, ApiError};

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

const UPLOADED: &str = "/recipes/api/recipes";

pub struct RecipeService;

/// Option lists for the three search filters. A list that failed to load is
/// left empty so the other filters stay usable.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterOptions {
    pub cuisines: Vec<String>,
    pub courses: Vec<String>,
    pub diets: Vec<String>,
}

impl FilterOptions {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Cuisines => &self.cuisines,
            Category::Courses => &self.courses,
            Category::Diets => &self.diets,
        }
    }
}

pub fn page_query(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.max(1).to_string()), ("limit", limit.clamp(1, 100).to_string())]
}

pub fn filter_query(filters: &SearchFilters) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    for category in Category::ALL {
        for value in filters.values(category) {
            let value = value.trim();
            if !value.is_empty() {
                query.push((category.filter_param(), value.to_string()));
            }
        }
    }
    query
}

pub fn search_query(query: &str, filters: &SearchFilters, page: u32, limit: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![("query", query.trim().to_string())];
    params.extend(page_query(page, limit));
    params.extend(filter_query(filters));
    params
}

/// Category endpoints answer `{"<category>": [...]}`.
pub fn parse_category_list(category: Category, body: &serde_json::Value) -> Vec<String> {
    body.get(category.key())
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl RecipeService {
    pub async fn search_by_name(
        api: &ApiClient,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        limit: u32,
    ) -> Result<Page<RecipeSummary>> {
        api.get_json("/recipes/search", &search_query(query, filters, page, limit)).await
    }

    pub async fn search_by_ingredients(
        api: &ApiClient,
        ingredients: &[String],
        page: u32,
        limit: u32,
    ) -> Result<Page<IngredientMatch>> {
        let body = json!({ "ingredients": ingredients });
        api.send_json(Method::POST, "/recipes/search-by-ingredients", &page_query(page, limit), &body)
            .await
    }

    pub async fn browse(api: &ApiClient, filters: &SearchFilters, page: u32, limit: u32) -> Result<Page<RecipeSummary>> {
        let mut query = page_query(page, limit);
        query.extend(filter_query(filters));
        api.get_json("/recipes/recipes", &query).await
    }

    pub async fn category(api: &ApiClient, category: Category) -> Result<Vec<String>> {
        let body: serde_json::Value = api.get_json(&format!("/recipes/{}", category.key()), &[]).await?;
        let items = parse_category_list(category, &body);
        if items.is_empty() && body.get(category.key()).is_none() {
            log::warn!("unexpected {} response: {body}", category.key());
        }
        Ok(items)
    }

    pub async fn filter_options(api: &ApiClient) -> FilterOptions {
        let (cuisines, courses, diets) = join3(
            Self::category(api, Category::Cuisines),
            Self::category(api, Category::Courses),
            Self::category(api, Category::Diets),
        )
        .await;
        let keep = |category: Category, result: Result<Vec<String>>| match result {
            Ok(items) => items,
            Err(err) => {
                log::error!("loading {} failed: {err:#}", category.key());
                Vec::new()
            }
        };
        FilterOptions {
            cuisines: keep(Category::Cuisines, cuisines),
            courses: keep(Category::Courses, courses),
            diets: keep(Category::Diets, diets),
        }
    }

    pub async fn by_name(api: &ApiClient, name: &str) -> Result<Recipe> {
        api.get_json("/recipes/recipe", &[("name", name.to_string())]).await
    }

    pub async fn similar(api: &ApiClient, name: &str) -> Result<SimilarRecipes> {
        api.get_json("/recipes/similar-recipes", &[("name", name.to_string())]).await
    }

    pub async fn list_uploaded(api: &ApiClient) -> Result<Vec<UploadedRecipe>> {
        // Older deployments wrap the list as {"recipes": [...]}.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Listing {
            Bare(Vec<UploadedRecipe>),
            Wrapped { recipes: Vec<UploadedRecipe> },
        }
        Ok(match api.get_json::<Listing>(UPLOADED, &[]).await? {
            Listing::Bare(items) | Listing::Wrapped { recipes: items } => items,
        })
    }

    pub async fn get_uploaded(api: &ApiClient, id: &str) -> Result<UploadedRecipe> {
        api.get_json(&format!("{UPLOADED}/{id}"), &[]).await
    }

    pub async fn upload(api: &ApiClient, draft: &RecipeDraft) -> Result<()> {
        let status = api.send_unit(Method::POST, UPLOADED, Some(draft)).await?;
        ensure_created(status)
    }

    pub async fn update(api: &ApiClient, id: &str, draft: &RecipeDraft) -> Result<()> {
        let status = api.send_unit(Method::PUT, &format!("{UPLOADED}/{id}"), Some(draft)).await?;
        ensure_created(status)
    }

    pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
        api.send_unit::<()>(Method::DELETE, &format!("{UPLOADED}/{id}"), None).await?;
        Ok(())
    }
}

fn ensure_created(status: u16) -> Result<()> {
    if status == 200 || status == 201 {
        Ok(())
    } else {
        Err(ApiError::Status { status, message: String::new() }.into())
    }
}
