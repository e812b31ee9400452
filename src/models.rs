use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// --- Settings ---

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AppSettings {
    pub api_base_url: String,
    #[serde(default = "default_page_size")] // older saved settings predate paging
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("RECIPE_API_URL").unwrap_or(DEFAULT_API_URL).to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// --- Lenient field decoding ---

/// Accepts `"a, b, c"`, `["a", "b"]` or null and always yields a list.
fn de_ingredient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => crate::utils::split_ingredients(&s),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    })
}

/// Prep time arrives as `30`, `"30"`, `"30 mins"` or null depending on the endpoint.
fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn de_lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// --- Catalogue recipes ---

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct RecipeSummary {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub diet: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct IngredientMatch {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub diet: String,
    #[serde(default, deserialize_with = "de_ingredient_list")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub match_percent: f64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Recipe {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub diet: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "de_ingredient_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub instructions: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub image_url: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SimilarRecipes {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub similar_recipes: Vec<RecipeSummary>,
}

/// One page of results. The wire key for `items` differs per endpoint
/// (`results` for name search, `recipes` elsewhere).
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Page<T> {
    #[serde(default)]
    pub total: u32,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub limit: u32,
    #[serde(alias = "results", alias = "recipes", default = "Vec::new")]
    pub items: Vec<T>,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Cuisines,
    Courses,
    Diets,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cuisines, Category::Courses, Category::Diets];

    /// Path segment and JSON key are the same word.
    pub fn key(self) -> &'static str {
        match self {
            Category::Cuisines => "cuisines",
            Category::Courses => "courses",
            Category::Diets => "diets",
        }
    }

    /// Query parameter used when filtering by one value of this category.
    pub fn filter_param(self) -> &'static str {
        match self {
            Category::Cuisines => "cuisine",
            Category::Courses => "course",
            Category::Diets => "diet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Cuisines => "Cuisines",
            Category::Courses => "Courses",
            Category::Diets => "Diets",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SearchFilters {
    pub cuisine: Vec<String>,
    pub course: Vec<String>,
    pub diet: Vec<String>,
}

impl SearchFilters {
    pub fn values_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Cuisines => &mut self.cuisine,
            Category::Courses => &mut self.course,
            Category::Diets => &mut self.diet,
        }
    }

    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Cuisines => &self.cuisine,
            Category::Courses => &self.course,
            Category::Diets => &self.diet,
        }
    }

    pub fn single(category: Category, value: &str) -> Self {
        let mut filters = Self::default();
        filters.values_mut(category).push(value.to_string());
        filters
    }
}

// --- User uploaded recipes ---

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct UploadedRecipe {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub diet: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "de_ingredient_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub instructions: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub image_url: String,
}

/// Request body for upload and update. The backend stores ingredients as one
/// comma-joined column.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct RecipeDraft {
    pub title: String,
    pub cuisine: String,
    pub course: String,
    pub diet: String,
    pub prep_time: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
}

impl From<&UploadedRecipe> for RecipeDraft {
    fn from(recipe: &UploadedRecipe) -> Self {
        Self {
            title: recipe.title.trim().to_string(),
            cuisine: recipe.cuisine.trim().to_string(),
            course: recipe.course.trim().to_string(),
            diet: recipe.diet.trim().to_string(),
            prep_time: recipe.prep_time.trim().to_string(),
            ingredients: crate::utils::join_ingredients(&recipe.ingredients),
            instructions: recipe.instructions.trim().to_string(),
            image_url: recipe.image_url.trim().to_string(),
        }
    }
}

// --- Auth ---

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "de_lenient_age")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub bio: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub image: String,
}

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authorized: bool,
}

// --- AI recipes ---

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiAnswers {
    pub meal_type: String,
    pub main_ingredient: String,
    pub spice_level: String,
    pub cuisine: String,
    pub time_available: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct AiRecipe {
    #[serde(default = "unnamed_recipe")]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "de_ingredient_list")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

fn unnamed_recipe() -> String {
    "Unnamed Recipe".to_string()
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SavedRecipeSummary {
    pub id: i64,
    #[serde(default = "unnamed_recipe")]
    pub name: String,
}

/// Envelope used by the AI endpoints: `{"status": bool, ...}`.
#[derive(Deserialize, Debug)]
pub struct AiEnvelope<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Deserialize, Debug, Default)]
pub struct AnswerBody {
    #[serde(default)]
    pub answer: Option<AiRecipe>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SavedListBody {
    #[serde(default)]
    pub recipes: Vec<SavedRecipeSummary>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SavedViewBody {
    #[serde(default)]
    pub recipe: Option<AiRecipe>,
}

#[derive(Serialize, Debug)]
pub struct AskRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
