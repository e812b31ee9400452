//! Client-side form rules. Every check here runs before a request is made;
//! the backend remains the authority.

use crate::models::{AiAnswers, UploadedRecipe, UserProfile};

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const INGREDIENT_SUGGESTIONS: [&str; 22] = [
    "tomato", "onion", "garlic", "chicken", "paneer", "cheese", "rice", "potato", "spinach",
    "mushroom", "ginger", "carrot", "pepper", "milk", "cream", "chili", "turmeric", "coriander",
    "salt", "sugar", "oil", "butter",
];

/// `local@domain` with no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least 8 chars with an ASCII lowercase, an ASCII uppercase, a digit and
/// a symbol. Anything outside `[A-Za-z0-9_]` and whitespace is a symbol.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()))
}

pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Please enter your email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please enter your name.");
    }
    if !is_valid_email(email.trim()) {
        return Err("Please enter a valid email address.");
    }
    if !is_strong_password(password) {
        return Err(
            "Password must be at least 8 characters and include uppercase, lowercase, number, and special character.",
        );
    }
    Ok(())
}

// --- Forgot password ---

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ResetStep {
    #[default]
    SendOtp,
    VerifyOtp,
    ResetPassword,
}

impl ResetStep {
    /// Step that follows a successful call at this step.
    pub fn advance(self) -> ResetStep {
        match self {
            ResetStep::SendOtp => ResetStep::VerifyOtp,
            ResetStep::VerifyOtp => ResetStep::ResetPassword,
            ResetStep::ResetPassword => ResetStep::SendOtp,
        }
    }

    pub fn validate(self, identifier: &str, otp: &str, new_password: &str) -> Result<(), &'static str> {
        if identifier.trim().is_empty() {
            return Err("Enter your email or mobile number.");
        }
        match self {
            ResetStep::SendOtp => Ok(()),
            ResetStep::VerifyOtp if otp.trim().is_empty() => Err("Enter the OTP you received."),
            ResetStep::VerifyOtp => Ok(()),
            ResetStep::ResetPassword if new_password.chars().count() < MIN_PASSWORD_LEN => {
                Err("Password must be at least 8 characters long.")
            }
            ResetStep::ResetPassword => Ok(()),
        }
    }
}

// --- Tag input ---

/// Normalises a typed tag; `None` when nothing usable remains.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_matches(',').trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Adds each comma separated piece of `raw`, skipping duplicates. Returns true
/// when the list changed.
pub fn add_tags(tags: &mut Vec<String>, raw: &str) -> bool {
    let mut changed = false;
    for piece in raw.split(',') {
        if let Some(tag) = normalize_tag(piece) {
            if !tags.contains(&tag) {
                tags.push(tag);
                changed = true;
            }
        }
    }
    changed
}

pub fn suggest_tags<'a>(suggestions: &[&'a str], input: &str, taken: &[String], limit: usize) -> Vec<&'a str> {
    let Some(prefix) = normalize_tag(input) else {
        return Vec::new();
    };
    suggestions
        .iter()
        .filter(|s| s.starts_with(&prefix) && !taken.iter().any(|t| t == *s))
        .take(limit)
        .copied()
        .collect()
}

// --- Upload wizard ---

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum UploadStep {
    #[default]
    Basics,
    Ingredients,
    Instructions,
    Review,
}

impl UploadStep {
    pub const ALL: [UploadStep; 4] = [
        UploadStep::Basics,
        UploadStep::Ingredients,
        UploadStep::Instructions,
        UploadStep::Review,
    ];

    pub fn index(self) -> usize {
        match self {
            UploadStep::Basics => 0,
            UploadStep::Ingredients => 1,
            UploadStep::Instructions => 2,
            UploadStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            UploadStep::Basics => "Basics",
            UploadStep::Ingredients => "Ingredients",
            UploadStep::Instructions => "Instructions",
            UploadStep::Review => "Review",
        }
    }

    pub fn next(self) -> Option<UploadStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<UploadStep> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct UploadForm {
    pub title: String,
    pub cuisine: String,
    pub course: String,
    pub diet: String,
    pub prep_time: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
}

impl UploadForm {
    pub fn validate_step(&self, step: UploadStep) -> Result<(), &'static str> {
        match step {
            UploadStep::Basics => {
                if self.title.trim().is_empty() {
                    return Err("Recipe title is required.");
                }
                validate_prep_time(&self.prep_time)
            }
            UploadStep::Ingredients if self.ingredients.is_empty() => Err("Add at least one ingredient."),
            UploadStep::Ingredients => Ok(()),
            UploadStep::Instructions => {
                if self.instructions.trim().is_empty() {
                    return Err("Instructions are required.");
                }
                validate_image_url(&self.image_url)
            }
            UploadStep::Review => {
                for step in [UploadStep::Basics, UploadStep::Ingredients, UploadStep::Instructions] {
                    self.validate_step(step)?;
                }
                Ok(())
            }
        }
    }

    pub fn to_draft(&self) -> crate::models::RecipeDraft {
        crate::models::RecipeDraft {
            title: self.title.trim().to_string(),
            cuisine: self.cuisine.trim().to_string(),
            course: self.course.trim().to_string(),
            diet: self.diet.trim().to_string(),
            prep_time: self.prep_time.trim().to_string(),
            ingredients: crate::utils::join_ingredients(&self.ingredients),
            instructions: self.instructions.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

impl From<&UploadedRecipe> for UploadForm {
    fn from(recipe: &UploadedRecipe) -> Self {
        Self {
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            course: recipe.course.clone(),
            diet: recipe.diet.clone(),
            prep_time: recipe.prep_time.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            image_url: recipe.image_url.clone(),
        }
    }
}

pub fn validate_image_url(url: &str) -> Result<(), &'static str> {
    let url = url.trim();
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err("Image URL must start with http:// or https://.")
    }
}

pub fn validate_prep_time(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() || value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Prep time should start with a number, e.g. 30 or 45 mins.")
    }
}

// --- Profile ---

pub fn parse_age(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(age) if age <= 150 => Ok(Some(age)),
        _ => Err("Age must be a whole number between 0 and 150."),
    }
}

pub fn validate_profile(profile: &UserProfile) -> Result<(), &'static str> {
    if profile.name.trim().is_empty() {
        return Err("Name cannot be empty.");
    }
    if !profile.email.trim().is_empty() && !is_valid_email(profile.email.trim()) {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

// --- AI questionnaire ---

pub struct Question {
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub const QUESTIONS: [Question; 5] = [
    Question { label: "What's your meal vibe right now?", placeholder: "Breakfast, Brunch, Dinner, Midnight Snack..." },
    Question { label: "What's the hero ingredient?", placeholder: "Paneer, Chicken, Potato, Tofu..." },
    Question { label: "How spicy do you want it?", placeholder: "Mild, Medium, Fire-level..." },
    Question { label: "Craving any cuisine?", placeholder: "Indian, Chinese, Italian, Fusion..." },
    Question { label: "How much time can you spend?", placeholder: "15, 30, 45 minutes..." },
];

pub fn answer_mut(answers: &mut AiAnswers, step: usize) -> Option<&mut String> {
    match step {
        0 => Some(&mut answers.meal_type),
        1 => Some(&mut answers.main_ingredient),
        2 => Some(&mut answers.spice_level),
        3 => Some(&mut answers.cuisine),
        4 => Some(&mut answers.time_available),
        _ => None,
    }
}

pub fn answer(answers: &AiAnswers, step: usize) -> &str {
    match step {
        0 => &answers.meal_type,
        1 => &answers.main_ingredient,
        2 => &answers.spice_level,
        3 => &answers.cuisine,
        4 => &answers.time_available,
        _ => "",
    }
}

pub fn is_last_question(step: usize) -> bool {
    step + 1 >= QUESTIONS.len()
}

/// Next questionnaire step, or `None` while the current answer is blank.
pub fn next_question(answers: &AiAnswers, step: usize) -> Option<usize> {
    if answer(answers, step).trim().is_empty() || is_last_question(step) {
        None
    } else {
        Some(step + 1)
    }
}

pub fn answers_complete(answers: &AiAnswers) -> bool {
    (0..QUESTIONS.len()).all(|i| !answer(answers, i).trim().is_empty())
}

// --- Search ---

pub fn validate_query(query: &str) -> Result<String, &'static str> {
    let query = query.trim();
    if query.is_empty() {
        Err("Enter a recipe name to search.")
    } else {
        Ok(query.to_string())
    }
}
