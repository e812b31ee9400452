pub mod about;
pub mod ai_recipe;
pub mod ask_ai;
pub mod browse;
pub mod edit_recipe;
pub mod forgot_password;
pub mod home;
pub mod ingredient_search;
pub mod landing;
pub mod login;
pub mod profile;
pub mod recipe_search;
pub mod recipe_view;
pub mod register;
pub mod saved_recipes;
pub mod upload;
pub mod uploaded_details;
pub mod uploaded_list;
