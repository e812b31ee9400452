pub mod navbar;
pub mod pagination;
pub mod recipe_card;
pub mod settings;
pub mod status;
pub mod tag_input;
