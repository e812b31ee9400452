use anyhow::Result;
use reqwest::Method;

use crate::models::{
    AiAnswers, AiEnvelope, AiRecipe, AnswerBody, AskRequest, AskResponse, SavedListBody, SavedRecipeSummary,
    SavedViewBody,
};
use crate::services::http::{ApiClient, ApiError};

pub struct AiService;

impl AiService {
    pub async fn generate(api: &ApiClient, answers: &AiAnswers) -> Result<AiRecipe> {
        let resp: AiEnvelope<AnswerBody> =
            api.send_json(Method::POST, "/airecipe/ai-recipe-qusn", &[], answers).await?;
        match resp.body.answer {
            Some(recipe) if resp.status => Ok(recipe),
            _ => Err(ApiError::Rejected("The AI did not return a usable recipe.".into()).into()),
        }
    }

    pub async fn save(api: &ApiClient, recipe: &AiRecipe) -> Result<()> {
        api.require_token()?;
        let resp: AiEnvelope<serde_json::Value> =
            api.send_json(Method::POST, "/airecipe/ai-recipe-save", &[], recipe).await?;
        ensure_status(resp.status, "Could not save the recipe.")
    }

    pub async fn list_saved(api: &ApiClient) -> Result<Vec<SavedRecipeSummary>> {
        api.require_token()?;
        let resp: AiEnvelope<SavedListBody> = api.get_json("/airecipe/ai-recipe-saved", &[]).await?;
        ensure_status(resp.status, "Could not load saved recipes.")?;
        Ok(resp.body.recipes)
    }

    pub async fn view_saved(api: &ApiClient, id: i64) -> Result<AiRecipe> {
        api.require_token()?;
        let resp: AiEnvelope<SavedViewBody> =
            api.get_json(&format!("/airecipe/ai-recipe-view/{id}"), &[]).await?;
        match resp.body.recipe {
            Some(recipe) if resp.status => Ok(recipe),
            _ => Err(ApiError::Rejected("Recipe not found".into()).into()),
        }
    }

    pub async fn delete_saved(api: &ApiClient, id: i64) -> Result<()> {
        api.require_token()?;
        let resp: AiEnvelope<serde_json::Value> =
            api.delete_json(&format!("/airecipe/ai-recipe-delete/{id}")).await?;
        ensure_status(resp.status, "Failed to delete recipe.")
    }

    /// Free-text recipe lookup; the answer is markdown-ish prose.
    pub async fn ask(api: &ApiClient, prompt: &str) -> Result<String> {
        let body = AskRequest { prompt };
        let resp: AskResponse = api.send_json(Method::POST, "/airecipe/ask", &[], &body).await?;
        resp.answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or_else(|| ApiError::Rejected("The AI returned an empty answer.".into()).into())
    }
}

fn ensure_status(status: bool, fallback: &str) -> Result<()> {
    if status {
        Ok(())
    } else {
        Err(ApiError::Rejected(fallback.to_string()).into())
    }
}
