//! Narrative client for the external text-generation service
//!
//! Talks to an OpenAI-compatible chat endpoint (Ollama in local setups). The
//! model is asked to return a bare JSON object; some models still wrap it in
//! markdown or prose, so the first-to-last-brace slice of the reply is what
//! gets parsed.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    NarrativeError, NarrativePort, NarrativeRequest, PartialNarrative,
};
use crate::application::services::narrative::prompt;

/// Client for the narrative text-generation API
pub struct NarrativeClient {
    client: Client,
    base_url: Option<String>,
    model: String,
}

impl NarrativeClient {
    /// `base_url` of `None` means unconfigured: every call reports
    /// [`NarrativeError::NotConfigured`] and the caller falls back locally.
    pub fn new(base_url: Option<&str>, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            model: model.to_string(),
        })
    }

    async fn request_completion(
        &self,
        base_url: &str,
        prompt_text: String,
    ) -> Result<String, NarrativeError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt_text,
            }],
            temperature: 0.8,
        };

        let response = self
            .client
            .post(format!("{base_url}/chat/completions"))
            .json(&request)
            .send()
            .await
            .map_err(|e| NarrativeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Http(format!("{status}: {body}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| NarrativeError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| NarrativeError::MalformedResponse("no choices in reply".to_string()))
    }
}

#[async_trait]
impl NarrativePort for NarrativeClient {
    async fn generate(
        &self,
        request: &NarrativeRequest,
    ) -> Result<PartialNarrative, NarrativeError> {
        let base_url = self.base_url.as_deref().ok_or(NarrativeError::NotConfigured)?;

        let content = self
            .request_completion(base_url, prompt::build_prompt(request))
            .await?;

        let json = extract_json_object(&content).ok_or_else(|| {
            NarrativeError::MalformedResponse("no JSON object in reply".to_string())
        })?;

        serde_json::from_str(json).map_err(|e| NarrativeError::MalformedResponse(e.to_string()))
    }
}

/// Slice out the outermost `{...}` of a model reply.
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        Element, RarityGrade, Role, StatRank, StatRankBlock, WeaponType,
    };

    #[test]
    fn extracts_json_from_markdown_wrapped_replies() {
        let content = "Here you go:\n```json\n{\"title\": \"The Blade\"}\n```";
        assert_eq!(extract_json_object(content), Some("{\"title\": \"The Blade\"}"));
        assert_eq!(extract_json_object("no braces here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn partial_narrative_parses_missing_fields_as_none() {
        let parsed: PartialNarrative =
            serde_json::from_str(r#"{"title": "The Blade", "skills": {"burst": {"name": "End", "description": "..."}}}"#)
                .expect("parses");
        assert_eq!(parsed.title.as_deref(), Some("The Blade"));
        assert!(parsed.class_name.is_none());
        assert!(parsed.flavor_text.is_none());
        let skills = parsed.skills.expect("skills present");
        assert!(skills.normal_attack.is_none());
        assert_eq!(skills.burst.map(|s| s.name), Some("End".to_string()));
    }

    #[tokio::test]
    async fn unconfigured_client_reports_not_configured() {
        let client =
            NarrativeClient::new(None, "llama3.2", Duration::from_secs(1)).expect("client");
        let request = NarrativeRequest {
            element: Element::Fire,
            weapon_type: WeaponType::Sword,
            role: Role::Dps,
            rarity: RarityGrade::C,
            stat_ranks: StatRankBlock {
                hp: StatRank::Good,
                atk: StatRank::Good,
                def: StatRank::Good,
                speed: StatRank::Good,
                em: StatRank::Good,
            },
        };
        match client.generate(&request).await {
            Err(NarrativeError::NotConfigured) => {}
            other => panic!("expected NotConfigured, got {other:?}"),
        }
    }
}
