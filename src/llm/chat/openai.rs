use async_trait::async_trait;
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION}};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;

use super::{ChatClient, CompletionResponse};
use crate::llm::{LlmConfig, LlmType};
use crate::models::chat::{ChatMessage, Role};

pub struct OpenAIChatClient {
    http: HttpClient,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize, Deserialize)]
struct OpenAIMessage {
    role: Role,
    content: String,
}

#[derive(Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    stream: bool,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

impl OpenAIChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        llm_type: LlmType,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| default_model(llm_type).to_string());
        let api_url = base_url.unwrap_or_else(|| default_base_url(llm_type).to_string());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| format!("Invalid API key format: {}", e))?
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            api_key,
            model: chat_model,
            base_url: api_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let api_key = config.api_key
            .clone()
            .ok_or_else(|| format!("{:?} API key is required", config.llm_type))?;

        Self::new(
            api_key,
            config.completion_model.clone(),
            config.base_url.clone(),
            config.llm_type,
        )
    }
}

fn default_model(llm_type: LlmType) -> &'static str {
    match llm_type {
        LlmType::OpenAI => "gpt-4o",
        LlmType::DeepSeek => "deepseek-chat",
    }
}

fn default_base_url(llm_type: LlmType) -> &'static str {
    match llm_type {
        LlmType::OpenAI => "https://api.openai.com/v1",
        LlmType::DeepSeek => "https://api.deepseek.com/v1",
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(
        &self,
        messages: &[ChatMessage]
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let wire_messages = messages
            .iter()
            .map(|m| OpenAIMessage {
                role: m.role,
                content: m.content.clone(),
            })
            .collect();

        let req = OpenAIChatRequest {
            model: self.model.clone(),
            messages: wire_messages,
            stream: false,
        };

        let resp = self.http.post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&req)
            .send()
            .await?
            .error_for_status()?
            .json::<OpenAIResponse>()
            .await?;

        let content = resp.choices.first()
            .ok_or_else(|| "No response from chat completion API".to_string())?
            .message.content.clone();

        Ok(CompletionResponse { response: content })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_apply_when_unconfigured() {
        let client = OpenAIChatClient::new("key".into(), None, None, LlmType::DeepSeek).unwrap();
        assert_eq!(client.get_model(), "deepseek-chat");
        assert_eq!(client.get_base_url().unwrap(), "https://api.deepseek.com/v1");
    }

    #[test]
    fn explicit_model_and_base_url_win() {
        let client = OpenAIChatClient::new(
            "key".into(),
            Some("gpt-4o-mini".into()),
            Some("http://localhost:8080/v1".into()),
            LlmType::OpenAI,
        ).unwrap();
        assert_eq!(client.get_model(), "gpt-4o-mini");
        assert_eq!(client.get_base_url().unwrap(), "http://localhost:8080/v1");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let config = LlmConfig {
            llm_type: LlmType::OpenAI,
            api_key: None,
            completion_model: None,
            base_url: None,
        };
        assert!(OpenAIChatClient::from_config(&config).is_err());
    }
}
