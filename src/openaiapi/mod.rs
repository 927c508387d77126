#![allow(dead_code)]

use std::env;
use std::fs;
use serde_derive::{Deserialize, Serialize};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Token cap the legacy completion-style calls go out with. Chat-style calls
/// are uncapped and take the backend default.
pub const COMPLETION_MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("URL error: {0}")]
	Url(#[from] url::ParseError),
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
	#[error("API returned status {status}: {body}")]
	Status { status: u16, body: String },
	#[error("Serde error: {0}")]
	Json(#[from] serde_json::Error),
	#[error("unexpected response shape: {0}")]
	MalformedResponse(&'static str),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// The two request shapes the backend evolved through. The older pipeline
/// scripts used the plain completions endpoint, the newer ones chat
/// completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
	Chat,
	Completion,
}

impl ApiStyle {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"chat" => Some(ApiStyle::Chat),
			"completion" => Some(ApiStyle::Completion),
			_ => None,
		}
	}
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Message {
	pub role: String,
	pub content: String,
}

impl Message {
	pub fn system(content: String) -> Self {
		Message { role: "system".to_string(), content }
	}
	pub fn user(content: String) -> Self {
		Message { role: "user".to_string(), content }
	}
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
	model: String,
	messages: Vec<Message>,
	#[serde(skip_serializing_if = "Option::is_none")]
	max_tokens: Option<u32>,
}

#[derive(Serialize, Debug)]
pub struct CompletionRequest {
	model: String,
	prompt: String,
	max_tokens: u32,
}

/// One outbound generation request, polymorphic over the two call shapes.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Request {
	Chat(ChatRequest),
	Completion(CompletionRequest),
}

impl Request {
	pub fn chat(model: &str, system: String, user: String) -> Self {
		Request::Chat(ChatRequest {
			model: model.to_string(),
			messages: vec![Message::system(system), Message::user(user)],
			max_tokens: None,
		})
	}

	pub fn completion(model: &str, prompt: String) -> Self {
		Request::Completion(CompletionRequest {
			model: model.to_string(),
			prompt,
			max_tokens: COMPLETION_MAX_TOKENS,
		})
	}

	pub fn style(&self) -> ApiStyle {
		match self {
			Request::Chat(_) => ApiStyle::Chat,
			Request::Completion(_) => ApiStyle::Completion,
		}
	}

	fn endpoint(&self) -> &'static str {
		match self {
			Request::Chat(_) => "chat/completions",
			Request::Completion(_) => "completions",
		}
	}
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
	content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
	message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
	choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct CompletionChoice {
	text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
	choices: Vec<CompletionChoice>,
}

/// Pull the first choice's text out of a response body.
pub fn parse_response(style: ApiStyle, body: &str) -> Result<String, ApiError> {
	match style {
		ApiStyle::Chat => {
			let response: ChatResponse = serde_json::from_str(body)?;
			let choice = response
				.choices
				.into_iter()
				.next()
				.ok_or(ApiError::MalformedResponse("no choices in the response object"))?;
			choice
				.message
				.content
				.ok_or(ApiError::MalformedResponse("no content in the first choice's message"))
		},
		ApiStyle::Completion => {
			let response: CompletionResponse = serde_json::from_str(body)?;
			let choice = response
				.choices
				.into_iter()
				.next()
				.ok_or(ApiError::MalformedResponse("no choices in the response object"))?;
			choice
				.text
				.ok_or(ApiError::MalformedResponse("no text in the first choice"))
		},
	}
}

pub struct Client {
	model: String,
	api_base: String,
	api_key: String,
	pub write_req_resp: bool,
}

impl Client {
	pub fn new(api_base: &str, api_key: String) -> Self {
		Client {
			model: DEFAULT_MODEL.to_string(),
			api_base: api_base.to_string(),
			api_key,
			write_req_resp: false,
		}
	}

	/// Endpoint and credential come from the environment. The key is not
	/// validated here: an unset OPENAI_API_KEY goes out as an empty bearer
	/// token and the failure surfaces from the backend at call time.
	pub fn from_env() -> Self {
		let api_base = env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
		let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
		let mut client = Self::new(&api_base, api_key);
		if let Ok(model_name) = env::var("OPENAI_MODEL_NAME") {
			client.set_model_name(&model_name);
		}
		client
	}

	pub fn set_model_name(&mut self, model_name: &str) {
		self.model = model_name.to_string();
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	/// One request, one response. No retry, no streaming, no timeout: a hung
	/// backend blocks the process until it answers.
	pub async fn call(&self, request: &Request) -> Result<String, ApiError> {
		let serialised = serde_json::to_string(request)?;
		if self.write_req_resp {
			fs::write("last_request.json", &serialised)?;
		}
		let url = Url::parse(&format!("{}/{}", self.api_base.trim_end_matches('/'), request.endpoint()))?;
		tracing::debug!(url = %url, bytes = serialised.len(), "posting generation request");
		let client = reqwest::Client::new();
		let resp = client
			.post(url)
			.header(AUTHORIZATION, format!("Bearer {}", &self.api_key))
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?;
		let status = resp.status();
		let body = resp.text().await?;
		if self.write_req_resp {
			fs::write("last_response.json", &body)?;
		}
		if !status.is_success() {
			return Err(ApiError::Status { status: status.as_u16(), body });
		}
		let content = parse_response(request.style(), &body)?;
		tracing::debug!(chars = content.len(), "extracted response text");
		Ok(content.trim().to_string())
	}
}
