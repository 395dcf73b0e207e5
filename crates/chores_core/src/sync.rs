use crate::command::Command;
use crate::error::AppError;
use std::time::Duration;

/// Todoist batch-sync endpoint. Accepts heterogeneous commands and applies
/// them idempotently server-side, keyed by each command's uuid.
pub const SYNC_URL: &str = "https://api.todoist.com/sync/v8/sync";

const TOKEN_ENV_VAR: &str = "TODOIST_TOKEN";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Seam for the one outbound request, so tests can run without a network.
pub trait Transport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse, AppError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        match self.agent.post(url).send_form(fields) {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|err| AppError::io(err.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Ok(HttpResponse { status, body })
            }
            Err(err) => Err(AppError::io(err.to_string())),
        }
    }
}

/// Read the bearer token from the environment. A missing or blank value is
/// a configuration error; a blank token is never submitted silently.
pub fn token_from_env() -> Result<String, AppError> {
    match std::env::var(TOKEN_ENV_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::config(format!("{TOKEN_ENV_VAR} is not set"))),
    }
}

/// Serialize the batch to the compact JSON array Todoist expects.
pub fn encode_commands(commands: &[Command]) -> Result<String, AppError> {
    serde_json::to_string(commands).map_err(|err| AppError::invalid_data(err.to_string()))
}

/// Submit the batch in a single form-encoded POST. One attempt, no retry;
/// the deterministic uuids make a re-run after failure safe. Returns the
/// raw response body on a 2xx status.
pub fn submit(
    transport: &dyn Transport,
    token: &str,
    commands: &[Command],
) -> Result<String, AppError> {
    let encoded = encode_commands(commands)?;
    let response =
        transport.post_form(SYNC_URL, &[("token", token), ("commands", encoded.as_str())])?;

    if !(200..300).contains(&response.status) {
        return Err(AppError::remote(response.status, response.body));
    }

    Ok(response.body)
}
