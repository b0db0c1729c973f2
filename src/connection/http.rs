use crate::connection::SendMessage;
use crate::reporter::model::{ResultAggregate, UploadResponse};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_derive::Deserialize;
use std::time::Duration;

/// Posts the aggregate to the results service.
#[derive(Debug)]
pub struct HttpSender {
    client: Client,
    endpoint: String,
}

/// Body of a results service reply. Successful uploads answer with `data`,
/// rejected ones with `error`.
#[derive(Debug, Deserialize)]
struct ApiReply {
    data: Option<ApiMessage>,
    error: Option<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

impl HttpSender {
    pub fn new(endpoint: String, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

impl SendMessage<ResultAggregate, UploadResponse> for HttpSender {
    fn send(&self, aggregate: ResultAggregate) -> UploadResponse {
        debug!(
            "Posting {} cases to {}",
            aggregate.cases().len(),
            self.endpoint
        );
        let response = match self.client.post(&self.endpoint).json(&aggregate).send() {
            Ok(response) => response,
            Err(err) => {
                error!("Failed to send results {}", err);
                return UploadResponse::failed("Failed to send results", vec![err.to_string()]);
            }
        };
        let status = response.status();
        match response.json::<ApiReply>() {
            Ok(reply) => reply.into_response(status),
            Err(err) => UploadResponse::failed(
                format!("Unexpected response ({})", status),
                vec![err.to_string()],
            ),
        }
    }
}

impl ApiReply {
    fn into_response(self, status: StatusCode) -> UploadResponse {
        if let Some(error) = self.error {
            let message = with_code(error.message, error.code);
            return UploadResponse::failed(message.clone(), vec![message]);
        }
        match self.data {
            Some(data) if status.is_success() => UploadResponse::succeeded(data.message),
            Some(data) => {
                let message = with_code(data.message, data.code.or(Some(status.as_u16())));
                UploadResponse::failed(message.clone(), vec![message])
            }
            None => UploadResponse::failed(
                format!("Empty response ({})", status),
                vec![format!("HTTP {}", status.as_u16())],
            ),
        }
    }
}

fn with_code(message: String, code: Option<u16>) -> String {
    match code {
        Some(code) => format!("{} (code {})", message, code),
        None => message,
    }
}
