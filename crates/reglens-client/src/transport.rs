//! Transport seam between the controller and the analysis service.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::multipart;
use serde::Serialize;

use crate::error::SubmitError;
use crate::input::AnalyzeRequest;

/// The single suspension point of the pipeline: carry one request to the
/// service and return the raw success body. Implemented by the real HTTP
/// transport and by test doubles.
pub trait AnalysisTransport {
    fn analyze(&self, request: &AnalyzeRequest) -> Result<String, SubmitError>;
}

/// Wire shape of `POST /analyze_regulation`. A missing date serializes
/// as an explicit `null`, exactly as the browser client sends it.
#[derive(Serialize)]
struct TextPayload<'a> {
    new_regulation_text: &'a str,
    date_of_law: Option<&'a str>,
}

/// Blocking reqwest transport for the two analysis endpoints.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// `timeout: None` disables the client-side deadline entirely; the
    /// default configuration passes 60 seconds.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AnalysisTransport for HttpTransport {
    fn analyze(&self, request: &AnalyzeRequest) -> Result<String, SubmitError> {
        let response = match request {
            AnalyzeRequest::Text { text, date_of_law } => self
                .client
                .post(format!("{}/analyze_regulation", self.base_url))
                .json(&TextPayload {
                    new_regulation_text: text,
                    date_of_law: date_of_law.as_deref(),
                })
                .send(),
            AnalyzeRequest::Document {
                filename,
                bytes,
                date_of_law,
            } => {
                let part = multipart::Part::bytes(bytes.clone()).file_name(filename.clone());
                let mut form = multipart::Form::new().part("file", part);
                if let Some(date) = date_of_law {
                    form = form.text("date_of_law", date.clone());
                }
                self.client
                    .post(format!("{}/analyze_regulation_pdf", self.base_url))
                    .multipart(form)
                    .send()
            }
        }
        .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|err| SubmitError::Transport(err.to_string()))
    }
}
