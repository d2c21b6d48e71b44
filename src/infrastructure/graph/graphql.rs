//! GraphQL case graph adapter

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::application::ports::{CaseGraph, GraphError};
use crate::domain::case::GraphResponse;
use crate::domain::payload::{render_payload, QueryTemplate};

const JSON: &str = "application/json";

/// Case graph backed by a GraphQL endpoint
pub struct GraphQlCaseGraph {
    url: String,
    client: reqwest::Client,
}

impl GraphQlCaseGraph {
    /// Create an adapter for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create an adapter sharing an existing client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Render the template and POST it
    async fn send(
        &self,
        template: QueryTemplate,
        args: &[&str],
    ) -> Result<reqwest::Response, GraphError> {
        let body = render_payload(template, args)?;
        tracing::debug!(template = %template, url = %self.url, "Sending graph request");

        self.client
            .post(&self.url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| GraphError::RequestFailed(e.to_string()))
    }

    /// An empty body reads as `null`
    fn parse_response(body: &str) -> Result<Option<GraphResponse>, GraphError> {
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(body).map_err(|e| GraphError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl CaseGraph for GraphQlCaseGraph {
    async fn fetch_case(
        &self,
        doctor_id: &str,
        case_id: &str,
    ) -> Result<Option<GraphResponse>, GraphError> {
        let response = self
            .send(QueryTemplate::DoctorCase, &[doctor_id, case_id])
            .await?;

        let status = response.status();
        if !status.is_success() {
            let err = GraphError::LookupFailed(status.to_string());
            tracing::error!("{}", err);
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| GraphError::ParseError(e.to_string()))?;

        Self::parse_response(&body)
    }

    async fn upload_transcription(
        &self,
        doctor_id: &str,
        case_id: &str,
        text: &str,
    ) -> Result<bool, GraphError> {
        let response = self
            .send(QueryTemplate::UploadTranscription, &[doctor_id, case_id, text])
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Transcription upload rejected");
        }
        Ok(status.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_endpoint_url() {
        let graph = GraphQlCaseGraph::new("http://localhost:8080/v1/data");
        assert_eq!(graph.url(), "http://localhost:8080/v1/data");
    }

    #[test]
    fn parse_null_body() {
        assert_eq!(GraphQlCaseGraph::parse_response("null").unwrap(), None);
    }

    #[test]
    fn parse_empty_body() {
        assert_eq!(GraphQlCaseGraph::parse_response("").unwrap(), None);
        assert_eq!(GraphQlCaseGraph::parse_response(" \n\t").unwrap(), None);
    }

    #[test]
    fn parse_data_body() {
        let parsed = GraphQlCaseGraph::parse_response(r#"{"data":{"doctor":{"edges":[]}}}"#)
            .unwrap()
            .unwrap();
        assert!(parsed.data.unwrap().doctor.is_empty());
    }

    #[test]
    fn parse_invalid_body() {
        let err = GraphQlCaseGraph::parse_response("<html>").unwrap_err();
        assert!(matches!(err, GraphError::ParseError(_)));
    }
}
