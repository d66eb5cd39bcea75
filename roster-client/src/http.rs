//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{Employee, EmployeeCreate};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the employee records backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Build a full URL from a request path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success status code to a client error
    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }

    // ========== Employee API ==========

    /// Fetch all employees
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/api/Employee").await
    }

    /// Create an employee, returning the record with its server-assigned id
    pub async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/api/Employee", payload).await
    }

    /// Update an employee
    ///
    /// Returns the server's echo of the stored record. Backends that answer
    /// with an empty body yield the submitted record unchanged.
    pub async fn update_employee(&self, id: i64, employee: &Employee) -> ClientResult<Employee> {
        let url = self.url(&format!("/api/Employee/{id}"));
        tracing::debug!("PUT {url}");
        let response = self.client.put(&url).json(employee).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(employee.clone());
        }
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Delete an employee by id
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        let url = self.url(&format!("/api/Employee/{id}"));
        tracing::debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        Ok(())
    }
}
