use std::time::Duration;

use crate::error::{Result, SurveyError};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SurveyError::Acquisition(format!("Failed to create HTTP client: {e}")))?;

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                SurveyError::Acquisition(format!("Request timeout downloading {url}"))
            } else if e.is_connect() {
                SurveyError::Acquisition(format!("Failed to connect to {url}"))
            } else {
                SurveyError::Acquisition(format!("Failed to download {url}: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::Acquisition(format!(
                "Failed to download {url}: HTTP {status}"
            )));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| SurveyError::Acquisition(format!("Failed to read response from {url}: {e}")))
    }
}
