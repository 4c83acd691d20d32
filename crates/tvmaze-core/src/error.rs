//! Error types for the TVmaze search widget
//!
//! This module defines all error types used throughout the library.
//! CatalogError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for catalog and widget operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to decode a JSON response body
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Requested resource was not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid CSS selector in a click event payload
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Click target selector matched nothing in the results container
    #[error("Click target not found: {0}")]
    TargetNotFound(String),

    /// Show block is missing its show-id attribute
    #[error("No show id on any ancestor of: {0}")]
    MissingShowId(String),
}

/// Serialize CatalogError as a string for Tauri compatibility
impl Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for catalog and widget operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let error = CatalogError::NotFound("https://api.tvmaze.com/shows/0/episodes".to_string());
        assert_eq!(
            error.to_string(),
            "Resource not found: https://api.tvmaze.com/shows/0/episodes"
        );
    }

    #[test]
    fn test_error_display_invalid_selector() {
        let error = CatalogError::InvalidSelector("button..".to_string());
        assert_eq!(error.to_string(), "Invalid selector: button..");
    }

    #[test]
    fn test_error_display_target_not_found() {
        let error = CatalogError::TargetNotFound(".no-such-element".to_string());
        assert_eq!(error.to_string(), "Click target not found: .no-such-element");
    }

    #[test]
    fn test_error_display_missing_show_id() {
        let error = CatalogError::MissingShowId("button.Show-getEpisodes".to_string());
        assert_eq!(
            error.to_string(),
            "No show id on any ancestor of: button.Show-getEpisodes"
        );
    }

    #[test]
    fn test_error_display_decode_error() {
        let inner = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error = CatalogError::DecodeError(inner);
        assert!(error.to_string().starts_with("Failed to decode response:"));
    }

    #[test]
    fn test_error_serialize_as_string() {
        let error = CatalogError::TargetNotFound("li".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Click target not found: li\"");
    }

    #[test]
    fn test_error_serialize_missing_show_id() {
        let error = CatalogError::MissingShowId("img".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"No show id on any ancestor of: img\"");
    }
}
