use axum::Error as AxumError;
use reqwest::Error as ReqwestError;
use crate::data::models::ProxyError;

impl From<ReqwestError> for ProxyError {
    fn from(err: ReqwestError) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout
        } else if err.is_builder() {
            ProxyError::InvalidTarget(err.to_string())
        } else {
            ProxyError::Transport(err.to_string())
        }
    }
}

impl From<AxumError> for ProxyError {
    fn from(err: AxumError) -> Self {
        ProxyError::Body(err.to_string())
    }
}
