use serde::Deserialize;
use crate::error::{MessagePostError, Result};

/// A message to post, built from `--message` or from an event body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub message: String,
}

impl Request {
    pub fn new(message: impl Into<String>) -> Self {
        Request {
            message: message.into(),
        }
    }

    /// Decode an API Gateway body of the form `{"message": "..."}`.
    /// `{}` and `null` decode to an empty message.
    pub fn from_body(body: Option<&str>) -> Result<Request> {
        let body = body.ok_or(MessagePostError::MissingBody)?;
        let req: Option<Request> =
            serde_json::from_str(body).map_err(MessagePostError::InvalidJson)?;
        Ok(req.unwrap_or_default())
    }
}
