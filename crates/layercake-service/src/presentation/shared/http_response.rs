//! Success envelope shared by every endpoint.

use serde::Serialize;

/// `{"success": true, "data": .., "message": ..}`
#[derive(Debug, Clone, Serialize)]
pub struct HttpResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> HttpResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_envelope_serializes_with_null_message() {
        let body = serde_json::to_value(HttpResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "data": [1, 2], "message": null})
        );
    }

    #[test]
    fn message_is_included_when_set() {
        let body = serde_json::to_value(HttpResponse::ok("x").with_message("done")).unwrap();
        assert_eq!(body["message"], "done");
    }
}
