use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, LambdaEvent};
use crate::commands::message_post;
use crate::error::{MessagePostError, Result};
use crate::request::Request;
use crate::sink::{MessageSink, TracingSink};

pub const INVALID_JSON_BODY: &str = "invalid json format";
pub const SERVER_ERROR_BODY: &str = "Internal Server Error";

/// Outcome of one handler invocation, before it is shaped into a gateway response.
#[derive(Debug)]
pub enum Outcome {
    Posted,
    BadRequest(MessagePostError),
    Failed(MessagePostError),
}

impl Outcome {
    pub fn into_response(self) -> ApiGatewayProxyResponse {
        let (status_code, body) = match self {
            Outcome::Posted => (200, None),
            Outcome::BadRequest(e) => {
                tracing::warn!(error = %e, "rejecting request body");
                (400, Some(INVALID_JSON_BODY))
            }
            Outcome::Failed(e) => {
                tracing::error!(error = %e, "message post failed");
                (500, Some(SERVER_ERROR_BODY))
            }
        };
        ApiGatewayProxyResponse {
            status_code,
            body: body.map(|b| Body::Text(b.to_string())),
            ..Default::default()
        }
    }
}

/// Decode the body and post the message. The sink is not touched when decoding fails.
pub fn process(sink: &impl MessageSink, body: Option<&str>) -> Outcome {
    let req = match Request::from_body(body) {
        Ok(req) => req,
        Err(e) => return Outcome::BadRequest(e),
    };

    match message_post::execute(sink, &req) {
        Ok(()) => Outcome::Posted,
        Err(e) => Outcome::Failed(e),
    }
}

pub fn handle(sink: &impl MessageSink, event: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
    process(sink, event.body.as_deref()).into_response()
}

/// Serve API Gateway invocations until the runtime shuts down.
pub fn serve() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tracing::debug!("starting lambda runtime");
    runtime
        .block_on(lambda_runtime::run(service_fn(
            |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
                Ok::<_, lambda_runtime::Error>(handle(&TracingSink, &event.payload))
            },
        )))
        .map_err(|e| MessagePostError::Runtime(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::testing::{FailingSink, RecordingSink};

    fn event(body: Option<&str>) -> ApiGatewayProxyRequest {
        ApiGatewayProxyRequest {
            body: body.map(str::to_string),
            ..Default::default()
        }
    }

    fn body_text(resp: &ApiGatewayProxyResponse) -> Option<String> {
        match &resp.body {
            Some(Body::Text(s)) => Some(s.clone()),
            Some(other) => panic!("unexpected body {:?}", other),
            None => None,
        }
    }

    #[test]
    fn valid_body_returns_200_with_empty_body() {
        let sink = RecordingSink::default();
        let resp = handle(&sink, &event(Some(r#"{"message":"hi"}"#)));
        assert_eq!(resp.status_code, 200);
        assert_eq!(body_text(&resp), None);
        assert_eq!(*sink.lines.borrow(), vec!["hi".to_string()]);
    }

    #[test]
    fn empty_message_is_posted() {
        let sink = RecordingSink::default();
        let resp = handle(&sink, &event(Some(r#"{"message":""}"#)));
        assert_eq!(resp.status_code, 200);
        assert_eq!(*sink.lines.borrow(), vec![String::new()]);
    }

    #[test]
    fn malformed_body_returns_400_without_posting() {
        let sink = RecordingSink::default();
        let resp = handle(&sink, &event(Some("not-json")));
        assert_eq!(resp.status_code, 400);
        assert_eq!(body_text(&resp).as_deref(), Some("invalid json format"));
        assert!(sink.lines.borrow().is_empty());
    }

    #[test]
    fn empty_object_and_null_post_empty_message() {
        for body in ["{}", "null"] {
            let sink = RecordingSink::default();
            let resp = handle(&sink, &event(Some(body)));
            assert_eq!(resp.status_code, 200);
            assert_eq!(body_text(&resp), None);
            assert_eq!(*sink.lines.borrow(), vec![String::new()]);
        }
    }

    #[test]
    fn missing_body_returns_400() {
        let sink = RecordingSink::default();
        let resp = handle(&sink, &event(None));
        assert_eq!(resp.status_code, 400);
        assert_eq!(body_text(&resp).as_deref(), Some(INVALID_JSON_BODY));
        assert!(sink.lines.borrow().is_empty());
    }

    #[test]
    fn sink_failure_returns_500() {
        let resp = handle(&FailingSink, &event(Some(r#"{"message":"hi"}"#)));
        assert_eq!(resp.status_code, 500);
        assert_eq!(body_text(&resp).as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn process_reports_outcomes() {
        let sink = RecordingSink::default();
        assert!(matches!(process(&sink, Some(r#"{"message":"a"}"#)), Outcome::Posted));
        assert!(matches!(process(&sink, Some("[1,2]")), Outcome::BadRequest(_)));
        assert!(matches!(
            process(&FailingSink, Some(r#"{"message":"a"}"#)),
            Outcome::Failed(MessagePostError::Sink(_))
        ));
    }
}
