use crate::error::Result;
use crate::request::Request;
use crate::sink::MessageSink;

pub fn execute(sink: &impl MessageSink, req: &Request) -> Result<()> {
    sink.emit(&req.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessagePostError;
    use crate::sink::testing::{FailingSink, RecordingSink};

    #[test]
    fn execute_emits_exactly_once() {
        let sink = RecordingSink::default();
        execute(&sink, &Request::new("hello")).unwrap();
        assert_eq!(*sink.lines.borrow(), vec!["hello".to_string()]);
    }

    #[test]
    fn execute_accepts_any_string() {
        for m in ["", " ", "multi\nline", "ünïcödé ✓", "{\"message\":\"nested\"}"] {
            let sink = RecordingSink::default();
            execute(&sink, &Request::new(m)).unwrap();
            assert_eq!(sink.lines.borrow().len(), 1);
            assert_eq!(sink.lines.borrow()[0], m);
        }
    }

    #[test]
    fn execute_propagates_sink_failure() {
        let err = execute(&FailingSink, &Request::new("hello")).unwrap_err();
        assert!(matches!(err, MessagePostError::Sink(_)));
    }
}
