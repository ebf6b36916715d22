//! Request construction and response delivery for generated proxies.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CallConfig;
use crate::error::CallError;
use crate::response::decode_response;
use crate::serializer::{escape_string, JsonSerializer, ObjectWriter};

/// Receives the outcome of one remote call.
pub trait AsyncCallback<T> {
    fn on_success(&mut self, result: Option<T>);

    fn on_failure(&mut self, error: CallError);
}

/// [`AsyncCallback`] made of two closures.
pub struct FnCallback<S, F> {
    success: S,
    failure: F,
}

impl<S, F> FnCallback<S, F> {
    pub fn new(success: S, failure: F) -> Self {
        Self { success, failure }
    }
}

impl<T, S, F> AsyncCallback<T> for FnCallback<S, F>
where
    S: FnMut(Option<T>),
    F: FnMut(CallError),
{
    fn on_success(&mut self, result: Option<T>) {
        (self.success)(result)
    }

    fn on_failure(&mut self, error: CallError) {
        (self.failure)(error)
    }
}

/// Builds the JSON body of one request.
///
/// Parameters are positional; each one is written by its own serializer.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: CallConfig,
    method: String,
    params: String,
    count: usize,
}

impl RequestBuilder {
    pub fn new(config: &CallConfig, method: impl Into<String>) -> Self {
        Self {
            config: config.clone(),
            method: method.into(),
            params: String::new(),
            count: 0,
        }
    }

    pub fn param<S>(&mut self, serializer: &S, value: Option<&S::Value>) -> &mut Self
    where
        S: JsonSerializer + ?Sized,
    {
        if self.count > 0 {
            self.params.push(',');
        }
        serializer.print_json(&mut self.params, value);
        self.count += 1;
        self
    }

    pub fn param_count(&self) -> usize {
        self.count
    }

    /// Completes the envelope with the call `id`.
    pub fn finish(&self, id: u64) -> String {
        let mut out = String::with_capacity(self.params.len() + self.method.len() + 48);
        let (version_key, version) = self.config.version.envelope_member();
        let mut obj = ObjectWriter::new(&mut out);
        obj.raw_member(version_key, &escape_string(version))
            .raw_member("method", &escape_string(&self.method))
            .raw_member("params", &format!("[{}]", self.params))
            .raw_member("id", &id.to_string());
        obj.finish();
        out
    }
}

/// Parses a raw response and delivers its outcome to `callback`.
///
/// Exactly one of `on_success` / `on_failure` is called. A server error
/// envelope is delivered as [`CallError::Remote`] with the message unchanged.
pub fn dispatch_response<S, C>(serializer: &S, text: &str, callback: &mut C)
where
    S: JsonSerializer + ?Sized,
    C: AsyncCallback<S::Value> + ?Sized,
{
    let outcome = serde_json::from_str::<Value>(text)
        .map_err(CallError::from)
        .and_then(|body| decode_response(serializer, &body));
    match outcome {
        Ok(result) => {
            debug!(present = result.is_some(), "delivering call result");
            callback.on_success(result);
        }
        Err(err) => {
            match &err {
                CallError::Remote(remote) => {
                    debug!(remote_message = remote.message(), "server returned an error envelope");
                }
                other => {
                    let snippet: String = text.chars().take(64).collect();
                    warn!(error = %other, response = %snippet, "failed to handle response");
                }
            }
            callback.on_failure(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProtocolVersion;
    use crate::serializer::{ListSerializer, NumberSerializer, StringSerializer};

    #[test]
    fn request_envelope_v1_1() {
        let mut req = RequestBuilder::new(&CallConfig::default(), "lookup");
        req.param(&StringSerializer, Some(&"a\"b".to_string()))
            .param(&NumberSerializer::<i32>::new(), None);
        assert_eq!(req.param_count(), 2);
        assert_eq!(
            req.finish(7),
            r#"{"version":"1.1","method":"lookup","params":["a\"b",null],"id":7}"#
        );
    }

    #[test]
    fn request_envelope_v2_0_without_params() {
        let req = RequestBuilder::new(&CallConfig::new(ProtocolVersion::V2_0), "ping");
        assert_eq!(
            req.finish(1),
            r#"{"jsonrpc":"2.0","method":"ping","params":[],"id":1}"#
        );
    }

    #[test]
    fn request_body_is_valid_json() {
        let mut req = RequestBuilder::new(&CallConfig::default(), "m\n");
        req.param(&ListSerializer::new(StringSerializer), Some(&vec!["x".to_string()]));
        let parsed: Value = serde_json::from_str(&req.finish(2)).unwrap();
        assert_eq!(parsed["method"], "m\n");
        assert_eq!(parsed["params"], serde_json::json!([["x"]]));
    }

    #[test]
    fn dispatch_delivers_exactly_one_outcome() {
        let mut results = Vec::new();
        let mut failures = Vec::new();
        let mut cb = FnCallback::new(
            |r: Option<i32>| results.push(r),
            |e: CallError| failures.push(e.to_string()),
        );
        let ser = NumberSerializer::<i32>::new();
        dispatch_response(&ser, r#"{"result":3}"#, &mut cb);
        dispatch_response(&ser, r#"{"error":{"message":"not found"}}"#, &mut cb);
        dispatch_response(&ser, "{not json", &mut cb);
        drop(cb);
        assert_eq!(results, vec![Some(3)]);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0], "not found");
        assert!(failures[1].starts_with("response is not valid JSON"));
    }
}
