//! Scripted transport for exercising the endpoint layer in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::ApiError;
use super::transport::{ApiRequest, Method, RawResponse, Transport};

type Route = (Method, String);

/// Replies from a route table and records every request it sees.
///
/// Clones share the same table and log. Unscripted routes answer 404.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    routes: Rc<RefCell<HashMap<Route, Result<RawResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.routes.borrow_mut().insert(
            (method, path.to_owned()),
            Ok(RawResponse { status, body: body.to_string() }),
        );
        self
    }

    pub(crate) fn fail(&self, method: Method, path: &str, err: ApiError) -> &Self {
        self.routes.borrow_mut().insert((method, path.to_owned()), Err(err));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn sent_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.sent()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, _base: &str, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.sent.borrow_mut().push(request);
        self.routes.borrow().get(&key).cloned().unwrap_or_else(|| {
            Ok(RawResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_owned() })
        })
    }
}
