//! In-memory [`Transport`] for tests: replays canned responses in order and records what was sent.

use crate::{
    error::ClientError,
    request::ApiRequest,
    transport::{
        ApiResponse,
        Transport,
    },
};
use std::{
    cell::RefCell,
    collections::VecDeque,
};

#[derive(Debug)]
enum Scripted {
    Respond(ApiResponse),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    /// Queues a `200 OK` with `body`.
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.respond_with(ApiResponse::ok(body))
    }

    pub fn respond_with(self, response: ApiResponse) -> Self {
        self.script.borrow_mut().push_back(Scripted::Respond(response));
        self
    }

    /// Queues a transport failure carrying `message`.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.script.borrow_mut().push_back(Scripted::Fail(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        self.sent.borrow_mut().push(request.clone());
        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(ClientError::transport(request.resource(), message)),
            None => Err(ClientError::transport(
                request.resource(),
                format!("no scripted response left for {request}"),
            )),
        }
    }
}
