//! Named method channels between a UI layer and host-side handlers.
//!
//! A [`MethodChannel`] is a string-identified logical pipe: the UI layer
//! invokes a named method on it and awaits a payload or a structured error.
//! Handlers implement [`MethodHandler`] and are registered on a [`MessageHub`]
//! during application launch. Every invocation resolves exactly once; a
//! handler that dies without replying surfaces as [`ChannelError::Closed`]
//! rather than a hang.

#![warn(missing_docs)]

mod error;
mod logging;

pub use error::ChannelError;
pub use logging::LogScope;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named operation request sent over a channel.
///
/// Calls are ephemeral: they carry no identity and no state survives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Name of the invoked method.
    pub method: String,
    /// Opaque arguments, if any. The channel layer never inspects these.
    pub arguments: Option<Value>,
}

impl MethodCall {
    /// Create a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Attach arguments to the call.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// Reply payload delivered to the caller on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw binary typed data, e.g. encoded image bytes.
    Bytes(Vec<u8>),
    /// Success with no payload.
    Empty,
}

/// A host-side handler attached to a named channel.
///
/// Answering through a `Result` guarantees exactly one resolution per
/// invocation. Unknown methods answer [`ChannelError::NotImplemented`].
pub trait MethodHandler: Send + Sync {
    /// Answer a single method call.
    ///
    /// # Errors
    /// Structured failures the caller should see, or
    /// [`ChannelError::NotImplemented`] for unrecognized methods.
    fn on_method_call(&self, call: MethodCall) -> Result<Payload, ChannelError>;
}

/// A string-identified pipe the UI layer uses to invoke host-side operations.
#[derive(Clone)]
pub struct MethodChannel {
    name: Arc<str>,
    handler: Arc<dyn MethodHandler>,
}

impl fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl MethodChannel {
    /// Create a channel bound to a handler.
    pub fn new(name: impl Into<Arc<str>>, handler: Arc<dyn MethodHandler>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// Name identifying this channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke a method and await its result.
    ///
    /// The handler runs on a worker thread, so the caller's thread never
    /// blocks on the underlying system query and the completion may arrive
    /// from any thread. Calls are independent; no state is shared between
    /// invocations.
    ///
    /// # Errors
    /// Whatever the handler answers, or [`ChannelError::Closed`] if the
    /// handler dropped without replying.
    pub async fn invoke(&self, call: MethodCall) -> Result<Payload, ChannelError> {
        let (tx, rx) = oneshot::channel();
        let handler = Arc::clone(&self.handler);
        std::thread::spawn(move || {
            let _ = tx.send(handler.on_method_call(call));
        });
        rx.await.map_err(|_| ChannelError::Closed)?
    }
}

/// Registry of named channels, populated during application launch.
#[derive(Debug, Default)]
pub struct MessageHub {
    channels: HashMap<Arc<str>, MethodChannel>,
}

impl MessageHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a channel name, replacing any previous
    /// handler for that name, and return the bound channel.
    pub fn register(
        &mut self,
        name: impl Into<Arc<str>>,
        handler: Arc<dyn MethodHandler>,
    ) -> MethodChannel {
        let name = name.into();
        let channel = MethodChannel::new(Arc::clone(&name), handler);
        self.channels.insert(name, channel.clone());
        channel
    }

    /// Look up a channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<MethodChannel> {
        self.channels.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    impl MethodHandler for Echo {
        fn on_method_call(&self, call: MethodCall) -> Result<Payload, ChannelError> {
            match call.method.as_str() {
                "ping" => Ok(Payload::Bytes(b"pong".to_vec())),
                "noop" => Ok(Payload::Empty),
                "fail" => Err(ChannelError::Platform {
                    code: "UNAVAILABLE".into(),
                    message: "backend down".into(),
                }),
                "die" => panic!("handler died"),
                _ => Err(ChannelError::NotImplemented),
            }
        }
    }

    fn echo_channel() -> MethodChannel {
        MethodChannel::new("test/echo", Arc::new(Echo))
    }

    #[tokio::test]
    async fn invoke_delivers_handler_payload() {
        let reply = echo_channel().invoke(MethodCall::new("ping")).await;
        assert_eq!(reply, Ok(Payload::Bytes(b"pong".to_vec())));
    }

    #[tokio::test]
    async fn empty_payload_is_delivered() {
        let reply = echo_channel().invoke(MethodCall::new("noop")).await;
        assert_eq!(reply, Ok(Payload::Empty));
    }

    #[tokio::test]
    async fn unknown_method_is_not_implemented() {
        let call = MethodCall::new("unknownMethod").with_arguments(json!({"ignored": true}));
        let reply = echo_channel().invoke(call).await;
        assert_eq!(reply, Err(ChannelError::NotImplemented));
    }

    #[tokio::test]
    async fn platform_errors_reach_the_caller() {
        let reply = echo_channel().invoke(MethodCall::new("fail")).await;
        assert_eq!(
            reply,
            Err(ChannelError::Platform {
                code: "UNAVAILABLE".into(),
                message: "backend down".into(),
            })
        );
    }

    #[tokio::test]
    async fn dead_handler_still_resolves_the_caller() {
        let reply = echo_channel().invoke(MethodCall::new("die")).await;
        assert_eq!(reply, Err(ChannelError::Closed));
    }

    #[tokio::test]
    async fn hub_returns_registered_channels() {
        let mut hub = MessageHub::new();
        let registered = hub.register("test/echo", Arc::new(Echo));
        assert_eq!(registered.name(), "test/echo");
        assert!(hub.channel("test/echo").is_some());
        assert!(hub.channel("test/other").is_none());
    }
}
