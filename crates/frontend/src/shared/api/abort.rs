//! Request cancellation and bounded timeouts.
//!
//! Every request runs under its own `AbortController`. A one-shot timer
//! aborts hung requests after [`REQUEST_TIMEOUT_MS`]; [`RequestScope`]
//! aborts whatever is in flight when the owning component unmounts.

use super::error::ApiError;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

struct ControllerInner {
    controller: Option<AbortController>,
    timed_out: Cell<bool>,
}

/// One network request's abort handle.
#[derive(Clone)]
pub struct FetchController {
    inner: Rc<ControllerInner>,
}

impl FetchController {
    pub fn new(timeout_ms: u32) -> Self {
        let inner = Rc::new(ControllerInner {
            // AbortController is unavailable outside a browser context;
            // requests then run without cancellation support.
            controller: AbortController::new().ok(),
            timed_out: Cell::new(false),
        });

        if inner.controller.is_some() {
            let weak = Rc::downgrade(&inner);
            Timeout::new(timeout_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    inner.timed_out.set(true);
                    if let Some(controller) = &inner.controller {
                        controller.abort();
                    }
                }
            })
            .forget();
        }

        Self { inner }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.inner.controller.as_ref().map(|c| c.signal())
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.inner.controller {
            controller.abort();
        }
    }

    fn aborted(&self) -> bool {
        self.inner
            .controller
            .as_ref()
            .map(|c| c.signal().aborted())
            .unwrap_or(false)
    }

    /// Classify a failed send: timer fired, externally aborted, or a real
    /// transport failure.
    pub fn classify_send_error(&self, error: impl std::fmt::Display) -> ApiError {
        if self.inner.timed_out.get() {
            ApiError::Timeout
        } else if self.aborted() {
            ApiError::Cancelled
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

/// Component-scoped registry that aborts the in-flight request on unmount.
#[derive(Clone, Copy)]
pub struct RequestScope {
    current: StoredValue<Option<FetchController>, LocalStorage>,
}

impl RequestScope {
    /// Must be called during component setup so `on_cleanup` registers with
    /// the component's owner.
    pub fn new() -> Self {
        let current = StoredValue::new_local(None::<FetchController>);
        on_cleanup(move || {
            if let Some(controller) = current.get_value() {
                controller.abort();
            }
        });
        Self { current }
    }

    /// Start a new request lifetime with the default timeout.
    pub fn begin(&self) -> FetchController {
        let controller = FetchController::new(REQUEST_TIMEOUT_MS);
        self.current.set_value(Some(controller.clone()));
        controller
    }
}
