//! Synchronous operator chain with diagnostic hooks.
//!
//! A `Flow` carries either a value or the first error raised by one of its
//! operators. Operators after a failure are skipped, but the failure still
//! passes through them, picking up checkpoint labels, log tags and (in debug
//! mode) their assembly sites.

use std::fmt;
use std::panic::Location;

use super::debug_mode::OperatorDebug;
use super::report::{AssemblySite, Diagnosed, Diagnostics};

#[derive(Debug)]
pub struct Flow<T, E> {
    state: Result<T, E>,
    diagnostics: Diagnostics,
    sites: Vec<AssemblySite>,
    origin: Option<usize>,
    debug: bool,
}

impl<T, E> Flow<T, E> {
    /// Start a flow from a value.
    #[track_caller]
    pub fn just(value: T) -> Self {
        Self::start("just", Location::caller(), Ok(value))
    }

    /// Start a flow from an existing result.
    #[track_caller]
    pub fn from_result(result: Result<T, E>) -> Self {
        Self::start("from_result", Location::caller(), result)
    }

    fn start(operator: &'static str, location: &'static Location<'static>, state: Result<T, E>) -> Self {
        let debug = OperatorDebug::is_enabled();
        let mut sites = Vec::new();
        if debug {
            sites.push(AssemblySite::new(operator, location));
        }
        let origin = state.is_err().then_some(0);
        Self {
            state,
            diagnostics: Diagnostics::default(),
            sites,
            origin,
            debug,
        }
    }

    /// Apply an infallible operator.
    #[track_caller]
    pub fn map<U>(self, operator: &'static str, f: impl FnOnce(T) -> U) -> Flow<U, E> {
        self.step(operator, Location::caller(), |value| Ok(f(value)))
    }

    /// Apply an operator that may fail.
    #[track_caller]
    pub fn and_then<U>(self, operator: &'static str, f: impl FnOnce(T) -> Result<U, E>) -> Flow<U, E> {
        self.step(operator, Location::caller(), f)
    }

    fn step<U>(
        self,
        operator: &'static str,
        location: &'static Location<'static>,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> Flow<U, E> {
        let Flow { state, diagnostics, mut sites, mut origin, debug } = self;

        if debug {
            sites.push(AssemblySite::new(operator, location));
        }

        let state = match state {
            Ok(value) => {
                let next = f(value);
                if next.is_err() {
                    origin = Some(sites.len().saturating_sub(1));
                }
                next
            }
            Err(err) => Err(err),
        };

        Flow { state, diagnostics, sites, origin, debug }
    }

    /// Label this point of the chain. A failure crossing it records the label.
    pub fn checkpoint(mut self, label: impl Into<String>) -> Self {
        if self.state.is_err() {
            self.diagnostics.checkpoints.push(label.into());
        }
        self
    }

    /// Resolve the flow, attaching the gathered diagnostics to a failure.
    pub fn block(self) -> Result<T, Diagnosed<E>> {
        let Flow { state, mut diagnostics, mut sites, origin, .. } = self;
        match state {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Some(origin) = origin {
                    diagnostics.assembly = sites.split_off(origin.min(sites.len()));
                }
                Err(Diagnosed::new(err, diagnostics))
            }
        }
    }
}

impl<T: fmt::Debug, E: fmt::Display> Flow<T, E> {
    /// Emit the signals seen at this point as `tracing` events under `tag`.
    pub fn log(mut self, tag: &str) -> Self {
        tracing::info!(target: "greeting_service::signals", tag, "onSubscribe");
        tracing::info!(target: "greeting_service::signals", tag, "request(unbounded)");
        match &self.state {
            Ok(value) => {
                tracing::info!(target: "greeting_service::signals", tag, value = ?value, "onNext");
                tracing::info!(target: "greeting_service::signals", tag, "onComplete");
            }
            Err(err) => {
                tracing::error!(target: "greeting_service::signals", tag, error = %err, "onError");
                self.diagnostics.log_tag = Some(tag.to_string());
            }
        }
        self
    }
}
