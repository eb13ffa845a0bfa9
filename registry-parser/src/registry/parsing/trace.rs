//! Transition tracing
//!
//! The driver reports every transition to a [TransitionTracer]. [LogTracer] forwards them
//! to `tracing` at trace level; tests plug in their own to record the path taken.

use super::state::State;

/// One driver step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'a> {
    pub index: usize,
    pub token: &'a str,
    pub from: State,
    /// `None` when no transition matched (or the token was rejected)
    pub to: Option<State>,
    /// Kind of the in-progress top-level node after the step
    pub node: Option<&'static str>,
}

pub trait TransitionTracer {
    fn transition(&mut self, transition: &Transition<'_>);
}

impl<T: TransitionTracer + ?Sized> TransitionTracer for &mut T {
    fn transition(&mut self, transition: &Transition<'_>) {
        (**self).transition(transition)
    }
}

impl<T: TransitionTracer + ?Sized> TransitionTracer for Box<T> {
    fn transition(&mut self, transition: &Transition<'_>) {
        (**self).transition(transition)
    }
}

/// Emits each transition as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl TransitionTracer for LogTracer {
    fn transition(&mut self, t: &Transition<'_>) {
        let to = t.to.map(|s| s.label()).unwrap_or("halt");
        tracing::trace!(
            target: "registry_parser::transitions",
            index = t.index,
            token = t.token,
            from = t.from.label(),
            to,
            node = t.node.unwrap_or("-"),
            "transition"
        );
    }
}
