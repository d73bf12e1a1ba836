//! A module for handling diagnostics produced by the compiler phases.
//!
//! A phase never decides how its diagnostics are shown. It reports each one to a [`Handler`],
//! and the caller picks the handler: [`Storage`] to inspect them later, [`Dummy`] to ignore them,
//! or a [`Counter`] wrapped around another handler to know how many went through it.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    RwLock, RwLockReadGuard,
};

use derive_more::Deref;

/// Represents a trait responsible for handling diagnostics reported by a compiler phase.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics, in the order they
/// were reported.
#[derive(Debug)]
pub struct Storage<T> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the stored diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner().unwrap() }

    /// Returns a read guard over the stored diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.diagnostics.read().unwrap() }
}

impl<T> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T, U: Into<T>> Handler<U> for Storage<T> {
    fn receive(&self, diagnostic: U) { self.diagnostics.write().unwrap().push(diagnostic.into()); }
}

/// Is a struct that implements [`Handler`] trait by discarding every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _diagnostic: T) {}
}

/// Is a struct that implements [`Handler`] trait by forwarding every diagnostic to the wrapped
/// handler and counting how many were received.
///
/// The wrapped handler is reachable through [`std::ops::Deref`]. Without one, the counter wraps
/// [`Dummy`] and only counts.
#[derive(Debug, Default, Deref)]
pub struct Counter<H = Dummy> {
    #[deref]
    handler: H,
    count: AtomicUsize,
}

impl<H> Counter<H> {
    /// Creates a new [`Counter`] in front of the given handler.
    #[must_use]
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            count: AtomicUsize::new(0),
        }
    }

    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { self.count.load(Ordering::Relaxed) }

    /// Returns `true` if no diagnostic has been received since the creation or the last reset.
    #[must_use]
    pub fn is_clean(&self) -> bool { self.count() == 0 }

    /// Resets the counter to zero.
    pub fn reset(&self) { self.count.store(0, Ordering::Relaxed); }

    /// Consumes the [`Counter`] and returns the wrapped handler.
    #[must_use]
    pub fn into_inner(self) -> H { self.handler }
}

impl<T, H: Handler<T>> Handler<T> for Counter<H> {
    fn receive(&self, diagnostic: T) {
        self.handler.receive(diagnostic);
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests;
