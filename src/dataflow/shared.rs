// ABOUTME: Reference-counted shared derivation node with trailing-expiry shutdown
// ABOUTME: Lazily starts its computation task and stops it a grace window after last use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Shared derivation nodes
//!
//! A [`Shared`] wraps a computation task that publishes into a
//! `tokio::sync::watch` channel. The task is started by the first
//! [`Shared::subscribe`] and stopped once the subscriber count has stayed at
//! zero for the configured grace window. A node stopped this way restarts
//! from its initial value on the next subscription.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_stream::stream;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_stream::Stream;

/// Factory spawning the computation task behind a node
///
/// Called on every (re)start with the sender the task publishes into. The
/// factory owns whatever upstream subscriptions the task needs; dropping the
/// returned handle via abort releases them.
type NodeFactory<T> = Box<dyn Fn(watch::Sender<T>) -> JoinHandle<()> + Send + Sync>;

struct Running<T> {
    tx: watch::Sender<T>,
    task: JoinHandle<()>,
}

struct ShareInner<T> {
    subscribers: usize,
    /// Bumped each time the count drops to zero, so a stale grace timer can
    /// tell the node was resubscribed and released again after it was armed.
    epoch: u64,
    running: Option<Running<T>>,
}

struct SharedState<T> {
    initial: T,
    grace: Duration,
    factory: NodeFactory<T>,
    inner: Mutex<ShareInner<T>>,
}

fn lock<T>(inner: &Mutex<ShareInner<T>>) -> MutexGuard<'_, ShareInner<T>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A shared derivation node
///
/// Cloning shares the same node; each clone can hand out [`Live`] handles.
pub struct Shared<T: Clone + Send + Sync + 'static> {
    state: Arc<SharedState<T>>,
}

impl<T: Clone + Send + Sync + 'static> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Shared<T> {
    /// Create a node that starts lazily on first subscription
    ///
    /// `initial` is the value observers see before the task's first
    /// publication, and again after a stop/restart cycle.
    pub fn new<F>(initial: T, grace: Duration, factory: F) -> Self
    where
        F: Fn(watch::Sender<T>) -> JoinHandle<()> + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(SharedState {
                initial,
                grace,
                factory: Box::new(factory),
                inner: Mutex::new(ShareInner {
                    subscribers: 0,
                    epoch: 0,
                    running: None,
                }),
            }),
        }
    }

    /// Subscribe to the node, starting its computation task if needed
    ///
    /// # Panics
    ///
    /// The factories used in this crate spawn onto the ambient Tokio runtime,
    /// so the first subscription must happen inside one.
    #[must_use]
    pub fn subscribe(&self) -> Live<T> {
        let mut inner = lock(&self.state.inner);
        inner.subscribers += 1;

        let tx = if let Some(running) = &inner.running {
            running.tx.clone()
        } else {
            let (tx, _bootstrap_rx) = watch::channel(self.state.initial.clone());
            let task = (self.state.factory)(tx.clone());
            inner.running = Some(Running {
                tx: tx.clone(),
                task,
            });
            tx
        };

        Live {
            rx: tx.subscribe(),
            _guard: LiveGuard {
                state: Arc::clone(&self.state),
            },
        }
    }

    /// Whether the computation task is currently running
    #[must_use]
    pub fn is_active(&self) -> bool {
        lock(&self.state.inner).running.is_some()
    }
}

/// A live view of a shared derivation node
///
/// Holding a `Live` keeps the node's computation task alive. Dropping the
/// last handle arms the node's trailing-expiry timer.
pub struct Live<T: Clone + Send + Sync + 'static> {
    rx: watch::Receiver<T>,
    _guard: LiveGuard<T>,
}

impl<T: Clone + Send + Sync + 'static> Live<T> {
    /// Current value of the derivation
    #[must_use]
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Current value, marked seen so [`Live::changed`] waits for a newer one
    #[must_use]
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next change; `false` once the node has shut down
    ///
    /// Cancel-safe: dropping the future never loses an update.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Consume into a stream yielding the current value and every change
    pub fn into_stream(mut self) -> impl Stream<Item = T> {
        stream! {
            loop {
                yield self.latest();
                if !self.changed().await {
                    break;
                }
            }
        }
    }
}

struct LiveGuard<T: Clone + Send + Sync + 'static> {
    state: Arc<SharedState<T>>,
}

impl<T: Clone + Send + Sync + 'static> Drop for LiveGuard<T> {
    fn drop(&mut self) {
        let mut inner = lock(&self.state.inner);
        inner.subscribers -= 1;
        if inner.subscribers > 0 {
            return;
        }
        inner.epoch += 1;
        let armed_epoch = inner.epoch;
        drop(inner);

        let Ok(handle) = Handle::try_current() else {
            // No runtime left to run the grace timer; stop immediately.
            stop_node(&self.state);
            return;
        };

        let state = Arc::clone(&self.state);
        handle.spawn(async move {
            sleep(state.grace).await;
            let mut inner = lock(&state.inner);
            if inner.subscribers == 0 && inner.epoch == armed_epoch {
                if let Some(running) = inner.running.take() {
                    running.task.abort();
                    tracing::debug!("stopped idle derivation node after grace window");
                }
            }
        });
    }
}

fn stop_node<T>(state: &SharedState<T>) {
    let mut inner = lock(&state.inner);
    if inner.subscribers == 0 {
        if let Some(running) = inner.running.take() {
            running.task.abort();
        }
    }
}
