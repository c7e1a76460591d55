// ============================================================================
// Event Handler Interface
// Defines the contract for observing a constant-term computation
// ============================================================================

use crate::numeric::Radix;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use parking_lot::Mutex;

/// Events emitted by the calculator, in the order they happen
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationEvent {
    /// A root's digit string was decoded
    RootConverted {
        label: String,
        base: Radix,
        digits: String,
        value: BigInt,
        timestamp: DateTime<Utc>,
    },

    /// All roots multiplied together
    ProductComputed {
        product: BigInt,
        root_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// Sign convention applied to the product
    ConstantTermComputed {
        degree: u64,
        sign: i8,
        constant_term: BigInt,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events.
/// Implementations can handle logging, progress display, testing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a computation event
    fn on_event(&self, event: ComputationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ComputationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ComputationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ComputationEvent) {
        tracing::debug!("Constant term event: {:?}", event);
    }
}

/// Keeps every event it receives; used to inspect a run after the fact
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<ComputationEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ComputationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: ComputationEvent) {
        self.events.lock().push(event);
    }
}
