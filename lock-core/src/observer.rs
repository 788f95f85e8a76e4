//! Capability traits for host collaborators.
//!
//! The tracker notifies a single registered observer synchronously at the
//! three signal points of a gesture, and drives an optional haptic
//! capability once per newly accumulated cell. Both are seams the host
//! fills in; the core never talks to a device itself.

/// Observer of gesture lifecycle signals.
///
/// All callbacks run synchronously on the caller's thread, in event
/// arrival order.
pub trait GestureObserver {
    /// A touch-down began a new gesture.
    fn on_started(&mut self);

    /// A new cell was accumulated (including gap-filled cells). `path` is
    /// every cell selected so far, as concatenated digits in order.
    fn on_progress(&mut self, path: &str);

    /// The gesture finished (touch-up or cancel). `path` is the final
    /// pattern; empty if no cell was ever hit.
    fn on_complete(&mut self, path: &str);
}

/// Haptic feedback capability.
pub trait Haptics {
    /// Emit one vibration pulse of the given duration.
    fn pulse(&mut self, duration_ms: u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        events: Vec<String>,
    }

    impl GestureObserver for Recorder {
        fn on_started(&mut self) {
            self.events.push("started".into());
        }
        fn on_progress(&mut self, path: &str) {
            self.events.push(format!("progress:{path}"));
        }
        fn on_complete(&mut self, path: &str) {
            self.events.push(format!("complete:{path}"));
        }
    }

    #[test]
    fn test_observer_object_safety() {
        let mut observer: Box<dyn GestureObserver> = Box::new(Recorder { events: Vec::new() });
        observer.on_started();
        observer.on_progress("01");
        observer.on_complete("014");
    }
}
