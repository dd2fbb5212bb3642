use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag.
///
/// Deferred callbacks (timers, observer callbacks) capture a clone and check
/// it before touching component state. The owner calls [`Liveness::kill`]
/// from its teardown.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }

    /// Wrap `f` so it only runs while alive.
    pub fn guard<T>(&self, f: impl Fn(T)) -> impl Fn(T) {
        let alive = self.clone();
        move |value| {
            if alive.is_alive() {
                f(value);
            }
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_callback_stops_after_kill() {
        let liveness = Liveness::new();
        let hits = Rc::new(Cell::new(0));
        let callback = {
            let hits = hits.clone();
            liveness.guard(move |n: u32| hits.set(hits.get() + n))
        };
        callback(2);
        liveness.kill();
        callback(5);
        assert_eq!(hits.get(), 2);
        assert!(!liveness.clone().is_alive());
    }
}
