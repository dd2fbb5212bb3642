//! Single scroll-position observable shared by every scroll-driven section.
//!
//! The window has one scroll listener; it publishes a [`ScrollSample`] here
//! and the bus fans it out to subscribers in subscription order. Dropping a
//! [`Subscription`] unsubscribes, so a section that owns its subscription
//! cannot leak a handler past unmount.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Scroll and viewport metrics for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
}

type Listener = Rc<dyn Fn(ScrollSample)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    latest: Option<ScrollSample>,
}

impl BusInner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(other, _)| *other == id)
    }
}

#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. If a sample has already been published the
    /// listener receives it immediately so a late mount starts in sync.
    pub fn subscribe(&self, listener: impl Fn(ScrollSample) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let (id, latest) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.latest)
        };
        if let Some(sample) = latest {
            listener(sample);
        }
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `sample` to every subscriber, in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe from inside the callback; a
    /// listener removed earlier in the same publish is skipped.
    pub fn publish(&self, sample: ScrollSample) {
        let snapshot: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(sample);
            inner.listeners.clone()
        };
        for (id, listener) in snapshot {
            if self.inner.borrow().is_subscribed(id) {
                listener(sample);
            }
        }
    }

    pub fn latest(&self) -> Option<ScrollSample> {
        self.inner.borrow().latest
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Live registration on a [`ScrollBus`]. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|inner| inner.borrow().is_subscribed(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample(scroll_top: f64) -> ScrollSample {
        ScrollSample {
            scroll_top,
            viewport_height: 800.0,
            viewport_width: 1280.0,
        }
    }

    #[test]
    fn notifies_in_subscription_order() {
        let bus = ScrollBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _a = {
            let log = log.clone();
            bus.subscribe(move |s| log.borrow_mut().push(("a", s.scroll_top)))
        };
        let _b = {
            let log = log.clone();
            bus.subscribe(move |s| log.borrow_mut().push(("b", s.scroll_top)))
        };
        bus.publish(sample(10.0));
        bus.publish(sample(20.0));
        assert_eq!(
            *log.borrow(),
            vec![("a", 10.0), ("b", 10.0), ("a", 20.0), ("b", 20.0)]
        );
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = ScrollBus::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            bus.subscribe(move |_| hits.set(hits.get() + 1))
        };
        bus.publish(sample(1.0));
        assert!(sub.is_active());
        drop(sub);
        bus.publish(sample(2.0));
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn late_subscriber_gets_latest_sample() {
        let bus = ScrollBus::new();
        bus.publish(sample(640.0));
        let seen = Rc::new(Cell::new(0.0));
        let _sub = {
            let seen = seen.clone();
            bus.subscribe(move |s| seen.set(s.scroll_top))
        };
        assert_eq!(seen.get(), 640.0);
    }

    #[test]
    fn unsubscribe_during_publish_skips_removed_listener() {
        let bus = ScrollBus::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let victim_hits = Rc::new(Cell::new(0));

        let _killer = {
            let victim = victim.clone();
            bus.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        let sub = {
            let hits = victim_hits.clone();
            bus.subscribe(move |_| hits.set(hits.get() + 1))
        };
        *victim.borrow_mut() = Some(sub);

        bus.publish(sample(5.0));
        assert_eq!(victim_hits.get(), 0);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = ScrollBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        assert!(!sub.is_active());
        drop(sub);
    }
}
