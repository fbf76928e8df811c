//! Last-write-wins pointer mailbox
//!
//! The input listener posts horizontal pointer positions; the simulation reads
//! the latest one once per tick. Unread samples are overwritten.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Single-slot shared pointer position (viewport coordinates)
#[derive(Debug, Clone)]
pub struct PointerMailbox {
    slot: Arc<AtomicU32>,
}

impl PointerMailbox {
    pub fn new(initial_x: f32) -> Self {
        Self {
            slot: Arc::new(AtomicU32::new(initial_x.to_bits())),
        }
    }

    /// Overwrite the stored sample
    pub fn post(&self, client_x: f32) {
        self.slot.store(client_x.to_bits(), Ordering::Relaxed);
    }

    /// Most recent sample
    pub fn latest(&self) -> f32 {
        f32::from_bits(self.slot.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mailbox = PointerMailbox::new(120.0);
        assert_eq!(mailbox.latest(), 120.0);

        mailbox.post(10.0);
        mailbox.post(-42.5);
        assert_eq!(mailbox.latest(), -42.5);
    }

    #[test]
    fn test_clones_share_slot() {
        let reader = PointerMailbox::new(0.0);
        let writer = reader.clone();
        writer.post(300.0);
        assert_eq!(reader.latest(), 300.0);
    }

    #[test]
    fn test_post_from_other_thread() {
        let reader = PointerMailbox::new(0.0);
        let writer = reader.clone();
        std::thread::spawn(move || writer.post(77.0)).join().unwrap();
        assert_eq!(reader.latest(), 77.0);
    }
}
