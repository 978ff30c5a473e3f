use std::sync::atomic::{AtomicU32, Ordering};

/// Single-word hand-off cell for the travel direction.
///
/// One writer (the input domain) overwrites, one reader (the render domain)
/// samples once per frame. The angle is stored as its f32 bit pattern in an
/// `AtomicU32`, so a torn read is impossible and no lock is involved.
/// Relaxed ordering suffices: the reader only wants *a* recent value, stale
/// until the next event.
#[derive(Debug)]
pub struct SharedDirection(AtomicU32);

impl SharedDirection {
    #[inline]
    pub fn new(direction: f32) -> Self {
        Self(AtomicU32::new(direction.to_bits()))
    }

    #[inline]
    pub fn store(&self, direction: f32) {
        self.0.store(direction.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}

impl Default for SharedDirection {
    fn default() -> Self {
        Self::new(0.0)
    }
}
