use std::collections::VecDeque;

/// Count-bounded FIFO of the most recent readings.
///
/// Capacity is fixed at construction and never exceeded: pushing into a full
/// window evicts the oldest value first.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    data: VecDeque<f64>,
}

impl RollingWindow {
    /// A zero capacity is bumped to one so the window can always hold the
    /// reading being evaluated.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a value, returning the evicted one if the window was full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(value);
        evicted
    }

    /// Contiguous view of the window in insertion order, oldest first.
    pub fn as_slice(&mut self) -> &[f64] {
        self.data.make_contiguous()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn oldest(&self) -> Option<f64> {
        self.data.front().copied()
    }

    pub fn newest(&self) -> Option<f64> {
        self.data.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
