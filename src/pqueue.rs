use core::fmt;
use std::{fmt::Display, str::FromStr};

use log::{debug, trace};
use thiserror::Error;

use crate::linkedlist::{Iter, LinkedList};

/// Selector for a queue that dequeues the largest length first.
pub const LARGE_FIRST: &str = "large";
/// Selector for a queue that dequeues the smallest length first.
pub const SMALL_FIRST: &str = "small";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("invalid sort order '{0}', expected 'large' or 'small'")]
    InvalidConfiguration(String),
}

/*
 * A job : its length is the priority key, info is carried along untouched.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    length: i64,
    info: String,
}

impl Job {
    pub fn new(length: i64, info: impl Into<String>) -> Self {
        Job {
            length,
            info: info.into(),
        }
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

impl Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {}", self.length, self.info)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest length first
    Descending,
    /// Smallest length first
    Ascending,
}

impl SortOrder {
    /*
     * Whether a new job of length <new> is placed in front of an
     * existing job of length <existing>. Equal lengths go in front.
     */
    fn goes_before(self, new: i64, existing: i64) -> bool {
        match self {
            SortOrder::Descending => new >= existing,
            SortOrder::Ascending => new <= existing,
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LARGE_FIRST => Ok(SortOrder::Descending),
            SMALL_FIRST => Ok(SortOrder::Ascending),
            other => Err(QueueError::InvalidConfiguration(other.to_string())),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Descending => write!(f, "{}", LARGE_FIRST),
            SortOrder::Ascending => write!(f, "{}", SMALL_FIRST),
        }
    }
}

/// Priority queue of jobs kept sorted on insert.
///
/// The head is always the next job [`PriorityQueue::get`] returns. Among
/// jobs of equal length, the most recently inserted one comes out first.
pub struct PriorityQueue {
    jobs: LinkedList<Job>,
    sort_order: SortOrder,
}

impl PriorityQueue {
    /// Creates an empty queue from a `"large"` or `"small"` selector.
    pub fn new(sort_order: &str) -> Result<Self, QueueError> {
        Ok(Self::with_order(sort_order.parse()?))
    }

    pub fn with_order(sort_order: SortOrder) -> Self {
        debug!("New priority queue, {} first", sort_order);
        PriorityQueue {
            jobs: LinkedList::new(),
            sort_order,
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn size(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn peek(&self) -> Option<&Job> {
        self.jobs.front()
    }

    pub fn insert(&mut self, length: i64, info: impl Into<String>) {
        let job = Job::new(length, info);
        let order = self.sort_order;
        let position = self
            .jobs
            .insert_before(job, |existing| order.goes_before(length, existing.length));
        trace!("Inserted job of length {} at position {}", length, position);
    }

    /// Removes and returns the head job, `None` if the queue is empty.
    pub fn get(&mut self) -> Option<Job> {
        let job = self.jobs.pop_front()?;
        trace!("Popped job of length {}, {} left", job.length, self.size());
        Some(job)
    }

    /// Jobs from head to tail, without removing them.
    pub fn iter(&self) -> Iter<'_, Job> {
        self.jobs.iter()
    }
}

impl Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} jobs, {} first", self.size(), self.sort_order)?;
        for job in self.iter() {
            writeln!(f, "{}", job)?;
        }
        Ok(())
    }
}
