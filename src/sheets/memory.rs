//! In-memory sheet for tests and dry runs
//!
//! Serves canned ranges, records every write, and can swap in new range
//! contents once a write lands (so a stats read after a write sees the
//! "recalculated" cells).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::Value;

use super::{Grid, MajorDimension, SheetStore, ValueInputOption};
use crate::error::{FoodError, FoodResult};

/// One recorded `write` call
#[derive(Debug, Clone, PartialEq)]
pub struct WriteCall {
    pub range: String,
    pub values: Vec<Vec<Value>>,
    pub input: ValueInputOption,
}

/// A fake spreadsheet keyed by exact range strings
#[derive(Debug, Default)]
pub struct MemorySheet {
    ranges: RefCell<HashMap<String, Grid>>,
    after_write: RefCell<HashMap<String, Grid>>,
    writes: RefCell<Vec<WriteCall>>,
    read_calls: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `grid` for reads of `range`
    pub fn with_range(self, range: impl Into<String>, grid: Grid) -> Self {
        self.ranges.borrow_mut().insert(range.into(), grid);
        self
    }

    /// Replace `range` with `grid` once the next write succeeds
    pub fn with_range_after_write(self, range: impl Into<String>, grid: Grid) -> Self {
        self.after_write.borrow_mut().insert(range.into(), grid);
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Writes recorded so far
    pub fn writes(&self) -> Vec<WriteCall> {
        self.writes.borrow().clone()
    }

    /// Number of remote round trips spent on reads
    pub fn read_calls(&self) -> usize {
        self.read_calls.get()
    }

    fn lookup(&self, range: &str) -> FoodResult<Grid> {
        self.ranges
            .borrow()
            .get(range)
            .cloned()
            .ok_or_else(|| FoodError::RemoteRead(format!("Unable to parse range: {}", range)))
    }
}

impl SheetStore for MemorySheet {
    fn batch_read(&self, ranges: &[String], _dimension: MajorDimension) -> FoodResult<Vec<Grid>> {
        self.read_calls.set(self.read_calls.get() + 1);
        if self.fail_reads.get() {
            return Err(FoodError::RemoteRead("simulated read failure".into()));
        }
        ranges.iter().map(|r| self.lookup(r)).collect()
    }

    fn read(&self, range: &str, _dimension: MajorDimension) -> FoodResult<Grid> {
        self.read_calls.set(self.read_calls.get() + 1);
        if self.fail_reads.get() {
            return Err(FoodError::RemoteRead("simulated read failure".into()));
        }
        self.lookup(range)
    }

    fn write(&self, range: &str, values: Vec<Vec<Value>>, input: ValueInputOption) -> FoodResult<()> {
        if self.fail_writes.get() {
            return Err(FoodError::RemoteWrite("simulated write failure".into()));
        }
        self.writes.borrow_mut().push(WriteCall {
            range: range.to_string(),
            values,
            input,
        });

        let pending: Vec<(String, Grid)> = self.after_write.borrow_mut().drain().collect();
        self.ranges.borrow_mut().extend(pending);
        Ok(())
    }
}
