//! Preemptive priority task supervisor.
//!
//! Runs a fixed set of infinitely-looping tasks on one logical CPU. At
//! every scheduling instant the highest-priority runnable task whose wake
//! time has arrived executes; equal priorities take turns. A task's sleeps
//! are its only yield points, so a suspend issued from another task takes
//! effect before the target begins another work unit.
//!
//! Work units execute at a logical instant; time advances only across the
//! sleeps between them, driven through the platform [`Delay`].

pub mod error;
pub mod task;

pub use error::{SupervisorError, SupervisorResult};
pub use task::{Task, TaskControl, TaskHandle, TaskState, Ticks};

use crate::platform::Delay;
use crate::{log_debug, log_info, log_trace};

/// Sleep slice used while every task is suspended.
const IDLE_SLICE: Ticks = 100;

struct Slot<'a> {
    name: &'static str,
    priority: u8,
    control: &'a TaskControl,
    task: &'a mut dyn Task,
    /// Absolute tick at which the next work unit is due.
    next_due: Ticks,
}

/// Task runtime over at most `N` tasks.
///
/// Tasks and their control blocks are owned by the caller and lent in via
/// [`create`](Supervisor::create); the supervisor owns the timeline and
/// the dispatch decisions.
pub struct Supervisor<'a, const N: usize> {
    slots: [Option<Slot<'a>>; N],
    used: usize,
    now: Ticks,
    /// Last dispatched slot, `usize::MAX` before the first dispatch;
    /// equal-priority ties go to the next due task after this index.
    cursor: usize,
}

impl<'a, const N: usize> Supervisor<'a, N> {
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
            used: 0,
            now: 0,
            cursor: usize::MAX,
        }
    }

    /// Register a task. The first work unit is due immediately.
    ///
    /// The returned handle controls suspend/resume for the task's whole
    /// lifetime; tasks are never destroyed.
    pub fn create(
        &mut self,
        name: &'static str,
        priority: u8,
        control: &'a TaskControl,
        task: &'a mut dyn Task,
    ) -> SupervisorResult<TaskHandle<'a>> {
        if self.used == N {
            return Err(SupervisorError::TaskLimitReached);
        }
        self.slots[self.used] = Some(Slot {
            name,
            priority,
            control,
            task,
            next_due: self.now,
        });
        self.used += 1;
        log_debug!("task {} registered at priority {}", name, priority);
        Ok(TaskHandle::new(control))
    }

    pub fn task_count(&self) -> usize {
        self.used
    }

    /// Current logical time.
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Run the task set forever. Call once from the entry point after all
    /// tasks are created.
    pub fn start<D: Delay>(&mut self, delay: &mut D) -> ! {
        log_info!("supervisor running {} tasks", self.used);
        loop {
            if let Some(idx) = self.pick() {
                self.dispatch(idx);
                continue;
            }
            let wake = match self.earliest_wake() {
                Some(wake) => wake,
                // everything suspended; idle in slices until a resume arrives
                None => self.now + IDLE_SLICE,
            };
            delay.delay_ticks(wake - self.now);
            self.now = wake;
        }
    }

    /// Bounded run for host tests: dispatch everything due strictly before
    /// `deadline`, advancing the logical clock through `delay`. Work due
    /// exactly at `deadline` runs on the next call.
    pub fn run_until<D: Delay>(&mut self, delay: &mut D, deadline: Ticks) {
        while self.now < deadline {
            if let Some(idx) = self.pick() {
                self.dispatch(idx);
                continue;
            }
            let wake = self.earliest_wake().unwrap_or(deadline).min(deadline);
            delay.delay_ticks(wake - self.now);
            self.now = wake;
        }
    }

    /// Highest-priority runnable task that is due now; equal priorities
    /// rotate, starting after the last dispatched slot.
    fn pick(&self) -> Option<usize> {
        if self.used == 0 {
            return None;
        }
        let mut best: Option<(usize, u8)> = None;
        let start = self.cursor.wrapping_add(1);
        for offset in 0..self.used {
            let idx = start.wrapping_add(offset) % self.used;
            let Some(slot) = self.slots[idx].as_ref() else {
                continue;
            };
            if slot.control.state() != TaskState::Runnable || slot.next_due > self.now {
                continue;
            }
            match best {
                Some((_, priority)) if priority >= slot.priority => {}
                _ => best = Some((idx, slot.priority)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Earliest wake time over the runnable tasks.
    fn earliest_wake(&self) -> Option<Ticks> {
        self.slots[..self.used]
            .iter()
            .flatten()
            .filter(|slot| slot.control.state() == TaskState::Runnable)
            .map(|slot| slot.next_due)
            .min()
    }

    fn dispatch(&mut self, idx: usize) {
        let now = self.now;
        if let Some(slot) = self.slots[idx].as_mut() {
            log_trace!("dispatch {}", slot.name);
            // zero-length sleeps would starve every other task
            let sleep = slot.task.run().max(1);
            slot.next_due = now + sleep;
            self.cursor = idx;
        }
    }
}

impl<'a, const N: usize> Default for Supervisor<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}
