// src/services/scheduler.rs
//
// Deferred work for the clock: one-shot timers that can be cancelled by
// handle, and a queue of actions applied on the following frame.
//
// Time is app time in seconds, the same clock nannou hands to `update`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTimer<T> {
    handle: TimerHandle,
    deadline: f32,
    action: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    timers: Vec<PendingTimer<T>>,
    next_frame: Vec<T>,
    next_handle: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_frame: Vec::new(),
            next_handle: 0,
        }
    }

    /************************** Timers ********************************** */

    pub fn schedule(&mut self, now: f32, delay: f32, action: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(PendingTimer {
            handle,
            deadline: now + delay.max(0.0),
            action,
        });
        handle
    }

    /// Returns true when the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.handle != handle);
        self.timers.len() != before
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: f32) -> Vec<(TimerHandle, T)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.timers.len() {
            if self.timers[i].deadline <= now {
                due.push(self.timers.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.deadline.total_cmp(&b.deadline));
        due.into_iter()
            .map(|timer| (timer.handle, timer.action))
            .collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /************************** Next frame ****************************** */

    pub fn defer_to_next_frame(&mut self, action: T) {
        self.next_frame.push(action);
    }

    /// Drains the actions queued so far. Anything deferred while the
    /// returned actions are being applied waits for the frame after.
    pub fn take_next_frame(&mut self) -> Vec<T> {
        std::mem::take(&mut self.next_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_deadline() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(1.0, 0.5, "hide");

        assert!(scheduler.take_due(1.4).is_empty());
        assert_eq!(scheduler.pending_timers(), 1);

        let due = scheduler.take_due(1.5);
        assert_eq!(due, vec![(handle, "hide")]);
        assert_eq!(scheduler.pending_timers(), 0);
        assert!(scheduler.take_due(5.0).is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule(0.0, 1.0, 1);
        let second = scheduler.schedule(0.0, 1.0, 2);

        assert!(scheduler.cancel(first));
        assert!(!scheduler.cancel(first));

        let due = scheduler.take_due(2.0);
        assert_eq!(due, vec![(second, 2)]);
    }

    #[test]
    fn test_due_timers_come_out_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 0.3, 'c');
        scheduler.schedule(0.0, 0.1, 'a');
        scheduler.schedule(0.0, 0.2, 'b');
        scheduler.schedule(0.0, 9.0, 'z');

        let order: Vec<char> = scheduler.take_due(1.0).into_iter().map(|(_, a)| a).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
        assert_eq!(scheduler.pending_timers(), 1);
    }

    #[test]
    fn test_next_frame_queue() {
        let mut scheduler: Scheduler<u32> = Scheduler::new();
        scheduler.defer_to_next_frame(1);
        scheduler.defer_to_next_frame(2);

        let frame = scheduler.take_next_frame();
        scheduler.defer_to_next_frame(3);

        assert_eq!(frame, vec![1, 2]);
        assert_eq!(scheduler.take_next_frame(), vec![3]);
        assert!(scheduler.take_next_frame().is_empty());
    }
}
