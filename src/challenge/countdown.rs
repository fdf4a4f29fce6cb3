use derive_more::Display;

/// Identifies one scheduled countdown. The driver echoes it back with every tick so that ticks from a
/// canceled countdown can be told apart from live ones.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[display("timer#{_0}")]
pub struct TimerId(u64);

#[derive(Debug, Default)]
pub(crate) struct TimerIds {
	next: u64,
}

impl TimerIds {
	pub fn issue(&mut self) -> TimerId {
		self.next += 1;
		TimerId(self.next)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Countdown {
	id: TimerId,
	remaining: u32,
}

impl Countdown {
	pub fn new(id: TimerId, seconds: u32) -> Self {
		Self {
			id,
			remaining: seconds,
		}
	}

	pub fn id(&self) -> TimerId {
		self.id
	}

	pub fn remaining(&self) -> u32 {
		self.remaining
	}

	/// Consumes one tick addressed to `id`, returning the seconds left, or `None` if `id` belongs to some
	/// other countdown.
	pub fn tick(&mut self, id: TimerId) -> Option<u32> {
		if id != self.id {
			return None;
		}
		self.remaining = self.remaining.saturating_sub(1);
		Some(self.remaining)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_fresh() {
		let mut ids = TimerIds::default();
		let a = ids.issue();
		let b = ids.issue();
		assert_ne!(a, b);
		assert_eq!(a.to_string(), "timer#1");
	}

	#[test]
	fn counts_down_to_zero() {
		let mut ids = TimerIds::default();
		let id = ids.issue();
		let mut countdown = Countdown::new(id, 3);
		assert_eq!(countdown.tick(id), Some(2));
		assert_eq!(countdown.tick(id), Some(1));
		assert_eq!(countdown.tick(id), Some(0));
		assert_eq!(countdown.tick(id), Some(0));
		assert_eq!(countdown.remaining(), 0);
	}

	#[test]
	fn ignores_other_timers() {
		let mut ids = TimerIds::default();
		let stale = ids.issue();
		let live = ids.issue();
		let mut countdown = Countdown::new(live, 4);
		assert_eq!(countdown.tick(stale), None);
		assert_eq!(countdown.remaining(), 4);
		assert_eq!(countdown.id(), live);
	}
}
