use derive_more::Display;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Difficulty {
	#[display("Apprenti")]
	Easy,
	#[default]
	#[display("Initié")]
	Medium,
	#[display("Maître")]
	Hard,
}

impl Difficulty {
	pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

	/// How long the reference stays visible, in countdown ticks of one second.
	pub fn preview_seconds(self) -> u32 {
		match self {
			Difficulty::Easy => 6,
			Difficulty::Medium => 4,
			Difficulty::Hard => 3,
		}
	}

	/// Minimum final score that wins a round.
	pub fn pass_threshold(self) -> u32 {
		match self {
			Difficulty::Easy => 60,
			Difficulty::Medium => 75,
			Difficulty::Hard => 85,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn harder_is_shorter_and_stricter() {
		for pair in Difficulty::ALL.windows(2) {
			assert!(pair[0].preview_seconds() > pair[1].preview_seconds());
			assert!(pair[0].pass_threshold() < pair[1].pass_threshold());
		}
	}

	#[test]
	fn labels() {
		assert_eq!(Difficulty::Easy.to_string(), "Apprenti");
		assert_eq!(Difficulty::default().to_string(), "Initié");
		assert_eq!(Difficulty::Hard.to_string(), "Maître");
	}
}
