//! The blind memorization game.
//!
//! A round shows a target shape for a difficulty-dependent number of seconds, hides it while the player
//! draws from memory, then scores the drawing. The surrounding UI drives the machine by sending
//! [`Command`]s; each one is handled exactly once and answered with an [`Outcome`] or a [`CommandError`]
//! that leaves the state untouched.

mod countdown;
pub use countdown::TimerId;
use countdown::{Countdown, TimerIds};

mod difficulty;
pub use difficulty::*;

mod scoring;
pub use scoring::*;

use crate::engine::{Catalog, ShapeDefinition, Stroke};
use crate::geom::Point;
use bon::bon;
use derive_more::Display;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Mode {
	#[default]
	#[display("Libre")]
	Libre,
	/// Strokes only appear once the pen is lifted.
	#[display("Silence")]
	Silence,
	#[display("Jeu Aveugle")]
	Challenge,
}

impl Mode {
	pub fn draws_silently(self) -> bool {
		self != Mode::Libre
	}
}

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum ChallengeState {
	#[default]
	#[display("IDLE")]
	Idle,
	#[display("PREVIEW")]
	Preview,
	#[display("DRAWING")]
	Drawing,
	#[display("RESULT")]
	Result,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	SelectMode(Mode),
	StartRound(Difficulty),
	Tick(TimerId),
	StrokesChanged(Vec<Stroke>),
	FinishRound,
	NewRound,
	QuitRound,
}

impl Command {
	pub fn name(&self) -> &'static str {
		match self {
			Command::SelectMode(_) => "select_mode",
			Command::StartRound(_) => "start_round",
			Command::Tick(_) => "tick",
			Command::StrokesChanged(_) => "strokes_changed",
			Command::FinishRound => "finish_round",
			Command::NewRound => "new_round",
			Command::QuitRound => "quit_round",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
	/// Back to IDLE with no strokes. The driver should clear its canvas.
	Reset,
	/// The driver should send `Command::Tick(timer)` once per second until `DrawingStarted`.
	PreviewStarted {
		shape: &'static str,
		timer: TimerId,
		seconds: u32,
	},
	CountdownTick {
		remaining: u32,
	},
	/// The countdown is over and its timer can be dropped.
	DrawingStarted,
	StrokesCaptured(usize),
	/// No round is in progress to hold the strokes.
	StrokesIgnored,
	Scored(RoundResult),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	#[error("{command} is not valid in state {state}")]
	InvalidTransition {
		command: &'static str,
		state: ChallengeState,
	},

	#[error("{command} requires challenge mode, current mode is {mode}")]
	NotInChallengeMode { command: &'static str, mode: Mode },

	#[error("{0} is not the live countdown")]
	StaleTimer(TimerId),

	#[error("strokes cannot be captured while the reference is shown")]
	ReferenceShown,

	#[error("no shape available for difficulty {0}")]
	EmptyTier(Difficulty),
}

static_assertions::assert_impl_all!(CommandError: std::error::Error, Send, Sync);

#[derive(Clone, Debug)]
enum Phase {
	Preview(Countdown),
	Drawing,
	Result,
}

#[derive(Clone, Debug)]
struct Round {
	shape: &'static str,
	difficulty: Difficulty,
	strokes: Vec<Stroke>,
	phase: Phase,
}

/// Everything the UI reads to render the challenge.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
	pub mode: Mode,
	pub difficulty: Difficulty,
	pub state: ChallengeState,
	pub countdown_remaining: Option<u32>,
	pub active_shape: Option<&'a ShapeDefinition>,
	pub last_score: Option<u32>,
	pub passed: bool,
	pub reference_visible: bool,
	pub can_begin_stroke: bool,
	pub can_finish: bool,
}

pub struct Challenge {
	catalog: Catalog,
	mode: Mode,
	difficulty: Difficulty,
	round: Option<Round>,
	last_shape: Option<&'static str>,
	last_result: Option<RoundResult>,
	timers: TimerIds,
	rng: fastrand::Rng,
}

#[bon]
impl Challenge {
	#[builder]
	pub fn new(
		#[builder(default)] catalog: Catalog,
		#[builder(default)] mode: Mode,
		#[builder(default)] difficulty: Difficulty,
		rng: Option<fastrand::Rng>,
	) -> Self {
		Self {
			catalog,
			mode,
			difficulty,
			round: None,
			last_shape: None,
			last_result: None,
			timers: TimerIds::default(),
			rng: rng.unwrap_or_else(fastrand::Rng::new),
		}
	}
}

impl Default for Challenge {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl Challenge {
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	pub fn state(&self) -> ChallengeState {
		match &self.round {
			None => ChallengeState::Idle,
			Some(round) => match round.phase {
				Phase::Preview(_) => ChallengeState::Preview,
				Phase::Drawing => ChallengeState::Drawing,
				Phase::Result => ChallengeState::Result,
			},
		}
	}

	pub fn countdown_remaining(&self) -> Option<u32> {
		match &self.round.as_ref()?.phase {
			Phase::Preview(countdown) => Some(countdown.remaining()),
			_ => None,
		}
	}

	pub fn active_shape(&self) -> Option<&ShapeDefinition> {
		self.catalog.get(self.round.as_ref()?.shape)
	}

	/// The target polyline, whenever a round is in progress.
	pub fn reference_shape(&self) -> Option<&[Point]> {
		self.active_shape().map(ShapeDefinition::points)
	}

	/// Strokes captured for the current round.
	pub fn strokes(&self) -> &[Stroke] {
		match &self.round {
			Some(round) => &round.strokes,
			None => &[],
		}
	}

	pub fn last_result(&self) -> Option<&RoundResult> {
		self.last_result.as_ref()
	}

	pub fn last_score(&self) -> Option<u32> {
		self.last_result.as_ref().map(|r| r.score)
	}

	pub fn passed(&self) -> bool {
		self.last_result.as_ref().is_some_and(|r| r.passed)
	}

	pub fn reference_visible(&self) -> bool {
		self.mode == Mode::Challenge
			&& matches!(
				self.state(),
				ChallengeState::Preview | ChallengeState::Result
			)
	}

	/// Whether a pen-down may start a stroke. Refused while the reference is shown on an empty drawing, so
	/// the preview never leaks into the capture.
	pub fn can_begin_stroke(&self) -> bool {
		!(self.reference_visible() && self.strokes().is_empty())
	}

	pub fn can_finish(&self) -> bool {
		self.state() == ChallengeState::Drawing && !self.strokes().is_empty()
	}

	pub fn snapshot(&self) -> Snapshot<'_> {
		Snapshot {
			mode: self.mode,
			difficulty: self.difficulty,
			state: self.state(),
			countdown_remaining: self.countdown_remaining(),
			active_shape: self.active_shape(),
			last_score: self.last_score(),
			passed: self.passed(),
			reference_visible: self.reference_visible(),
			can_begin_stroke: self.can_begin_stroke(),
			can_finish: self.can_finish(),
		}
	}

	#[tracing::instrument(level = "debug", skip_all, fields(command = command.name()))]
	pub fn handle(&mut self, command: Command) -> Result<Outcome, CommandError> {
		let from = self.state();
		let result = match command {
			Command::SelectMode(mode) => Ok(self.select_mode_impl(mode)),
			Command::StartRound(difficulty) => self.start_round_impl(difficulty),
			Command::Tick(timer) => self.tick_impl(timer),
			Command::StrokesChanged(strokes) => self.strokes_changed_impl(strokes),
			Command::FinishRound => self.finish_round_impl(),
			Command::NewRound => self.new_round_impl(),
			Command::QuitRound => self.quit_round_impl(),
		};
		match &result {
			Ok(outcome) => tracing::debug!(%from, to = %self.state(), ?outcome),
			Err(err) => tracing::warn!(state = %from, %err, "command rejected"),
		}
		result
	}

	pub fn select_mode(&mut self, mode: Mode) -> Result<Outcome, CommandError> {
		self.handle(Command::SelectMode(mode))
	}

	pub fn start_round(&mut self, difficulty: Difficulty) -> Result<Outcome, CommandError> {
		self.handle(Command::StartRound(difficulty))
	}

	pub fn tick(&mut self, timer: TimerId) -> Result<Outcome, CommandError> {
		self.handle(Command::Tick(timer))
	}

	pub fn strokes_changed(&mut self, strokes: Vec<Stroke>) -> Result<Outcome, CommandError> {
		self.handle(Command::StrokesChanged(strokes))
	}

	pub fn finish_round(&mut self) -> Result<Outcome, CommandError> {
		self.handle(Command::FinishRound)
	}

	pub fn new_round(&mut self) -> Result<Outcome, CommandError> {
		self.handle(Command::NewRound)
	}

	pub fn quit_round(&mut self) -> Result<Outcome, CommandError> {
		self.handle(Command::QuitRound)
	}

	fn require_challenge_mode(&self, command: &'static str) -> Result<(), CommandError> {
		if self.mode != Mode::Challenge {
			return Err(CommandError::NotInChallengeMode {
				command,
				mode: self.mode,
			});
		}
		Ok(())
	}

	fn invalid(&self, command: &'static str) -> CommandError {
		CommandError::InvalidTransition {
			command,
			state: self.state(),
		}
	}

	fn select_mode_impl(&mut self, mode: Mode) -> Outcome {
		self.mode = mode;
		self.round = None;
		Outcome::Reset
	}

	fn start_round_impl(&mut self, difficulty: Difficulty) -> Result<Outcome, CommandError> {
		const NAME: &str = "start_round";
		self.require_challenge_mode(NAME)?;
		match self.state() {
			ChallengeState::Idle | ChallengeState::Result => {}
			_ => return Err(self.invalid(NAME)),
		}
		self.begin_round(difficulty)
	}

	fn new_round_impl(&mut self) -> Result<Outcome, CommandError> {
		const NAME: &str = "new_round";
		self.require_challenge_mode(NAME)?;
		if self.state() != ChallengeState::Result {
			return Err(self.invalid(NAME));
		}
		self.begin_round(self.difficulty)
	}

	fn begin_round(&mut self, difficulty: Difficulty) -> Result<Outcome, CommandError> {
		let shape = self
			.catalog
			.select(difficulty, self.last_shape, &mut self.rng)
			.ok_or(CommandError::EmptyTier(difficulty))?
			.name();
		let timer = self.timers.issue();
		let seconds = difficulty.preview_seconds();
		self.difficulty = difficulty;
		self.last_shape = Some(shape);
		self.last_result = None;
		self.round = Some(Round {
			shape,
			difficulty,
			strokes: Vec::new(),
			phase: Phase::Preview(Countdown::new(timer, seconds)),
		});
		tracing::info!(shape, %difficulty, seconds, "round started");
		Ok(Outcome::PreviewStarted {
			shape,
			timer,
			seconds,
		})
	}

	fn tick_impl(&mut self, timer: TimerId) -> Result<Outcome, CommandError> {
		let Some(round) = &mut self.round else {
			return Err(CommandError::StaleTimer(timer));
		};
		let Phase::Preview(countdown) = &mut round.phase else {
			return Err(CommandError::StaleTimer(timer));
		};
		let remaining = countdown
			.tick(timer)
			.ok_or(CommandError::StaleTimer(timer))?;
		if remaining > 0 {
			return Ok(Outcome::CountdownTick { remaining });
		}
		tracing::trace!(timer = %countdown.id(), "countdown expired");
		round.phase = Phase::Drawing;
		Ok(Outcome::DrawingStarted)
	}

	fn strokes_changed_impl(&mut self, strokes: Vec<Stroke>) -> Result<Outcome, CommandError> {
		let Some(round) = &mut self.round else {
			return Ok(Outcome::StrokesIgnored);
		};
		if matches!(round.phase, Phase::Preview(_)) && !strokes.is_empty() {
			return Err(CommandError::ReferenceShown);
		}
		round.strokes = strokes;
		Ok(Outcome::StrokesCaptured(round.strokes.len()))
	}

	fn finish_round_impl(&mut self) -> Result<Outcome, CommandError> {
		const NAME: &str = "finish_round";
		self.require_challenge_mode(NAME)?;
		let Some(round) = self
			.round
			.as_mut()
			.filter(|round| matches!(round.phase, Phase::Drawing))
		else {
			return Err(self.invalid(NAME));
		};
		let Some(shape) = self.catalog.get(round.shape) else {
			return Err(CommandError::EmptyTier(round.difficulty));
		};
		let result = RoundResult::evaluate(shape, round.difficulty, &round.strokes);
		round.phase = Phase::Result;
		tracing::info!(
			shape = result.shape,
			base_score = result.base_score,
			penalty = result.penalty,
			score = result.score,
			passed = result.passed,
			"round scored"
		);
		self.last_result = Some(result.clone());
		Ok(Outcome::Scored(result))
	}

	fn quit_round_impl(&mut self) -> Result<Outcome, CommandError> {
		const NAME: &str = "quit_round";
		self.require_challenge_mode(NAME)?;
		if self.round.take().is_none() {
			return Err(self.invalid(NAME));
		}
		Ok(Outcome::Reset)
	}
}
