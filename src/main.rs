use anyhow::{bail, Context};
use glam::dvec2;
use silence::engine::palette;
use silence::*;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	Ok(tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?)
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, the opposite
	// happens if we fail to set `tracing`s global default subscriber above.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;
	Ok(())
}

/// Redraws the target at canvas scale, with some hand tremor.
fn draw_from_memory(shape: &ShapeDefinition, rng: &mut fastrand::Rng) -> Vec<Point> {
	let tremor = 12.0;
	shape
		.points()
		.iter()
		.map(|p| *p * 400.0 + 80.0 + dvec2(rng.f64() - 0.5, rng.f64() - 0.5) * tremor)
		.collect()
}

fn brush_for(shape: &ShapeDefinition) -> Brush {
	let default = Brush::default();
	Brush::pen(
		shape.required_color().unwrap_or(default.color),
		shape.required_width().unwrap_or(default.width),
	)
}

fn play_round(
	challenge: &mut Challenge,
	difficulty: Difficulty,
	rng: &mut fastrand::Rng,
) -> anyhow::Result<RoundResult> {
	let Outcome::PreviewStarted { timer, seconds, .. } = challenge.start_round(difficulty)? else {
		bail!("round did not start with a preview");
	};
	for _ in 0..seconds {
		challenge.tick(timer)?;
	}

	let shape = challenge
		.active_shape()
		.context("no shape after the preview")?
		.clone();
	let points = draw_from_memory(&shape, rng);
	let mut sketchpad = Sketchpad::new();
	if !sketchpad.pen_down(points[0], challenge.can_begin_stroke()) {
		bail!("drawing refused in state {}", challenge.state());
	}
	for point in &points[1..] {
		sketchpad.pen_move(*point);
	}
	let strokes = sketchpad
		.pen_up(&brush_for(&shape), challenge.mode().draws_silently())
		.context("stroke too short")?
		.to_vec();
	challenge.strokes_changed(strokes)?;

	match challenge.finish_round()? {
		Outcome::Scored(result) => Ok(result),
		other => bail!("unexpected outcome {other:?}"),
	}
}

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		eprintln!("failed to configure logging: {error}");
	}

	let mut rng = fastrand::Rng::new();
	let mut challenge = Challenge::builder().mode(Mode::Challenge).build();
	for difficulty in Difficulty::ALL {
		let result = play_round(&mut challenge, difficulty, &mut rng)?;
		tracing::info!(
			%difficulty,
			shape = result.shape,
			score = result.score,
			threshold = result.threshold,
			verdict = if result.passed { "Harmonie Atteinte" } else { "Précision" },
			"round finished"
		);
	}
	challenge.quit_round()?;
	Ok(())
}
