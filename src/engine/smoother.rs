use glam::Vec2;

/// The last drawn pen position, in canvas pixels.
///
/// `None` means the pen is up: the next pinch starts a new stroke instead of continuing the last
/// one. Both coordinates are always set or unset together.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PenState {
	last: Option<Vec2>,
}

impl PenState {
	pub fn position(&self) -> Option<Vec2> {
		self.last
	}

	pub fn is_engaged(&self) -> bool {
		self.last.is_some()
	}

	/// Ends the current stroke.
	pub fn lift(&mut self) {
		self.last = None;
	}
}

/// A straight piece of ink, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

/// Exponential moving average over pen positions.
///
/// The smoother only holds its parameters; the pen itself lives in a [`PenState`] owned by the
/// caller, so one smoother can serve any number of independent pens.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSmoother {
	alpha: f32,
}

impl StrokeSmoother {
	/// Creates a smoother that moves the pen `alpha` of the way to each new target.
	///
	/// # Panics
	///
	/// Panics if `alpha` is not in (0.0, 1.0]. At 0.0 the pen would never move.
	pub fn new(alpha: f32) -> Self {
		assert!(alpha > 0.0 && alpha <= 1.0);
		Self { alpha }
	}

	/// Moves the pen toward `target`, returning the ink to lay down.
	///
	/// A pen that is up is put down exactly at `target` and draws nothing this frame.
	pub fn filter(&self, pen: &mut PenState, target: Vec2) -> Option<Segment> {
		match pen.last {
			Some(last) => {
				let smoothed = last + self.alpha * (target - last);
				pen.last = Some(smoothed);
				Some(Segment {
					from: last,
					to: smoothed,
				})
			}
			None => {
				pen.last = Some(target);
				None
			}
		}
	}
}

impl Default for StrokeSmoother {
	fn default() -> Self {
		Self::new(crate::config::SMOOTHING_FACTOR)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn first_point_is_unsmoothed() {
		let smoother = StrokeSmoother::default();
		let mut pen = PenState::default();
		assert_eq!(smoother.filter(&mut pen, Vec2::new(120.0, 80.0)), None);
		assert_eq!(pen.position(), Some(Vec2::new(120.0, 80.0)));
	}

	#[test]
	fn segments_chain() {
		let smoother = StrokeSmoother::new(0.5);
		let mut pen = PenState::default();
		smoother.filter(&mut pen, Vec2::new(0.0, 0.0));
		let first = smoother.filter(&mut pen, Vec2::new(10.0, 20.0)).unwrap();
		assert_eq!(first.from, Vec2::new(0.0, 0.0));
		assert_eq!(first.to, Vec2::new(5.0, 10.0));
		let second = smoother.filter(&mut pen, Vec2::new(10.0, 20.0)).unwrap();
		assert_eq!(second.from, first.to);
		assert_eq!(second.to, Vec2::new(7.5, 15.0));
	}

	#[test]
	fn converges_geometrically() {
		let smoother = StrokeSmoother::default();
		let mut pen = PenState::default();
		let start = Vec2::new(100.0, 300.0);
		let target = Vec2::new(400.0, 60.0);
		smoother.filter(&mut pen, start);

		let mut remaining = (target - start).abs();
		for _ in 0..10 {
			let segment = smoother.filter(&mut pen, target).unwrap();
			let next = (target - segment.to).abs();
			assert_relative_eq!(next.x, 0.7 * remaining.x, max_relative = 1e-4);
			assert_relative_eq!(next.y, 0.7 * remaining.y, max_relative = 1e-4);
			assert!(next.x < remaining.x && next.y < remaining.y);
			remaining = next;
		}
	}

	#[test]
	fn lift_breaks_stroke() {
		let smoother = StrokeSmoother::default();
		let mut pen = PenState::default();
		smoother.filter(&mut pen, Vec2::new(100.0, 100.0));
		smoother.filter(&mut pen, Vec2::new(100.0, 100.0));
		pen.lift();
		assert!(!pen.is_engaged());

		let far = Vec2::new(300.0, 300.0);
		assert_eq!(smoother.filter(&mut pen, far), None);
		assert_eq!(pen.position(), Some(far));

		let segment = smoother.filter(&mut pen, far).unwrap();
		assert_eq!(segment.from, far);
	}

	#[test]
	#[should_panic]
	fn zero_alpha_is_rejected() {
		StrokeSmoother::new(0.0);
	}
}
