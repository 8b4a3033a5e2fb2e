use super::gesture::{Gesture, PinchClassifier};
use super::overlay::LandmarkRenderer;
use super::smoother::{PenState, Segment, StrokeSmoother};
use crate::config::WhiteboardConfig;
use crate::geom::Size;
use crate::hand::Recognition;
use crate::surface::{Layers, Surface};
use csscolorparser::Color;
use tracing::{debug, trace};

/// What one processed frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
	pub hands: usize,
	/// Gesture of the hand driving the pen, if any hand was seen.
	pub gesture: Option<Gesture>,
	pub segment: Option<Segment>,
}

/// Turns recognized hands into ink.
///
/// Owns the pen and both layers. Everything happens in [`Whiteboard::process`], one call per new
/// video frame, so there is a single writer for all of it.
#[derive(Debug)]
pub struct Whiteboard<S> {
	layers: Layers<S>,
	pen: PenState,
	classifier: PinchClassifier,
	smoother: StrokeSmoother,
	overlay: LandmarkRenderer,
	stroke_width: f32,
	ink_color: Color,
}

impl<S: Surface> Whiteboard<S> {
	pub fn new(config: &WhiteboardConfig, layers: Layers<S>) -> Self {
		Self {
			layers,
			pen: PenState::default(),
			classifier: PinchClassifier::new(config.pinch_threshold),
			smoother: StrokeSmoother::new(config.smoothing_factor),
			overlay: LandmarkRenderer::new(config),
			stroke_width: config.stroke_width,
			ink_color: config.ink_color.clone(),
		}
	}

	pub fn layers(&self) -> &Layers<S> {
		&self.layers
	}

	pub fn pen(&self) -> &PenState {
		&self.pen
	}

	pub fn size(&self) -> Size {
		self.layers.size()
	}

	/// Resizes both layers. This wipes the ink; drawings do not survive a viewport change.
	pub fn resize(&mut self, size: Size) {
		debug!(width = size.width, height = size.height, "resizing layers");
		self.layers.resize(size);
	}

	/// Classifies the first hand, extends or breaks the stroke, then redraws the landmarks.
	///
	/// Only an open hand ends a stroke. With no hand in view the pen stays where it is.
	pub fn process(&mut self, recognition: &Recognition) -> FrameReport {
		let size = self.layers.size();
		let gesture = recognition
			.hands
			.first()
			.map(|hand| self.classifier.classify(hand, size));

		let segment = match gesture {
			Some(Gesture::Pinch { pen }) => {
				if !self.pen.is_engaged() {
					debug!(x = pen.x, y = pen.y, "stroke started");
				}
				self.smoother.filter(&mut self.pen, pen)
			}
			Some(Gesture::Release) => {
				if self.pen.is_engaged() {
					debug!("stroke ended");
				}
				self.pen.lift();
				None
			}
			// A frame where tracking drops out says nothing about the pinch; the stroke resumes
			// from where it was.
			None => None,
		};
		if let Some(segment) = segment {
			self.layers
				.ink
				.stroke_line(segment.from, segment.to, self.stroke_width, &self.ink_color);
		}

		self.overlay.render(&mut self.layers.overlay, &recognition.hands);

		let report = FrameReport {
			hands: recognition.hands.len(),
			gesture,
			segment,
		};
		trace!(?report, "frame processed");
		report
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::hand::LANDMARK_COUNT;
	use crate::surface::RasterSurface;
	use crate::test::{hand_pinching_at, hand_with_tips, Op, RecordingSurface};
	use glam::Vec2;

	const SIZE: Size = Size::new(640, 480);

	fn recording_board() -> Whiteboard<RecordingSurface> {
		Whiteboard::new(
			&WhiteboardConfig::default(),
			Layers::new(RecordingSurface::new(SIZE), RecordingSurface::new(SIZE)),
		)
	}

	fn pinch(at: Vec2) -> Recognition {
		Recognition::with_hands([hand_pinching_at(at, SIZE)])
	}

	fn open_hand() -> Recognition {
		Recognition::with_hands([hand_with_tips(Vec2::new(0.2, 0.5), Vec2::new(0.8, 0.5))])
	}

	#[test]
	fn pinch_draws_smoothed_ink() {
		let mut board = recording_board();
		let first = board.process(&pinch(Vec2::new(100.0, 100.0)));
		assert_eq!(first.segment, None);
		assert!(board.layers().ink.lines().is_empty());

		let second = board.process(&pinch(Vec2::new(200.0, 100.0)));
		let segment = second.segment.unwrap();
		assert!(segment.from.abs_diff_eq(Vec2::new(100.0, 100.0), 1e-3));
		assert!(segment.to.abs_diff_eq(Vec2::new(130.0, 100.0), 1e-3));

		let lines = board.layers().ink.lines();
		assert_eq!(lines.len(), 1);
		assert_eq!((lines[0].0, lines[0].1), (segment.from, segment.to));
		assert_eq!(lines[0].2, 5.0);
	}

	#[test]
	fn restarted_stroke_has_no_ghost_segment() {
		let mut board = recording_board();
		let a = Vec2::new(100.0, 100.0);
		let b = Vec2::new(300.0, 300.0);
		board.process(&pinch(a));
		board.process(&pinch(a));
		board.process(&open_hand());
		assert!(!board.pen().is_engaged());
		board.process(&pinch(b));
		let pen = board.pen().position().unwrap();
		assert!(pen.abs_diff_eq(b, 1e-3));
		board.process(&pinch(b));

		for (from, to, _, _) in board.layers().ink.lines() {
			let joins_strokes = from.distance(a) < 1.0 && to.distance(b) < 1.0;
			assert!(!joins_strokes, "segment {from} -> {to} joins two strokes");
		}
	}

	#[test]
	fn tracking_dropout_keeps_the_stroke() {
		let mut board = recording_board();
		board.process(&pinch(Vec2::new(100.0, 100.0)));
		board.process(&pinch(Vec2::new(110.0, 100.0)));
		let pen = board.pen().position().unwrap();

		let report = board.process(&Recognition::empty());
		assert_eq!(report.gesture, None);
		assert_eq!(report.segment, None);
		assert_eq!(board.pen().position(), Some(pen));
		assert_eq!(board.layers().overlay.ops.last(), Some(&Op::Clear));

		let resumed = board.process(&pinch(Vec2::new(120.0, 100.0)));
		let segment = resumed.segment.expect("stroke should continue after a dropout");
		assert_eq!(segment.from, pen);
		assert_eq!(board.layers().ink.lines().len(), 2);
	}

	#[test]
	fn overlay_is_redrawn_every_frame_and_never_touches_ink() {
		let mut board = recording_board();
		board.process(&open_hand());
		board.process(&Recognition::empty());

		let overlay = &board.layers().overlay.ops;
		assert_eq!(overlay[0], Op::Clear);
		assert_eq!(overlay[LANDMARK_COUNT + 1], Op::Clear);
		assert_eq!(overlay.len(), LANDMARK_COUNT + 2);
		assert!(board.layers().ink.ops.is_empty());
	}

	#[test]
	fn ink_is_drawn_before_landmarks() {
		let board_ops = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
		let mut board = Whiteboard::new(
			&WhiteboardConfig::default(),
			Layers::new(
				RecordingSurface::shared("overlay", SIZE, board_ops.clone()),
				RecordingSurface::shared("ink", SIZE, board_ops.clone()),
			),
		);
		board.process(&pinch(Vec2::new(10.0, 10.0)));
		board.process(&pinch(Vec2::new(20.0, 10.0)));

		let log = board_ops.borrow();
		let last_ink = log.iter().rposition(|layer| *layer == "ink").unwrap();
		let last_overlay_clear = log.len() - 1 - LANDMARK_COUNT;
		assert!(last_ink < last_overlay_clear);
	}

	#[test]
	fn resize_clears_ink() {
		let mut board = Whiteboard::new(
			&WhiteboardConfig::default(),
			Layers::new(RasterSurface::new(SIZE), RasterSurface::new(SIZE)),
		);
		for x in [100.0, 150.0, 200.0, 250.0] {
			board.process(&pinch(Vec2::new(x, 240.0)));
		}
		assert!(board.layers().ink.painted_pixel_count() > 0);
		assert!(board.layers().ink.pixel(110, 240).is_some_and(|p| p[3] == 255));

		board.resize(Size::new(800, 600));
		assert_eq!(board.size(), Size::new(800, 600));
		assert!(board.layers().ink.is_blank());
		assert!(board.layers().overlay.is_blank());
	}
}
