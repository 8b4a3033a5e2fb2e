/// Runs a closure when dropped, including on early returns through `?` and when the enclosing
/// future is dropped before completion.
pub struct OnDrop<F: FnOnce()> {
	action: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
	pub fn new(action: F) -> Self {
		Self {
			action: Some(action),
		}
	}
}

impl<F: FnOnce()> Drop for OnDrop<F> {
	fn drop(&mut self) {
		if let Some(action) = self.action.take() {
			action();
		}
	}
}
