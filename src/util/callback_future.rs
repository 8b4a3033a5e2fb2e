use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct Slot<Output> {
	result: Option<Output>,
	waker: Option<Waker>,
}

/// A future completed by calling a one-shot callback, for bridging browser callbacks into `async`.
///
/// Everything runs on the page's single thread, so the slot shared with the callback is not
/// synchronized.
pub struct CallbackFuture<Output> {
	slot: Rc<RefCell<Slot<Output>>>,
}

impl<Output: 'static> CallbackFuture<Output> {
	pub fn new() -> (Self, impl FnOnce(Output) + 'static) {
		let slot = Rc::new(RefCell::new(Slot {
			result: None,
			waker: None,
		}));
		let callback = {
			let slot = slot.clone();
			move |result| {
				let waker = {
					let mut slot = slot.borrow_mut();
					slot.result = Some(result);
					slot.waker.take()
				};
				if let Some(waker) = waker {
					waker.wake();
				}
			}
		};
		(CallbackFuture { slot }, callback)
	}
}

impl<Output> Future for CallbackFuture<Output> {
	type Output = Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Output> {
		let mut slot = self.slot.borrow_mut();
		match slot.result.take() {
			Some(result) => Poll::Ready(result),
			None => {
				slot.waker = Some(cx.waker().clone());
				Poll::Pending
			}
		}
	}
}
