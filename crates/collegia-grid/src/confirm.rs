//! Delete-confirmation modal state
//!
//! Delete is a two-phase action: the grid shows this confirmation and
//! only invokes the delete mutation once the user confirms. The modal
//! is headless; the presentation layer renders `title`/`message` while
//! `is_visible` and calls [`confirm`](ConfirmDelete::confirm) or
//! [`cancel`](ConfirmDelete::cancel).

use parking_lot::Mutex;
use std::sync::Arc;

/// Confirmation modal state with a boxed confirm callback
pub struct ConfirmDelete {
	visible: Mutex<bool>,
	title: Mutex<String>,
	message: Mutex<String>,
	on_confirm: Mutex<Option<Box<dyn Fn() + Send + Sync + 'static>>>,
}

impl ConfirmDelete {
	/// Creates a hidden modal
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			visible: Mutex::new(false),
			title: Mutex::new(String::new()),
			message: Mutex::new(String::new()),
			on_confirm: Mutex::new(None),
		})
	}

	/// Shows the modal with the given title, message, and confirmation callback
	pub fn show<F>(&self, title: impl Into<String>, message: impl Into<String>, on_confirm: F)
	where
		F: Fn() + Send + Sync + 'static,
	{
		*self.title.lock() = title.into();
		*self.message.lock() = message.into();
		*self.on_confirm.lock() = Some(Box::new(on_confirm));
		*self.visible.lock() = true;
	}

	/// Whether the modal is currently visible
	pub fn is_visible(&self) -> bool {
		*self.visible.lock()
	}

	/// Current title
	pub fn title(&self) -> String {
		self.title.lock().clone()
	}

	/// Current message
	pub fn message(&self) -> String {
		self.message.lock().clone()
	}

	/// Executes the confirmation callback and hides the modal
	pub fn confirm(&self) {
		let callback = self.on_confirm.lock().take();
		if let Some(callback) = callback {
			callback();
		}
		self.hide();
	}

	/// Cancels the modal without running the callback
	pub fn cancel(&self) {
		self.on_confirm.lock().take();
		self.hide();
	}

	fn hide(&self) {
		*self.visible.lock() = false;
	}
}
