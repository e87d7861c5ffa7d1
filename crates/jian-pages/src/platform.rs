//! The environment a widget is mounted into.

use std::fmt;
use std::rc::Rc;

use crate::dom::Document;
use crate::location::Location;

#[cfg(target_arch = "wasm32")]
use crate::error::DomError;

/// Bundles the document used to resolve mount targets and the location used for
/// fragment synchronization.
#[derive(Clone)]
pub struct Platform {
	document: Rc<dyn Document>,
	location: Rc<dyn Location>,
}

impl Platform {
	/// Creates a platform from explicit collaborators.
	pub fn new(document: Rc<dyn Document>, location: Rc<dyn Location>) -> Self {
		Self { document, location }
	}

	/// Binds to the running browser page.
	#[cfg(target_arch = "wasm32")]
	pub fn browser() -> Result<Self, DomError> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let document = crate::dom::BrowserDocument::new()?;
		let location = crate::location::BrowserLocation::new()?;
		Ok(Self::new(Rc::new(document), Rc::new(location)))
	}

	/// The document mount targets are resolved against.
	pub fn document(&self) -> &dyn Document {
		self.document.as_ref()
	}

	/// The fragment collaborator.
	pub fn location(&self) -> Rc<dyn Location> {
		Rc::clone(&self.location)
	}
}

impl fmt::Debug for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Platform").finish_non_exhaustive()
	}
}
