//! Cloneable callback wrapper used for widget notifications.
//!
//! Widgets hand user code a value (a page number, a confirmation result) through a
//! [`Callback`]. The callback is stored inside the widget and cloned out before it is
//! invoked, so user code is free to call back into the widget that notified it.
//!
//! ## Example
//!
//! ```ignore
//! use jian_pages::Callback;
//!
//! let on_page_change = Callback::new(|page: usize| {
//!     info_log!("moved to page {}", page);
//! });
//! on_page_change.call(3);
//! ```

use std::fmt;
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
type Handler<Args, Ret> = dyn Fn(Args) -> Ret + 'static;

// Options carrying a callback may be built on a server thread before rendering.
#[cfg(not(target_arch = "wasm32"))]
type Handler<Args, Ret> = dyn Fn(Args) -> Ret + Send + Sync + 'static;

/// A shared, cloneable function taking `Args`.
///
/// Clones point at the same function. On native targets the function must be
/// `Send + Sync`.
pub struct Callback<Args, Ret = ()> {
	handler: Arc<Handler<Args, Ret>>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps `f`.
	#[cfg(target_arch = "wasm32")]
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self {
			handler: Arc::new(f),
		}
	}

	/// Wraps `f`.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self {
			handler: Arc::new(f),
		}
	}

	/// Invokes the wrapped function.
	pub fn call(&self, args: Args) -> Ret {
		(self.handler)(args)
	}

	/// True when both values are clones of one callback.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.handler, &other.handler)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			handler: Arc::clone(&self.handler),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Callback({:p})", Arc::as_ptr(&self.handler) as *const ())
	}
}
