//! Logging layer shared by every Jian widget.
//!
//! Widgets run inside somebody else's page, so logging goes to the browser console on
//! `wasm32` and to stderr everywhere else. All macros compile to nothing in release builds.
//!
//! `info_log!`, `warn_log!` and `error_log!` map to `console.info`, `console.warn` and
//! `console.error`. `debug_log!` maps to `console.debug` and is silent unless the
//! `debug-hooks` feature is enabled. Native targets prefix each line with its [`Level`].
//!
//! ## Example
//!
//! ```ignore
//! use jian_pages::{debug_log, error_log};
//!
//! debug_log!("[Pagination] page {} -> {}", from, to);
//! error_log!("[Pagination] Element not found for query: {}", selector);
//! ```

/// Severity attached to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	/// Internal tracing of state transitions
	Debug,
	/// General information
	Info,
	/// Recoverable misuse
	Warn,
	/// Failures reported instead of raised
	Error,
}

impl Level {
	/// Prefix used on native targets
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		}
	}
}

/// Writes one already-formatted line. Called by the logging macros.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, message: &str) {
	let value = wasm_bindgen::JsValue::from_str(message);
	match level {
		Level::Debug => web_sys::console::debug_1(&value),
		Level::Info => web_sys::console::info_1(&value),
		Level::Warn => web_sys::console::warn_1(&value),
		Level::Error => web_sys::console::error_1(&value),
	}
}

/// Writes one already-formatted line. Called by the logging macros.
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, message: &str) {
	eprintln!("[{}] {}", level.as_str(), message);
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit_log {
	($level:ident, $($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::$level, &::std::format!($($arg)*))
	};
}

/// State-transition tracing. Emitted only with `debug-hooks` in debug builds.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{ $crate::__emit_log!(Debug, $($arg)*); }};
}

/// Compiled out: `debug-hooks` is off or this is a release build.
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Informational line, debug builds only.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {{ $crate::__emit_log!(Info, $($arg)*); }};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Recoverable misuse, such as a control carrying an unreadable page.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {{ $crate::__emit_log!(Warn, $($arg)*); }};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// A failure reported instead of raised, such as a missing mount target.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {{ $crate::__emit_log!(Error, $($arg)*); }};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
