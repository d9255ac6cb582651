//! Console output macros.
//!
//! Each macro takes a [`Message`](super::Message) (or anything `Display`) and
//! either prints it with a category prefix or, in debug mode, emits it as a
//! `tracing` event at the matching level. Debug mode is on when
//! `ARTIKEL_DEBUG` or `RUST_LOG` is set.
//!
//! | Macro | Prefix | Stream | Level |
//! |---|---|---|---|
//! | `msg_print!` | none | stdout | info |
//! | `msg_success!` | ✅ | stdout | info |
//! | `msg_info!` | ℹ️ | stdout | info |
//! | `msg_warning!` | ⚠️ | stdout | warn |
//! | `msg_error!` | ❌ | stderr | error |
//! | `msg_debug!` | 🔍 | none | debug |
//!
//! A trailing `true` argument pads the message with blank lines, which is
//! how section headers are printed.
//!
//! ```rust,ignore
//! use artikel::{msg_info, msg_success};
//! use artikel::libs::messages::Message;
//!
//! msg_success!(Message::WordAdded("Apfel".to_string()));
//! msg_info!(Message::ProgressHeader, true);
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

pub const PREFIX_SUCCESS: &str = "✅ ";
pub const PREFIX_INFO: &str = "ℹ️ ";
pub const PREFIX_WARNING: &str = "⚠️ ";
pub const PREFIX_ERROR: &str = "❌ ";
pub const PREFIX_DEBUG: &str = "🔍 ";

/// Resolved once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("ARTIKEL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
pub fn compose(prefix: &str, msg: impl Display, padded: bool) -> String {
    if padded {
        format!("\n{}{}\n", prefix, msg)
    } else {
        format!("{}{}", prefix, msg)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:expr, $msg:expr, $padded:expr) => {{
        let text = $crate::libs::messages::macros::compose($prefix, $msg, $padded);
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", text);
        } else {
            $print!("{}", text);
        }
    }};
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, $crate::libs::messages::macros::PREFIX_SUCCESS, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, $crate::libs::messages::macros::PREFIX_SUCCESS, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, $crate::libs::messages::macros::PREFIX_INFO, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, $crate::libs::messages::macros::PREFIX_INFO, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, $crate::libs::messages::macros::PREFIX_WARNING, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, $crate::libs::messages::macros::PREFIX_WARNING, $msg, true)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, $crate::libs::messages::macros::PREFIX_ERROR, $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, $crate::libs::messages::macros::PREFIX_ERROR, $msg, true)
    };
}

/// Silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("{}", $crate::libs::messages::macros::compose($crate::libs::messages::macros::PREFIX_DEBUG, $msg, false));
        }
    };
}

/// Builds an `anyhow::Error` carrying the error prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $crate::libs::messages::macros::compose($crate::libs::messages::macros::PREFIX_ERROR, $msg, false))
    };
}
