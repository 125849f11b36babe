//! Convenient macros for application messaging and logging.
//!
//! The macros in this module are the single way the application talks to the
//! user. Each one routes its output depending on the runtime mode:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` console output
//! - **Debug mode**: structured records through the `tracing` system
//!
//! Debug mode is detected once per process from the environment:
//! - **`ZADACHNIK_DEBUG`**: application-specific debug flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: general message display
//! - **`msg_success!`**: success notifications with ✅ prefix
//! - **`msg_info!`**: informational messages with ℹ️ prefix
//! - **`msg_warning!`**: warning messages with ⚠️ prefix
//! - **`msg_error!`**: error messages with ❌ prefix (stderr in normal mode)
//! - **`msg_debug!`**: debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use zadachnik::{msg_error, msg_success};
//! use zadachnik::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded);
//! msg_error!(Message::TaskNotFound);
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection, so the environment is inspected
/// only once per process.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either `ZADACHNIK_DEBUG` or `RUST_LOG`
/// is present in the environment. The message macros consult this to decide
/// between console output and the `tracing` system; the binary consults it to
/// decide whether a tracing subscriber should be installed at all.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("ZADACHNIK_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// The optional `true` second argument surrounds the message with blank
/// lines, used for headers and the main menu.
///
/// ```rust
/// # use zadachnik::msg_print;
/// # use zadachnik::libs::messages::Message;
/// msg_print!(Message::MainMenu, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// ```rust
/// # use zadachnik::msg_success;
/// # use zadachnik::libs::messages::Message;
/// msg_success!(Message::TaskAdded);
/// // Output: "✅ Задача успешно добавлена."
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In normal mode errors go to stderr, keeping them separable from regular
/// output when the program is piped or redirected.
///
/// ```rust
/// # use zadachnik::msg_error;
/// # use zadachnik::libs::messages::Message;
/// msg_error!(Message::TaskNotFoundWithId(10));
/// // Output to stderr: "❌ Задача с ID 10 не найдена."
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings flag situations the user should know about that do not stop the
/// current operation, such as a data file that had to be reset.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Fully suppressed in normal mode; shown through `tracing::debug!` when
/// debug mode is enabled.
///
/// ```rust
/// # use zadachnik::msg_debug;
/// # let (count, path) = (3, "data.json");
/// msg_debug!(format!("Loaded {} tasks from {}", count, path));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
