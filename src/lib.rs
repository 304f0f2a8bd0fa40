#![allow(clippy::needless_doctest_main)]

//! Notification area (system tray) icons for Windows in Rust
//!
//! # Simple example
//!
//! ```no_run
//! # #[cfg(not(windows))]
//! # fn main() {}
//! # #[cfg(windows)]
//! fn main() -> traywin::Result<()> {
//!     let mut event_rx = traywin::EventReceiver::new();
//!     let window = traywin::Window::builder(&event_rx)
//!         .title("NotifyIcon Example")
//!         .build()?;
//!     let icon = traywin::NotifyIcon::new(&window)
//!         .icon(&traywin::Icon::from_path("icon.ico"))
//!         .tip("Tray Icon")
//!         .build()?;
//!     loop {
//!         let Some((event, _)) = event_rx.recv() else {
//!             break;
//!         };
//!         if let traywin::Event::NotifyIcon(ev) = event {
//!             if ev.id == icon.id() && ev.event.is_left_button_down() {
//!                 println!("tray icon clicked");
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Note
//! traywin uses `WM_APP` and `WM_APP + 1`. Don't post them directly to traywin's windows.
//!

pub use gedv::*;
pub use windows_core::GUID;

mod balloon;
mod error;
pub mod event;
pub mod messages;
pub mod text;

#[cfg(windows)]
mod context;
#[cfg(windows)]
mod icon;
#[cfg(windows)]
pub mod notify_icon;
#[cfg(windows)]
mod procedure;
#[cfg(windows)]
mod ui_thread;
#[cfg(windows)]
mod window;

pub use balloon::*;
#[cfg(windows)]
use context::*;
pub use error::*;
#[doc(inline)]
pub use event::{ButtonState, Event, MouseButton, NotifyIconEvent, WindowHandle};
#[cfg(windows)]
pub use icon::Icon;
#[cfg(windows)]
#[doc(inline)]
pub use notify_icon::NotifyIcon;
#[cfg(windows)]
pub use ui_thread::UiThread;
#[cfg(windows)]
pub use window::*;

#[cfg(windows)]
pub mod api {
    pub use windows::*;
}
