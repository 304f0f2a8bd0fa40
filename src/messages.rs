//! Raw window message and Shell notification values.
//!
//! These mirror the Win32 headers as plain `u32`s so that decoding does not
//! depend on the platform bindings.

pub const WM_USER: u32 = 0x0400;
pub const WM_APP: u32 = 0x8000;

/// Wakes the UI thread to run queued tasks.
pub const WM_POST_TASK: u32 = WM_APP;
/// The callback message every notify icon is registered with.
pub const WM_APP_NOTIFY_ICON: u32 = WM_APP + 1;

pub const WM_CONTEXTMENU: u32 = 0x007b;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_LBUTTONDBLCLK: u32 = 0x0203;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;
pub const WM_RBUTTONDBLCLK: u32 = 0x0206;
pub const WM_MBUTTONDOWN: u32 = 0x0207;
pub const WM_MBUTTONUP: u32 = 0x0208;
pub const WM_MBUTTONDBLCLK: u32 = 0x0209;

pub const NINF_KEY: u32 = 0x1;
pub const NIN_SELECT: u32 = WM_USER;
pub const NIN_KEYSELECT: u32 = NIN_SELECT | NINF_KEY;
pub const NIN_BALLOONSHOW: u32 = WM_USER + 2;
pub const NIN_BALLOONHIDE: u32 = WM_USER + 3;
pub const NIN_BALLOONTIMEOUT: u32 = WM_USER + 4;
pub const NIN_BALLOONUSERCLICK: u32 = WM_USER + 5;
pub const NIN_POPUPOPEN: u32 = WM_USER + 6;
pub const NIN_POPUPCLOSE: u32 = WM_USER + 7;

/// `NOTIFYICONDATAW::szTip` length in UTF-16 units.
pub const TIP_CAPACITY: usize = 128;
/// `NOTIFYICONDATAW::szInfo` length in UTF-16 units.
pub const INFO_CAPACITY: usize = 256;
/// `NOTIFYICONDATAW::szInfoTitle` length in UTF-16 units.
pub const INFO_TITLE_CAPACITY: usize = 64;
