use crate::messages::*;
use crate::*;

/// An opaque identity of a window.
///
/// Unlike a raw `HWND` this may be sent to other threads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_raw(&self) -> usize {
        self.0
    }

    #[cfg(windows)]
    #[inline]
    pub(crate) fn new(hwnd: windows::Win32::Foundation::HWND) -> Self {
        Self(hwnd.0 as usize)
    }

    #[cfg(windows)]
    #[inline]
    pub(crate) fn as_hwnd(&self) -> windows::Win32::Foundation::HWND {
        windows::Win32::Foundation::HWND(self.0 as *mut std::ffi::c_void)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Clone, Debug)]
pub struct MouseInput {
    pub button: MouseButton,
    pub button_state: ButtonState,
    pub position: ScreenPosition<i32>,
}

#[derive(Clone, Debug)]
pub struct DoubleClick {
    pub button: MouseButton,
    pub position: ScreenPosition<i32>,
}

/// A message this crate does not interpret.
#[derive(Clone, Debug)]
pub struct Other {
    pub msg: u32,
    pub wparam: usize,
    pub lparam: isize,
}

/// A decoded notify icon callback.
#[derive(Clone, Debug)]
pub enum NotifyIconEvent {
    MouseInput(MouseInput),
    DoubleClick(DoubleClick),
    CursorMoved(ScreenPosition<i32>),
    ContextMenu(ScreenPosition<i32>),
    Select(ScreenPosition<i32>),
    KeySelect(ScreenPosition<i32>),
    BalloonShown,
    BalloonHidden,
    BalloonTimeout,
    BalloonClicked,
    PopupOpen(ScreenPosition<i32>),
    PopupClose,
    Other(Other),
}

fn loword(x: isize) -> u16 {
    (x & 0xffff) as u16
}

fn hiword(x: isize) -> u16 {
    ((x >> 16) & 0xffff) as u16
}

impl NotifyIconEvent {
    /// Decodes the parameters of `WM_APP_NOTIFY_ICON`.
    ///
    /// Icons are registered with `NOTIFYICON_VERSION_4`, so the low word of
    /// `lparam` is the notification, the high word is the icon id and `wparam`
    /// holds the anchor position in screen coordinates.
    ///
    /// Returns the icon id along with the event.
    pub fn from_params(wparam: usize, lparam: isize) -> (u16, Self) {
        let msg = loword(lparam) as u32;
        let id = hiword(lparam);
        let position = ScreenPosition::new(
            loword(wparam as isize) as i16 as i32,
            hiword(wparam as isize) as i16 as i32,
        );
        let event = match msg {
            WM_MOUSEMOVE => Self::CursorMoved(position),
            WM_LBUTTONDOWN => Self::mouse_input(MouseButton::Left, ButtonState::Pressed, position),
            WM_RBUTTONDOWN => Self::mouse_input(MouseButton::Right, ButtonState::Pressed, position),
            WM_MBUTTONDOWN => Self::mouse_input(MouseButton::Middle, ButtonState::Pressed, position),
            WM_LBUTTONUP => Self::mouse_input(MouseButton::Left, ButtonState::Released, position),
            WM_RBUTTONUP => Self::mouse_input(MouseButton::Right, ButtonState::Released, position),
            WM_MBUTTONUP => Self::mouse_input(MouseButton::Middle, ButtonState::Released, position),
            WM_LBUTTONDBLCLK => Self::double_click(MouseButton::Left, position),
            WM_RBUTTONDBLCLK => Self::double_click(MouseButton::Right, position),
            WM_MBUTTONDBLCLK => Self::double_click(MouseButton::Middle, position),
            WM_CONTEXTMENU => Self::ContextMenu(position),
            NIN_SELECT => Self::Select(position),
            NIN_KEYSELECT => Self::KeySelect(position),
            NIN_BALLOONSHOW => Self::BalloonShown,
            NIN_BALLOONHIDE => Self::BalloonHidden,
            NIN_BALLOONTIMEOUT => Self::BalloonTimeout,
            NIN_BALLOONUSERCLICK => Self::BalloonClicked,
            NIN_POPUPOPEN => Self::PopupOpen(position),
            NIN_POPUPCLOSE => Self::PopupClose,
            _ => Self::Other(Other {
                msg,
                wparam,
                lparam,
            }),
        };
        (id, event)
    }

    fn mouse_input(
        button: MouseButton,
        button_state: ButtonState,
        position: ScreenPosition<i32>,
    ) -> Self {
        Self::MouseInput(MouseInput {
            button,
            button_state,
            position,
        })
    }

    fn double_click(button: MouseButton, position: ScreenPosition<i32>) -> Self {
        Self::DoubleClick(DoubleClick { button, position })
    }

    /// `true` when the primary button went down on the icon.
    #[inline]
    pub fn is_left_button_down(&self) -> bool {
        matches!(
            self,
            Self::MouseInput(MouseInput {
                button: MouseButton::Left,
                button_state: ButtonState::Pressed,
                ..
            })
        )
    }
}

#[derive(Clone, Debug)]
pub struct NotifyIcon {
    /// Equals `NotifyIcon::id()` of the icon that sent the callback.
    pub id: u16,
    pub event: NotifyIconEvent,
}

/// Represents a event.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Event {
    NotifyIcon(NotifyIcon),
    /// The window received `WM_CLOSE` and is about to be destroyed.
    CloseRequest,
    /// The window was destroyed. Its notify icons have been removed.
    Closed,
    /// Any other message the window procedure receives, `WM_PAINT` and
    /// `WM_NCHITTEST` included. Receivers queue these until they are read.
    Other(Other),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(lo: u16, hi: u16) -> isize {
        ((hi as u32) << 16 | lo as u32) as isize
    }

    #[test]
    fn left_button_down() {
        let (id, ev) =
            NotifyIconEvent::from_params(pack(120, 40) as usize, pack(WM_LBUTTONDOWN as u16, 3));
        assert_eq!(id, 3);
        assert!(ev.is_left_button_down());
        let NotifyIconEvent::MouseInput(m) = ev else {
            panic!("unexpected event");
        };
        assert_eq!(m.position.x, 120);
        assert_eq!(m.position.y, 40);
    }

    #[test]
    fn balloon_user_click() {
        let (id, ev) = NotifyIconEvent::from_params(0, pack(NIN_BALLOONUSERCLICK as u16, 0));
        assert_eq!(id, 0);
        assert!(matches!(ev, NotifyIconEvent::BalloonClicked));
        assert!(!ev.is_left_button_down());
    }

    #[test]
    fn negative_coordinates_on_secondary_monitor() {
        let x = -1280i16 as u16;
        let y = -10i16 as u16;
        let (_, ev) = NotifyIconEvent::from_params(pack(x, y) as usize, pack(NIN_SELECT as u16, 1));
        let NotifyIconEvent::Select(position) = ev else {
            panic!("unexpected event");
        };
        assert_eq!(position.x, -1280);
        assert_eq!(position.y, -10);
    }

    #[test]
    fn balloon_lifecycle() {
        let decode = |msg: u32| NotifyIconEvent::from_params(0, pack(msg as u16, 1)).1;
        assert!(matches!(decode(NIN_BALLOONSHOW), NotifyIconEvent::BalloonShown));
        assert!(matches!(decode(NIN_BALLOONHIDE), NotifyIconEvent::BalloonHidden));
        assert!(matches!(decode(NIN_BALLOONTIMEOUT), NotifyIconEvent::BalloonTimeout));
        assert!(matches!(decode(NIN_POPUPCLOSE), NotifyIconEvent::PopupClose));
    }

    #[test]
    fn key_select_is_not_select() {
        let (_, ev) = NotifyIconEvent::from_params(0, pack(NIN_KEYSELECT as u16, 0));
        assert!(matches!(ev, NotifyIconEvent::KeySelect(_)));
    }

    #[test]
    fn right_button_and_double_click() {
        let (_, ev) = NotifyIconEvent::from_params(0, pack(WM_RBUTTONUP as u16, 0));
        assert!(matches!(
            ev,
            NotifyIconEvent::MouseInput(MouseInput {
                button: MouseButton::Right,
                button_state: ButtonState::Released,
                ..
            })
        ));
        let (_, ev) = NotifyIconEvent::from_params(0, pack(WM_LBUTTONDBLCLK as u16, 0));
        assert!(matches!(
            ev,
            NotifyIconEvent::DoubleClick(DoubleClick {
                button: MouseButton::Left,
                ..
            })
        ));
    }

    #[test]
    fn unknown_notification_is_other() {
        let lparam = pack(0x7777, 2);
        let (id, ev) = NotifyIconEvent::from_params(5, lparam);
        assert_eq!(id, 2);
        let NotifyIconEvent::Other(other) = ev else {
            panic!("unexpected event");
        };
        assert_eq!(other.msg, 0x7777);
        assert_eq!(other.wparam, 5);
        assert_eq!(other.lparam, lparam);
    }
}
