use crate::messages::WM_APP_NOTIFY_ICON;
use crate::*;
use std::any::Any;
use std::cell::RefCell;
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{DefWindowProcW, PostQuitMessage, WM_CLOSE, WM_DESTROY},
};

thread_local! {
    static UNWIND: RefCell<Option<Box<dyn Any + Send>>> = RefCell::new(None);
}

fn set_unwind(e: Box<dyn Any + Send>) {
    UNWIND.with_borrow_mut(|unwind| {
        *unwind = Some(e);
    });
}

pub(crate) fn get_unwind() -> Option<Box<dyn Any + Send>> {
    UNWIND.with_borrow_mut(|unwind| unwind.take())
}

fn on_notify_icon(hwnd: HWND, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let (id, ev) = NotifyIconEvent::from_params(wparam.0, lparam.0);
    Context::send_event(
        WindowHandle::new(hwnd),
        Event::NotifyIcon(event::NotifyIcon { id, event: ev }),
    );
    LRESULT(0)
}

unsafe fn on_close(hwnd: HWND, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        Context::send_event(WindowHandle::new(hwnd), Event::CloseRequest);
        DefWindowProcW(hwnd, WM_CLOSE, wparam, lparam)
    }
}

unsafe fn on_destroy(hwnd: HWND) -> LRESULT {
    unsafe {
        let handle = WindowHandle::new(hwnd);
        for identity in Context::unregister_icons_of(handle) {
            if let Err(e) = identity.remove() {
                log::warn!("failed to remove notify icon {}: {e}", identity.id());
            }
        }
        if let Some(event_rx_id) = Context::remove_window(handle) {
            Context::send_event_to(event_rx_id, handle, Event::Closed);
        }
        if Context::is_empty() {
            PostQuitMessage(0);
        }
        LRESULT(0)
    }
}

pub(crate) extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let ret = std::panic::catch_unwind(|| unsafe {
        match msg {
            WM_APP_NOTIFY_ICON => on_notify_icon(hwnd, wparam, lparam),
            WM_CLOSE => on_close(hwnd, wparam, lparam),
            WM_DESTROY => on_destroy(hwnd),
            _ => {
                Context::send_event(
                    WindowHandle::new(hwnd),
                    Event::Other(event::Other {
                        msg,
                        wparam: wparam.0,
                        lparam: lparam.0,
                    }),
                );
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
        }
    });
    ret.unwrap_or_else(|e| {
        set_unwind(e);
        LRESULT(0)
    })
}
