use crate::*;
use std::any::Any;
use std::sync::atomic::{self, AtomicBool, AtomicU64};
use windows::Win32::{
    Foundation::{HINSTANCE, LPARAM, WPARAM},
    Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH},
    System::LibraryLoader::GetModuleHandleW,
    UI::WindowsAndMessaging::*,
};
use windows::core::{HSTRING, PCWSTR};

const WINDOW_CLASS_NAME: PCWSTR = windows::core::w!("traywin_window_class");

pub(crate) fn register_class() -> Result<()> {
    static REGISTERED: AtomicBool = AtomicBool::new(false);
    if REGISTERED.load(atomic::Ordering::SeqCst) {
        return Ok(());
    }
    unsafe {
        let hinstance: HINSTANCE = GetModuleHandleW(None)?.into();
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_VREDRAW | CS_HREDRAW,
            lpfnWndProc: Some(procedure::window_proc),
            hInstance: hinstance,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: WINDOW_CLASS_NAME,
            ..Default::default()
        };
        if RegisterClassExW(&wc) == 0 {
            return Err(Error::from_win32());
        }
    }
    REGISTERED.store(true, atomic::Ordering::SeqCst);
    Ok(())
}

pub(crate) type Sender<T> = tokio::sync::mpsc::UnboundedSender<T>;
type Receiver<T> = tokio::sync::mpsc::UnboundedReceiver<T>;

pub type RecvEvent = (Event, WindowHandle);

pub(crate) enum RecvEventOrPanic {
    Event(RecvEvent),
    Panic(Box<dyn Any + Send>),
}

fn gen_receiver_id() -> u64 {
    static ID: AtomicU64 = AtomicU64::new(1);
    ID.fetch_add(1, atomic::Ordering::SeqCst)
}

/// Something windows can deliver their events to.
pub trait IsReceiver {
    fn id(&self) -> u64;
}

/// Receives events on a blocking thread.
///
/// `recv` returns `None` after the UI thread quit, and resumes a panic
/// raised on the UI thread.
pub struct EventReceiver {
    id: u64,
    rx: Receiver<RecvEventOrPanic>,
}

impl EventReceiver {
    #[inline]
    pub fn new() -> Self {
        let id = gen_receiver_id();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Context::register_event_tx(id, tx);
        Self { id, rx }
    }

    #[inline]
    pub fn recv(&mut self) -> Option<RecvEvent> {
        unwrap_event(self.rx.blocking_recv()?)
    }

    #[inline]
    pub fn try_recv(&mut self) -> Option<RecvEvent> {
        unwrap_event(self.rx.try_recv().ok()?)
    }
}

impl Default for EventReceiver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl IsReceiver for EventReceiver {
    #[inline]
    fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for EventReceiver {
    fn drop(&mut self) {
        Context::unregister_event_tx(self.id);
    }
}

/// Receives events inside an async runtime.
pub struct AsyncEventReceiver {
    id: u64,
    rx: Receiver<RecvEventOrPanic>,
}

impl AsyncEventReceiver {
    #[inline]
    pub fn new() -> Self {
        let id = gen_receiver_id();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Context::register_event_tx(id, tx);
        Self { id, rx }
    }

    #[inline]
    pub async fn recv(&mut self) -> Option<RecvEvent> {
        unwrap_event(self.rx.recv().await?)
    }
}

impl Default for AsyncEventReceiver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl IsReceiver for AsyncEventReceiver {
    #[inline]
    fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for AsyncEventReceiver {
    fn drop(&mut self) {
        Context::unregister_event_tx(self.id);
    }
}

fn unwrap_event(ev: RecvEventOrPanic) -> Option<RecvEvent> {
    match ev {
        RecvEventOrPanic::Event(ev) => Some(ev),
        RecvEventOrPanic::Panic(e) => std::panic::resume_unwind(e),
    }
}

pub struct WindowBuilder {
    event_rx_id: u64,
    title: String,
    size: PhysicalSize<u32>,
    visibility: bool,
}

impl WindowBuilder {
    fn new(event_rx: &impl IsReceiver) -> Self {
        Self {
            event_rx_id: event_rx.id(),
            title: "NotifyIcon Example".into(),
            size: PhysicalSize::new(400, 300),
            visibility: true,
        }
    }

    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The outer size of the window.
    #[inline]
    pub fn size(mut self, size: PhysicalSize<u32>) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn visible(mut self, visibility: bool) -> Self {
        self.visibility = visibility;
        self
    }

    fn post(self) -> Result<tokio::sync::oneshot::Receiver<Result<WindowHandle>>> {
        if !Context::has_event_tx(self.event_rx_id) {
            return Err(Error::UiThreadClosed);
        }
        UiThread::init()?;
        let (tx, rx) = tokio::sync::oneshot::channel::<Result<WindowHandle>>();
        UiThread::send_task(move || {
            tx.send(create_window(self)).ok();
        })?;
        Ok(rx)
    }

    pub fn build(self) -> Result<Window> {
        let Ok(ret) = self.post()?.blocking_recv() else {
            return Err(Error::UiThreadClosed);
        };
        Ok(Window { handle: ret? })
    }

    pub async fn build_async(self) -> Result<Window> {
        let Ok(ret) = self.post()?.await else {
            return Err(Error::UiThreadClosed);
        };
        Ok(Window { handle: ret? })
    }
}

fn create_window(builder: WindowBuilder) -> Result<WindowHandle> {
    unsafe {
        let hinstance: HINSTANCE = GetModuleHandleW(None)?.into();
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE(0),
            WINDOW_CLASS_NAME,
            &HSTRING::from(builder.title.as_str()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            builder.size.width as i32,
            builder.size.height as i32,
            None,
            None,
            Some(hinstance),
            None,
        )?;
        let handle = WindowHandle::new(hwnd);
        Context::register_window(handle, builder.event_rx_id);
        if builder.visibility {
            let _ = ShowWindow(hwnd, SW_SHOW);
        }
        log::debug!("created window {:#x}", handle.as_raw());
        Ok(handle)
    }
}

/// Something a notify icon can be attached to.
pub trait IsWindow {
    fn window_handle(&self) -> WindowHandle;
}

/// A top level window running on the UI thread.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Window {
    handle: WindowHandle,
}

impl Window {
    #[inline]
    pub fn builder(event_rx: &impl IsReceiver) -> WindowBuilder {
        WindowBuilder::new(event_rx)
    }

    #[inline]
    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    /// Asks the window to close. `Event::Closed` follows once it is destroyed.
    #[inline]
    pub fn close(&self) {
        unsafe {
            PostMessageW(Some(self.handle.as_hwnd()), WM_CLOSE, WPARAM(0), LPARAM(0)).ok();
        }
    }

    /// Posts a raw message to the window procedure.
    #[inline]
    pub fn post_message(&self, msg: u32, wparam: usize, lparam: isize) -> Result<()> {
        unsafe {
            PostMessageW(
                Some(self.handle.as_hwnd()),
                msg,
                WPARAM(wparam),
                LPARAM(lparam),
            )?;
        }
        Ok(())
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        Context::window_is_none(self.handle)
    }
}

impl IsWindow for Window {
    #[inline]
    fn window_handle(&self) -> WindowHandle {
        self.handle
    }
}
