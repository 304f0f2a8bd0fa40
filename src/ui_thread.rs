use crate::messages::WM_POST_TASK;
use crate::*;
use std::sync::{Mutex, mpsc};
use windows::Win32::{
    Foundation::{LPARAM, WPARAM},
    System::Com::{COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE, CoInitializeEx, CoUninitialize},
    System::Threading::GetCurrentThreadId,
    UI::WindowsAndMessaging::{DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage},
};

struct Task(Box<dyn FnOnce() + Send>);

struct Thread {
    th: Option<std::thread::JoinHandle<u32>>,
    thread_id: u32,
    task_tx: mpsc::Sender<Task>,
}

fn run(task_rx: mpsc::Receiver<Task>) -> u32 {
    unsafe {
        let mut msg = MSG::default();
        loop {
            let ret = GetMessageW(&mut msg, None, 0, 0);
            if ret.0 == -1 {
                log::error!("GetMessageW: {}", Error::from_win32());
                Context::shutdown();
                break 1;
            }
            if ret.0 == 0 {
                Context::shutdown();
                break msg.wParam.0 as u32;
            }
            if msg.message == WM_POST_TASK && msg.hwnd.is_invalid() {
                let ret = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    for task in task_rx.try_iter() {
                        task.0();
                    }
                }));
                if let Err(e) = ret {
                    Context::send_panic(e);
                    break 1;
                }
                continue;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
            if let Some(e) = procedure::get_unwind() {
                Context::send_panic(e);
                break 1;
            }
        }
    }
}

impl Thread {
    fn new() -> Result<Self> {
        let (task_tx, task_rx) = mpsc::channel::<Task>();
        let (block_tx, block_rx) = mpsc::channel::<Result<u32>>();
        let th = std::thread::Builder::new()
            .name("traywin UiThread".into())
            .spawn(move || unsafe {
                let com = CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE);
                if let Err(e) = com.ok() {
                    log::warn!("CoInitializeEx: {e}");
                }
                if let Err(e) = window::register_class() {
                    block_tx.send(Err(e)).ok();
                    return 1;
                }
                block_tx.send(Ok(GetCurrentThreadId())).ok();
                std::mem::drop(block_tx);
                log::info!("UiThread started");
                let ret = run(task_rx);
                log::info!("UiThread finished: {ret}");
                if com.is_ok() {
                    CoUninitialize();
                }
                ret
            })?;
        let Ok(thread_id) = block_rx.recv() else {
            return Err(Error::UiThreadClosed);
        };
        Ok(Self {
            th: Some(th),
            thread_id: thread_id?,
            task_tx,
        })
    }

    fn send_task(&self, f: impl FnOnce() + Send + 'static) -> Result<()> {
        self.task_tx
            .send(Task(Box::new(f)))
            .map_err(|_| Error::UiThreadClosed)?;
        unsafe {
            PostThreadMessageW(self.thread_id, WM_POST_TASK, WPARAM(0), LPARAM(0))
                .map_err(|_| Error::UiThreadClosed)
        }
    }
}

static THREAD: Mutex<Option<Thread>> = Mutex::new(None);

/// Represents UI Thread.
///
/// Every window and its message loop live on this thread.
pub struct UiThread;

impl UiThread {
    /// Initializes UI thread.
    ///
    /// In general, no needs to call this function.
    ///
    pub fn init() -> Result<()> {
        let mut thread = THREAD.lock().unwrap();
        if thread.is_none() {
            *thread = Some(Thread::new()?);
        }
        Ok(())
    }

    /// Sends a closure to UI thread.
    ///
    /// This function does not wait for the closure to be called.
    ///
    #[inline]
    pub fn send_task(f: impl FnOnce() + Send + 'static) -> Result<()> {
        let thread = THREAD.lock().unwrap();
        let Some(thread) = thread.as_ref() else {
            return Err(Error::UiThreadClosed);
        };
        thread.send_task(f)
    }

    /// Checks if UI thread has finished.
    #[inline]
    pub fn is_finished() -> bool {
        THREAD
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|thread| thread.th.as_ref())
            .is_none_or(|th| th.is_finished())
    }

    /// Waits for UI thread to finish and returns the exit code of the message loop.
    #[inline]
    pub fn join() -> std::thread::Result<u32> {
        let th = THREAD
            .lock()
            .unwrap()
            .as_mut()
            .and_then(|thread| thread.th.take());
        match th {
            Some(th) => th.join(),
            None => Ok(0),
        }
    }
}
