use crate::notify_icon::Identity;
use crate::window::{RecvEventOrPanic, Sender};
use crate::*;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{
    Mutex, OnceLock,
    atomic::{self, AtomicU64},
};

pub(crate) struct ContextImpl {
    window_map: Mutex<HashMap<WindowHandle, u64>>,
    event_txs: Mutex<HashMap<u64, Sender<RecvEventOrPanic>>>,
    icons: Mutex<HashMap<u16, Identity>>,
    panic_receiver: AtomicU64,
}

impl ContextImpl {
    fn new() -> Self {
        Self {
            window_map: Mutex::new(HashMap::new()),
            event_txs: Mutex::new(HashMap::new()),
            icons: Mutex::new(HashMap::new()),
            panic_receiver: AtomicU64::new(0),
        }
    }
}

static CONTEXT: OnceLock<ContextImpl> = OnceLock::new();

fn get_context() -> &'static ContextImpl {
    CONTEXT.get_or_init(ContextImpl::new)
}

pub(crate) struct Context;

impl Context {
    pub fn is_empty() -> bool {
        let window_map = get_context().window_map.lock().unwrap();
        window_map.is_empty()
    }

    pub fn register_event_tx(id: u64, tx: Sender<RecvEventOrPanic>) {
        let mut event_txs = get_context().event_txs.lock().unwrap();
        event_txs.insert(id, tx);
    }

    pub fn unregister_event_tx(id: u64) {
        let mut event_txs = get_context().event_txs.lock().unwrap();
        event_txs.remove(&id);
    }

    pub fn has_event_tx(id: u64) -> bool {
        let event_txs = get_context().event_txs.lock().unwrap();
        event_txs.contains_key(&id)
    }

    pub fn register_window(handle: WindowHandle, event_rx_id: u64) {
        let ctx = get_context();
        let mut window_map = ctx.window_map.lock().unwrap();
        if window_map.is_empty() {
            ctx.panic_receiver
                .store(event_rx_id, atomic::Ordering::SeqCst);
        }
        window_map.insert(handle, event_rx_id);
    }

    /// Returns the id of the receiver the window was sending to.
    pub fn remove_window(handle: WindowHandle) -> Option<u64> {
        let mut window_map = get_context().window_map.lock().unwrap();
        window_map.remove(&handle)
    }

    pub fn window_is_none(handle: WindowHandle) -> bool {
        let window_map = get_context().window_map.lock().unwrap();
        !window_map.contains_key(&handle)
    }

    pub fn send_event(handle: WindowHandle, event: Event) {
        let Some(id) = get_context().window_map.lock().unwrap().get(&handle).copied() else {
            return;
        };
        Self::send_event_to(id, handle, event);
    }

    pub fn send_event_to(event_rx_id: u64, handle: WindowHandle, event: Event) {
        let event_txs = get_context().event_txs.lock().unwrap();
        if let Some(tx) = event_txs.get(&event_rx_id) {
            tx.send(RecvEventOrPanic::Event((event, handle))).ok();
        }
    }

    pub fn register_icon(identity: Identity) {
        let mut icons = get_context().icons.lock().unwrap();
        icons.insert(identity.id(), identity);
    }

    pub fn icon_is_registered(id: u16) -> bool {
        let icons = get_context().icons.lock().unwrap();
        icons.contains_key(&id)
    }

    /// Returns `None` when the icon has already been removed.
    pub fn unregister_icon(id: u16) -> Option<Identity> {
        let mut icons = get_context().icons.lock().unwrap();
        icons.remove(&id)
    }

    pub fn unregister_icons_of(handle: WindowHandle) -> Vec<Identity> {
        let mut icons = get_context().icons.lock().unwrap();
        let ids = icons
            .values()
            .filter(|identity| identity.window() == handle)
            .map(|identity| identity.id())
            .collect::<Vec<_>>();
        ids.into_iter().filter_map(|id| icons.remove(&id)).collect()
    }

    pub fn send_panic(e: Box<dyn Any + Send>) {
        let ctx = get_context();
        ctx.window_map.lock().unwrap().clear();
        let mut event_txs = ctx.event_txs.lock().unwrap();
        if let Some(tx) = event_txs.remove(&ctx.panic_receiver.load(atomic::Ordering::SeqCst)) {
            tx.send(RecvEventOrPanic::Panic(e)).ok();
        }
        event_txs.clear();
    }

    pub fn shutdown() {
        let ctx = get_context();
        ctx.window_map.lock().unwrap().clear();
        ctx.event_txs.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_none() {
        assert!(Context::window_is_none(WindowHandle::default()));
    }

    #[test]
    fn unregister_icon_once() {
        let identity = Identity::new(WindowHandle::from_raw(0x1234), 0xfff0, None);
        Context::register_icon(identity);
        assert!(Context::icon_is_registered(0xfff0));
        assert!(Context::unregister_icon(0xfff0).is_some());
        assert!(Context::unregister_icon(0xfff0).is_none());
    }

    #[test]
    fn unregister_icons_of_window() {
        let window = WindowHandle::from_raw(0x5678);
        let other = WindowHandle::from_raw(0x9abc);
        Context::register_icon(Identity::new(window, 0xfff1, None));
        Context::register_icon(Identity::new(window, 0xfff2, None));
        Context::register_icon(Identity::new(other, 0xfff3, None));
        let mut removed = Context::unregister_icons_of(window)
            .into_iter()
            .map(|identity| identity.id())
            .collect::<Vec<_>>();
        removed.sort();
        assert_eq!(removed, vec![0xfff1, 0xfff2]);
        assert!(Context::icon_is_registered(0xfff3));
        Context::unregister_icon(0xfff3);
    }
}
