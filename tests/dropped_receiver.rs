#![cfg(windows)]

#[test]
fn build_with_dropped_receiver() {
    let event_rx = traywin::EventReceiver::new();
    let builder = traywin::Window::builder(&event_rx).visible(false);
    drop(event_rx);
    assert!(matches!(builder.build(), Err(traywin::Error::UiThreadClosed)));
}
