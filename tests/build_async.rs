#![cfg(windows)]

#[tokio::test]
async fn build_async_test() {
    let mut event_rx = traywin::AsyncEventReceiver::new();
    let window = traywin::Window::builder(&event_rx)
        .title("traywin build_async")
        .visible(false)
        .build_async()
        .await
        .unwrap();
    window.close();
    loop {
        tokio::select! {
            ret = event_rx.recv() => {
                let Some((event, _)) = ret else {
                    panic!("UI thread quit before Closed");
                };
                if let traywin::Event::Closed = event {
                    break;
                }
            }
            _ = tokio::time::sleep(tokio::time::Duration::from_secs(10)) => { panic!("timeout"); },
        }
    }
    assert!(window.is_closed());
}
