#![cfg(windows)]

use std::sync::mpsc;

#[test]
fn notify_icon_lifecycle_test() {
    let (tx, rx) = mpsc::channel::<()>();
    let t = std::thread::spawn(move || {
        let mut event_rx = traywin::EventReceiver::new();
        let window = traywin::Window::builder(&event_rx)
            .visible(false)
            .build()
            .unwrap();
        let icon = traywin::NotifyIcon::new(&window)
            .icon(&traywin::Icon::Application)
            .tip("Tray Icon")
            .balloon(traywin::Balloon::new("Hello from Tray Icon!").title("traywin"))
            .build()
            .unwrap();
        assert!(!icon.is_deleted());
        assert_eq!(icon.window(), window.handle());
        icon.set_icon(&traywin::Icon::Information).unwrap();
        icon.set_tip("Tray Icon!").unwrap();
        icon.show_balloon_text("Message 1", "This is a balloon message").unwrap();
        window.close();
        loop {
            let Some((event, _)) = event_rx.recv() else {
                break;
            };
            if let traywin::Event::Closed = event {
                assert!(icon.is_deleted());
                assert!(matches!(
                    icon.set_tip("after close"),
                    Err(traywin::Error::IconDeleted)
                ));
                assert!(matches!(
                    icon.show_balloon_text("", "after close"),
                    Err(traywin::Error::IconDeleted)
                ));
                assert!(icon.delete().is_ok());
                assert!(matches!(
                    traywin::NotifyIcon::new(&window).build(),
                    Err(traywin::Error::WindowClosed)
                ));
                tx.send(()).ok();
                break;
            }
        }
        drop(icon);
    });
    if let Err(mpsc::RecvTimeoutError::Timeout) = rx.recv_timeout(std::time::Duration::from_secs(3))
    {
        panic!("timeout");
    }
    t.join().unwrap();
    assert!(traywin::UiThread::join().is_ok());
}
