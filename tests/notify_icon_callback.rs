#![cfg(windows)]

use std::sync::mpsc;
use traywin::messages::{NIN_BALLOONUSERCLICK, WM_APP_NOTIFY_ICON, WM_LBUTTONDOWN, WM_USER};

fn lparam(msg: u32, id: u32) -> isize {
    ((id << 16) | msg) as isize
}

#[test]
fn notify_icon_callback_test() {
    let (tx, rx) = mpsc::channel::<()>();
    let t = std::thread::spawn(move || {
        let mut event_rx = traywin::EventReceiver::new();
        let window = traywin::Window::builder(&event_rx)
            .visible(false)
            .build()
            .unwrap();
        window.post_message(WM_USER + 0x10, 1, 2).unwrap();
        window
            .post_message(WM_APP_NOTIFY_ICON, 0, lparam(NIN_BALLOONUSERCLICK, 7))
            .unwrap();
        window
            .post_message(WM_APP_NOTIFY_ICON, (30 << 16) | 20, lparam(WM_LBUTTONDOWN, 7))
            .unwrap();
        let mut other_received = false;
        let mut balloon_clicked = false;
        let mut icon_clicked = false;
        let mut close_requested = false;
        loop {
            let Some((event, handle)) = event_rx.recv() else {
                break;
            };
            assert_eq!(handle, window.handle());
            match event {
                traywin::Event::NotifyIcon(ev) => {
                    assert_eq!(ev.id, 7);
                    match ev.event {
                        traywin::NotifyIconEvent::BalloonClicked => balloon_clicked = true,
                        traywin::NotifyIconEvent::MouseInput(m) => {
                            assert!(m.button == traywin::MouseButton::Left);
                            assert_eq!(m.position.x, 20);
                            assert_eq!(m.position.y, 30);
                            icon_clicked = true;
                            window.close();
                        }
                        _ => {}
                    }
                }
                traywin::Event::Other(other) if other.msg == WM_USER + 0x10 => {
                    assert_eq!(other.wparam, 1);
                    assert_eq!(other.lparam, 2);
                    other_received = true;
                }
                traywin::Event::CloseRequest => close_requested = true,
                traywin::Event::Closed => {
                    assert!(other_received);
                    assert!(balloon_clicked);
                    assert!(icon_clicked);
                    assert!(close_requested);
                    assert!(window.is_closed());
                    tx.send(()).ok();
                }
                _ => {}
            }
        }
    });
    if let Err(mpsc::RecvTimeoutError::Timeout) = rx.recv_timeout(std::time::Duration::from_secs(3))
    {
        panic!("timeout");
    }
    t.join().unwrap();
    assert!(traywin::UiThread::join().is_ok());
}
