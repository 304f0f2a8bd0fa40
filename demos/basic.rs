#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut event_rx = traywin::EventReceiver::new();
    let window = traywin::Window::builder(&event_rx)
        .title("Tray Icons Example")
        .build()?;
    let _notify_icon = traywin::NotifyIcon::new(&window)
        .icon(&traywin::Icon::from_path("demos/icon.ico"))
        .build()?;
    loop {
        let Some(_) = event_rx.recv() else {
            break;
        };
    }
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("basic runs on Windows only");
}
