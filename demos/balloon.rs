#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let mut event_rx = traywin::EventReceiver::new();
    let window = traywin::Window::builder(&event_rx)
        .title("NotifyIcon Example")
        .build()?;
    let notify_icon = traywin::NotifyIcon::new(&window)
        .icon(&traywin::Icon::from_path("demos/icon.ico"))
        .tip("Tray Icon")
        .balloon(traywin::Balloon::new("Hello from Tray Icon!"))
        .build()?;
    loop {
        let Some((event, _)) = event_rx.recv() else {
            break;
        };
        let traywin::Event::NotifyIcon(ev) = event else {
            continue;
        };
        if ev.id != notify_icon.id() {
            continue;
        }
        match ev.event {
            traywin::NotifyIconEvent::BalloonClicked => println!("balloon clicked"),
            ref e if e.is_left_button_down() => println!("tray icon clicked"),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("balloon runs on Windows only");
}
