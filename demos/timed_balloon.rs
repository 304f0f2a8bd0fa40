#[cfg(windows)]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    const BALLOON_COUNT: u32 = 3;
    const BALLOON_INTERVAL: std::time::Duration = std::time::Duration::from_secs(3);

    env_logger::init();
    let mut event_rx = traywin::AsyncEventReceiver::new();
    let window = traywin::Window::builder(&event_rx)
        .title("Tray Icons Example")
        .build_async()
        .await?;
    let notify_icon = std::sync::Arc::new(
        traywin::NotifyIcon::new(&window)
            .random_guid()
            .build()?,
    );
    notify_icon.set_icon(&traywin::Icon::from_path("demos/icon.ico"))?;
    notify_icon.set_tip("Tray Icon!")?;

    let balloons = {
        let notify_icon = notify_icon.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(BALLOON_INTERVAL);
            interval.tick().await;
            for i in 1..=BALLOON_COUNT {
                interval.tick().await;
                let balloon = traywin::Balloon::new("This is a balloon message")
                    .title(format!("Message {i}"));
                if let Err(e) = notify_icon.show_balloon(&balloon) {
                    log::error!("{e}");
                    break;
                }
            }
        })
    };

    loop {
        let Some((event, _)) = event_rx.recv().await else {
            break;
        };
        let traywin::Event::NotifyIcon(ev) = event else {
            continue;
        };
        match ev.event {
            traywin::NotifyIconEvent::BalloonClicked => {
                println!("user clicked the balloon notification")
            }
            ref e if e.is_left_button_down() => println!("user clicked the tray icon"),
            _ => {}
        }
    }
    balloons.abort();
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("timed_balloon runs on Windows only");
}
