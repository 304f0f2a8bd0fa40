//! Icons in the notification area.
//!
//! Every Shell call carries the identity of the icon only, plus the one piece
//! of data the call changes.

use crate::messages::WM_APP_NOTIFY_ICON;
use crate::*;
use std::sync::atomic::{self, AtomicU16};
use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::*;

/// Takes the next id from `counter` that `in_use` rejects, wrapping at `u16::MAX`.
///
/// Callbacks report the id in the high word of `lParam`, so ids are 16 bits.
fn next_free_id(counter: &AtomicU16, in_use: impl Fn(u16) -> bool) -> Option<u16> {
    (0..=u16::MAX as u32)
        .map(|_| counter.fetch_add(1, atomic::Ordering::SeqCst))
        .find(|&id| !in_use(id))
}

fn gen_id() -> Result<u16> {
    static GEN_ID: AtomicU16 = AtomicU16::new(0);
    next_free_id(&GEN_ID, Context::icon_is_registered).ok_or(Error::TooManyIcons)
}

/// What identifies an icon to the Shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Identity {
    window: WindowHandle,
    id: u16,
    guid: Option<GUID>,
}

impl Identity {
    pub fn new(window: WindowHandle, id: u16, guid: Option<GUID>) -> Self {
        Self { window, id, guid }
    }

    #[inline]
    pub fn window(&self) -> WindowHandle {
        self.window
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    fn data(&self) -> NOTIFYICONDATAW {
        let mut data = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: self.window.as_hwnd(),
            uID: self.id as u32,
            Anonymous: NOTIFYICONDATAW_0 {
                uVersion: NOTIFYICON_VERSION_4,
            },
            ..Default::default()
        };
        if let Some(guid) = self.guid {
            data.uFlags |= NIF_GUID;
            data.guidItem = guid;
        }
        data
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(data)))]
    fn notify(&self, message: NOTIFY_ICON_MESSAGE, data: &NOTIFYICONDATAW) -> Result<()> {
        log::debug!(
            "Shell_NotifyIconW({:?}) id: {}, flags: {:#x}",
            message,
            self.id,
            data.uFlags.0
        );
        unsafe { Shell_NotifyIconW(message, data).ok()? };
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        self.notify(NIM_DELETE, &self.data())
    }
}

fn fill_balloon(data: &mut NOTIFYICONDATAW, balloon: &Balloon) {
    data.uFlags |= NIF_INFO;
    if let Some(title) = balloon.title_text() {
        text::encode_into(&mut data.szInfoTitle, title);
    }
    text::encode_into(&mut data.szInfo, balloon.text());
    data.dwInfoFlags = NOTIFY_ICON_INFOTIP_FLAGS(balloon.info_flags());
}

fn module_instance() -> Result<HINSTANCE> {
    unsafe { Ok(GetModuleHandleW(None)?.into()) }
}

enum GuidSetting {
    None,
    Fixed(GUID),
    Random,
}

pub struct Builder<'a> {
    window: WindowHandle,
    icon: Option<&'a Icon>,
    tip: Option<String>,
    guid: GuidSetting,
    balloon: Option<Balloon>,
}

impl<'a> Builder<'a> {
    fn new(window: &impl IsWindow) -> Self {
        Self {
            window: window.window_handle(),
            icon: None,
            tip: None,
            guid: GuidSetting::None,
            balloon: None,
        }
    }

    #[inline]
    pub fn icon(mut self, icon: &'a Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[inline]
    pub fn tip(mut self, s: impl Into<String>) -> Self {
        self.tip = Some(s.into());
        self
    }

    /// Identifies the icon by `guid` instead of the window and id.
    ///
    /// The Shell binds a GUID to the path of the executable that registered it.
    #[inline]
    pub fn guid(mut self, guid: GUID) -> Self {
        self.guid = GuidSetting::Fixed(guid);
        self
    }

    /// Identifies the icon by a freshly generated GUID.
    #[inline]
    pub fn random_guid(mut self) -> Self {
        self.guid = GuidSetting::Random;
        self
    }

    /// A balloon shown as soon as the icon is added.
    #[inline]
    pub fn balloon(mut self, balloon: Balloon) -> Self {
        self.balloon = Some(balloon);
        self
    }

    /// Adds the icon to the notification area.
    ///
    /// Fails with [`Error::WindowClosed`] when the window is already destroyed.
    pub fn build(self) -> Result<NotifyIcon> {
        if Context::window_is_none(self.window) {
            return Err(Error::WindowClosed);
        }
        let guid = match self.guid {
            GuidSetting::None => None,
            GuidSetting::Fixed(guid) => Some(guid),
            GuidSetting::Random => Some(GUID::new()?),
        };
        let identity = Identity::new(self.window, gen_id()?, guid);
        let mut data = identity.data();
        data.uFlags |= NIF_MESSAGE;
        data.uCallbackMessage = WM_APP_NOTIFY_ICON;
        let icon = self
            .icon
            .map(|icon| icon.load(Some(module_instance()?)))
            .transpose()?;
        if let Some(icon) = icon.as_ref() {
            data.uFlags |= NIF_ICON;
            data.hIcon = icon.handle();
        }
        if let Some(tip) = self.tip.as_deref() {
            data.uFlags |= NIF_TIP | NIF_SHOWTIP;
            text::encode_into(&mut data.szTip, tip);
        }
        if let Some(balloon) = self.balloon.as_ref() {
            fill_balloon(&mut data, balloon);
        }
        identity.notify(NIM_ADD, &data)?;
        if let Err(e) = identity.notify(NIM_SETVERSION, &data) {
            identity.remove().ok();
            return Err(e);
        }
        Context::register_icon(identity);
        Ok(NotifyIcon { identity })
    }
}

/// An icon in the notification area.
///
/// The icon is removed when this is dropped, when [`delete`](Self::delete) is
/// called or when its window is destroyed, whichever comes first.
///
/// ```no_run
/// let event_rx = traywin::EventReceiver::new();
/// let window = traywin::Window::builder(&event_rx).build()?;
/// let icon = traywin::NotifyIcon::new(&window)
///     .icon(&traywin::Icon::Application)
///     .tip("Tray Icon")
///     .build()?;
/// icon.show_balloon_text("Message 1", "This is a balloon message")?;
/// # Ok::<(), traywin::Error>(())
/// ```
#[derive(Debug)]
pub struct NotifyIcon {
    identity: Identity,
}

impl NotifyIcon {
    #[inline]
    #[allow(clippy::new_ret_no_self)]
    pub fn new(window: &impl IsWindow) -> Builder<'_> {
        Builder::new(window)
    }

    /// The id reported in [`event::NotifyIcon::id`].
    #[inline]
    pub fn id(&self) -> u16 {
        self.identity.id
    }

    #[inline]
    pub fn guid(&self) -> Option<GUID> {
        self.identity.guid
    }

    #[inline]
    pub fn window(&self) -> WindowHandle {
        self.identity.window
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        !Context::icon_is_registered(self.identity.id)
    }

    fn modify(&self, f: impl FnOnce(&mut NOTIFYICONDATAW)) -> Result<()> {
        if self.is_deleted() {
            return Err(Error::IconDeleted);
        }
        let mut data = self.identity.data();
        f(&mut data);
        self.identity.notify(NIM_MODIFY, &data)
    }

    pub fn set_icon(&self, icon: &Icon) -> Result<()> {
        let icon = icon.load(Some(module_instance()?))?;
        self.modify(|data| {
            data.uFlags |= NIF_ICON;
            data.hIcon = icon.handle();
        })
    }

    pub fn set_tip(&self, tip: &str) -> Result<()> {
        self.modify(|data| {
            data.uFlags |= NIF_TIP | NIF_SHOWTIP;
            text::encode_into(&mut data.szTip, tip);
        })
    }

    pub fn show_balloon(&self, balloon: &Balloon) -> Result<()> {
        self.modify(|data| fill_balloon(data, balloon))
    }

    /// Shows a balloon without an icon. An empty `title` shows no title.
    #[inline]
    pub fn show_balloon_text(&self, title: &str, text: &str) -> Result<()> {
        self.show_balloon(&Balloon::new(text).title(title))
    }

    /// Removes the icon from the notification area.
    ///
    /// Deleting an icon that is already gone succeeds without calling the Shell.
    pub fn delete(&self) -> Result<()> {
        match Context::unregister_icon(self.identity.id) {
            Some(identity) => identity.remove(),
            None => Ok(()),
        }
    }
}

impl Drop for NotifyIcon {
    fn drop(&mut self) {
        if let Err(e) = self.delete() {
            log::warn!("failed to remove notify icon {}: {e}", self.identity.id);
        }
    }
}
