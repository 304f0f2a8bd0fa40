use crate::*;
use std::path::{Path, PathBuf};
use windows::Win32::{Foundation::HINSTANCE, UI::WindowsAndMessaging::*};
use windows::core::{HSTRING, PCWSTR};

/// Represents icons.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Icon {
    Resource(u16),
    File(PathBuf),
    Application,
    Information,
    Warning,
    Error,
    Question,
    WinLogo,
    Shield,
}

impl Icon {
    /// An icon image from an file.
    #[inline]
    pub fn from_path(path: impl AsRef<Path>) -> Icon {
        Icon::File(path.as_ref().into())
    }

    pub(crate) fn load(&self, hinst: Option<HINSTANCE>) -> Result<LoadedIcon> {
        unsafe {
            let (handle, owned) = match self {
                Icon::Resource(id) => {
                    let handle = LoadImageW(
                        hinst,
                        PCWSTR(*id as *const u16),
                        IMAGE_ICON,
                        0,
                        0,
                        LR_DEFAULTSIZE | LR_SHARED,
                    )?;
                    (HICON(handle.0), false)
                }
                Icon::File(path) => {
                    let path = path.to_string_lossy();
                    let handle = LoadImageW(
                        None,
                        &HSTRING::from(path.as_ref()),
                        IMAGE_ICON,
                        0,
                        0,
                        LR_DEFAULTSIZE | LR_LOADFROMFILE,
                    )?;
                    (HICON(handle.0), true)
                }
                Icon::Application => (LoadIconW(None, IDI_APPLICATION)?, false),
                Icon::Information => (LoadIconW(None, IDI_INFORMATION)?, false),
                Icon::Warning => (LoadIconW(None, IDI_WARNING)?, false),
                Icon::Error => (LoadIconW(None, IDI_ERROR)?, false),
                Icon::Question => (LoadIconW(None, IDI_QUESTION)?, false),
                Icon::WinLogo => (LoadIconW(None, IDI_WINLOGO)?, false),
                Icon::Shield => (LoadIconW(None, IDI_SHIELD)?, false),
            };
            Ok(LoadedIcon { handle, owned })
        }
    }
}

/// An icon handle alive for the duration of one Shell call.
///
/// The Shell keeps its own copy, so icons loaded from files are destroyed
/// as soon as this is dropped.
pub(crate) struct LoadedIcon {
    handle: HICON,
    owned: bool,
}

impl LoadedIcon {
    #[inline]
    pub fn handle(&self) -> HICON {
        self.handle
    }
}

impl Drop for LoadedIcon {
    fn drop(&mut self) {
        if self.owned {
            unsafe {
                if let Err(e) = DestroyIcon(self.handle) {
                    log::warn!("DestroyIcon: {e}");
                }
            }
        }
    }
}
