#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[cfg(windows)]
    #[error(transparent)]
    Api(#[from] windows::core::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("UiThreadClosed")]
    UiThreadClosed,
    #[error("WindowClosed")]
    WindowClosed,
    #[error("IconDeleted")]
    IconDeleted,
    #[error("TooManyIcons")]
    TooManyIcons,
}

#[cfg(windows)]
impl Error {
    pub(crate) fn from_win32() -> Self {
        windows::core::Error::from_win32().into()
    }
}

pub type Result<T> = ::core::result::Result<T, Error>;
