/// The icon shown next to the balloon title.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalloonIcon {
    #[default]
    None,
    Info,
    Warning,
    Error,
    /// The notify icon's own image.
    User,
}

impl BalloonIcon {
    fn raw(self) -> u32 {
        match self {
            Self::None => 0x00,
            Self::Info => 0x01,
            Self::Warning => 0x02,
            Self::Error => 0x03,
            Self::User => 0x04,
        }
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct BalloonFlags: u32 {
        const NO_SOUND = 0x10;
        const LARGE_ICON = 0x20;
        const RESPECT_QUIET_TIME = 0x80;
    }
}

/// A balloon notification.
///
/// ```
/// let balloon = traywin::Balloon::new("This is a balloon message")
///     .title("Message 1")
///     .icon(traywin::BalloonIcon::Info);
/// assert_eq!(balloon.title_text(), Some("Message 1"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Balloon {
    title: Option<String>,
    text: String,
    icon: BalloonIcon,
    flags: BalloonFlags,
}

impl Balloon {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// An empty title is treated as no title.
    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    #[inline]
    pub fn icon(mut self, icon: BalloonIcon) -> Self {
        self.icon = icon;
        self
    }

    #[inline]
    pub fn flags(mut self, flags: BalloonFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `NIIF_*` value for `NOTIFYICONDATAW::dwInfoFlags`.
    #[inline]
    pub fn info_flags(&self) -> u32 {
        self.icon.raw() | self.flags.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_flags() {
        let balloon = Balloon::new("Hello from Tray Icon!");
        assert_eq!(balloon.info_flags(), 0);
        assert_eq!(balloon.title_text(), None);
        assert_eq!(balloon.text(), "Hello from Tray Icon!");
    }

    #[test]
    fn empty_title_is_none() {
        let balloon = Balloon::new("text").title("");
        assert_eq!(balloon.title_text(), None);
    }

    #[test]
    fn icon_and_flags_combine() {
        let balloon = Balloon::new("text")
            .icon(BalloonIcon::Warning)
            .flags(BalloonFlags::NO_SOUND | BalloonFlags::LARGE_ICON);
        assert_eq!(balloon.info_flags(), 0x02 | 0x10 | 0x20);
        let balloon = Balloon::new("text")
            .icon(BalloonIcon::User)
            .flags(BalloonFlags::RESPECT_QUIET_TIME);
        assert_eq!(balloon.info_flags(), 0x84);
    }
}
