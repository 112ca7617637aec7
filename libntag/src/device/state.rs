// libntag/src/device/state.rs

/// Session lifecycle.
///
/// ```text
/// Idle -> Requested -> Connected -> Authenticated
///                          \             |
///                           `-> Halted <-'
/// any --(timeout / disconnect)--> Disconnected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Fresh session, nothing sent yet.
    #[default]
    Idle,
    /// A tag answered REQUEST / WAKEUP; no UID selected yet.
    Requested,
    /// UID selected; commands accepted.
    Connected,
    /// PWD_AUTH succeeded on the selected tag.
    Authenticated,
    /// HALT sent; only WAKEUP reaches the tag again.
    Halted,
    /// Link lost (zero-bit receive) or explicit disconnect.
    Disconnected,
}

impl SessionState {
    /// Tag commands (read/write/counter/...) are accepted.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected | Self::Authenticated)
    }

    /// The tag is in the field and answers to frames other than WAKEUP.
    pub fn is_awake(&self) -> bool {
        matches!(self, Self::Requested | Self::Connected | Self::Authenticated)
    }
}
