//! Plug identities and the encoder address table.
//!
//! Each radio socket answers to a fixed 3-bit address burned into the
//! encoder's code space.  The table below is the wiring truth: immutable,
//! no dynamic entries.  Identities outside it are rejected at `set` time
//! with zero pin writes.

use core::fmt;

/// Identity of a switchable socket in the encoder's address space.
///
/// The wired set is [`ALL`](Self::ALL), [`ONE`](Self::ONE) and
/// [`TWO`](Self::TWO).  [`from_raw`](Self::from_raw) exists for callers
/// mapping external input (RPC, config) onto identities; a raw value
/// outside the wired set is constructible but every operation on it fails
/// with [`UnknownPlug`](crate::PlugError::UnknownPlug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugId(u8);

impl PlugId {
    /// Broadcast: every socket paired to this transmitter.
    pub const ALL: Self = Self(0);
    /// Socket 1.
    pub const ONE: Self = Self(1);
    /// Socket 2.
    pub const TWO: Self = Self(2);

    /// Identity from a raw slot number.  Not validated — validation happens
    /// against the address table on use.
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw slot number.
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ALL => write!(f, "plug all"),
            Self::ONE => write!(f, "plug one"),
            Self::TWO => write!(f, "plug two"),
            Self(n) => write!(f, "plug #{n}"),
        }
    }
}

/// The wired identities, in believed-state registry order.
pub const WIRED: [PlugId; 3] = [PlugId::ALL, PlugId::ONE, PlugId::TWO];

/// Address codes as driven on (D2, D1, D0).
const ADDRESS_TABLE: [(PlugId, [bool; 3]); 3] = [
    (PlugId::ALL, [false, true, true]), // 011
    (PlugId::ONE, [true, true, true]),  // 111
    (PlugId::TWO, [true, true, false]), // 110
];

/// 3-bit address for a wired identity, `None` for anything else.
pub(crate) fn address_code(id: PlugId) -> Option<[bool; 3]> {
    ADDRESS_TABLE
        .iter()
        .find(|(wired, _)| *wired == id)
        .map(|(_, code)| *code)
}

/// Believed-state registry slot for a wired identity.
pub(crate) fn slot(id: PlugId) -> Option<usize> {
    WIRED.iter().position(|wired| *wired == id)
}
