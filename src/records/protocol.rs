use strum_macros::{Display, EnumString};

/// Transport protocols a lookup table may refer to, keyed by IANA protocol number.
///
/// See <https://www.iana.org/assignments/protocol-numbers/protocol-numbers.xhtml>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Protocol {
    Icmp = 1,
    Tcp = 6,
    Udp = 17,
    Sctp = 132,
}

impl Protocol {
    /// The IANA protocol number as it appears in flow logs.
    pub fn number(self) -> u8 {
        self as u8
    }
}
