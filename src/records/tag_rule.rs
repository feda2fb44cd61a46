use super::protocol::Protocol;

/// One entry of the lookup table: flows to `destination_port` over `protocol` get `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagRule {
    /// The destination port the rule applies to.
    pub destination_port: u16,
    /// The transport protocol the rule applies to.
    pub protocol: Protocol,
    /// The tag name, always lowercase.
    pub tag: String,
}

impl TagRule {
    pub fn new(destination_port: u16, protocol: Protocol, tag: &str) -> Self {
        TagRule {
            destination_port,
            protocol,
            tag: tag.to_lowercase(),
        }
    }

    /// Checks whether a flow with the given destination port and protocol number hits this rule.
    pub fn matches(&self, destination_port: i64, protocol: i64) -> bool {
        i64::from(self.destination_port) == destination_port
            && i64::from(self.protocol.number()) == protocol
    }
}
