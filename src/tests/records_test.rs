#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use csv::ByteRecord;

    use crate::parsers::parser::FlowRecordError;
    use crate::records::{flow_record::FlowRecord, protocol::Protocol, tag_rule::TagRule};

    #[test]
    fn test_protocol_numbers() {
        assert_eq!(Protocol::Icmp.number(), 1);
        assert_eq!(Protocol::Tcp.number(), 6);
        assert_eq!(Protocol::Udp.number(), 17);
        assert_eq!(Protocol::Sctp.number(), 132);
    }

    #[test]
    fn test_protocol_from_name() {
        assert_eq!(Protocol::from_str("tcp").unwrap(), Protocol::Tcp);
        assert_eq!(Protocol::from_str("SCTP").unwrap(), Protocol::Sctp);
        assert!(Protocol::from_str("gre").is_err());
        assert_eq!(Protocol::Udp.to_string(), "udp");
    }

    #[test]
    fn test_tag_rule_matches() {
        let rule = TagRule::new(443, Protocol::Tcp, "HTTPS");
        assert_eq!(rule.tag, "https");
        assert!(rule.matches(443, 6));
        assert!(!rule.matches(443, 17));
        assert!(!rule.matches(80, 6));
        assert!(!rule.matches(65979, 6));
    }

    #[test]
    fn test_flow_record_fields() {
        let record = ByteRecord::from(vec![
            "2", "123456789012", "eni-1", "10.0.0.1", "10.0.0.2", "49153", "25", "6", "10",
        ]);
        let flow = FlowRecord::from_record(&record).unwrap();
        assert_eq!(
            flow,
            FlowRecord {
                destination_port: 25,
                protocol: 6
            }
        );
    }

    #[test]
    fn test_flow_record_too_short() {
        let record = ByteRecord::from(vec!["2", "123456789012", "eni-1"]);
        let err = FlowRecord::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            FlowRecordError::TooFewFields {
                expected: 8,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_flow_record_bad_protocol() {
        let record = ByteRecord::from(vec!["2", "1", "eni-1", "a", "b", "1", "25", "tcp"]);
        let err = FlowRecord::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            FlowRecordError::InvalidField {
                field: "protocol",
                ..
            }
        ));
    }

    #[test]
    fn test_flow_record_ignores_undecodable_opaque_fields() {
        let fields: Vec<&[u8]> = vec![
            b"2",
            b"123456789012",
            b"eni-\xff\xfe",
            b"10.0.0.1",
            b"10.0.0.2",
            b"49153",
            b"25",
            b"6",
        ];
        let record = ByteRecord::from(fields);
        let flow = FlowRecord::from_record(&record).unwrap();
        assert_eq!(flow.destination_port, 25);
        assert_eq!(flow.protocol, 6);
    }

    #[test]
    fn test_flow_record_undecodable_port() {
        let fields: Vec<&[u8]> = vec![b"2", b"1", b"eni-1", b"a", b"b", b"1", b"2\xff", b"6"];
        let record = ByteRecord::from(fields);
        let err = FlowRecord::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            FlowRecordError::NonUtf8Field {
                field: "destination port",
                ..
            }
        ));
    }
}
