#[cfg(test)]
mod tests {
    use crate::classifier::classify;
    use crate::output::{write_port_protocol_counts_csv, write_tables, write_tag_counts_csv};
    use crate::records::{protocol::Protocol, tag_rule::TagRule};

    fn sample() -> crate::classifier::Classification {
        let rules = vec![
            TagRule::new(25, Protocol::Tcp, "sv_p1"),
            TagRule::new(68, Protocol::Udp, "sv_p2"),
            TagRule::new(443, Protocol::Tcp, "sv_p2"),
        ];
        let input = "\
2 1 eni-1 10.0.0.1 10.0.0.2 49153 25 6 1 1 1 1 ACCEPT OK
2 1 eni-1 10.0.0.1 10.0.0.2 49153 443 6 1 1 1 1 ACCEPT OK
2 1 eni-1 10.0.0.1 10.0.0.2 49153 443 6 1 1 1 1 ACCEPT OK
2 1 eni-1 10.0.0.1 10.0.0.2 49153 8080 6 1 1 1 1 ACCEPT OK
";
        classify(input.as_bytes(), &rules).unwrap()
    }

    #[test]
    fn test_write_tables() {
        let mut buf = Vec::new();
        write_tables(&mut buf, &sample()).unwrap();

        let expected = "\
Tag | Count
sv_p1 1
sv_p2 2
untagged = 1
Port | Protocol | Count
25 6 1
443 6 2
";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_tag_counts_csv_with_header() {
        let mut buf = Vec::new();
        write_tag_counts_csv(csv::Writer::from_writer(&mut buf), &sample(), true).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Tag,Count\nsv_p1,1\nsv_p2,2\nUntagged,1\n"
        );
    }

    #[test]
    fn test_port_protocol_counts_csv_skips_unmatched_rules() {
        let mut buf = Vec::new();
        write_port_protocol_counts_csv(csv::Writer::from_writer(&mut buf), &sample(), false)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "25,6,1\n443,6,2\n");
    }
}
