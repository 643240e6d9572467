#[cfg(test)]
mod test {
    use crate::{
        prelude::*,
        tests::toolkit::{assert_same_table, load_sourcetable, test_resource},
    };
    use std::str::FromStr;

    const MNT1: &str = "STR;MNT1;Site One;RTCM;;2;GPS;NetA;PL;52.40;16.93;1;2;gen;none;TCP;N;9600;info\nCAS;host.example;2101;CasterOne;Op;1;PL;52.40;16.93;;;info\n";

    #[test]
    fn stream_and_caster() {
        let table = SourceTable::from_str(MNT1).unwrap();
        assert_eq!(table.streams.len(), 1);

        let stream = &table.streams[0];
        assert_eq!(stream.mount_point, "MNT1");
        assert_eq!(stream.identifier, "Site One");
        assert_eq!(stream.latitude, 52.40);
        assert_eq!(stream.longitude, 16.93);
        assert!(!stream.has_fees_applied);
        assert_eq!(stream.network_transport, "TCP");
        assert_eq!(stream.bitrate, Some(9600));
        assert_eq!(stream.misc_info, "info");

        let caster = table.caster.as_ref().unwrap();
        assert_eq!(caster.host, "host.example");
        assert_eq!(caster.port, Some(2101));
        assert_eq!(caster.identifier, "CasterOne");
        assert_eq!(caster.fallback_host, "");
        assert_eq!(caster.fallback_port, None);
        assert_eq!(caster.misc_info, "info");

        assert!(table.network.is_none());
    }
    #[test]
    fn short_stream_rejected() {
        let mut diagnostics = Vec::new();
        let table = Parser::default()
            .parse_with("STR;X;Y\n", |d| diagnostics.push(d))
            .unwrap();
        assert!(table.streams.is_empty());
        assert!(table.is_empty());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::RejectedStream {
                line: 1,
                fields: 3,
                expected: MIN_STREAM_FIELDS,
            }]
        );

        let table = Parser::lenient().parse("STR;X;Y\n").unwrap();
        assert_eq!(table.streams.len(), 1);
        assert_eq!(table.streams[0].mount_point, "X");
        assert_eq!(table.streams[0].identifier, "Y");
        assert!(table.streams[0].latitude.is_nan());
    }
    #[test]
    fn minimal_field_count() {
        // keyword + 11 fields, up to the NMEA flag
        let content = "STR;A;B;RTCM;;2;GPS;N;PL;52.0;16.0;1";
        let table = SourceTable::from_str(content).unwrap();
        assert_eq!(table.streams.len(), 1);
        assert_eq!(table.streams[0].nmea, Some(1));
        assert_eq!(table.streams[0].solution, None);

        let content = "STR;A;B;RTCM;;2;GPS;N;PL;52.0;16.0";
        let table = SourceTable::from_str(content).unwrap();
        assert!(table.streams.is_empty());

        let table = Parser::default()
            .with_min_stream_fields(11)
            .parse(content)
            .unwrap();
        assert_eq!(table.streams.len(), 1);
        assert_eq!(table.streams[0].longitude, 16.0);
        assert_eq!(table.streams[0].nmea, None);
    }
    #[test]
    fn integers_out_of_usual_range() {
        let content = "STR;A;B;RTCM;;2;GPS;N;PL;52.0;16.0;0;0;gen;none;B;N;-1;x
STR;C;D;RTCM;;2;GPS;N;PL;52.0;16.0;0;0;gen;none;B;N;5000000000;
CAS;h;70000;C;O;0;PL;52.0;16.0;backup;99999;
";
        let table = SourceTable::from_str(content).unwrap();
        assert_eq!(table.streams[0].bitrate, Some(-1));
        assert_eq!(table.streams[0].misc_info, "x");
        assert_eq!(table.streams[1].bitrate, Some(5_000_000_000));

        let caster = table.caster.as_ref().unwrap();
        assert_eq!(caster.port, Some(70000));
        assert_eq!(caster.fallback_port, Some(99999));
        assert_eq!(caster.address(), None);
        assert_eq!(caster.fallback_address(), None);

        // values survive formatting
        let parsed = SourceTable::from_str(&table.to_string()).unwrap();
        assert_eq!(parsed.streams[0].bitrate, Some(-1));
        assert_eq!(parsed.caster.unwrap().port, Some(70000));
    }
    #[test]
    fn prefixes_are_case_sensitive() {
        let content = "str;A;B;RTCM;;2;GPS;N;PL;52.0;16.0;0\nSTRX;A\nSTR\n CAS;host;2101\nENDSOURCETABLE\n";
        let table = SourceTable::from_str(content).unwrap();
        assert!(table.is_empty());
    }
    #[test]
    fn empty_input() {
        let table = SourceTable::from_str("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table, SourceTable::default());
    }
    #[test]
    fn singleton_policies() {
        let content = "CAS;first.example;2101\nNET;NET1;Op1\nCAS;second.example;2102\nNET;NET2;Op2\n";

        let mut diagnostics = Vec::new();
        let table = Parser::default()
            .parse_with(content, |d| diagnostics.push(d))
            .unwrap();
        assert_eq!(table.caster.as_ref().unwrap().host, "second.example");
        assert_eq!(table.network.as_ref().unwrap().identifier, "NET2");
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::DuplicateCaster {
                    line: 3,
                    policy: SingletonPolicy::LastWins
                },
                Diagnostic::DuplicateNetwork {
                    line: 4,
                    policy: SingletonPolicy::LastWins
                },
            ]
        );

        let table = Parser::default()
            .with_singleton_policy(SingletonPolicy::FirstWins)
            .parse(content)
            .unwrap();
        assert_eq!(table.caster.as_ref().unwrap().host, "first.example");
        assert_eq!(table.caster.as_ref().unwrap().port, Some(2101));
        assert_eq!(table.network.as_ref().unwrap().identifier, "NET1");

        let parser = Parser::default().with_singleton_policy(SingletonPolicy::Reject);
        assert_eq!(parser.parse(content), Err(ParsingError::DuplicateCaster(3)));
        assert_eq!(
            parser.parse("NET;A\nNET;B\n"),
            Err(ParsingError::DuplicateNetwork(2))
        );
        assert!(parser.parse("CAS;a\nNET;b\n").is_ok());
    }
    #[test]
    fn sourcetable_file() {
        let mut diagnostics = Vec::new();
        let path = test_resource("SOURCETABLE", "asg-eupos.txt");
        let table =
            SourceTable::from_file_observed(&path, &Parser::default(), |d| diagnostics.push(d))
                .unwrap();

        assert_eq!(table.streams.len(), 10);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::RejectedStream {
                line: 17,
                fields: 3,
                expected: MIN_STREAM_FIELDS,
            }]
        );

        let caster = table.caster.as_ref().unwrap();
        assert_eq!(caster.address(), Some("system.asgeupos.pl:8086".to_string()));
        assert_eq!(caster.fallback_address(), None);

        let network = table.network.as_ref().unwrap();
        assert_eq!(network.identifier, "ASG-EUPOS");
        assert_eq!(network.authentication_scheme(), Some(Authentication::Basic));

        let stream = table.stream("NAWGEO_POJ_3_1").unwrap();
        assert!(stream.has_fees_applied);
        assert!(stream.requires_nmea());
        assert_eq!(stream.solution_kind(), Some(Solution::Network));
        assert_eq!(stream.carrier_kind(), Some(Carrier::L1L2));

        let stream = table.stream("KODGIS_RTCM_2_3").unwrap();
        assert_eq!(stream.carrier_kind(), Some(Carrier::Unavailable));
        assert_eq!(stream.bitrate, Some(2400));

        let stream = table.stream("LOMZ_RTCM_3_1").unwrap();
        assert!(!stream.position().is_finite());
        assert_eq!(stream.bitrate, None);
        assert_eq!(stream.misc_info, "broken coordinates");

        assert!(table.stream("TEST").is_none());

        let lenient = load_sourcetable("asg-eupos.txt", &Parser::lenient());
        assert_eq!(lenient.streams.len(), 11);
        assert!(lenient.stream("TEST").is_some());
    }
    #[test]
    fn stream_order_is_preserved() {
        let table = load_sourcetable("asg-eupos.txt", &Parser::default());
        let mount_points: Vec<&str> = table
            .streams
            .iter()
            .map(|s| s.mount_point.as_str())
            .collect();
        assert_eq!(
            mount_points,
            vec![
                "BOGI_RTCM_3_1",
                "BYDG_RTCM_3_1",
                "GDAN_RTCM_3_1",
                "KRAW_RTCM_3_1",
                "POZN_RTCM_3_1",
                "WARS_RTCM_3_1",
                "WAT1_RTCM_3_1",
                "NAWGEO_POJ_3_1",
                "KODGIS_RTCM_2_3",
                "LOMZ_RTCM_3_1",
            ]
        );
    }
    #[test]
    fn carriage_returns() {
        let unix = load_sourcetable("asg-eupos.txt", &Parser::default());
        let dos = load_sourcetable("asg-eupos-crlf.txt", &Parser::default());
        assert_same_table(&unix, &dos);
        assert_eq!(dos.streams[0].misc_info, "");
        assert_eq!(dos.streams[9].misc_info, "broken coordinates");
    }
    #[test]
    fn idempotency() {
        let path = test_resource("SOURCETABLE", "asg-eupos.txt");
        let content = std::fs::read_to_string(path).unwrap();
        let first = SourceTable::from_str(&content).unwrap();
        let second = SourceTable::from_str(&content).unwrap();
        assert_same_table(&first, &second);
    }
    #[cfg(feature = "flate2")]
    #[test]
    fn gzip_sourcetable() {
        let plain = load_sourcetable("asg-eupos.txt", &Parser::default());
        let gzip = load_sourcetable("asg-eupos.txt.gz", &Parser::default());
        assert_same_table(&plain, &gzip);
    }
    #[test]
    fn missing_file() {
        let path = test_resource("SOURCETABLE", "missing.txt");
        match SourceTable::from_file(&path) {
            Err(Error::IoError(_)) => {},
            other => panic!("expecting I/O error, got {:?}", other),
        }
    }
}
