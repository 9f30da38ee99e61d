#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        geometry::LatLng,
        models::{total_cost, Segment, TransportMode, Trip, Waypoint},
    };

    fn create_test_segment(id: u64, transport: &str, price: &str) -> Segment {
        Segment {
            id,
            trip_id: 7,
            start: Waypoint::new("Hangzhou", LatLng::new(30.27, 120.15)),
            end: Waypoint::new("Suzhou", LatLng::new(31.30, 120.58)),
            transport: transport.parse().unwrap(),
            price: price.to_string(),
        }
    }

    fn create_test_trip(id: u64, expanded: bool) -> Trip {
        Trip {
            id,
            name: format!("Trip {id}"),
            favorite: false,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            expanded,
        }
    }

    #[test]
    fn test_transport_from_canonical_labels() {
        assert_eq!("汽车".parse::<TransportMode>().unwrap(), TransportMode::Car);
        assert_eq!("飞机".parse::<TransportMode>().unwrap(), TransportMode::Plane);
        assert_eq!("高铁".parse::<TransportMode>().unwrap(), TransportMode::HighSpeedRail);
        assert_eq!("火车".parse::<TransportMode>().unwrap(), TransportMode::Train);
        assert_eq!("自行车".parse::<TransportMode>().unwrap(), TransportMode::Bicycle);
        assert_eq!(" 地铁 ".parse::<TransportMode>().unwrap(), TransportMode::Metro);
    }

    #[test]
    fn test_transport_from_english_names() {
        assert_eq!("Plane".parse::<TransportMode>().unwrap(), TransportMode::Plane);
        assert_eq!("hsr".parse::<TransportMode>().unwrap(), TransportMode::HighSpeedRail);
        assert_eq!("bike".parse::<TransportMode>().unwrap(), TransportMode::Bicycle);
        assert_eq!("SUBWAY".parse::<TransportMode>().unwrap(), TransportMode::Metro);
    }

    #[test]
    fn test_transport_other_is_kept_verbatim() {
        let mode: TransportMode = "ferry boat".parse().unwrap();
        assert_eq!(mode, TransportMode::Other("ferry boat".to_string()));
        assert!(!mode.is_known());
        assert_eq!(mode.as_str(), "ferry boat");
        assert_eq!(String::from(mode), "ferry boat");
    }

    #[test]
    fn test_transport_options_round_trip() {
        for mode in TransportMode::OPTIONS {
            let label = mode.as_str().to_string();
            assert_eq!(TransportMode::from(label), mode);
        }
        assert_eq!(TransportMode::default(), TransportMode::OPTIONS[0]);
    }

    #[test]
    fn test_transport_serde_as_label() {
        let json = serde_json::to_string(&TransportMode::Plane).unwrap();
        assert_eq!(json, "\"飞机\"");
        let back: TransportMode = serde_json::from_str("\"train\"").unwrap();
        assert_eq!(back, TransportMode::Train);
    }

    #[test]
    fn test_price_amount_is_defensive() {
        assert_eq!(create_test_segment(1, "汽车", "120.5").price_amount(), 120.5);
        assert_eq!(create_test_segment(1, "汽车", " 80 ").price_amount(), 80.0);
        assert_eq!(create_test_segment(1, "汽车", "").price_amount(), 0.0);
        assert_eq!(create_test_segment(1, "汽车", "about 90").price_amount(), 0.0);
        assert_eq!(create_test_segment(1, "汽车", "NaN").price_amount(), 0.0);
    }

    #[test]
    fn test_total_cost_ignores_unparseable() {
        let segments = vec![
            create_test_segment(1, "飞机", "680"),
            create_test_segment(2, "地铁", "4.5"),
            create_test_segment(3, "汽车", "free"),
        ];
        assert_eq!(total_cost(&segments), 684.5);
        assert_eq!(total_cost(&[]), 0.0);
    }

    #[test]
    fn test_expanded_is_not_serialized() {
        let trip = create_test_trip(3, true);
        let json = serde_json::to_string(&trip).unwrap();
        assert!(!json.contains("expanded"));

        let back: Trip = serde_json::from_str(&json).unwrap();
        assert!(!back.expanded);
        assert_eq!(back.id, 3);
    }

    #[test]
    fn test_carry_expanded() {
        let previous = vec![create_test_trip(1, true), create_test_trip(2, false)];

        assert!(create_test_trip(1, false).carry_expanded(&previous).expanded);
        assert!(!create_test_trip(2, true).carry_expanded(&previous).expanded);
        assert!(!create_test_trip(9, true).carry_expanded(&previous).expanded);
    }
}
