use artcast_core::{ArtDmxPacket, ArtNetError, Universe, encode_artdmx, layout, parse_artdmx};

const HEADER: [u8; 12] = [65, 114, 116, 45, 78, 101, 116, 0, 0, 80, 0, 14];

#[test]
fn reference_scenario_matches_wire_table() {
    let bytes = encode_artdmx(0, 0, Universe::new(1), &[255, 0, 128]).unwrap();

    assert_eq!(&bytes[0..12], &HEADER);
    assert_eq!(&bytes[12..14], &[0, 0]);
    assert_eq!(&bytes[14..16], &[1, 0]);
    assert_eq!(&bytes[16..18], &[0, 3]);
    assert_eq!(&bytes[18..], &[255, 0, 128]);
    assert_eq!(bytes.len(), 21);
}

#[test]
fn universe_bytes_for_sampled_universes() {
    for raw in (0..=u16::MAX).step_by(97).chain([255, 256, u16::MAX]) {
        let bytes = encode_artdmx(0, 0, Universe::new(raw), &[0]).unwrap();
        assert_eq!(bytes[14], (raw & 0xFF) as u8);
        assert_eq!(bytes[15], ((raw >> 8) & 0xFF) as u8);
    }
}

#[test]
fn length_boundaries() {
    let empty = encode_artdmx(0, 0, Universe::new(0), &[]).unwrap();
    assert_eq!(&empty[16..18], &[0, 0]);
    assert_eq!(empty.len(), layout::DMX_DATA_OFFSET);

    let full = vec![7u8; 65_535];
    let bytes = encode_artdmx(0, 0, Universe::new(0), &full).unwrap();
    assert_eq!(&bytes[16..18], &[255, 255]);

    let over = vec![7u8; 65_536];
    let err = encode_artdmx(0, 0, Universe::new(0), &over).unwrap_err();
    assert!(matches!(err, ArtNetError::InvalidChannelFrame { length: 65_536, .. }));
}

#[test]
fn full_dmx_universe_round_trips() {
    let frame: Vec<u8> = (0..layout::DMX_MAX_SLOTS).map(|i| (i * 7 % 256) as u8).collect();
    let packet = ArtDmxPacket::new(Universe::new(300), &frame);
    let bytes = packet.encode().unwrap();
    assert_eq!(bytes.len(), packet.encoded_len());

    let decoded = parse_artdmx(&bytes).unwrap().expect("artdmx");
    assert_eq!(decoded.universe, Universe::new(300));
    assert_eq!(decoded.protocol_version, 14);
    assert_eq!(decoded.data, frame);
}

#[test]
fn out_of_range_universe_is_rejected() {
    let err = Universe::try_from(70_000u32).unwrap_err();
    assert_eq!(err, ArtNetError::InvalidUniverse { value: 70_000 });
}
