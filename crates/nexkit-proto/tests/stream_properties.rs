//! Property tests for the stream codec.
//!
//! The schemas are fixed-order with no framing to resynchronize on, so the
//! primitives they are built from must round-trip exactly.

use nexkit_proto::{PidSize, StreamIn, StreamOut, StreamSettings};
use proptest::prelude::*;

fn any_settings() -> impl Strategy<Value = StreamSettings> {
    (any::<bool>(), any::<bool>()).prop_map(|(wide, struct_header)| StreamSettings {
        pid_size: if wide { PidSize::U64 } else { PidSize::U32 },
        struct_header,
    })
}

proptest! {
    #[test]
    fn string_round_trip(value in ".{0,300}") {
        let mut out = StreamOut::new(StreamSettings::default());
        out.string(&value);
        let bytes = out.finish();

        let mut input = StreamIn::new(&bytes, StreamSettings::default());
        prop_assert_eq!(input.string().unwrap(), value);
        prop_assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn buffer_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut out = StreamOut::new(StreamSettings::default());
        out.buffer(&data);
        let bytes = out.finish();

        let mut input = StreamIn::new(&bytes, StreamSettings::default());
        prop_assert_eq!(input.buffer().unwrap(), data);
    }

    #[test]
    fn qbuffer_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut out = StreamOut::new(StreamSettings::default());
        out.qbuffer(&data);
        let bytes = out.finish();

        let mut input = StreamIn::new(&bytes, StreamSettings::default());
        prop_assert_eq!(input.qbuffer().unwrap(), data);
    }

    #[test]
    fn pid_round_trips_at_either_width(settings in any_settings(), pid in any::<u32>()) {
        // Stay within u32 so the classic width cannot truncate.
        let pid = u64::from(pid);

        let mut out = StreamOut::new(settings);
        out.pid(pid);
        let bytes = out.finish();

        let mut input = StreamIn::new(&bytes, settings);
        prop_assert_eq!(input.pid().unwrap(), pid);
        prop_assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn truncating_any_prefix_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256), cut in 0usize..256) {
        let cut = cut.min(data.len());
        let mut input = StreamIn::new(&data[..cut], StreamSettings::default());
        // Whatever happens, it must be a clean Ok/Err, not a panic.
        let _ = input.buffer();
    }
}

#[test]
fn protocol_list_round_trips_at_boundary_lengths() {
    for len in [0usize, 1, 255] {
        let items: Vec<u8> = (0..len).map(|i| i as u8).collect();

        let mut out = StreamOut::new(StreamSettings::default());
        out.list_u8(&items);
        let bytes = out.finish();

        let mut input = StreamIn::new(&bytes, StreamSettings::default());
        assert_eq!(input.list_u8().unwrap(), items, "length {len}");
        assert_eq!(input.remaining(), 0);
    }
}
