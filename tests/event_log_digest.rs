use std::time::Duration;

use skytrace::{RecordingSurface, simulate_motion, virtual_clock};

fn mix64(mut z: u64) -> u64 {
    // SplitMix64 mixing function.
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn run_digest() -> u64 {
    let (time, mut scheduler) = virtual_clock(Duration::from_millis(40));
    let surface = simulate_motion(
        RecordingSurface::new(),
        time,
        &mut scheduler,
        -74.0,
        40.7,
        -73.9,
        40.8,
        2.0,
    )
    .unwrap();

    let bytes = serde_json::to_vec(surface.events()).unwrap();
    assert!(!surface.events().is_empty());
    digest_u64(&bytes)
}

#[test]
fn identical_runs_produce_identical_event_logs() {
    assert_eq!(run_digest(), run_digest());
}
