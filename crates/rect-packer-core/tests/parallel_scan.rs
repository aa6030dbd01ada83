#![cfg(feature = "parallel")]

use rand::{Rng, SeedableRng};
use rect_packer_core::prelude::*;

#[test]
fn parallel_scan_matches_sequential() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(77);
    let sizes: Vec<Size> = (0..320)
        .map(|_| Size::new(1 << rng.gen_range(0..6), 1 << rng.gen_range(0..6)))
        .collect();
    let seq = pack_with_config(&sizes, PackerConfig::builder().parallel(false).build())
        .expect("pack");
    let par = pack_with_config(&sizes, PackerConfig::builder().parallel(true).build())
        .expect("pack");
    assert_eq!(seq, par);
}
