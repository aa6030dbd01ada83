//! Packs 200 random power-of-two boxes and writes `plop.bmp` for inspection.
use rand::{Rng, SeedableRng};
use rect_packer_core::prelude::*;
use std::time::Instant;

fn main() -> rect_packer_core::Result<()> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let sizes: Vec<Size> = (0..200)
        .map(|_| Size::new(1 << rng.gen_range(0..7), 1 << rng.gen_range(0..7)))
        .collect();

    let start = Instant::now();
    let out = pack(&sizes)?;
    println!("packed in {:?}: {}", start.elapsed(), out.stats().summary());

    rect_packer_core::save_debug_image(&out, "plop.bmp", 1)?;
    Ok(())
}
