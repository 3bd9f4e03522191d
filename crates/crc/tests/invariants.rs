use en13757_crc::{
  Checksum, ChecksumCombine, Crc16En13757, Kernel, __internal::kernel_test, compute, compute_finalize, finalize,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn crc_normal_bitwise_u64(poly: u64, width: u8, init: u64, xor_out: u64, data: &[u8]) -> u64 {
  let mask = (1u64 << width) - 1;
  let top = 1u64 << (width as u32 - 1);
  let shift = width as u32 - 8;

  let mut crc = init & mask;
  for &b in data {
    crc ^= u64::from(b) << shift;
    for _ in 0..8 {
      if (crc & top) != 0 {
        crc = ((crc << 1) ^ poly) & mask;
      } else {
        crc = (crc << 1) & mask;
      }
    }
  }
  (crc ^ xor_out) & mask
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 9, 15, 16, 31, 63, 64, 65, 255, 1024, 2048];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

#[test]
fn en13757_invariants() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = Crc16En13757::checksum(&data);
      let reference = crc_normal_bitwise_u64(0x3D65, 16, 0, 0xFFFF, &data) as u16;
      assert_eq!(oneshot, reference, "reference mismatch at len={len}");
      assert_eq!(compute_finalize(&data), oneshot, "compute_finalize mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = Crc16En13757::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "incremental mismatch at len={len} split={split}");

        assert_eq!(
          finalize(compute(compute(0, a), b)),
          oneshot,
          "chained compute mismatch at len={len} split={split}"
        );

        let crc_a = Crc16En13757::checksum(a);
        let mut r = Crc16En13757::resume(crc_a);
        r.update(b);
        assert_eq!(r.finalize(), oneshot, "resume mismatch at len={len} split={split}");

        let crc_b = Crc16En13757::checksum(b);
        assert_eq!(
          <Crc16En13757 as ChecksumCombine>::combine(crc_a, crc_b, b.len()),
          oneshot,
          "combine mismatch at len={len} split={split}"
        );
      }
    }
  }
}

#[test]
fn kernels_agree_from_any_register() {
  for &len in &LENGTHS {
    let data = gen_bytes(len, 0x5eed ^ len as u64);
    for initial in [0x0000u16, 0x0001, 0x00FF, 0x8000, 0xA366, 0xFFFF] {
      let register = kernel_test::verify_kernels(initial, &data).unwrap();
      assert_eq!(register, Kernel::Reference.compute(initial, &data));
    }
  }
}

#[test]
fn zero_length_returns_register_for_every_state() {
  for r0 in 0..=u16::MAX {
    assert_eq!(compute(r0, &[]), r0);
    for &kernel in Kernel::ALL {
      assert_eq!(kernel.compute(r0, &[]), r0, "{}", kernel.name());
    }
  }
}

#[test]
fn check_and_residue() {
  assert_eq!(compute_finalize(b"123456789"), 0xC2B7);
  assert_eq!(compute_finalize(&[]), 0xFFFF);
  assert_eq!(finalize(0), 0xFFFF);

  let mut frame = b"123456789".to_vec();
  frame.extend_from_slice(&0xC2B7u16.to_be_bytes());
  assert_eq!(compute(0, &frame), 0xA366);
}

#[test]
fn vectored_matches_contiguous() {
  let data = gen_bytes(300, 42);
  let (a, rest) = data.split_at(17);
  let (b, c) = rest.split_at(128);
  assert_eq!(
    Crc16En13757::checksum_vectored(&[a, b, c]),
    Crc16En13757::checksum(&data)
  );
}

/// A single flipped bit changes the checksum for every prior register state.
#[test]
fn single_bit_flip_is_detected() {
  let data = gen_bytes(24, 7);

  for bit in [0usize, 1, 7, 8, 63, 100, 191] {
    let mut flipped = data.clone();
    flipped[bit / 8] ^= 1 << (bit % 8);

    let detected = (0..=u16::MAX)
      .filter(|&r0| finalize(compute(r0, &data)) != finalize(compute(r0, &flipped)))
      .count();
    assert!(detected >= 1 << 15, "bit {bit}: only {detected} states detect the flip");
    assert_eq!(detected, 1 << 16, "bit {bit}: CRC is linear, every state must detect it");
  }
}
