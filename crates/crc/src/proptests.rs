extern crate std;

use std::vec::Vec;

use crc::{CRC_16_EN_13757, Crc};
use proptest::prelude::*;

use super::*;
use crate::reference::bitwise;

static CATALOG: Crc<u16> = Crc::<u16>::new(&CRC_16_EN_13757);

proptest! {
  #[test]
  fn every_kernel_matches_reference(
    initial in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
  ) {
    let expected = bitwise(initial, &data);
    for &kernel in Kernel::ALL {
      prop_assert_eq!(kernel.compute(initial, &data), expected, "{}", kernel.name());
    }
  }

  #[test]
  fn compute_finalize_matches_finalize_of_compute(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(compute_finalize(&data), finalize(compute(0, &data)));
  }

  #[test]
  fn chaining_is_concatenation(
    initial in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    prop_assert_eq!(compute(compute(initial, a), b), compute(initial, &data));
  }

  #[test]
  fn streaming_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257,
  ) {
    let mut h = Crc16En13757::new();
    for part in data.chunks(chunk) {
      h.update(part);
    }
    prop_assert_eq!(h.finalize(), Crc16En13757::checksum(&data));
  }

  #[test]
  fn combine_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = Crc16En13757::combine(Crc16En13757::checksum(a), Crc16En13757::checksum(b), b.len());
    prop_assert_eq!(combined, Crc16En13757::checksum(&data));
  }

  #[test]
  fn resume_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut h = Crc16En13757::resume(Crc16En13757::checksum(a));
    h.update(b);
    prop_assert_eq!(h.finalize(), Crc16En13757::checksum(&data));
  }

  #[test]
  fn appended_checksum_leaves_residue(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let mut frame: Vec<u8> = data.clone();
    frame.extend_from_slice(&Crc16En13757::checksum(&data).to_be_bytes());
    prop_assert!(Crc16En13757::verify_residue(&frame).is_ok());
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate catalogue entry
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn matches_crc_catalog(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16En13757::checksum(&data), CATALOG.checksum(&data));
  }

  #[test]
  fn streaming_matches_crc_catalog(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257,
  ) {
    let mut ours = Crc16En13757::new();
    let mut reference = CATALOG.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }
}

const _: () = assert!(!CRC_16_EN_13757.refin && !CRC_16_EN_13757.refout);

#[test]
fn catalog_parameters_agree() {
  assert_eq!(CRC_16_EN_13757.poly, constants::POLYNOMIAL);
  assert_eq!(CRC_16_EN_13757.init, 0x0000);
  assert_eq!(CRC_16_EN_13757.xorout, constants::XOR_OUT);
  assert_eq!(CRC_16_EN_13757.check, constants::CHECK);
  assert_eq!(CRC_16_EN_13757.residue, constants::RESIDUE);
}
