//! Combine fuzzing: joining per-chunk checksums must give the whole-buffer
//! checksum for any set of split points.

#![no_main]

use arbitrary::Arbitrary;
use en13757_crc::Crc16En13757;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let mut combined = Crc16En13757::checksum(&[]);
  let mut prev = 0;
  for split in splits.into_iter().chain(std::iter::once(data.len())) {
    if split < prev {
      continue;
    }
    let chunk = &data[prev..split];
    combined = Crc16En13757::combine(combined, Crc16En13757::checksum(chunk), chunk.len());
    prev = split;
  }

  assert_eq!(combined, Crc16En13757::checksum(data), "combine chain mismatch");
});
