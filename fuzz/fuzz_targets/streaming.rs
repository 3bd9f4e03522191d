//! Streaming and chaining fuzzing.
//!
//! Arbitrary update splits through the hasher and through chained `compute`
//! calls must match the one-shot checksum.

#![no_main]

use arbitrary::Arbitrary;
use en13757_crc::{Crc16En13757, compute, finalize};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Crc16En13757::checksum(data);

  let mut hasher = Crc16En13757::new();
  let mut register = 0u16;
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    register = compute(register, &data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
  assert_eq!(finalize(register), expected, "chained compute mismatch");
});
