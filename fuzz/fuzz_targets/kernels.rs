//! Cross-kernel equivalence fuzzing.
//!
//! Every kernel compiled into this build must leave the same raw register as
//! the bit-serial reference, from any starting register.

#![no_main]

use arbitrary::Arbitrary;
use en13757_crc::__internal::kernel_test::{run_all_kernels, verify_kernels};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  initial: u16,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let results = run_all_kernels(input.initial, &input.data);

  if let Some((first, rest)) = results.split_first() {
    for result in rest {
      assert_eq!(
        result.register,
        first.register,
        "kernel mismatch: {} produced 0x{:04X}, but {} produced 0x{:04X}, len={}",
        result.name,
        result.register,
        first.name,
        first.register,
        input.data.len()
      );
    }
  }

  verify_kernels(input.initial, &input.data).expect("kernel verification failed");
});
