//! Cross-kernel testing utilities.
//!
//! Runs every kernel compiled into this build on the same input. Used by the
//! integration tests and fuzz targets to check that all kernels agree. The
//! first result is always the bit-serial reference.

use alloc::{format, string::String, vec::Vec};

use crate::kernels::Kernel;

/// Result from running a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelResult {
  /// Kernel name (e.g. "reference/bitwise", "portable/slice8").
  pub name: &'static str,
  /// Raw register after the input.
  pub register: u16,
}

/// Run every available kernel from register `initial` over `data`.
#[must_use]
pub fn run_all_kernels(initial: u16, data: &[u8]) -> Vec<KernelResult> {
  Kernel::ALL
    .iter()
    .map(|&kernel| KernelResult {
      name: kernel.name(),
      register: kernel.compute(initial, data),
    })
    .collect()
}

/// Verify that every kernel produces the same raw register.
///
/// # Errors
///
/// Describes the first kernel that disagrees with the reference.
pub fn verify_kernels(initial: u16, data: &[u8]) -> Result<u16, String> {
  verify_kernel_agreement(&run_all_kernels(initial, data))
}

fn verify_kernel_agreement(results: &[KernelResult]) -> Result<u16, String> {
  let Some(first) = results.first() else {
    return Err(String::from("no kernels available"));
  };

  for result in results.iter().skip(1) {
    if result.register != first.register {
      return Err(format!(
        "kernel mismatch: {} produced 0x{:04X}, but {} produced 0x{:04X}",
        first.name, first.register, result.name, result.register
      ));
    }
  }

  Ok(first.register)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::kernels::REFERENCE;

  #[test]
  fn reference_runs_first() {
    let results = run_all_kernels(0, b"123456789");
    assert_eq!(results[0].name, REFERENCE);
    assert_eq!(results.len(), Kernel::ALL.len());
  }

  #[test]
  fn agreement_on_check_string() {
    assert_eq!(verify_kernels(0, b"123456789"), Ok(0x3D48));
  }

  #[test]
  fn disagreement_is_reported() {
    let results = [
      KernelResult {
        name: "a",
        register: 1,
      },
      KernelResult {
        name: "b",
        register: 2,
      },
    ];
    let err = verify_kernel_agreement(&results).unwrap_err();
    assert!(err.contains("a produced 0x0001"));
    assert!(err.contains("b produced 0x0002"));
  }

  #[test]
  fn empty_result_set_is_an_error() {
    assert!(verify_kernel_agreement(&[]).is_err());
  }
}
