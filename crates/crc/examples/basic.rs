//! Basic CRC-16/EN-13757 usage: one-shot, chained, streaming and combine.
//!
//! Run with: `cargo run --example basic -p en13757-crc`

use en13757_crc::{Crc16En13757, compute, compute_finalize, finalize};

fn main() {
  println!("=== CRC-16/EN-13757 Examples ===\n");
  println!("backend: {}\n", en13757_crc::backend_name());

  one_shot();
  chained();
  streaming();
  combine();
  verify();
}

/// One-shot: the whole buffer is in memory.
fn one_shot() {
  println!("--- One-Shot ---\n");

  let crc = compute_finalize(b"123456789");
  println!("crc(\"123456789\") = 0x{crc:04X}");
  assert_eq!(crc, 0xC2B7);

  println!();
}

/// Chained: carry the raw register between chunks, finalize once.
fn chained() {
  println!("--- Chained ---\n");

  let mut register = 0u16;
  for chunk in [&b"123"[..], b"456", b"789"] {
    register = compute(register, chunk);
    println!("after {:?}: raw register 0x{register:04X}", std::str::from_utf8(chunk).unwrap_or("?"));
  }
  let crc = finalize(register);
  println!("finalized: 0x{crc:04X}");
  assert_eq!(crc, 0xC2B7);

  println!();
}

/// Streaming hasher.
fn streaming() {
  println!("--- Streaming ---\n");

  let mut h = Crc16En13757::new();
  h.update(b"1234");
  h.update(b"56789");
  println!("hasher: 0x{:04X}", h.finalize());
  assert_eq!(h.finalize(), 0xC2B7);

  println!();
}

/// Combine checksums of independently processed parts.
fn combine() {
  println!("--- Combine ---\n");

  let (a, b) = b"123456789".split_at(4);
  let crc_a = Crc16En13757::checksum(a);
  let crc_b = Crc16En13757::checksum(b);
  let combined = Crc16En13757::combine(crc_a, crc_b, b.len());
  println!("combine(0x{crc_a:04X}, 0x{crc_b:04X}, {}) = 0x{combined:04X}", b.len());
  assert_eq!(combined, 0xC2B7);

  println!();
}

/// Verify a frame carrying its checksum big-endian at the end.
fn verify() {
  println!("--- Verify ---\n");

  let mut frame = b"123456789".to_vec();
  frame.extend_from_slice(&Crc16En13757::checksum(&frame).to_be_bytes());
  println!("intact frame:    {:?}", Crc16En13757::verify_residue(&frame));

  frame[0] ^= 0x01;
  match Crc16En13757::verify_residue(&frame) {
    Ok(()) => println!("corrupted frame: accepted"),
    Err(e) => println!("corrupted frame: {e}"),
  }
}
