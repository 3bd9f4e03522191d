//! Runtime kernel configuration (tunables + overrides).
//!
//! With `std`, overrides are read once from the environment and cached for
//! the rest of the process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `EN13757_CRC_FORCE` | `auto`, `reference`/`bitwise`, `table`/`portable`, `slice4`, `slice8` |
//! | `EN13757_CRC_THRESHOLD_TABLE_TO_SLICE8` | bytes (minimum 1) |
//!
//! Without `std` the defaults always apply.

use crate::kernels::{self, Kernel};

/// Default length at which auto selection moves from the single table to
/// slice-by-8.
pub const DEFAULT_TABLE_TO_SLICE8: usize = 64;

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc16Force {
  /// Pick by buffer length.
  #[default]
  Auto,
  /// Bit-serial reference (slow, no tables).
  Reference,
  /// Byte-at-a-time table.
  Table,
  /// Slice-by-4.
  Slice4,
  /// Slice-by-8.
  Slice8,
}

impl Crc16Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
      Self::Slice4 => "slice4",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse an override value. Case-insensitive, surrounding whitespace ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Table);
    }
    if value.eq_ignore_ascii_case("slice4") || value.eq_ignore_ascii_case("slice-4") {
      return Some(Self::Slice4);
    }
    if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-8") {
      return Some(Self::Slice8);
    }

    None
  }

  /// The kernel this force mode pins, if it pins one in this build.
  ///
  /// Table-backed modes resolve to [`Kernel::Reference`] under `no-tables`.
  #[must_use]
  pub const fn kernel(self) -> Option<Kernel> {
    match self {
      Self::Auto => None,
      Self::Reference => Some(Kernel::Reference),
      #[cfg(not(feature = "no-tables"))]
      Self::Table => Some(Kernel::Table),
      #[cfg(not(feature = "no-tables"))]
      Self::Slice4 => Some(Kernel::Slice4),
      #[cfg(not(feature = "no-tables"))]
      Self::Slice8 => Some(Kernel::Slice8),
      #[cfg(feature = "no-tables")]
      Self::Table | Self::Slice4 | Self::Slice8 => Some(Kernel::Reference),
    }
  }
}

/// Selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc16Tunables {
  /// Minimum `len` in bytes to use slice-by-8 (otherwise the single table).
  pub table_to_slice8: usize,
}

impl Default for Crc16Tunables {
  fn default() -> Self {
    Self {
      table_to_slice8: DEFAULT_TABLE_TO_SLICE8,
    }
  }
}

/// Resolved configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc16Config {
  /// Force mode as requested (environment or default).
  pub requested_force: Crc16Force,
  /// Kernel pinned by the force mode in this build, `None` for auto.
  pub forced_kernel: Option<Kernel>,
  pub tunables: Crc16Tunables,
}

impl Crc16Config {
  /// Kernel used for a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn kernel_for_len(&self, len: usize) -> Kernel {
    match self.forced_kernel {
      Some(kernel) => kernel,
      None => kernels::auto_for_len(len, self.tunables.table_to_slice8),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: Crc16Force,
  table_to_slice8: Option<usize>,
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    force: var("EN13757_CRC_FORCE")
      .and_then(|v| Crc16Force::parse(&v))
      .unwrap_or_default(),
    table_to_slice8: var("EN13757_CRC_THRESHOLD_TABLE_TO_SLICE8").and_then(|v| parse_usize(&v)),
  }
}

fn config_from(ov: Overrides) -> Crc16Config {
  let mut tunables = Crc16Tunables::default();
  if let Some(v) = ov.table_to_slice8 {
    tunables.table_to_slice8 = v.max(1);
  }

  Crc16Config {
    requested_force: ov.force,
    forced_kernel: ov.force.kernel(),
    tunables,
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> Crc16Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc16Config> = OnceLock::new();
    *CACHED.get_or_init(|| {
      let cfg = config_from(read_env_overrides());
      #[cfg(feature = "tracing")]
      tracing::debug!(
        force = cfg.requested_force.as_str(),
        forced_kernel = cfg.forced_kernel.map(Kernel::name),
        table_to_slice8 = cfg.tunables.table_to_slice8,
        "resolved CRC-16/EN-13757 kernel configuration"
      );
      cfg
    })
  }

  #[cfg(not(feature = "std"))]
  {
    config_from(Overrides::default())
  }
}
