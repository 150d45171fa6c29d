//! Writing `.coe` memory initialization text.

use core::fmt::LowerHex;
use std::io::{self, Write};

/// The two line header every `.coe` file we write starts with.
pub const COE_HEADER: &str = "memory_initialization_radix=16;\nmemory_initialization_vector=";

/// Writes `header` and then each value as lowercase hex, separated by single
/// spaces.
///
/// Values are written with their natural number of digits (use a type with a
/// padded [LowerHex] impl if fixed width tokens are needed). There's no
/// separator after the last value.
pub fn write_coe<W, I>(sink: &mut W, header: &str, values: I) -> io::Result<()>
where
  W: Write + ?Sized,
  I: IntoIterator,
  I::Item: LowerHex,
{
  sink.write_all(header.as_bytes())?;
  for (i, value) in values.into_iter().enumerate() {
    if i > 0 {
      sink.write_all(b" ")?;
    }
    write!(sink, "{value:x}")?;
  }
  Ok(())
}
