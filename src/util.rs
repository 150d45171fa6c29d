use bytemuck::{checked::pod_read_unaligned, Pod};

use crate::CoeError;
use core::mem::size_of;

/// Splits a `T` off the front of the bytes.
///
/// `what` names the structure being read, for the error message.
#[inline]
pub(crate) fn try_pull_pod<'a, T: Pod>(
  bytes: &'a [u8], what: &'static str,
) -> Result<(T, &'a [u8]), CoeError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(CoeError::Truncated { what, needed: position, available: bytes.len() })
  }
}

/// Gets `len` bytes starting at `start`, or a truncation error.
#[inline]
pub(crate) fn try_get_span<'a>(
  bytes: &'a [u8], start: usize, len: usize, what: &'static str,
) -> Result<&'a [u8], CoeError> {
  let available = bytes.len().saturating_sub(start);
  match start.checked_add(len) {
    Some(end) if end <= bytes.len() => Ok(&bytes[start..end]),
    _ => Err(CoeError::Truncated { what, needed: len, available }),
  }
}

#[test]
fn test_try_pull_pod() {
  let bytes = [1_u8, 0, 0, 0, 9];
  let (x, rest) = try_pull_pod::<[u8; 4]>(&bytes, "test").unwrap();
  assert_eq!(x, [1, 0, 0, 0]);
  assert_eq!(rest, &[9]);
  assert!(matches!(
    try_pull_pod::<[u8; 8]>(&bytes, "test"),
    Err(CoeError::Truncated { needed: 8, available: 5, .. })
  ));
}

#[test]
fn test_try_get_span() {
  let bytes = [0_u8, 1, 2, 3, 4];
  assert_eq!(try_get_span(&bytes, 1, 3, "test").unwrap(), &[1, 2, 3]);
  assert_eq!(try_get_span(&bytes, 5, 0, "test").unwrap(), &[] as &[u8]);
  assert!(try_get_span(&bytes, 3, 3, "test").is_err());
  assert!(try_get_span(&bytes, 9, 1, "test").is_err());
  assert!(try_get_span(&bytes, usize::MAX, 2, "test").is_err());
}
