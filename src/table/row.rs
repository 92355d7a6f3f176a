//! Fixed-width row codec.
//!
//! Every row serializes to exactly [`ROW_SIZE`] bytes:
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       4     id (little-endian)
//! 4       33    username (NUL-padded, at most 32 bytes of text)
//! 37      256   email (NUL-padded, at most 255 bytes of text)
//! ```

use std::fmt;

use crate::common::{Error, Result};

/// Longest username, in bytes.
pub const USERNAME_MAX_LEN: usize = 32;
/// Longest email, in bytes.
pub const EMAIL_MAX_LEN: usize = 255;

pub const ID_SIZE: usize = std::mem::size_of::<u32>();
pub const USERNAME_SIZE: usize = USERNAME_MAX_LEN + 1;
pub const EMAIL_SIZE: usize = EMAIL_MAX_LEN + 1;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// A validated table row.
///
/// Rows can only be built through [`Row::new`], so a `Row` always has a
/// positive id and NUL-free fields that fit their columns.
///
/// # Example
/// ```
/// use litlesql::table::row::{Row, ROW_SIZE};
///
/// let row = Row::new(1, "user", "one@pe.com")?;
/// let mut buf = [0u8; ROW_SIZE];
/// row.serialize(&mut buf);
/// assert_eq!(Row::deserialize(&buf), row);
/// assert_eq!(row.to_string(), "(1, user, one@pe.com)");
/// # Ok::<(), litlesql::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: String,
    email: String,
}

impl Row {
    /// Validate and build a row.
    ///
    /// # Errors
    /// - `Error::InvalidId` if `id` is not positive
    /// - `Error::FieldTooLong` if a field exceeds its column width
    /// - `Error::NulInField` if a field contains a NUL byte, which the
    ///   column encoding reserves as its terminator
    pub fn new(id: i32, username: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        if id <= 0 {
            return Err(Error::InvalidId);
        }

        let username = username.into();
        let email = email.into();
        if username.len() > USERNAME_MAX_LEN || email.len() > EMAIL_MAX_LEN {
            return Err(Error::FieldTooLong);
        }
        if username.contains('\0') || email.contains('\0') {
            return Err(Error::NulInField);
        }

        Ok(Self {
            id: id as u32,
            username,
            email,
        })
    }

    /// The row key.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Write the fixed-width encoding into `dst`.
    ///
    /// Unused bytes of each text column are zeroed, so every field keeps at
    /// least one NUL terminator.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than [`ROW_SIZE`].
    pub fn serialize(&self, dst: &mut [u8]) {
        let dst = &mut dst[..ROW_SIZE];
        dst.fill(0);

        dst[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        dst[USERNAME_OFFSET..USERNAME_OFFSET + self.username.len()]
            .copy_from_slice(self.username.as_bytes());
        dst[EMAIL_OFFSET..EMAIL_OFFSET + self.email.len()].copy_from_slice(self.email.as_bytes());
    }

    /// Decode a row previously written by [`serialize`](Self::serialize).
    ///
    /// # Panics
    /// Panics if `src` is shorter than [`ROW_SIZE`].
    pub fn deserialize(src: &[u8]) -> Self {
        let id = u32::from_le_bytes([
            src[ID_OFFSET],
            src[ID_OFFSET + 1],
            src[ID_OFFSET + 2],
            src[ID_OFFSET + 3],
        ]);

        Self {
            id,
            username: read_text(&src[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_text(&src[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

/// Text up to the first NUL byte.
fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_size() {
        assert_eq!(ROW_SIZE, 293);
        assert_eq!(USERNAME_OFFSET, 4);
        assert_eq!(EMAIL_OFFSET, 37);
    }

    #[test]
    fn test_byte_layout() {
        let row = Row::new(0x01020304, "ab", "c@d").unwrap();
        let mut buf = [0xFFu8; ROW_SIZE];
        row.serialize(&mut buf);

        assert_eq!(&buf[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[4..7], b"ab\0");
        assert_eq!(&buf[37..41], b"c@d\0");
        assert!(buf[41..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_id() {
        assert!(matches!(Row::new(0, "a", "b"), Err(Error::InvalidId)));
        assert!(matches!(Row::new(-1, "a", "b"), Err(Error::InvalidId)));
        assert!(matches!(Row::new(i32::MIN, "a", "b"), Err(Error::InvalidId)));
    }

    #[test]
    fn test_invalid_id_checked_before_lengths() {
        let long = "a".repeat(USERNAME_MAX_LEN + 1);
        assert!(matches!(Row::new(-1, long, "b"), Err(Error::InvalidId)));
    }

    #[test]
    fn test_max_length_fields() {
        let username = "a".repeat(USERNAME_MAX_LEN);
        let email = "a".repeat(EMAIL_MAX_LEN);
        let row = Row::new(1, username.clone(), email.clone()).unwrap();

        let mut buf = [0u8; ROW_SIZE];
        row.serialize(&mut buf);
        let decoded = Row::deserialize(&buf);

        assert_eq!(decoded.username(), username);
        assert_eq!(decoded.email(), email);
    }

    #[test]
    fn test_fields_too_long() {
        let long_username = "a".repeat(USERNAME_MAX_LEN + 1);
        let long_email = "a".repeat(EMAIL_MAX_LEN + 1);

        assert!(matches!(Row::new(1, long_username, "e"), Err(Error::FieldTooLong)));
        assert!(matches!(Row::new(1, "u", long_email), Err(Error::FieldTooLong)));
    }

    #[test]
    fn test_length_is_measured_in_bytes() {
        // 11 three-byte characters = 33 bytes
        let username = "€".repeat(11);
        assert!(matches!(Row::new(1, username, "e"), Err(Error::FieldTooLong)));
    }

    #[test]
    fn test_nul_in_field_rejected() {
        assert!(matches!(Row::new(1, "ab\0cd", "e"), Err(Error::NulInField)));
        assert!(matches!(Row::new(1, "u", "a@b\0.com"), Err(Error::NulInField)));
        assert!(matches!(Row::new(1, "\0", ""), Err(Error::NulInField)));
    }

    #[test]
    fn test_display() {
        let row = Row::new(15, "user15", "person15@m.com").unwrap();
        assert_eq!(row.to_string(), "(15, user15, person15@m.com)");
    }

    proptest! {
        #[test]
        fn prop_serialize_roundtrip(
            id in 1..=i32::MAX,
            username in "[a-zA-Z0-9_.]{0,32}",
            email in "[a-z0-9@.\\-]{0,255}",
        ) {
            let row = Row::new(id, username.clone(), email.clone()).unwrap();
            let mut buf = [0u8; ROW_SIZE];
            row.serialize(&mut buf);

            let decoded = Row::deserialize(&buf);
            prop_assert_eq!(decoded.id(), id as u32);
            prop_assert_eq!(decoded.username(), username.as_str());
            prop_assert_eq!(decoded.email(), email.as_str());
        }

        #[test]
        fn prop_nul_never_stored(
            username in "[a-z\\x00]{0,32}",
            email in "[a-z@\\x00]{0,64}",
        ) {
            let result = Row::new(1, username.clone(), email.clone());
            if username.contains('\0') || email.contains('\0') {
                prop_assert!(matches!(result, Err(Error::NulInField)));
            } else {
                let row = result.unwrap();
                let mut buf = [0u8; ROW_SIZE];
                row.serialize(&mut buf);
                prop_assert_eq!(Row::deserialize(&buf), row);
            }
        }
    }
}
