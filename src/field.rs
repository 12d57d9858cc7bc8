use std::fmt::Write;

use crate::error::{Error, Result};

/// Name of the scalar field, shown by visualization tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyFieldName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as written to a legacy file
    ///
    /// Bytes that would split the name on reading (whitespace, control
    /// characters, non-ASCII) and `%` itself become `%XX`, the escaping VTK
    /// readers decode.
    pub fn encoded_name(&self) -> String {
        let mut encoded = String::with_capacity(self.name.len());
        for byte in self.name.bytes() {
            if byte <= b' ' || byte > b'~' || byte == b'%' {
                // writing into a String cannot fail
                let _ = write!(encoded, "%{byte:02X}");
            } else {
                encoded.push(byte as char);
            }
        }
        encoded
    }
}
