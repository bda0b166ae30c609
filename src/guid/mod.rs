// Mon Feb 02 2026 - Alex

pub mod known;

pub use known::{known_guid_name, KnownGuid, KNOWN_GUIDS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid GUID text: {0}")]
pub struct GuidParseError(pub String);

/// `EFI_GUID` as laid out in memory: three little-endian fields followed by eight raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const SIZE: usize = 16;

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; Self::SIZE] = bytes.get(..Self::SIZE)?.try_into().ok()?;
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Some(Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }

    /// A leading dword of all zeroes or all ones marks uninitialised or erased data.
    /// Real GUIDs that happen to start that way are rejected too.
    pub fn is_valid(&self) -> bool {
        self.data1 != 0x0000_0000 && self.data1 != 0xFFFF_FFFF
    }

    pub fn known_name(&self) -> Option<&'static str> {
        known_guid_name(self)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl FromStr for Guid {
    type Err = GuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GuidParseError(s.to_string());
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 5 || parts[3].len() != 4 || parts[4].len() != 12 {
            return Err(err());
        }

        let data1 = u32::from_str_radix(parts[0], 16).map_err(|_| err())?;
        let data2 = u16::from_str_radix(parts[1], 16).map_err(|_| err())?;
        let data3 = u16::from_str_radix(parts[2], 16).map_err(|_| err())?;

        let tail = format!("{}{}", parts[3], parts[4]);
        let mut data4 = [0u8; 8];
        for (i, byte) in data4.iter_mut().enumerate() {
            let pair = tail.get(i * 2..i * 2 + 2).ok_or_else(err)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| err())?;
        }

        Ok(Self::new(data1, data2, data3, data4))
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOADED_IMAGE_BYTES: [u8; 16] = [
        0xA1, 0x31, 0x1B, 0x5B, 0x62, 0x95, 0xD2, 0x11, 0x8E, 0x3F, 0x00, 0xA0, 0xC9, 0x69, 0x72, 0x3B,
    ];

    #[test]
    fn test_from_bytes_and_display() {
        let guid = Guid::from_bytes(&LOADED_IMAGE_BYTES).unwrap();
        assert_eq!(guid.to_string(), "5B1B31A1-9562-11D2-8E3F-00A0C969723B");
        assert_eq!(guid.to_bytes(), LOADED_IMAGE_BYTES);
    }

    #[test]
    fn test_short_buffer() {
        assert!(Guid::from_bytes(&LOADED_IMAGE_BYTES[..15]).is_none());
    }

    #[test]
    fn test_parse() {
        let guid: Guid = "8be4df61-93ca-11d2-aa0d-00e098032b8c".parse().unwrap();
        assert_eq!(guid.data1, 0x8BE4DF61);
        assert_eq!(guid.data4, [0xAA, 0x0D, 0x00, 0xE0, 0x98, 0x03, 0x2B, 0x8C]);
        assert!("8BE4DF61-93CA-11D2-AA0D".parse::<Guid>().is_err());
        assert!("ZZE4DF61-93CA-11D2-AA0D-00E098032B8C".parse::<Guid>().is_err());
    }

    #[test]
    fn test_validity_sentinels() {
        assert!(!Guid::new(0, 1, 2, [3; 8]).is_valid());
        assert!(!Guid::new(0xFFFF_FFFF, 1, 2, [3; 8]).is_valid());
        assert!(Guid::new(1, 0, 0, [0; 8]).is_valid());
    }

    #[test]
    fn test_serde_as_text() {
        let guid = Guid::from_bytes(&LOADED_IMAGE_BYTES).unwrap();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, "\"5B1B31A1-9562-11D2-8E3F-00A0C969723B\"");
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guid);
    }
}
