//! Static address reference data.
//!
//! Dispatch scenarios refer to delivery destinations by a short key such as
//! `"Сущёвский Вал 55"`. An [`AddressBook`] maps those keys onto coordinates
//! and the printable address line shown in route legs.

use std::collections::BTreeMap;

use geo::Coord;
use thiserror::Error;

/// Coordinates and printable line for a known address.
///
/// # Examples
/// ```
/// use dispatch_core::Address;
///
/// let address = Address::new(55.793728, 37.614428, "Москва, Сущёвский Вал, 55");
/// assert_eq!(address.location().y, 55.793728);
/// assert_eq!(address.location().x, 37.614428);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Human-readable address line.
    pub line1: String,
}

impl Address {
    /// Construct an address from latitude, longitude and display line.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, line1: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            line1: line1.into(),
        }
    }

    /// Return the address position as a `geo` coordinate.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// Errors returned by [`AddressBook::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The key is not present in the address table.
    #[error("unknown address key {key:?}")]
    UnknownAddress {
        /// Key that failed to resolve.
        key: String,
    },
}

/// Read-only lookup from address keys to [`Address`] records.
///
/// Implementations are expected to be immutable reference data; the
/// dispatch simulator never writes through this trait.
pub trait AddressBook {
    /// Resolve `key` to its address record.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::UnknownAddress`] when the key is not known.
    fn resolve(&self, key: &str) -> Result<&Address, AddressError>;
}

impl<T: AddressBook + ?Sized> AddressBook for &T {
    fn resolve(&self, key: &str) -> Result<&Address, AddressError> {
        (**self).resolve(key)
    }
}

/// In-memory [`AddressBook`] backed by an ordered map.
///
/// # Examples
/// ```
/// use dispatch_core::{Address, AddressBook, MemoryAddressBook};
///
/// let book = MemoryAddressBook::new()
///     .with_address("Ямская 10", Address::new(55.79088, 37.61095, "Москва, Ямская, 10"));
/// assert_eq!(book.resolve("Ямская 10").map(|a| a.latitude), Ok(55.79088));
/// assert!(book.resolve("Арбат 1").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MemoryAddressBook {
    entries: BTreeMap<String, Address>,
}

impl MemoryAddressBook {
    /// Construct an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return the updated book.
    #[must_use]
    pub fn with_address(mut self, key: impl Into<String>, address: Address) -> Self {
        self.insert(key, address);
        self
    }

    /// Insert or replace an entry, returning the previous record if any.
    pub fn insert(&mut self, key: impl Into<String>, address: Address) -> Option<Address> {
        self.entries.insert(key.into(), address)
    }

    /// Number of known addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no addresses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over known keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl AddressBook for MemoryAddressBook {
    fn resolve(&self, key: &str) -> Result<&Address, AddressError> {
        self.entries
            .get(key)
            .ok_or_else(|| AddressError::UnknownAddress {
                key: key.to_owned(),
            })
    }
}

impl<K: Into<String>> FromIterator<(K, Address)> for MemoryAddressBook {
    fn from_iter<I: IntoIterator<Item = (K, Address)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, address)| (key.into(), address))
                .collect(),
        }
    }
}
