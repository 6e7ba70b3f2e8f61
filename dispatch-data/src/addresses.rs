//! Address table loading.
//!
//! Tables are JSON objects keyed by address key:
//!
//! ```json
//! { "Ямская 10": { "latitude": 55.79088, "longitude": 37.61095, "line1": "Москва, ул. 2-я Ямская, 10" } }
//! ```

use std::io::BufReader;

use camino::Utf8Path;
use dispatch_core::MemoryAddressBook;
use log::debug;

use crate::AddressTableError;
use crate::fs::open_utf8_file;

/// Key of the pickup point in the bundled table.
pub const DEFAULT_PICKUP_POINT: &str = "ПВ Курьерика";

const BUNDLED_TABLE: &str = include_str!("../data/addresses.json");

/// Load an address table from a JSON file.
///
/// # Errors
///
/// Returns [`AddressTableError::Open`] when the file cannot be opened and
/// [`AddressTableError::Parse`] when its contents are not a valid table.
pub fn load_address_table(path: &Utf8Path) -> Result<MemoryAddressBook, AddressTableError> {
    let file = open_utf8_file(path).map_err(|source| AddressTableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let book: MemoryAddressBook = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| AddressTableError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;
    debug!("loaded {} addresses from {path}", book.len());
    Ok(book)
}

/// Parse an address table from a JSON string.
///
/// # Errors
///
/// Returns [`AddressTableError::ParseInline`] when `json` is not a valid
/// table.
pub fn parse_address_table(json: &str) -> Result<MemoryAddressBook, AddressTableError> {
    serde_json::from_str(json).map_err(AddressTableError::ParseInline)
}

/// The Moscow address table shipped with the simulator.
///
/// Holds the pickup point [`DEFAULT_PICKUP_POINT`] and the delivery
/// addresses used by the dispatch scenarios.
///
/// # Errors
///
/// Returns [`AddressTableError::ParseInline`] if the embedded table is
/// malformed.
///
/// # Examples
/// ```
/// use dispatch_core::AddressBook;
/// use dispatch_data::{DEFAULT_PICKUP_POINT, bundled_address_table};
///
/// let book = bundled_address_table()?;
/// assert!(book.resolve(DEFAULT_PICKUP_POINT).is_ok());
/// assert!(book.resolve("Ямская 10").is_ok());
/// # Ok::<(), dispatch_data::AddressTableError>(())
/// ```
pub fn bundled_address_table() -> Result<MemoryAddressBook, AddressTableError> {
    parse_address_table(BUNDLED_TABLE)
}
