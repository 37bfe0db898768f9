//! Itinerary Library
//!
//! Turns administrator-written flight itineraries into customer-friendly text.
//! This library provides functionality to:
//! - Load an airport lookup table (ICAO/IATA code to airport name and city)
//! - Replace airport and city code tokens such as `#LAX` or `*#EGLL`
//! - Reformat ISO-8601 date and time tokens such as `D(2024-12-25T10:30-07:00)`
//! - Tidy line breaks and blank lines
//!
//! # Example
//!
//! ```
//! use itinerary::lookup::{AirportLookup, AirportRecord};
//! use itinerary::substitute::prettify;
//!
//! let lookup = AirportLookup::from_records(vec![AirportRecord {
//!     full_name: "John F Kennedy Intl".to_string(),
//!     country: "US".to_string(),
//!     city: "New York".to_string(),
//!     icao_code: "KJFK".to_string(),
//!     iata_code: "JFK".to_string(),
//! }])
//! .expect("valid lookup");
//!
//! let text = prettify("Depart #JFK on D(2024-12-25T10:30-07:00)", &lookup);
//! assert_eq!(text, "Depart John F Kennedy Intl on 25-Dec-2024");
//! ```

pub mod error;
pub mod date;
pub mod lookup;
pub mod substitute;
pub mod run;

// Re-export commonly used items
pub use error::{Error, Result};
