//! `license_guess` — identify the license governing a piece of software.
//!
//! A [`License`] can be built from raw text ([`License::new`]), from a single
//! file ([`License::from_file`]) or from a project directory
//! ([`License::from_dir`]). Loading from disk classifies the text against a
//! fixed catalog of license types.
//!
//! ```no_run
//! use license_guess::License;
//!
//! let license = License::from_dir(".")?;
//! println!("{}", license.license_type);
//! # Ok::<(), license_guess::LicenseError>(())
//! ```

pub mod error;
pub mod license;

pub use error::LicenseError;
pub use license::catalog::{known_licenses, LicenseEntry};
pub use license::files::{default_license_files, search_dir};
pub use license::License;
