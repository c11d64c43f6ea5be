#![deny(missing_docs)]
#![doc = "Shared leaf types for the denom workspace: the canonical denomination table, the byte-packed path encoding, the error taxonomy and the deterministic RNG handle."]

pub mod errors;
pub mod path;
pub mod rng;
pub mod table;

pub use errors::{DenomError, ErrorInfo};
pub use path::{decode_path, encode_path, EncodedPath, MAX_PATH_TERMS};
pub use rng::{derive_substream_seed, RngHandle};
pub use table::{DenominationTable, MAX_DENOMINATIONS};
