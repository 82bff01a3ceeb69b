// Fri Jan 16 2026 - Alex

pub mod address;
pub mod error;
pub mod maps;
pub mod module;
pub mod protection;
pub mod query;
pub mod range;
pub mod region;
pub mod scanner;

pub use address::Address;
pub use error::MemoryError;
pub use module::ModuleHandle;
pub use protection::Protection;
pub use query::{RegionDescriber, SystemDescriber};
pub use range::ScanRange;
pub use region::MemoryRegion;
pub use scanner::SignatureScanner;
