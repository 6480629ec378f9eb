//! Domain Layer
//!
//! Pure generator logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - AssetEntry, EmbeddedAsset, GeneratedHeader
//! - `value_objects/` - ContentHash, Identifier, Delimiter
//! - `services/` - HeaderTemplate, SVG well-formedness check
//! - `ports/` - FileSystem interface implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
