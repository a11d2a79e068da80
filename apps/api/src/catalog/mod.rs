//! Static lookup tables: the 12-sign zodiac catalog and the A–Z letter
//! trait table. Both are immutable `const` arenas — lookups are plain array
//! indexing with no allocation and no interior mutability.

pub mod letters;
pub mod signs;
