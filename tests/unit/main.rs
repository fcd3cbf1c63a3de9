//! Unit tests mirroring the library's module layout
