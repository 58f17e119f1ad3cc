//! Generic algorithms, independent of the structures of a program.

pub mod mobius;
