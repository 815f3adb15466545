//! Text utilities shared by the cipher.

pub(crate) mod text;
