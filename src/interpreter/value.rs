/// Runtime value representation.
///
/// Defines the `Value` enum, its truthiness rule, structural equality and the
/// text produced by `cetak`.
pub mod core;
/// Function values.
///
/// Defines the `Function` type: a function declaration bundled with the scope
/// it was declared in.
pub mod function;
