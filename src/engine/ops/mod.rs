pub mod binary;
pub mod unary;

// Both modules only add `impl CalcEngine` blocks
