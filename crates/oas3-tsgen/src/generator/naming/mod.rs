pub mod constants;
pub mod functions;
pub mod identifiers;

#[cfg(test)]
mod tests;
