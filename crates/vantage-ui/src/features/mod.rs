//! Feature views composed from the component library.

pub mod dashboard;
