//! Page chrome with no shared state: mobile menu, scroll reveal and the
//! hero typing effect.

pub mod menu;
pub mod reveal;
pub mod typing;
