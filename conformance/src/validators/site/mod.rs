//! Generated dashboard validators (HTML, CSS, citation affordances, data files).

pub mod artifacts;
pub mod citations;
pub mod css;
pub mod html;
