pub use self::{book::*, excel::*, json::*};

mod book;
mod excel;
mod json;
