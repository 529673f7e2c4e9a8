pub use self::{excel::*, json::*};

mod excel;
mod json;
