mod author;
mod id;
mod title;
mod year;

pub use self::{author::*, id::*, title::*, year::*};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    title: BookTitle,
    author: BookAuthor,
    year: BookYear,
}

impl Book {
    pub fn new(title: BookTitle, author: BookAuthor, year: BookYear) -> Self {
        Self {
            title,
            author,
            year,
        }
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn year(&self) -> &BookYear {
        &self.year
    }
}
