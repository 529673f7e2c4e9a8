/// Publication year. Sources that cannot be parsed as an integer coerce to 0
/// rather than failing the whole import.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BookYear(i32);

impl BookYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}

impl Default for BookYear {
    fn default() -> Self {
        Self(0)
    }
}

impl AsRef<i32> for BookYear {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<BookYear> for i32 {
    fn from(value: BookYear) -> Self {
        value.0
    }
}
