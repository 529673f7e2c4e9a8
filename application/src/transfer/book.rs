use kernel::interface::extract::FileKind;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ImportBookDto {
    pub kind: FileKind,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeleteBookDto {
    pub kind: FileKind,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ImportSummaryDto {
    pub kind: FileKind,
    pub inserted: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeleteSummaryDto {
    pub deleted: usize,
}
