use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    EmptyFile,
    InvalidFileType,
    Decode,
    NoDeleteTarget,
    NoMatch,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::EmptyFile => write!(f, "File is empty"),
            KernelError::InvalidFileType => {
                write!(f, "Invalid file type. Use 'Excel' or 'Json'.")
            }
            KernelError::Decode => write!(f, "Failed to decode uploaded file"),
            KernelError::NoDeleteTarget => write!(f, "No books to delete in the JSON file"),
            KernelError::NoMatch => write!(f, "No matching books found in the database"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
