use crate::DiskCount;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no disk count given")]
    MissingInput,
    #[error("invalid disk count `{0}`")]
    InvalidDiskCount(String),
    #[error("disk count must not be negative, got `{0}`")]
    NegativeDiskCount(String),
    #[error("recursive counting supports at most {max} disks, got {disks}")]
    TooManyDisks { disks: DiskCount, max: DiskCount },
}
