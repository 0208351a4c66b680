use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("connection {connection} references target {target}, but only {len} targets exist")]
    ConnectionOutOfRange {
        connection: usize,
        target: usize,
        len: usize,
    },
    #[error("connection {connection} joins target {target} to itself")]
    DegenerateConnection { connection: usize, target: usize },
}
