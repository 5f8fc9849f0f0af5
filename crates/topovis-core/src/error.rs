pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Invalid adjacency reference from \"{source_id}\": target index {index} is out of bounds for {len} entities"
    )]
    InvalidReference {
        source_id: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid adjacency key from \"{source_id}\": {key:?} is not an entity index")]
    InvalidReferenceKey { source_id: String, key: String },
}
