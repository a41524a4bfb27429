use rayon::ThreadPoolBuildError;
use thiserror::Error;
use zip::result::ZipError;

pub use stegano_depth_vault::VaultError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a bit depth outside of `0..=7`, it is checked before anything else
    #[error("Bit depth {0} is out of range, it must be within 0..=7")]
    InvalidDepth(u8),

    /// Represents an attempt to hide nothing
    #[error("Payload is empty, there is nothing to hide")]
    EmptyPayload,

    /// Represents a payload that does not fit into the carrier, numbers are in bits and include the 32 bit length header
    #[error("Capacity Error: the carrier offers {available} bits but {needed} bits are needed")]
    CapacityExceeded { needed: usize, available: usize },

    /// Represents a length prefix that could not be read, because less than 4 bytes were given
    #[error("Insufficient data: a length prefix needs 4 bytes, got {0}")]
    InsufficientData(usize),

    /// Represents a length prefix that points behind the end of the unveiled data.
    /// Usually a wrong bit depth or a carrier that went through a lossy codec.
    #[error("Truncated data: the length prefix declares {declared} bytes, only {available} are available")]
    Truncated { declared: usize, available: usize },

    /// Represents an empty carrier, an image without pixels or a carrier that does not match its image
    #[error("Carrier is empty or invalid")]
    InvalidCarrier,

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error while building the compressed payload container
    #[error("Error during the payload compression")]
    PayloadProcessingError(#[from] ZipError),

    /// Represents a compressed payload that cannot be inflated anymore
    #[error("Compressed payload is corrupt")]
    CorruptStream,

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(VaultError),

    /// Represents an error when decrypting the data, for example a wrong password
    #[error("Decryption error")]
    DecryptionError(VaultError),

    /// Represents an erasure coded payload that could not be restored
    #[error("Reconstruction failure: {0}")]
    ReconstructionFailure(String),

    /// Represents an erasure coding setup without any parity shard
    #[error("Parity shards must be greater than zero, got {0}")]
    InvalidParityShards(usize),

    /// Represents a failure to start the carrier extraction workers
    #[error("Worker pool could not be started")]
    WorkerPoolError(#[from] ThreadPoolBuildError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    /// Represents a file name that cannot travel with a hidden file
    #[error("Invalid file name {0:?}")]
    InvalidFileName(String),
}
