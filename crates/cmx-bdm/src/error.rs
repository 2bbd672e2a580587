use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BdmError {
    #[error("cannot score an empty sequence")]
    EmptySequence,

    #[error("symbol {value} at position {position} is outside the binary alphabet")]
    SymbolOutOfRange { position: usize, value: i64 },

    #[error("block length {requested} is outside the supported range 1..={max}")]
    BlockLenOutOfRange { requested: usize, max: usize },
}
