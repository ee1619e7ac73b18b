use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unrecognised token {0} at line {1}")]
    UnexpectedToken(String, usize),

    #[error("expected NUMBER at line {0}")]
    ExpectedNumber(usize),

    #[error("expected identifier at line {0}")]
    ExpectedIdentifier(usize),

    #[error("unexpected operand to OPR {0} at line {1}")]
    UnexpectedOprOperand(String, usize),

    #[error("unknown label: `{0}`")]
    UndefinedLabel(String),

    #[error("re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
