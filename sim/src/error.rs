use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid instruction: {0:#04x}")]
    InvalidInstruction(u8),

    #[error("invalid OPR: {0}")]
    InvalidOpr(u32),

    #[error("invalid syscall: {0}")]
    InvalidSyscall(u32),

    #[error("invalid stream: {0}")]
    InvalidStream(u32),

    #[error("memory access out of range: word {0:#x}")]
    MemoryOutOfRange(u32),

    #[error("image larger than memory: {0} bytes")]
    ImageTooLarge(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
