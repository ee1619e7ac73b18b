use std::fmt;

use arch::inst::{Instr, OprInstr};
use arch::nibble::operand_size;

/// One parsed source statement. Instruction variants carry their resolved
/// operand value; label-referencing instructions hold the self-relative
/// displacement assigned by the layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// One 32-bit word, placed on a word boundary.
    Data(i32),
    /// Zero-width function marker, metadata only.
    Func(String),
    /// Zero-width procedure marker, metadata only.
    Proc(String),
    /// Zero-width position marker; the value is the byte offset of whatever
    /// follows it.
    Label(String, i32),
    InstrImm(Instr, i32),
    InstrLabel(Instr, String, i32),
    InstrOp(OprInstr),
}

impl Directive {
    /// Encoded size in bytes, excluding any alignment padding in front.
    pub fn size(&self) -> usize {
        match self {
            Directive::Data(_) => 4,
            Directive::Func(_) | Directive::Proc(_) | Directive::Label(..) => 0,
            Directive::InstrImm(_, value) | Directive::InstrLabel(_, _, value) => {
                operand_size(*value)
            }
            Directive::InstrOp(_) => 1,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Data(value) => write!(f, "DATA {}", value),
            Directive::Func(name) => write!(f, "FUNC {}", name),
            Directive::Proc(name) => write!(f, "PROC {}", name),
            Directive::Label(name, _) => write!(f, "{}", name),
            Directive::InstrImm(opcode, value) => write!(f, "{} {}", opcode, value),
            Directive::InstrLabel(opcode, name, value) => {
                write!(f, "{} {} ({})", opcode, name, value)
            }
            Directive::InstrOp(sub) => write!(f, "OPR {}", sub),
        }
    }
}
