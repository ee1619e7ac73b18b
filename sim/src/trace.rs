use std::io::{Read, Write};

use arch::inst::{Instr, OprInstr, Syscall};
use color_print::cformat;

use crate::processor::Processor;

/// Render one trace line for the instruction about to execute. The operand
/// register already holds the accumulated operand; pc points at the next
/// byte.
pub(crate) fn line<R: Read, W: Write>(p: &Processor<R, W>, instr: Instr) -> String {
    let effect = match instr {
        Instr::LDAM => format!(
            "areg = mem[oreg ({:#x})] ({})",
            p.oreg,
            p.word(p.oreg as usize)
        ),
        Instr::LDBM => format!(
            "breg = mem[oreg ({:#x})] ({})",
            p.oreg,
            p.word(p.oreg as usize)
        ),
        Instr::STAM => format!("mem[oreg ({:#x})] = areg ({})", p.oreg, p.areg),
        Instr::LDAC => format!("areg = oreg ({})", p.oreg as i32),
        Instr::LDBC => format!("breg = oreg ({})", p.oreg as i32),
        Instr::LDAP => format!("areg = pc ({}) + oreg ({})", p.pc, p.oreg as i32),
        Instr::LDAI => format!(
            "areg = mem[areg >> 2 ({}) + oreg ({})]",
            p.areg >> 2,
            p.oreg as i32
        ),
        Instr::LDBI => format!(
            "breg = mem[breg >> 2 ({}) + oreg ({})]",
            p.breg >> 2,
            p.oreg as i32
        ),
        Instr::STAI => format!(
            "mem[breg >> 2 ({}) + oreg ({})] = areg ({})",
            p.breg >> 2,
            p.oreg as i32,
            p.areg
        ),
        Instr::BR => format!("pc = pc + oreg ({})", p.oreg as i32),
        Instr::BRZ => format!("pc = areg == 0 ? pc + oreg ({}) : pc", p.oreg as i32),
        Instr::BRN => format!("pc = areg < 0 ? pc + oreg ({}) : pc", p.oreg as i32),
        Instr::PFIX => format!("oreg = oreg << 4 ({:#x})", p.oreg << 4),
        Instr::NFIX => format!(
            "oreg = 0xffffff00 | oreg << 4 ({:#x})",
            0xFFFF_FF00u32 | (p.oreg << 4)
        ),
        Instr::OPR => opr_effect(p),
    };
    cformat!(
        "<dim>{:>8}</> <yellow>{:>6}</> <red>{:<4}</> {}",
        p.cycles,
        p.pc,
        instr.to_string(),
        effect
    )
}

fn opr_effect<R: Read, W: Write>(p: &Processor<R, W>) -> String {
    match u8::try_from(p.oreg).ok().and_then(|v| OprInstr::try_from(v).ok()) {
        Some(OprInstr::BRB) => format!("pc = breg ({:#x})", p.breg),
        Some(OprInstr::ADD) => format!(
            "areg = areg ({}) + breg ({})",
            p.areg, p.breg
        ),
        Some(OprInstr::SUB) => format!(
            "areg = areg ({}) - breg ({})",
            p.areg, p.breg
        ),
        Some(OprInstr::SVC) => svc_effect(p),
        None => format!("invalid sub-opcode ({})", p.oreg),
    }
}

fn svc_effect<R: Read, W: Write>(p: &Processor<R, W>) -> String {
    let sp = (p.word(1) >> 2) as usize;
    match Syscall::try_from(p.areg) {
        Ok(Syscall::EXIT) => format!("exit ({})", p.word(sp + 2)),
        Ok(Syscall::WRITE) => format!(
            "write {} to stream {}",
            p.word(sp + 2),
            p.word(sp + 3)
        ),
        Ok(Syscall::READ) => format!("read stream {} to mem[{:#x}]", p.word(sp + 2), sp + 1),
        Err(_) => format!("invalid syscall ({})", p.areg),
    }
}
