use arch::inst::{pack, Instr};
use arch::nibble::instr_len;
use color_print::cformat;
use indexmap::IndexMap;

use crate::directive::Directive;
use crate::error::Error;

/// The ordered directive list plus an index from label name to the position
/// of its declaring directive.
pub struct Program {
    directives: Vec<Directive>,
    labels: IndexMap<String, usize>,
}

impl Program {
    pub fn new(directives: Vec<Directive>) -> Result<Self, Error> {
        let mut labels = IndexMap::new();
        for (idx, directive) in directives.iter().enumerate() {
            if let Directive::Label(name, _) = directive {
                if labels.insert(name.clone(), idx).is_some() {
                    return Err(Error::RedefinedLabel(name.clone()));
                }
            }
        }
        Ok(Program { directives, labels })
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn label_offset(&self, name: &str) -> Result<i32, Error> {
        let idx = *self
            .labels
            .get(name)
            .ok_or_else(|| Error::UndefinedLabel(name.to_string()))?;
        match &self.directives[idx] {
            Directive::Label(_, offset) => Ok(*offset),
            _ => unreachable!("label index points at a non-label directive"),
        }
    }

    /// Iteratively assign byte offsets and self-relative displacements until
    /// the image size stops changing. Operand widths depend on displacements
    /// and displacements on widths, so a single pass cannot settle both;
    /// widths are bounded by the word size, so the loop terminates.
    pub fn resolve(&mut self) -> Result<(), Error> {
        let mut last_total = -1i64;
        let mut total = 0i32;
        while i64::from(total) != last_total {
            last_total = i64::from(total);
            total = 0;
            for idx in 0..self.directives.len() {
                // Data lives on 4-byte boundaries.
                if let Directive::Data(_) = self.directives[idx] {
                    if total & 3 != 0 {
                        total += 4 - (total & 3);
                    }
                }
                if let Directive::Label(_, offset) = &mut self.directives[idx] {
                    *offset = total;
                }
                if let Directive::InstrLabel(_, name, _) = &self.directives[idx] {
                    let target = self.label_offset(name)?;
                    let value = target - total - instr_len(target, total) as i32;
                    if let Directive::InstrLabel(_, _, operand) = &mut self.directives[idx] {
                        *operand = value;
                    }
                }
                total += self.directives[idx].size() as i32;
            }
        }
        Ok(())
    }

    /// Serialize the resolved program. Must agree byte-for-byte with the
    /// simulator's decoder: data words little-endian, operands as PFIX/NFIX
    /// prefix chains ending in the opcode byte, and the tail padded so the
    /// loader always reads whole words.
    pub fn emit_bin(&self) -> Vec<u8> {
        let mut image: Vec<u8> = vec![];
        for directive in &self.directives {
            match directive {
                Directive::Data(value) => {
                    while image.len() & 3 != 0 {
                        image.push(0);
                    }
                    image.extend_from_slice(&value.to_le_bytes());
                }
                Directive::InstrImm(opcode, value)
                | Directive::InstrLabel(opcode, _, value) => {
                    let size = directive.size();
                    let prefix = if *value < 0 { Instr::NFIX } else { Instr::PFIX };
                    for i in (1..size).rev() {
                        image.push(pack(prefix, (value >> (4 * i)) as u8));
                    }
                    image.push(pack(*opcode, *value as u8));
                }
                Directive::InstrOp(sub) => image.push(pack(Instr::OPR, u8::from(*sub))),
                Directive::Func(_) | Directive::Proc(_) | Directive::Label(..) => {}
            }
        }
        while image.len() & 3 != 0 {
            image.push(0);
        }
        image
    }

    /// Human-readable listing of the resolved directives, one per line with
    /// byte offset and encoded size.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        let mut offset = 0i32;
        for directive in &self.directives {
            if let Directive::Data(_) = directive {
                if offset & 3 != 0 {
                    offset += 4 - (offset & 3);
                }
            }
            out += &cformat!(
                "<cyan>{:#010x}</> {:<20} ({} bytes)\n",
                offset,
                directive.to_string(),
                directive.size()
            );
            offset += directive.size() as i32;
        }
        if offset & 3 != 0 {
            let padding = 4 - (offset & 3);
            out += &cformat!(
                "<cyan>{:#010x}</> {:<20} ({} bytes)\n",
                offset,
                format!("PADDING {}", padding),
                padding
            );
        }
        out
    }
}
