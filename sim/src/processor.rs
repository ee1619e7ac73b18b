use std::io::{Read, Write};

use arch::inst::{unpack, Instr, OprInstr, Syscall};

use crate::error::Error;
use crate::trace;

pub const MEMORY_SIZE_WORDS: usize = 200_000;

/// The Hex processor: two accumulator registers, an operand register fed
/// four bits at a time by PFIX/NFIX prefix bytes, and a byte-granular
/// program counter over word-addressed little-endian memory.
///
/// The I/O endpoints are generic so tests can run programs against
/// in-memory buffers; the binary wires them to stdin and stdout.
pub struct Processor<R, W> {
    pub(crate) pc: u32,
    pub(crate) areg: u32,
    pub(crate) breg: u32,
    pub(crate) oreg: u32,
    pub(crate) memory: Vec<u32>,
    pub(crate) cycles: u64,
    running: bool,
    tracing: bool,
    exit_code: u32,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Processor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Processor {
            pc: 0,
            areg: 0,
            breg: 0,
            oreg: 0,
            memory: vec![0; MEMORY_SIZE_WORDS],
            cycles: 0,
            running: true,
            tracing: false,
            exit_code: 0,
            input,
            output,
        }
    }

    pub fn set_tracing(&mut self, value: bool) {
        self.tracing = value;
    }

    /// Copy a raw image into memory, packing little-endian bytes into words.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Error> {
        if image.len() > MEMORY_SIZE_WORDS * 4 {
            return Err(Error::ImageTooLarge(image.len()));
        }
        for (index, byte) in image.iter().enumerate() {
            self.memory[index >> 2] |= u32::from(*byte) << ((index & 3) << 3);
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn areg(&self) -> u32 {
        self.areg
    }

    pub fn breg(&self) -> u32 {
        self.breg
    }

    pub fn oreg(&self) -> u32 {
        self.oreg
    }

    /// Memory word, or zero outside the array. For dumps and inspection;
    /// executed accesses go through the checked helpers.
    pub fn word(&self, index: usize) -> u32 {
        self.memory.get(index).copied().unwrap_or(0)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn mem(&self, word: u32) -> Result<u32, Error> {
        self.memory
            .get(word as usize)
            .copied()
            .ok_or(Error::MemoryOutOfRange(word))
    }

    fn set_mem(&mut self, word: u32, value: u32) -> Result<(), Error> {
        match self.memory.get_mut(word as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::MemoryOutOfRange(word)),
        }
    }

    /// Fetch, decode and execute one instruction byte. The low nibble is
    /// OR-ed into the operand register before dispatch; every opcode except
    /// the prefixes clears the operand register afterwards.
    pub fn step(&mut self) -> Result<(), Error> {
        let byte = ((self.mem(self.pc >> 2)? >> ((self.pc & 3) << 3)) & 0xFF) as u8;
        self.pc = self.pc.wrapping_add(1);
        let (opcode, payload) = unpack(byte);
        self.oreg |= u32::from(payload);
        let instr = Instr::try_from(opcode).map_err(|_| Error::InvalidInstruction(byte))?;
        if self.tracing {
            println!("{}", trace::line(self, instr));
        }
        match instr {
            Instr::LDAM => {
                self.areg = self.mem(self.oreg)?;
                self.oreg = 0;
            }
            Instr::LDBM => {
                self.breg = self.mem(self.oreg)?;
                self.oreg = 0;
            }
            Instr::STAM => {
                self.set_mem(self.oreg, self.areg)?;
                self.oreg = 0;
            }
            Instr::LDAC => {
                self.areg = self.oreg;
                self.oreg = 0;
            }
            Instr::LDBC => {
                self.breg = self.oreg;
                self.oreg = 0;
            }
            Instr::LDAP => {
                self.areg = self.pc.wrapping_add(self.oreg);
                self.oreg = 0;
            }
            Instr::LDAI => {
                self.areg = self.mem((self.areg >> 2).wrapping_add(self.oreg))?;
                self.oreg = 0;
            }
            Instr::LDBI => {
                self.breg = self.mem((self.breg >> 2).wrapping_add(self.oreg))?;
                self.oreg = 0;
            }
            Instr::STAI => {
                self.set_mem((self.breg >> 2).wrapping_add(self.oreg), self.areg)?;
                self.oreg = 0;
            }
            Instr::BR => {
                self.pc = self.pc.wrapping_add(self.oreg);
                self.oreg = 0;
            }
            Instr::BRZ => {
                if self.areg == 0 {
                    self.pc = self.pc.wrapping_add(self.oreg);
                }
                self.oreg = 0;
            }
            Instr::BRN => {
                if (self.areg as i32) < 0 {
                    self.pc = self.pc.wrapping_add(self.oreg);
                }
                self.oreg = 0;
            }
            Instr::PFIX => {
                self.oreg <<= 4;
            }
            Instr::NFIX => {
                self.oreg = 0xFFFF_FF00 | (self.oreg << 4);
            }
            Instr::OPR => {
                let sub = u8::try_from(self.oreg)
                    .ok()
                    .and_then(|value| OprInstr::try_from(value).ok())
                    .ok_or(Error::InvalidOpr(self.oreg))?;
                match sub {
                    OprInstr::BRB => self.pc = self.breg,
                    OprInstr::ADD => self.areg = self.areg.wrapping_add(self.breg),
                    OprInstr::SUB => self.areg = self.areg.wrapping_sub(self.breg),
                    OprInstr::SVC => self.syscall()?,
                }
                self.oreg = 0;
            }
        }
        self.cycles += 1;
        Ok(())
    }

    /// Run until the program exits or faults; returns the exit value.
    pub fn run(&mut self) -> Result<u32, Error> {
        while self.running {
            self.step()?;
        }
        Ok(self.exit_code)
    }

    /// areg selects the syscall; arguments live in the frame addressed by
    /// the stack-pointer word at mem[1].
    fn syscall(&mut self) -> Result<(), Error> {
        let sp = self.mem(1)? >> 2;
        let syscall =
            Syscall::try_from(self.areg).map_err(|_| Error::InvalidSyscall(self.areg))?;
        match syscall {
            Syscall::EXIT => {
                self.exit_code = self.mem(sp.wrapping_add(2))?;
                self.running = false;
            }
            Syscall::WRITE => {
                let value = self.mem(sp.wrapping_add(2))?;
                let stream = self.mem(sp.wrapping_add(3))?;
                if stream != 0 {
                    return Err(Error::InvalidStream(stream));
                }
                self.output.write_all(&[value as u8])?;
                self.output.flush()?;
            }
            Syscall::READ => {
                let stream = self.mem(sp.wrapping_add(2))?;
                if stream != 0 {
                    return Err(Error::InvalidStream(stream));
                }
                let mut buf = [0u8; 1];
                // End of input reads back as the all-ones word.
                let value = match self.input.read(&mut buf)? {
                    0 => u32::MAX,
                    _ => u32::from(buf[0]),
                };
                self.set_mem(sp.wrapping_add(1), value)?;
            }
        }
        Ok(())
    }
}
