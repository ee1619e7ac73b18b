use asm::assemble;

const EXIT0: &str = "\
BR start
DATA 16383
start
LDAC 0
LDBM 1
STAI 2
LDAC 0
OPR SVC
";

#[test]
fn single_nibble_operand_is_one_byte() {
    // LDAC=0x2 in the high nibble, operand in the low nibble, then the tail
    // padded out to a word.
    assert_eq!(assemble("LDAC 0").unwrap(), [0x20, 0x00, 0x00, 0x00]);
    assert_eq!(assemble("LDAC 15").unwrap(), [0x2F, 0x00, 0x00, 0x00]);
}

#[test]
fn two_nibble_operand_takes_a_pfix() {
    assert_eq!(assemble("LDAC 16").unwrap(), [0xD1, 0x20, 0x00, 0x00]);
}

#[test]
fn negative_operand_takes_an_nfix() {
    // oreg decodes to 0xFFFFFFFF.
    assert_eq!(assemble("LDAC -1").unwrap(), [0xCF, 0x2F, 0x00, 0x00]);
}

#[test]
fn long_operand_chains_prefixes() {
    // 4096 = 0x1000: three PFIX bytes then the opcode byte.
    assert_eq!(
        assemble("LDAC 4096").unwrap(),
        [0xD1, 0xD0, 0xD0, 0x20, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn opr_packs_the_sub_opcode() {
    assert_eq!(assemble("OPR BRB").unwrap(), [0xF0, 0x00, 0x00, 0x00]);
    assert_eq!(assemble("OPR SVC").unwrap(), [0xF1, 0x00, 0x00, 0x00]);
    assert_eq!(assemble("OPR ADD").unwrap(), [0xF2, 0x00, 0x00, 0x00]);
    assert_eq!(assemble("OPR SUB").unwrap(), [0xF3, 0x00, 0x00, 0x00]);
}

#[test]
fn data_is_little_endian() {
    assert_eq!(assemble("DATA 16383").unwrap(), [0xFF, 0x3F, 0x00, 0x00]);
    assert_eq!(assemble("DATA -1").unwrap(), [0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn alignment_padding_is_emitted_inline() {
    // One instruction byte, three bytes of padding, then the word.
    assert_eq!(
        assemble("LDAC 1\nDATA 5").unwrap(),
        [0x21, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00]
    );
}

#[test]
fn exit_binary_image() {
    assert_eq!(
        assemble(EXIT0).unwrap(),
        [
            0x87, 0x00, 0x00, 0x00, // BR start (7), then alignment
            0xFF, 0x3F, 0x00, 0x00, // DATA 16383
            0x20, 0x11, 0x72, 0x20, // LDAC 0, LDBM 1, STAI 2, LDAC 0
            0xF1, 0x00, 0x00, 0x00, // OPR SVC, then tail padding
        ]
    );
}

#[test]
fn empty_program_is_an_empty_image() {
    assert!(assemble("# nothing but a comment\n").unwrap().is_empty());
}
