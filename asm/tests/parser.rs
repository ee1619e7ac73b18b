use arch::inst::{Instr, OprInstr};
use asm::{Directive, Error};

#[test]
fn directive_kinds() {
    let program = asm::parse(
        "FUNC main\n\
         PROC helper\n\
         start\n\
         DATA -42\n\
         LDAC 7\n\
         BRZ start\n\
         OPR ADD\n",
    )
    .unwrap();
    assert_eq!(
        program.directives(),
        &[
            Directive::Func("main".to_string()),
            Directive::Proc("helper".to_string()),
            Directive::Label("start".to_string(), 0),
            Directive::Data(-42),
            Directive::InstrImm(Instr::LDAC, 7),
            Directive::InstrLabel(Instr::BRZ, "start".to_string(), 0),
            Directive::InstrOp(OprInstr::ADD),
        ]
    );
}

#[test]
fn all_opr_operands() {
    let program = asm::parse("OPR BRB\nOPR SVC\nOPR ADD\nOPR SUB\n").unwrap();
    assert_eq!(
        program.directives(),
        &[
            Directive::InstrOp(OprInstr::BRB),
            Directive::InstrOp(OprInstr::SVC),
            Directive::InstrOp(OprInstr::ADD),
            Directive::InstrOp(OprInstr::SUB),
        ]
    );
}

#[test]
fn error_unexpected_opr_operand() {
    assert!(matches!(
        asm::parse("OPR OPR"),
        Err(Error::UnexpectedOprOperand(_, 1))
    ));
}

#[test]
fn error_unrecognised_token() {
    assert!(matches!(
        asm::parse("123"),
        Err(Error::UnexpectedToken(_, 1))
    ));
}

#[test]
fn error_expected_number() {
    assert!(matches!(asm::parse("BR ."), Err(Error::ExpectedNumber(1))));
}

#[test]
fn error_expected_negative_integer() {
    assert!(matches!(
        asm::parse("BR -foo"),
        Err(Error::ExpectedNumber(1))
    ));
}

#[test]
fn error_carries_line_number() {
    assert!(matches!(
        asm::parse("LDAC 1\nLDBC 2\nOPR OPR"),
        Err(Error::UnexpectedOprOperand(_, 3))
    ));
}

#[test]
fn error_redefined_label() {
    assert!(matches!(
        asm::parse("foo\nLDAC 0\nfoo"),
        Err(Error::RedefinedLabel(name)) if name == "foo"
    ));
}

#[test]
fn minus_binds_to_data_values() {
    let program = asm::parse("DATA -1").unwrap();
    assert_eq!(program.directives(), &[Directive::Data(-1)]);
}
