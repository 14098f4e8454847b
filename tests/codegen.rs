use tacc::codegen::Codegen;
use tacc::ir::{BinOp, Instruction, Operand, Place};

fn var(name: &str) -> Operand {
    Operand::Var(name.into())
}

#[test]
fn addition_goes_through_registers() {
    let code = vec![
        Instruction::binary(Place::Var("z".into()), BinOp::Add, var("x"), var("y")),
        Instruction::Print("z".into()),
    ];
    let asm = Codegen::generate(&code);
    assert_eq!(
        asm.lines().collect::<Vec<_>>(),
        vec![
            "mov r0, x",
            "mov r1, y",
            "add r0, r1",
            "str r0, z",
            "print z"
        ]
    );
}

#[test]
fn other_operations_are_a_single_mov() {
    let code = vec![
        Instruction::binary(Place::Var("a".into()), BinOp::Sub, var("x"), Operand::Const(1)),
        Instruction::binary(Place::Var("b".into()), BinOp::Mul, var("x"), var("y")),
        Instruction::binary(Place::Var("c".into()), BinOp::Div, var("x"), var("y")),
        Instruction::copy(Place::Var("d".into()), Operand::Const(10)),
        Instruction::copy(Place::Var("e".into()), var("d")),
    ];
    let asm = Codegen::generate(&code);
    assert_eq!(
        asm.lines().collect::<Vec<_>>(),
        vec![
            "mov a, x - 1",
            "mov b, x * y",
            "mov c, x / y",
            "mov d, 10",
            "mov e, d"
        ]
    );
}

#[test]
fn empty_code_emits_nothing() {
    assert_eq!(Codegen::generate(&[]), "");
}
