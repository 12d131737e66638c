//! 内置 RV32IMAFD 指令描述表
//!
//! 每行依次给出 R3、F2、R2、R1、F3、RD、OP 七个字段的位模式以及解码键。
//! 行号即指令编号，外部分发表依赖这一顺序，不要调整已有行的位置。

use super::fields::FieldClass;
use super::spec::{RawSpec, SpecTable};
use crate::error::GenResult;

/// 表中的一行
#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    pub name: &'static str,
    /// 按 `FieldClass::ALL` 顺序排列的位模式
    pub fields: [&'static str; 7],
    pub decode_keys: &'static [&'static str],
}

const fn row(
    name: &'static str,
    fields: [&'static str; 7],
    decode_keys: &'static [&'static str],
) -> TableRow {
    TableRow { name, fields, decode_keys }
}

impl TableRow {
    pub fn to_raw(&self) -> RawSpec {
        RawSpec {
            name: self.name.to_string(),
            fields: FieldClass::ALL
                .iter()
                .zip(self.fields.iter())
                .map(|(class, pattern)| (class.name().to_string(), pattern.to_string()))
                .collect(),
            decode_keys: self.decode_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// RISC-V 指令描述表
pub static RISCV_ROWS: &[TableRow] = &[
    // ========== RV32I ==========
    row("lui        d[11:7],h[31:12]", ["XXXXX", "XX", "XXXXX", "XXXXX", "XXX", "XXXXX", "0110111"], &["OP"]),
    row("auipc      d[11:7],h[31:12]", ["XXXXX", "XX", "XXXXX", "XXXXX", "XXX", "XXXXX", "0010111"], &["OP"]),
    row("jal        d[11:7],uj[31:12]", ["XXXXX", "XX", "XXXXX", "XXXXX", "XXX", "XXXXX", "1101111"], &["OP"]),
    row("jalr       d[11:7],d[19:15],d[11:0]", ["XXXXX", "XX", "XXXXX", "XXXXX", "000", "XXXXX", "1100111"], &["OP"]),
    row("beq        d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "000", "XXXXX", "1100011"], &["OP", "F3"]),
    row("bne        d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "001", "XXXXX", "1100011"], &["OP", "F3"]),
    row("blt        d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "100", "XXXXX", "1100011"], &["OP", "F3"]),
    row("bge        d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "101", "XXXXX", "1100011"], &["OP", "F3"]),
    row("bltu       d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "110", "XXXXX", "1100011"], &["OP", "F3"]),
    row("bgeu       d[19:15],d[24:20],sb[31:25]", ["XXXXX", "XX", "XXXXX", "XXXXX", "111", "XXXXX", "1100011"], &["OP", "F3"]),
    row("lb         d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "000", "XXXXX", "0000011"], &["OP", "F3"]),
    row("lh         d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "001", "XXXXX", "0000011"], &["OP", "F3"]),
    row("lw         d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0000011"], &["OP", "F3"]),
    row("lbu        d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "100", "XXXXX", "0000011"], &["OP", "F3"]),
    row("lhu        d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "101", "XXXXX", "0000011"], &["OP", "F3"]),
    row("sb         d[19:15],d[24:20],h[31:25]|d[11:7]", ["XXXXX", "XX", "XXXXX", "XXXXX", "000", "XXXXX", "0100011"], &["OP", "F3"]),
    row("sh         d[19:15],d[24:20],h[31:25]|d[11:7]", ["XXXXX", "XX", "XXXXX", "XXXXX", "001", "XXXXX", "0100011"], &["OP", "F3"]),
    row("sw         d[19:15],d[24:20],h[31:25]|d[11:7]", ["XXXXX", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0100011"], &["OP", "F3"]),
    row("addi       d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "000", "XXXXX", "0010011"], &["OP", "F3"]),
    row("slti       d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0010011"], &["OP", "F3"]),
    row("sltiu      d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "011", "XXXXX", "0010011"], &["OP", "F3"]),
    row("xori       d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "100", "XXXXX", "0010011"], &["OP", "F3"]),
    row("ori        d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "110", "XXXXX", "0010011"], &["OP", "F3"]),
    row("andi       d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "111", "XXXXX", "0010011"], &["OP", "F3"]),
    row("slli       d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "001", "XXXXX", "0010011"], &["OP", "F3", "F2", "R3"]),
    row("srli       d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "101", "XXXXX", "0010011"], &["OP", "F3", "F2", "R3"]),
    row("srai       d[11:7],d[19:15],d[24:20]", ["01000", "00", "XXXXX", "XXXXX", "101", "XXXXX", "0010011"], &["OP", "F3", "F2", "R3"]),
    row("add        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "000", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("sub        d[11:7],d[19:15],d[24:20]", ["01000", "00", "XXXXX", "XXXXX", "000", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("sll        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "001", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("slt        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "010", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("sltu       d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "011", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("xor        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "100", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("srl        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "101", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("sra        d[11:7],d[19:15],d[24:20]", ["01000", "00", "XXXXX", "XXXXX", "101", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("or         d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "110", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("and        d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "111", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("fence", ["0000X", "XX", "XXXXX", "00000", "000", "XXXXX", "0001111"], &["OP", "F3", "F2", "R3"]),
    row("fence.i", ["00000", "00", "00000", "00000", "001", "XXXXX", "0001111"], &["OP", "F3", "F2", "R3"]),
    row("scall", ["00000", "00", "00000", "00000", "000", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("sbreak", ["00000", "00", "00001", "00000", "000", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdcycle    d[11:7]", ["11000", "00", "00000", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdcycleh   d[11:7]", ["11001", "00", "00000", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdtime     d[11:7]", ["11000", "00", "00001", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdtimeh    d[11:7]", ["11001", "00", "00001", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdinstret  d[11:7]", ["11000", "00", "00010", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),
    row("rdinstreth d[11:7]", ["11001", "00", "00010", "00000", "010", "XXXXX", "1110011"], &["OP", "F3", "F2", "R3", "R2"]),

    // ========== RV32M ==========
    row("mul        d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "000", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("mulh       d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "001", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("mulhsu     d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "010", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("mulhu      d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "011", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("div        d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "100", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("divu       d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "101", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("rem        d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "110", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),
    row("remu       d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "111", "XXXXX", "0110011"], &["OP", "F3", "F2", "R3"]),

    // ========== RV32A ==========
    row("lr.w       d[11:7],d[19:15]", ["00010", "XX", "00000", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3", "R2"]),
    row("sc.w       d[11:7],d[19:15],d[24:20]", ["00011", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amoswap.w  d[11:7],d[19:15],d[24:20]", ["00001", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amoadd.w   d[11:7],d[19:15],d[24:20]", ["00000", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amoxor.w   d[11:7],d[19:15],d[24:20]", ["00100", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amoand.w   d[11:7],d[19:15],d[24:20]", ["01100", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amoor.w    d[11:7],d[19:15],d[24:20]", ["01000", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amomin.w   d[11:7],d[19:15],d[24:20]", ["10010", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amomax.w   d[11:7],d[19:15],d[24:20]", ["10100", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amominu.w  d[11:7],d[19:15],d[24:20]", ["11000", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),
    row("amomaxu.w  d[11:7],d[19:15],d[24:20]", ["11100", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0101111"], &["OP", "F3", "R3"]),

    // ========== RV32F ==========
    row("flw        d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0000111"], &["OP", "F3"]),
    row("fsw        d[19:15],d[24:20],h[31:25]|d[11:7]", ["XXXXX", "XX", "XXXXX", "XXXXX", "010", "XXXXX", "0100111"], &["OP", "F3"]),
    row("fmadd.s    d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1000011"], &["OP", "F2"]),
    row("fmsub.s    d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1000111"], &["OP", "F2"]),
    row("fnmsub.s   d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1001011"], &["OP", "F2"]),
    row("fnmadd.s   d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1001111"], &["OP", "F2"]),
    row("fadd.s     d[11:7],d[19:15],d[24:20]", ["00000", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsub.s     d[11:7],d[19:15],d[24:20]", ["00001", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fmul.s     d[11:7],d[19:15],d[24:20]", ["00010", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fdiv.s     d[11:7],d[19:15],d[24:20]", ["00011", "00", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsqrt.s    d[11:7],d[19:15]", ["01011", "00", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fsgnj.s    d[11:7],d[19:15],d[24:20]", ["00100", "00", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fsgnjn.s   d[11:7],d[19:15],d[24:20]", ["00100", "00", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fsgnjx.s   d[11:7],d[19:15],d[24:20]", ["00100", "00", "XXXXX", "XXXXX", "010", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fmin.s     d[11:7],d[19:15],d[24:20]", ["00101", "00", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fmax.s     d[11:7],d[19:15],d[24:20]", ["00101", "00", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fcvt.w.s   d[11:7],d[19:15]", ["11000", "00", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.wu.s  d[11:7],d[19:15]", ["11000", "00", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fmv.x.s    d[11:7],d[19:15]", ["11100", "00", "00000", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2", "F3"]),
    row("feq.s      d[11:7],d[19:15],d[24:20]", ["10100", "00", "XXXXX", "XXXXX", "010", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("flt.s      d[11:7],d[19:15],d[24:20]", ["10100", "00", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fle.s      d[11:7],d[19:15],d[24:20]", ["10100", "00", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3", "F3"]),
    row("fclass.s   d[11:7],d[19:15]", ["11100", "00", "00000", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2", "F3"]),
    row("fcvt.s.w   d[11:7],d[19:15]", ["11010", "00", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.s.wu  d[11:7],d[19:15]", ["11010", "00", "00001", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fmv.s.x    d[11:7],d[19:15]", ["11110", "00", "00000", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2", "F3"]),

    // ========== F 扩展 CSR 访问 ==========
    row("frcsr      d[11:7]", ["00000", "00", "00011", "00000", "010", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2", "R1", "F3"]),
    row("frrm       d[11:7]", ["00000", "00", "00010", "00000", "010", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2", "R1", "F3"]),
    row("frflags    d[11:7]", ["00000", "00", "00001", "00000", "010", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2", "R1", "F3"]),
    row("fscsr      d[11:7],d[19:15]", ["00000", "00", "00011", "XXXXX", "001", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2"]),
    row("fsrm       d[11:7],d[19:15]", ["00000", "00", "00010", "XXXXX", "001", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2"]),
    row("fsflags    d[11:7],d[19:15]", ["00000", "00", "00001", "XXXXX", "001", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2"]),
    row("fsrmi      d[11:7]", ["00000", "00", "00010", "00000", "101", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2", "R1", "F3"]),
    row("fsflagsi   d[11:7]", ["00000", "00", "00001", "00000", "101", "XXXXX", "1110011"], &["OP", "F2", "R3", "R2", "R1", "F3"]),

    // ========== RV32D ==========
    row("fld        d[11:7],d[19:15],h[31:20]", ["XXXXX", "XX", "XXXXX", "XXXXX", "011", "XXXXX", "0000111"], &["OP", "F3"]),
    row("fsd        d[19:15],d[24:20],h[31:25]|d[11:7]", ["XXXXX", "XX", "XXXXX", "XXXXX", "011", "XXXXX", "0100111"], &["OP", "F3"]),
    row("fmadd.d    d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1000011"], &["OP", "F2"]),
    row("fmsub.d    d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1000111"], &["OP", "F2"]),
    row("fnmsub.d   d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1001011"], &["OP", "F2"]),
    row("fnmadd.d   d[11:7],d[19:15],d[24:20],h[31:27]", ["XXXXX", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1001111"], &["OP", "F2"]),
    row("fadd.d     d[11:7],d[19:15],d[24:20]", ["00000", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsub.d     d[11:7],d[19:15],d[24:20]", ["00001", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fmul.d     d[11:7],d[19:15],d[24:20]", ["00010", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fdiv.d     d[11:7],d[19:15],d[24:20]", ["00011", "01", "XXXXX", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsqrt.d    d[11:7],d[19:15]", ["01011", "01", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fsgnj.d    d[11:7],d[19:15],d[24:20]", ["00100", "01", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsgnjn.d   d[11:7],d[19:15],d[24:20]", ["00100", "01", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fsgnjx.d   d[11:7],d[19:15],d[24:20]", ["00100", "01", "XXXXX", "XXXXX", "010", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fmin.d     d[11:7],d[19:15],d[24:20]", ["00101", "01", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fmax.d     d[11:7],d[19:15],d[24:20]", ["00101", "01", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fcvt.s.d   d[11:7],d[19:15]", ["01000", "00", "00001", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.d.s   d[11:7],d[19:15]", ["01000", "01", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("feq.d      d[11:7],d[19:15],d[24:20]", ["10100", "01", "XXXXX", "XXXXX", "010", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("flt.d      d[11:7],d[19:15],d[24:20]", ["10100", "01", "XXXXX", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fle.d      d[11:7],d[19:15],d[24:20]", ["10100", "01", "XXXXX", "XXXXX", "000", "XXXXX", "1010011"], &["OP", "F2", "R3"]),
    row("fclass.d   d[11:7],d[19:15]", ["11100", "01", "00000", "XXXXX", "001", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2", "F3"]),
    row("fcvt.w.d   d[11:7],d[19:15]", ["11000", "01", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.wu.d  d[11:7],d[19:15]", ["11000", "01", "00001", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.d.w   d[11:7],d[19:15]", ["11010", "01", "00000", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
    row("fcvt.d.wu  d[11:7],d[19:15]", ["11010", "01", "00001", "XXXXX", "XXX", "XXXXX", "1010011"], &["OP", "F2", "R3", "R2"]),
];

/// 原始描述形式
pub fn raw_specs() -> Vec<RawSpec> {
    RISCV_ROWS.iter().map(TableRow::to_raw).collect()
}

/// 校验后的内置指令表
pub fn table() -> GenResult<SpecTable> {
    SpecTable::from_raw(&raw_specs())
}
