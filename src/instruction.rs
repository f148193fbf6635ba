use crate::error::{Chip8Error, Result};

/// A decoded CHIP-8 instruction with its operands already pulled out of the
/// opcode. `x` and `y` are register indices, always below 16.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0: clear the screen
    ClearScreen,
    /// 00EE: return from subroutine
    Return,
    /// 1NNN: jump to address `nnn`
    Jump { nnn: u16 },
    /// 2NNN: call subroutine at `nnn`
    Call { nnn: u16 },
    /// 3XNN: skip next instruction if `Vx == nn`
    SkipEqImm { x: usize, nn: u8 },
    /// 4XNN: skip next instruction if `Vx != nn`
    SkipNeImm { x: usize, nn: u8 },
    /// 5XY0: skip next instruction if `Vx == Vy`
    SkipEqReg { x: usize, y: usize },
    /// 6XNN: `Vx = nn`
    LoadImm { x: usize, nn: u8 },
    /// 7XNN: `Vx += nn`, no carry flag
    AddImm { x: usize, nn: u8 },
    /// 8XY0: `Vx = Vy`
    Move { x: usize, y: usize },
    /// 8XY1: `Vx |= Vy`
    Or { x: usize, y: usize },
    /// 8XY2: `Vx &= Vy`
    And { x: usize, y: usize },
    /// 8XY3: `Vx ^= Vy`
    Xor { x: usize, y: usize },
    /// 8XY4: `Vx += Vy`, VF set on carry
    AddReg { x: usize, y: usize },
    /// 8XY5: `Vx -= Vy`, VF set when there is no borrow
    Sub { x: usize, y: usize },
    /// 8XY6: `Vx = Vy >> 1`, VF gets the bit shifted out
    ShiftRight { x: usize, y: usize },
    /// 8XY7: `Vx = Vy - Vx`, VF set when there is no borrow
    SubReverse { x: usize, y: usize },
    /// 8XYE: `Vx = Vy << 1`, VF gets the bit shifted out
    ShiftLeft { x: usize, y: usize },
    /// 9XY0: skip next instruction if `Vx != Vy`
    SkipNeReg { x: usize, y: usize },
    /// ANNN: `I = nnn`
    LoadIndex { nnn: u16 },
    /// BNNN: jump to `nnn + V0`
    JumpOffset { nnn: u16 },
    /// CXNN: `Vx = random & nn`
    Random { x: usize, nn: u8 },
    /// DXYN: draw the `n` row sprite at I to (`Vx`, `Vy`)
    Draw { x: usize, y: usize, n: u8 },
    /// EX9E: skip next instruction if key `Vx` is down
    SkipKeyDown { x: usize },
    /// EXA1: skip next instruction if key `Vx` is up
    SkipKeyUp { x: usize },
    /// FX07: `Vx = delay timer`
    LoadDelay { x: usize },
    /// FX0A: block until a key is pressed and released, store it in `Vx`
    WaitKey { x: usize },
    /// FX15: `delay timer = Vx`
    SetDelay { x: usize },
    /// FX18: `sound timer = Vx`
    SetSound { x: usize },
    /// FX1E: `I += Vx`, VF set when I passes 0xFFF
    AddIndex { x: usize },
    /// FX29: point I at the font glyph for digit `Vx`
    LoadGlyph { x: usize },
    /// FX33: binary coded decimal of `Vx` to I, I+1, I+2
    StoreBcd { x: usize },
    /// FX55: store V0..=Vx at I
    StoreRegisters { x: usize },
    /// FX65: load V0..=Vx from I
    LoadRegisters { x: usize },
}

impl Instruction {
    /// Decode a fetched opcode. Anything outside the classic set is an
    /// `UnknownOpcode` error.
    pub fn decode(opcode: u16) -> Result<Instruction> {
        let x = ((opcode & 0x0F00) >> 8) as usize;
        let y = ((opcode & 0x00F0) >> 4) as usize;
        let n = (opcode & 0x000F) as u8;
        let nn = (opcode & 0x00FF) as u8;
        let nnn = opcode & 0x0FFF;

        use Instruction::*;
        let instruction = match (opcode >> 12, n) {
            (0x0, _) => match opcode {
                0x00E0 => ClearScreen,
                0x00EE => Return,
                _ => return Err(Chip8Error::UnknownOpcode { opcode }),
            },
            (0x1, _) => Jump { nnn },
            (0x2, _) => Call { nnn },
            (0x3, _) => SkipEqImm { x, nn },
            (0x4, _) => SkipNeImm { x, nn },
            (0x5, 0x0) => SkipEqReg { x, y },
            (0x6, _) => LoadImm { x, nn },
            (0x7, _) => AddImm { x, nn },
            (0x8, 0x0) => Move { x, y },
            (0x8, 0x1) => Or { x, y },
            (0x8, 0x2) => And { x, y },
            (0x8, 0x3) => Xor { x, y },
            (0x8, 0x4) => AddReg { x, y },
            (0x8, 0x5) => Sub { x, y },
            (0x8, 0x6) => ShiftRight { x, y },
            (0x8, 0x7) => SubReverse { x, y },
            (0x8, 0xE) => ShiftLeft { x, y },
            (0x9, 0x0) => SkipNeReg { x, y },
            (0xA, _) => LoadIndex { nnn },
            (0xB, _) => JumpOffset { nnn },
            (0xC, _) => Random { x, nn },
            (0xD, _) => Draw { x, y, n },
            (0xE, _) => match nn {
                0x9E => SkipKeyDown { x },
                0xA1 => SkipKeyUp { x },
                _ => return Err(Chip8Error::UnknownOpcode { opcode }),
            },
            (0xF, _) => match nn {
                0x07 => LoadDelay { x },
                0x0A => WaitKey { x },
                0x15 => SetDelay { x },
                0x18 => SetSound { x },
                0x1E => AddIndex { x },
                0x29 => LoadGlyph { x },
                0x33 => StoreBcd { x },
                0x55 => StoreRegisters { x },
                0x65 => LoadRegisters { x },
                _ => return Err(Chip8Error::UnknownOpcode { opcode }),
            },
            _ => return Err(Chip8Error::UnknownOpcode { opcode }),
        };
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Instruction::*;

    fn unknown(opcode: u16) -> bool {
        Instruction::decode(opcode) == Err(Chip8Error::UnknownOpcode { opcode })
    }

    #[test]
    fn test_decode_operands() -> Result<()> {
        assert_eq!(Instruction::decode(0x00E0)?, ClearScreen);
        assert_eq!(Instruction::decode(0x00EE)?, Return);
        assert_eq!(Instruction::decode(0x1ABC)?, Jump { nnn: 0xABC });
        assert_eq!(Instruction::decode(0x2ABC)?, Call { nnn: 0xABC });
        assert_eq!(Instruction::decode(0x3A42)?, SkipEqImm { x: 0xA, nn: 0x42 });
        assert_eq!(Instruction::decode(0x5120)?, SkipEqReg { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8AB4)?, AddReg { x: 0xA, y: 0xB });
        assert_eq!(Instruction::decode(0x8ABE)?, ShiftLeft { x: 0xA, y: 0xB });
        assert_eq!(Instruction::decode(0xB123)?, JumpOffset { nnn: 0x123 });
        assert_eq!(Instruction::decode(0xD125)?, Draw { x: 1, y: 2, n: 5 });
        assert_eq!(Instruction::decode(0xE39E)?, SkipKeyDown { x: 3 });
        assert_eq!(Instruction::decode(0xE3A1)?, SkipKeyUp { x: 3 });
        assert_eq!(Instruction::decode(0xF50A)?, WaitKey { x: 5 });
        assert_eq!(Instruction::decode(0xFF65)?, LoadRegisters { x: 0xF });
        Ok(())
    }

    #[test]
    fn test_decode_unknown() {
        // machine code routines (0NNN) aren't supported
        assert!(unknown(0x0123));
        assert!(unknown(0x00FF));
        assert!(unknown(0x5121));
        assert!(unknown(0x8128));
        assert!(unknown(0x812F));
        assert!(unknown(0x9121));
        assert!(unknown(0xE19F));
        assert!(unknown(0xF175));
        assert!(unknown(0xFFFF));
    }
}
