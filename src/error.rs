/// Everything that can go wrong inside the emulated machine.
///
/// `ProgramTooLarge` is a construction error; the rest are fatal for the
/// session and halt the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("program is too large ({size} bytes), max size is {max_size} bytes")]
    ProgramTooLarge { size: usize, max_size: usize },

    #[error("unknown opcode {opcode:#06x}")]
    UnknownOpcode { opcode: u16 },

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("V{register:X} holds {value:#04x}, which is not a key")]
    RegisterOutOfRange { register: usize, value: u8 },

    #[error("key index {key:#04x} is out of range")]
    KeyOutOfRange { key: u8 },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = Chip8Error::UnknownOpcode { opcode: 0x5ab1 };
        assert_eq!(e.to_string(), "unknown opcode 0x5ab1");
        let e = Chip8Error::RegisterOutOfRange {
            register: 0xa,
            value: 0x10,
        };
        assert_eq!(e.to_string(), "VA holds 0x10, which is not a key");
    }
}
