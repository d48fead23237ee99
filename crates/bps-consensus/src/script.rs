pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;

/// Minimal script assembler covering the pushes a coinbase script needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an integer the way script interpreters expect: small values
    /// become opcodes, everything else a minimally encoded number.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.bytes.push(OP_0),
            -1 => self.bytes.push(OP_1NEGATE),
            1..=16 => self.bytes.push(OP_1 + (n as u8 - 1)),
            _ => return self.push_slice(&script_num_bytes(n)),
        }
        self
    }

    /// Pushes a script number as raw data, even when it is small enough for
    /// an opcode. Genesis coinbases rely on this form.
    pub fn push_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.bytes.push(n as u8);
        } else if n <= 0xff {
            self.bytes.push(OP_PUSHDATA1);
            self.bytes.push(n as u8);
        } else if n <= 0xffff {
            self.bytes.push(OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.bytes.push(OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Little-endian sign-magnitude encoding with the sign in the top bit of the
/// last byte; zero encodes as the empty vector.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
