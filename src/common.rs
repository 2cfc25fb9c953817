// tags below this are raw code points of single-character tokens
pub const TAG_BASE: u32 = 256;

pub const INT_WIDTH: usize = 4;
pub const CHAR_WIDTH: usize = 1;
pub const BOOL_WIDTH: usize = 1;
pub const FLOAT_WIDTH: usize = 8;

pub const RESERVED_WORDS_COUNT: usize = 11;
pub const COMPOUND_OPERATORS_COUNT: usize = 6;

pub const REPL_PROMPT: &str = "sara > ";
