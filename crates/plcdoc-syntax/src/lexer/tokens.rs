//! Token definitions for Structured Text declarations.
//!
//! Only the subset of the language that can appear in a declaration header is
//! recognized: POU headers, variable lists, type definitions and the constant
//! expressions used in initializers and bounds. Keywords are matched
//! case-insensitively, as TwinCAT does.

use logos::Logos;

fn lex_block_comment_pascal(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_nested_comment(lex, b"(*", b"*)")
}

fn lex_block_comment_c(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_nested_comment(lex, b"/*", b"*/")
}

fn lex_nested_comment(lex: &mut logos::Lexer<TokenKind>, open: &[u8], close: &[u8]) -> bool {
    let mut depth = 1usize;
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == open[0] && bytes[i + 1] == open[1] {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == close[0] && bytes[i + 1] == close[1] {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
            continue;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds of the declaration language.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments, attribute pragmas)
/// - Punctuation and operators
/// - Keywords, including the collapsed `VAR` family, access specifiers and
///   built-in integer types
/// - Literals and identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*")]
    LineComment,

    /// Block comment: (* ... *) or /* ... */ (supports nesting).
    #[token("(*", lex_block_comment_pascal)]
    #[token("/*", lex_block_comment_c)]
    BlockComment,

    /// Attribute pragma: `{attribute 'hide'}`
    #[regex(r"\{[^}]*\}")]
    Pragma,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `..`
    #[token("..")]
    DotDot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `:=`
    #[token(":=")]
    Assign,

    /// `==`
    #[token("==")]
    EqEq,

    /// `!=`
    #[token("!=")]
    NotEq,

    /// `=`
    #[token("=")]
    Eq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    // =========================================================================
    // KEYWORDS - Program Organization Units
    // =========================================================================
    /// `PROGRAM`
    #[token("PROGRAM", ignore(ascii_case))]
    KwProgram,

    /// `END_PROGRAM`
    #[token("END_PROGRAM", ignore(ascii_case))]
    KwEndProgram,

    /// `FUNCTION`
    #[token("FUNCTION", ignore(ascii_case))]
    KwFunction,

    /// `END_FUNCTION`
    #[token("END_FUNCTION", ignore(ascii_case))]
    KwEndFunction,

    /// `FUNCTION_BLOCK`
    #[token("FUNCTION_BLOCK", ignore(ascii_case))]
    KwFunctionBlock,

    /// `END_FUNCTION_BLOCK`
    #[token("END_FUNCTION_BLOCK", ignore(ascii_case))]
    KwEndFunctionBlock,

    /// `METHOD`
    #[token("METHOD", ignore(ascii_case))]
    KwMethod,

    /// `END_METHOD`
    #[token("END_METHOD", ignore(ascii_case))]
    KwEndMethod,

    /// `PROPERTY`
    #[token("PROPERTY", ignore(ascii_case))]
    KwProperty,

    /// `END_PROPERTY`
    #[token("END_PROPERTY", ignore(ascii_case))]
    KwEndProperty,

    /// `INTERFACE`
    #[token("INTERFACE", ignore(ascii_case))]
    KwInterface,

    /// `END_INTERFACE`
    #[token("END_INTERFACE", ignore(ascii_case))]
    KwEndInterface,

    // =========================================================================
    // KEYWORDS - Variable Declarations
    // =========================================================================
    /// Any member of the `VAR` family; the exact keyword is kept in the token
    /// text.
    #[token("VAR", ignore(ascii_case))]
    #[token("VAR_INPUT", ignore(ascii_case))]
    #[token("VAR_OUTPUT", ignore(ascii_case))]
    #[token("VAR_IN_OUT", ignore(ascii_case))]
    #[token("VAR_TEMP", ignore(ascii_case))]
    #[token("VAR_STAT", ignore(ascii_case))]
    #[token("VAR_INST", ignore(ascii_case))]
    #[token("VAR_GLOBAL", ignore(ascii_case))]
    #[token("VAR_EXTERNAL", ignore(ascii_case))]
    KwVar,

    /// `END_VAR`
    #[token("END_VAR", ignore(ascii_case))]
    KwEndVar,

    /// `CONSTANT`
    #[token("CONSTANT", ignore(ascii_case))]
    KwConstant,

    /// `PERSISTENT`
    #[token("PERSISTENT", ignore(ascii_case))]
    KwPersistent,

    /// `RETAIN`
    #[token("RETAIN", ignore(ascii_case))]
    KwRetain,

    /// `AT`
    #[token("AT", ignore(ascii_case))]
    KwAt,

    // =========================================================================
    // KEYWORDS - Modifiers
    // =========================================================================
    /// `PUBLIC`, `PRIVATE`, `PROTECTED` or `INTERNAL`
    #[token("PUBLIC", ignore(ascii_case))]
    #[token("PRIVATE", ignore(ascii_case))]
    #[token("PROTECTED", ignore(ascii_case))]
    #[token("INTERNAL", ignore(ascii_case))]
    KwAccess,

    /// `ABSTRACT`
    #[token("ABSTRACT", ignore(ascii_case))]
    KwAbstract,

    /// `FINAL`
    #[token("FINAL", ignore(ascii_case))]
    KwFinal,

    /// `EXTENDS`
    #[token("EXTENDS", ignore(ascii_case))]
    KwExtends,

    /// `IMPLEMENTS`
    #[token("IMPLEMENTS", ignore(ascii_case))]
    KwImplements,

    // =========================================================================
    // KEYWORDS - Type Definitions
    // =========================================================================
    /// `TYPE`
    #[token("TYPE", ignore(ascii_case))]
    KwType,

    /// `END_TYPE`
    #[token("END_TYPE", ignore(ascii_case))]
    KwEndType,

    /// `STRUCT`
    #[token("STRUCT", ignore(ascii_case))]
    KwStruct,

    /// `END_STRUCT`
    #[token("END_STRUCT", ignore(ascii_case))]
    KwEndStruct,

    /// `UNION`
    #[token("UNION", ignore(ascii_case))]
    KwUnion,

    /// `END_UNION`
    #[token("END_UNION", ignore(ascii_case))]
    KwEndUnion,

    /// `ARRAY`
    #[token("ARRAY", ignore(ascii_case))]
    KwArray,

    /// `OF`
    #[token("OF", ignore(ascii_case))]
    KwOf,

    /// `STRING`
    #[token("STRING", ignore(ascii_case))]
    KwString,

    /// `WSTRING`
    #[token("WSTRING", ignore(ascii_case))]
    KwWString,

    /// `POINTER`
    #[token("POINTER", ignore(ascii_case))]
    KwPointer,

    /// `REFERENCE`
    #[token("REFERENCE", ignore(ascii_case))]
    KwReference,

    /// `REF_TO`
    #[token("REF_TO", ignore(ascii_case))]
    KwRefTo,

    /// `TO`
    #[token("TO", ignore(ascii_case))]
    KwTo,

    /// Built-in integer and bit-string types (`INT`, `UDINT`, `WORD`, ...).
    #[token("BYTE", ignore(ascii_case))]
    #[token("WORD", ignore(ascii_case))]
    #[token("DWORD", ignore(ascii_case))]
    #[token("LWORD", ignore(ascii_case))]
    #[token("SINT", ignore(ascii_case))]
    #[token("USINT", ignore(ascii_case))]
    #[token("INT", ignore(ascii_case))]
    #[token("UINT", ignore(ascii_case))]
    #[token("DINT", ignore(ascii_case))]
    #[token("UDINT", ignore(ascii_case))]
    #[token("LINT", ignore(ascii_case))]
    #[token("ULINT", ignore(ascii_case))]
    IntType,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: `42`, `1_000`, `2#1010`, `8#17`, `10#99`, `16#FF_FF`
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"2#[01][01_]*")]
    #[regex(r"8#[0-7][0-7_]*")]
    #[regex(r"10#[0-9][0-9_]*")]
    #[regex(r"16#[0-9A-Fa-f][0-9A-Fa-f_]*")]
    IntLiteral,

    /// Real literal: `3.14`, `1E3`, `1.0e-5`, `.5`
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?[eE][+-]?[0-9]+")]
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    RealLiteral,

    /// Typed literal: `UDINT#16#1`, `INT#-5`, `BOOL#TRUE`
    #[regex(
        r"[A-Za-z_][A-Za-z0-9_]*#(2#[01_]+|8#[0-7_]+|16#[0-9A-Fa-f_]+|[+-]?[0-9][0-9_]*(\.[0-9_]+)?|[A-Za-z_][A-Za-z0-9_]*)",
        priority = 4
    )]
    TypedLiteral,

    /// Duration literal: `T#2S`, `TIME#1h30m`, `LTIME#5m_30s`
    #[regex(
        r"(T|TIME|LT|LTIME)#[+-]?[0-9][0-9A-Za-z_.]*",
        priority = 8,
        ignore(ascii_case)
    )]
    TimeLiteral,

    /// Single-byte string: `'text'`
    #[regex(r"'([^'$\r\n]|\$[^\r\n])*'")]
    StringLiteral,

    /// Double-byte string: `"text"`
    #[regex(r#""([^"$\r\n]|\$[^\r\n])*""#)]
    WideStringLiteral,

    // =========================================================================
    // DIRECT ADDRESSES (Hardware I/O)
    // =========================================================================
    /// Hardware address: `%I*`, `%Q*`, `%IX0.0`, `%MW10`
    #[regex(r"%[A-Za-z][A-Za-z0-9]*\*")]
    #[regex(r"%[IQM][XBWDL]?[0-9]+(\.[0-9]+)*")]
    DirectAddress,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Unrecognized input.
    #[default]
    Error,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true if this token is trivia (whitespace, comments or pragmas).
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::Pragma
        )
    }

    /// Returns true if this token can start a variable list.
    #[inline]
    #[must_use]
    pub fn is_var_keyword(self) -> bool {
        self == Self::KwVar
    }

    /// Returns true for the POU header modifiers (`PUBLIC`, `ABSTRACT`, ...).
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::KwAccess | Self::KwAbstract | Self::KwFinal)
    }

    /// Returns true for the keywords that close a POU declaration.
    #[must_use]
    pub fn is_pou_end(self) -> bool {
        matches!(
            self,
            Self::KwEndProgram
                | Self::KwEndFunction
                | Self::KwEndFunctionBlock
                | Self::KwEndMethod
                | Self::KwEndInterface
                | Self::KwEndProperty
        )
    }

    /// Returns true for numeric, time and string literals.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral
                | Self::RealLiteral
                | Self::TypedLiteral
                | Self::TimeLiteral
                | Self::StringLiteral
                | Self::WideStringLiteral
        )
    }

    /// Returns a human readable description, used in diagnostics.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::LineComment | Self::BlockComment => "comment",
            Self::Pragma => "pragma",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::DotDot => "'..'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Assign => "':='",
            Self::EqEq => "'=='",
            Self::NotEq => "'!='",
            Self::Eq => "'='",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::KwProgram => "PROGRAM",
            Self::KwEndProgram => "END_PROGRAM",
            Self::KwFunction => "FUNCTION",
            Self::KwEndFunction => "END_FUNCTION",
            Self::KwFunctionBlock => "FUNCTION_BLOCK",
            Self::KwEndFunctionBlock => "END_FUNCTION_BLOCK",
            Self::KwMethod => "METHOD",
            Self::KwEndMethod => "END_METHOD",
            Self::KwProperty => "PROPERTY",
            Self::KwEndProperty => "END_PROPERTY",
            Self::KwInterface => "INTERFACE",
            Self::KwEndInterface => "END_INTERFACE",
            Self::KwVar => "VAR",
            Self::KwEndVar => "END_VAR",
            Self::KwConstant => "CONSTANT",
            Self::KwPersistent => "PERSISTENT",
            Self::KwRetain => "RETAIN",
            Self::KwAt => "AT",
            Self::KwAccess => "access specifier",
            Self::KwAbstract => "ABSTRACT",
            Self::KwFinal => "FINAL",
            Self::KwExtends => "EXTENDS",
            Self::KwImplements => "IMPLEMENTS",
            Self::KwType => "TYPE",
            Self::KwEndType => "END_TYPE",
            Self::KwStruct => "STRUCT",
            Self::KwEndStruct => "END_STRUCT",
            Self::KwUnion => "UNION",
            Self::KwEndUnion => "END_UNION",
            Self::KwArray => "ARRAY",
            Self::KwOf => "OF",
            Self::KwString => "STRING",
            Self::KwWString => "WSTRING",
            Self::KwPointer => "POINTER",
            Self::KwReference => "REFERENCE",
            Self::KwRefTo => "REF_TO",
            Self::KwTo => "TO",
            Self::IntType => "integer type",
            Self::IntLiteral => "integer literal",
            Self::RealLiteral => "real literal",
            Self::TypedLiteral => "typed literal",
            Self::TimeLiteral => "time literal",
            Self::StringLiteral | Self::WideStringLiteral => "string literal",
            Self::DirectAddress => "direct address",
            Self::Ident => "identifier",
            Self::Error => "invalid token",
            Self::Eof => "end of input",
        }
    }
}
