use u8char::u8char;

mod records;
mod table;

pub use records::{ClassRange, expand_ranges, parse_records};
pub use table::{ClassTable, Tier};

/// The number of distinct [`LineBreakClass`] values.
pub const N_LINEBREAK_CLASSES: usize = 43;

/// Enumeration of **Line_Break** property values, from
/// [UAX #14 Table 1](https://www.unicode.org/reports/tr14/#Table1).
///
/// The discriminants are stable: they are the values stored in the class
/// lookup tables and the column indices of the transition matrix, and so
/// they must not be reordered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineBreakClass {
    /// Unknown, and also the default for unassigned codepoints.
    XX = 0,
    /// Ambiguous (alphabetic or ideographic).
    AI = 1,
    /// Alphabetic.
    AL = 2,
    /// Break opportunity before and after.
    B2 = 3,
    /// Break after.
    BA = 4,
    /// Break before.
    BB = 5,
    /// Mandatory break.
    BK = 6,
    /// Contingent break opportunity.
    CB = 7,
    /// Close punctuation.
    CL = 8,
    /// Combining mark.
    CM = 9,
    /// Carriage return.
    CR = 10,
    /// Exclamation/interrogation.
    EX = 11,
    /// Non-breaking ("glue").
    GL = 12,
    /// Hyphen.
    HY = 13,
    /// Ideographic.
    ID = 14,
    /// Inseparable.
    IN = 15,
    /// Infix numeric separator.
    IS = 16,
    /// Line feed.
    LF = 17,
    /// Nonstarter.
    NS = 18,
    /// Numeric.
    NU = 19,
    /// Open punctuation.
    OP = 20,
    /// Postfix numeric.
    PO = 21,
    /// Prefix numeric.
    PR = 22,
    /// Quotation.
    QU = 23,
    /// Complex context dependent (South East Asian).
    SA = 24,
    /// Surrogate.
    SG = 25,
    /// Space.
    SP = 26,
    /// Symbols allowing break after.
    SY = 27,
    /// Zero width space.
    ZW = 28,
    /// Next line.
    NL = 29,
    /// Word joiner.
    WJ = 30,
    /// Hangul LV syllable.
    H2 = 31,
    /// Hangul LVT syllable.
    H3 = 32,
    /// Hangul L jamo.
    JL = 33,
    /// Hangul T jamo.
    JT = 34,
    /// Hangul V jamo.
    JV = 35,
    /// Close parenthesis.
    CP = 36,
    /// Conditional Japanese starter.
    CJ = 37,
    /// Hebrew letter.
    HL = 38,
    /// Regional indicator.
    RI = 39,
    /// Emoji base.
    EB = 40,
    /// Emoji modifier.
    EM = 41,
    /// Zero width joiner.
    ZWJ = 42,
}

impl LineBreakClass {
    /// Every class, in discriminant order.
    pub const ALL: [Self; N_LINEBREAK_CLASSES] = {
        use LineBreakClass::*;
        [
            XX, AI, AL, B2, BA, BB, BK, CB, CL, CM, CR, EX, GL, HY, ID, IN, IS, LF, NS, NU, OP,
            PO, PR, QU, SA, SG, SP, SY, ZW, NL, WJ, H2, H3, JL, JT, JV, CP, CJ, HL, RI, EB, EM,
            ZWJ,
        ]
    };

    /// Returns the class with the given discriminant, or `None` if the value
    /// is out of range.
    pub const fn from_u8(raw: u8) -> Option<Self> {
        if (raw as usize) < N_LINEBREAK_CLASSES {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Returns the class's position in [`Self::ALL`], which is also its
    /// column in the transition matrix.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two- or three-letter abbreviation used for this class in
    /// the Unicode character database.
    pub const fn token(self) -> &'static str {
        use LineBreakClass::*;
        match self {
            XX => "XX",
            AI => "AI",
            AL => "AL",
            B2 => "B2",
            BA => "BA",
            BB => "BB",
            BK => "BK",
            CB => "CB",
            CL => "CL",
            CM => "CM",
            CR => "CR",
            EX => "EX",
            GL => "GL",
            HY => "HY",
            ID => "ID",
            IN => "IN",
            IS => "IS",
            LF => "LF",
            NS => "NS",
            NU => "NU",
            OP => "OP",
            PO => "PO",
            PR => "PR",
            QU => "QU",
            SA => "SA",
            SG => "SG",
            SP => "SP",
            SY => "SY",
            ZW => "ZW",
            NL => "NL",
            WJ => "WJ",
            H2 => "H2",
            H3 => "H3",
            JL => "JL",
            JT => "JT",
            JV => "JV",
            CP => "CP",
            CJ => "CJ",
            HL => "HL",
            RI => "RI",
            EB => "EB",
            EM => "EM",
            ZWJ => "ZWJ",
        }
    }

    /// Parses a class abbreviation as it appears in `LineBreak.txt`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.token() == token)
    }

    /// Resolves the classes that rule LB1 maps onto others before any pair
    /// rule is evaluated.
    ///
    /// `SA` is resolved to `AL` unconditionally. Proper handling needs
    /// dictionary-based analysis of the surrounding South East Asian text,
    /// which this library does not attempt.
    pub const fn resolved(self) -> Self {
        use LineBreakClass::*;
        match self {
            AI | SG | XX | SA => AL,
            CJ => NS,
            other => other,
        }
    }

    /// Returns `true` for the classes that end a line unconditionally when
    /// they appear: `BK`, `CR`, `LF`, and `NL`.
    pub const fn is_hard_break(self) -> bool {
        matches!(self, Self::BK | Self::CR | Self::LF | Self::NL)
    }

    /// Returns `true` for the classes that attach to whatever precedes them
    /// under rule LB9, `CM` and `ZWJ`.
    pub const fn is_combining(self) -> bool {
        matches!(self, Self::CM | Self::ZWJ)
    }

    /// Looks up the class of the given character in `table`.
    ///
    /// This is a convenience wrapper around [`ClassTable::classify`].
    pub fn for_char(table: &ClassTable, c: char) -> Self {
        table.classify(c as u32)
    }

    /// Looks up the class of the given UTF-8 encoded character in `table`.
    pub fn for_u8char(table: &ClassTable, c: u8char) -> Self {
        table.classify_u8char(c)
    }
}

impl core::fmt::Display for LineBreakClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
pub(crate) mod test_data;
