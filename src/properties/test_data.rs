//! A hand-picked excerpt of `LineBreak.txt` used as reference data by the
//! tests. It covers every tier of the class table and every class that the
//! segmentation tests rely on.

pub(crate) const LINE_BREAK_EXCERPT: &str = "\
# LineBreak-15.0.0.txt (excerpt)
# Unlisted code points are XX.

0000..0008;CM     # Cc     [9] <control-0000>..<control-0008>
0009;BA           # Cc         <control-0009>
000A;LF           # Cc         <control-000A>
000B..000C;BK     # Cc     [2] <control-000B>..<control-000C>
000D;CR           # Cc         <control-000D>
000E..001F;CM     # Cc    [18] <control-000E>..<control-001F>
0020;SP           # Zs         SPACE
0021;EX           # Po         EXCLAMATION MARK
0022;QU           # Po         QUOTATION MARK
0023;AL           # Po         NUMBER SIGN
0024;PR           # Sc         DOLLAR SIGN
0025;PO           # Po         PERCENT SIGN
0026;AL           # Po         AMPERSAND
0027;QU           # Po         APOSTROPHE
0028;OP           # Ps         LEFT PARENTHESIS
0029;CP           # Pe         RIGHT PARENTHESIS
002A;AL           # Po         ASTERISK
002B;PR           # Sm         PLUS SIGN
002C;IS           # Po         COMMA
002D;HY           # Pd         HYPHEN-MINUS
002E;IS           # Po         FULL STOP
002F;SY           # Po         SOLIDUS
0030..0039;NU     # Nd    [10] DIGIT ZERO..DIGIT NINE
003A..003B;IS     # Po     [2] COLON..SEMICOLON
003C..003E;AL     # Sm     [3] LESS-THAN SIGN..GREATER-THAN SIGN
003F;EX           # Po         QUESTION MARK
0040..005A;AL     # L&    [27] COMMERCIAL AT..LATIN CAPITAL LETTER Z
005B;OP           # Ps         LEFT SQUARE BRACKET
005C;PR           # Po         REVERSE SOLIDUS
005D;CP           # Pe         RIGHT SQUARE BRACKET
005E..007A;AL     # L&    [29] CIRCUMFLEX ACCENT..LATIN SMALL LETTER Z
007B;OP           # Ps         LEFT CURLY BRACKET
007C;BA           # Sm         VERTICAL LINE
007D;CL           # Pe         RIGHT CURLY BRACKET
007E;AL           # Sm         TILDE
007F..0084;CM     # Cc     [6] <control-007F>..<control-0084>
0085;NL           # Cc         <control-0085>
0086..009F;CM     # Cc    [26] <control-0086>..<control-009F>
00A0;GL           # Zs         NO-BREAK SPACE
00A1;OP           # Po         INVERTED EXCLAMATION MARK
00A2;PO           # Sc         CENT SIGN
00A3..00A5;PR     # Sc     [3] POUND SIGN..YEN SIGN
00A7..00A8;AI     # Po     [2] SECTION SIGN..DIAERESIS
00AB;QU           # Pi         LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
00AD;BA           # Cf         SOFT HYPHEN
00B4;BB           # Sk         ACUTE ACCENT
00C0..00D6;AL     # L&    [23] LATIN CAPITAL LETTER A WITH GRAVE..LATIN CAPITAL LETTER O WITH DIAERESIS
0300..034E;CM     # Mn    [79] COMBINING GRAVE ACCENT..COMBINING UPWARDS ARROW BELOW
034F;GL           # Mn         COMBINING GRAPHEME JOINER
05BE;BA           # Pd         HEBREW PUNCTUATION MAQAF
05D0..05EA;HL     # Lo    [27] HEBREW LETTER ALEF..HEBREW LETTER TAV
0E01..0E30;SA     # Lo    [48] THAI CHARACTER KO KAI..THAI CHARACTER SARA A
1100..115F;JL     # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER
1160..11A7;JV     # Lo    [72] HANGUL JUNGSEONG FILLER..HANGUL JUNGSEONG O-YAE
11A8..11FF;JT     # Lo    [88] HANGUL JONGSEONG KIYEOK..HANGUL JONGSEONG SSANGNIEUN
200B;ZW           # Cf         ZERO WIDTH SPACE
200D;ZWJ          # Cf         ZERO WIDTH JOINER
2010;BA           # Pd         HYPHEN
2011;GL           # Pd         NON-BREAKING HYPHEN
2014;B2           # Pd         EM DASH
2024..2026;IN     # Po     [3] ONE DOT LEADER..HORIZONTAL ELLIPSIS
2028;BK           # Zl         LINE SEPARATOR
2060;WJ           # Cf         WORD JOINER
3000;BA           # Zs         IDEOGRAPHIC SPACE
3001..3002;CL     # Po     [2] IDEOGRAPHIC COMMA..IDEOGRAPHIC FULL STOP
3008;OP           # Ps         LEFT ANGLE BRACKET
3009;CL           # Pe         RIGHT ANGLE BRACKET
3041;CJ           # Lo         HIRAGANA LETTER SMALL A
3042;ID           # Lo         HIRAGANA LETTER A
4E00..9FFF;ID     # Lo [20992] CJK UNIFIED IDEOGRAPH-4E00..CJK UNIFIED IDEOGRAPH-9FFF
AC00;H2           # Lo         HANGUL SYLLABLE GA
AC01..AC1B;H3     # Lo    [27] HANGUL SYLLABLE GAG..HANGUL SYLLABLE GAH
D800..DFFF;SG     # Cs  [2048] <surrogate-D800>..<surrogate-DFFF>
FEFF;WJ           # Cf         ZERO WIDTH NO-BREAK SPACE
FFFC;CB           # So         OBJECT REPLACEMENT CHARACTER
FFFF;XX           # Cn         <noncharacter-FFFF>
10000..1000B;AL   # Lo    [12] LINEAR B SYLLABLE B008 A..LINEAR B SYLLABLE B046 JE
1F1E6..1F1FF;RI   # So    [26] REGIONAL INDICATOR SYMBOL LETTER A..REGIONAL INDICATOR SYMBOL LETTER Z
1F3FB..1F3FF;EM   # Sk     [5] EMOJI MODIFIER FITZPATRICK TYPE-1-2..EMOJI MODIFIER FITZPATRICK TYPE-6
1F466..1F469;EB   # So     [4] BOY..WOMAN
1F600..1F644;ID   # So    [69] GRINNING FACE..FACE WITH NO GOOD GESTURE
20000..2A6DF;ID   # Lo [42720] CJK UNIFIED IDEOGRAPH-20000..CJK UNIFIED IDEOGRAPH-2A6DF
E0001;CM          # Cf         LANGUAGE TAG
E0020..E007F;CM   # Cf    [96] TAG SPACE..CANCEL TAG
E0100..E01EF;CM   # Mn   [240] VARIATION SELECTOR-17..VARIATION SELECTOR-256
F0000..FFFFD;XX   # Co [65534] <private-use-F0000>..<private-use-FFFFD>
10FFFF;XX         # Cn         <noncharacter-10FFFF>
";
