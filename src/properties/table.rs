use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::mem::size_of;

use u8char::u8char;

use super::{ClassRange, LineBreakClass, expand_ranges, parse_records};
use crate::BuildError;
use crate::codegen::write_table;

/// One past the last Unicode codepoint.
pub(crate) const CODEPOINT_LIMIT: usize = 0x110000;

/// Codepoints below this are looked up directly. They are exactly the
/// codepoints that take one or two bytes in UTF-8.
const DIRECT_LIMIT: usize = 0x800;
/// Codepoints below this (and at or above [`DIRECT_LIMIT`]) take three
/// bytes in UTF-8 and are looked up through a one-level trie.
const BMP_LIMIT: usize = 0x10000;

const CHUNK_BITS: usize = 6;
const CHUNK_LEN: usize = 1 << CHUNK_BITS;
const CHUNK_MASK: usize = CHUNK_LEN - 1;

/// Identifies which part of a [`ClassTable`] resolves a given codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `U+0000..U+0800`, a flat array.
    Direct,
    /// `U+0800..U+10000`, root ids into a pool of 64-entry leaves.
    Bmp,
    /// `U+10000..U+110000`, root ids into a pool of 64-entry mid chunks
    /// whose entries are ids into a pool of 64-entry leaves.
    Astral,
}

impl Tier {
    /// Returns the tier responsible for `cp`.
    pub const fn of(cp: u32) -> Self {
        let cp = cp as usize;
        if cp < DIRECT_LIMIT {
            Tier::Direct
        } else if cp < BMP_LIMIT {
            Tier::Bmp
        } else {
            Tier::Astral
        }
    }
}

/// An immutable mapping from every Unicode codepoint to its
/// [`LineBreakClass`].
///
/// Most of the codepoint space is either unassigned or made of long runs of
/// the same class, so above `U+0800` the table is split into 64-codepoint
/// chunks and each distinct chunk is stored only once. Lookups cost at most
/// three array indexing operations regardless of the codepoint.
///
/// A table is built once (usually at startup) and then only read, so it can
/// be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct ClassTable {
    direct: Box<[LineBreakClass]>,
    bmp_root: Box<[u16]>,
    bmp_leaves: Box<[LineBreakClass]>,
    astral_root: Box<[u16]>,
    astral_mid: Box<[u16]>,
    astral_leaves: Box<[LineBreakClass]>,
}

impl ClassTable {
    /// Builds a table from a flat array holding the class of every codepoint
    /// from `U+0000` through `U+10FFFF`, in order.
    pub fn from_flat(flat: &[LineBreakClass]) -> Result<Self, BuildError> {
        if flat.len() != CODEPOINT_LIMIT {
            return Err(BuildError::WrongLength(flat.len()));
        }

        let direct = flat[..DIRECT_LIMIT].into();
        let (bmp_root, bmp_leaves) = dedup_chunks(&flat[DIRECT_LIMIT..BMP_LIMIT]);
        let (astral_leaf_ids, astral_leaves) = dedup_chunks(&flat[BMP_LIMIT..]);
        let (astral_root, astral_mid) = dedup_chunks(&astral_leaf_ids);

        log::debug!(
            "class table: {} of {} BMP chunks unique, {} of {} astral leaves unique, {} astral mid chunks",
            bmp_leaves.len() / CHUNK_LEN,
            bmp_root.len(),
            astral_leaves.len() / CHUNK_LEN,
            astral_leaf_ids.len(),
            astral_mid.len() / CHUNK_LEN,
        );

        Ok(Self {
            direct,
            bmp_root: bmp_root.into_boxed_slice(),
            bmp_leaves: bmp_leaves.into_boxed_slice(),
            astral_root: astral_root.into_boxed_slice(),
            astral_mid: astral_mid.into_boxed_slice(),
            astral_leaves: astral_leaves.into_boxed_slice(),
        })
    }

    /// Builds a table from class ranges. Codepoints covered by no range are
    /// [`LineBreakClass::XX`], and where ranges overlap the later one wins.
    pub fn from_ranges(ranges: impl IntoIterator<Item = ClassRange>) -> Result<Self, BuildError> {
        Self::from_flat(&expand_ranges(ranges))
    }

    /// Builds a table from the text of a `LineBreak.txt`-style data file.
    ///
    /// See [`parse_records`] for the accepted format.
    pub fn from_records(text: &str) -> Result<Self, BuildError> {
        Self::from_ranges(parse_records(text)?)
    }

    /// Returns the line break class of `cp`.
    ///
    /// # Panics
    ///
    /// `cp` must be at most `0x10FFFF`. Larger values index past the end of
    /// the astral root and panic. Surrogate codepoints are not special: they
    /// get whatever class the source data gave them.
    #[inline]
    pub fn classify(&self, cp: u32) -> LineBreakClass {
        let cp_idx = cp as usize;
        match Tier::of(cp) {
            Tier::Direct => self.direct[cp_idx],
            Tier::Bmp => {
                let offset = cp_idx - DIRECT_LIMIT;
                let leaf = self.bmp_root[offset >> CHUNK_BITS] as usize;
                self.bmp_leaves[(leaf << CHUNK_BITS) | (offset & CHUNK_MASK)]
            }
            Tier::Astral => {
                let offset = cp_idx - BMP_LIMIT;
                let mid = self.astral_root[offset >> (2 * CHUNK_BITS)] as usize;
                let leaf = self.astral_mid[(mid << CHUNK_BITS) | ((offset >> CHUNK_BITS) & CHUNK_MASK)]
                    as usize;
                self.astral_leaves[(leaf << CHUNK_BITS) | (offset & CHUNK_MASK)]
            }
        }
    }

    /// Returns the class of the UTF-8 encoded character starting at byte
    /// offset `ix` of `s`, along with that character's length in bytes.
    ///
    /// `ix` must be on a character boundary; otherwise the result is
    /// meaningless.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is not less than `s.len()`.
    pub fn classify_str(&self, s: &str, ix: usize) -> (LineBreakClass, usize) {
        let bytes = s.as_bytes();
        let len = match bytes[ix] {
            0x00..0x80 => 1,
            0x80..0xE0 => 2,
            0xE0..0xF0 => 3,
            _ => 4,
        };
        let end = usize::min(ix + len, bytes.len());
        (self.classify_utf8(&bytes[ix..end]), len)
    }

    /// Returns the class of the given UTF-8 encoded character.
    pub fn classify_u8char(&self, c: u8char) -> LineBreakClass {
        self.classify_utf8(c.as_bytes())
    }

    fn classify_utf8(&self, bytes: &[u8]) -> LineBreakClass {
        let cp = match *bytes {
            [b0] => b0 as u32,
            [b0, b1] => ((b0 as u32 & 0x1F) << 6) | (b1 as u32 & 0x3F),
            [b0, b1, b2] => {
                ((b0 as u32 & 0x0F) << 12) | ((b1 as u32 & 0x3F) << 6) | (b2 as u32 & 0x3F)
            }
            [b0, b1, b2, b3] => {
                ((b0 as u32 & 0x07) << 18)
                    | ((b1 as u32 & 0x3F) << 12)
                    | ((b2 as u32 & 0x3F) << 6)
                    | (b3 as u32 & 0x3F)
            }
            _ => return LineBreakClass::XX,
        };
        self.classify(cp)
    }

    /// Reconstructs the flat array this table was built from.
    pub fn to_flat(&self) -> Vec<LineBreakClass> {
        (0..CODEPOINT_LIMIT as u32).map(|cp| self.classify(cp)).collect()
    }

    /// Returns the number of bytes occupied by the table's arrays.
    pub fn heap_size(&self) -> usize {
        let classes = self.direct.len() + self.bmp_leaves.len() + self.astral_leaves.len();
        let ids = self.bmp_root.len() + self.astral_root.len() + self.astral_mid.len();
        classes * size_of::<LineBreakClass>() + ids * size_of::<u16>()
    }

    /// Writes the table as Rust constant declarations.
    ///
    /// The roots are indexed by offset from the start of their tier, so
    /// `LINEBREAK_3_ROOT[(cp - 0x800) >> 6]` and
    /// `LINEBREAK_4_ROOT[(cp - 0x10000) >> 12]`. The output depends only on
    /// the table's contents.
    pub fn write_rust_source<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let raw = |classes: &[LineBreakClass]| classes.iter().map(|&c| c as u8).collect::<Vec<_>>();
        write_table(out, "LINEBREAK_1_2", "u8", &raw(&self.direct[..]))?;
        write_table(out, "LINEBREAK_3_ROOT", "u16", &self.bmp_root[..])?;
        write_table(out, "LINEBREAK_3_CHILD", "u8", &raw(&self.bmp_leaves[..]))?;
        write_table(out, "LINEBREAK_4_ROOT", "u16", &self.astral_root[..])?;
        write_table(out, "LINEBREAK_4_MID", "u16", &self.astral_mid[..])?;
        write_table(out, "LINEBREAK_4_LEAVES", "u8", &raw(&self.astral_leaves[..]))
    }
}

impl fmt::Debug for ClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassTable")
            .field("bmp_leaves", &(self.bmp_leaves.len() / CHUNK_LEN))
            .field("astral_mid", &(self.astral_mid.len() / CHUNK_LEN))
            .field("astral_leaves", &(self.astral_leaves.len() / CHUNK_LEN))
            .field("heap_size", &self.heap_size())
            .finish()
    }
}

/// Splits `data` into 64-entry chunks and stores each distinct chunk once.
///
/// Returns one id per chunk of `data` along with the pool of distinct chunks,
/// concatenated in the order they were first seen. Chunk `i` of `data` equals
/// `pool[ids[i] * 64..][..64]`.
fn dedup_chunks<T: Copy + Ord>(data: &[T]) -> (Vec<u16>, Vec<T>) {
    let mut seen: BTreeMap<&[T], u16> = BTreeMap::new();
    let mut ids = Vec::with_capacity(data.len() / CHUNK_LEN);
    let mut pool = Vec::new();
    for chunk in data.chunks_exact(CHUNK_LEN) {
        let next_id = seen.len() as u16;
        let id = *seen.entry(chunk).or_insert_with(|| {
            pool.extend_from_slice(chunk);
            next_id
        });
        ids.push(id);
    }
    (ids, pool)
}
